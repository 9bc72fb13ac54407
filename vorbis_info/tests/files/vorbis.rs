use crate::util::{
	CONTINUED, FIRST, LAST, SERIAL, VENDOR, comment_packet, ident_packet, minimal_stream, page,
	raw_page, setup_packet, stream, temp_file,
};

use std::io::{Cursor, Seek};
use std::time::Duration;

use ogg_pages::PageError;
use vorbis_info::config::{ParseOptions, ParsingMode};
use vorbis_info::error::{CommentError, ErrorKind, FormatError, VorbisHeader, VorbisInfoError};
use vorbis_info::{VorbisFile, read_from, read_from_path, read_from_path_or_warn};

fn read(content: Vec<u8>) -> vorbis_info::error::Result<VorbisFile> {
	VorbisFile::read_from(&mut Cursor::new(content), ParseOptions::new())
}

fn missing_header(err: &VorbisInfoError) -> VorbisHeader {
	match err.kind() {
		ErrorKind::MissingHeader(header) => *header,
		other => panic!("Expected a missing header, got {other:?}"),
	}
}

#[test_log::test]
fn read_minimal_stream() {
	let file = read(minimal_stream()).unwrap();

	let properties = file.properties();
	assert_eq!(properties.channels(), 2);
	assert_eq!(properties.sample_rate(), 44100);
	assert_eq!(properties.bitrate(), 128_000);
	assert_eq!(properties.bitrate_ceiling(), 0);
	assert_eq!(properties.duration(), Duration::from_secs(10));

	let comments = file.comments();
	assert_eq!(comments.vendor(), VENDOR);
	assert_eq!(
		comments.items().collect::<Vec<_>>(),
		vec![("TITLE", "Foo title"), ("ARTIST", "Bar artist")]
	);
	assert_eq!(comments.title().as_deref(), Some("Foo title"));
}

#[test_log::test]
fn bitrate_fields() {
	let cases = [
		// (max, nominal, min) => (estimate, ceiling)
		((128_000, 0, 64_000), (96_000, 128_000)),
		((64_000, 96_000, 0), (64_000, 64_000)),
		((0, 64_000, 96_000), (96_000, 0)),
		((0, 96_000, 0), (96_000, 0)),
		((-1, 96_000, -1), (96_000, 0)),
	];

	for ((max, nominal, min), (estimate, ceiling)) in cases {
		let content = stream(
			&ident_packet(1, 48000, max, nominal, min),
			&comment_packet(VENDOR, &[]),
			48000,
		);

		let file = read(content).unwrap();
		assert_eq!(file.properties().bitrate(), estimate);
		assert_eq!(file.properties().bitrate_ceiling(), ceiling);
	}
}

#[test_log::test]
fn reader_position_is_restored() {
	let mut reader = Cursor::new(minimal_stream());

	let first = read_from(&mut reader, ParseOptions::new()).unwrap();
	assert_eq!(reader.stream_position().unwrap(), 0);

	let second = read_from(&mut reader, ParseOptions::new()).unwrap();
	assert_eq!(first, second);
}

#[test_log::test]
fn reader_position_is_restored_on_error() {
	let mut content = vec![0; 16];
	content.extend(&minimal_stream()[..100]);

	let mut reader = Cursor::new(content);
	reader.seek(std::io::SeekFrom::Start(16)).unwrap();

	assert!(read_from(&mut reader, ParseOptions::new()).is_err());
	assert_eq!(reader.stream_position().unwrap(), 16);
}

#[test_log::test]
fn missing_comment_header() {
	let content = [
		page(FIRST, 0, SERIAL, 0, &[&ident_packet(2, 44100, 0, 128_000, 0)[..]]),
		page(0, 0, SERIAL, 1, &[&setup_packet()[..]]),
		page(LAST, 441_000, SERIAL, 2, &[&[0; 10][..]]),
	]
	.concat();

	let err = read(content).unwrap_err();
	assert_eq!(missing_header(&err), VorbisHeader::Comment);
}

#[test_log::test]
fn missing_identification_header() {
	let content = [
		page(FIRST, 0, SERIAL, 0, &[&b"OpusHead"[..]]),
		page(0, 0, SERIAL, 1, &[&b"OpusTags"[..]]),
		page(LAST, 48000, SERIAL, 2, &[&[0; 10][..]]),
	]
	.concat();

	let err = read(content).unwrap_err();
	assert_eq!(missing_header(&err), VorbisHeader::Identification);
}

#[test_log::test]
fn bad_magic() {
	let mut content = minimal_stream();
	content[..4].copy_from_slice(b"RIFF");

	let err = read(content).unwrap_err();
	assert!(matches!(
		err.kind(),
		ErrorKind::Format(FormatError::Page(PageError::MissingMagic))
	));
}

#[test_log::test]
fn bad_version() {
	let mut content = minimal_stream();
	content[4] = 2;

	let err = read(content).unwrap_err();
	assert!(matches!(
		err.kind(),
		ErrorKind::Format(FormatError::Page(PageError::InvalidVersion(2)))
	));
}

#[test_log::test]
fn truncated_stream() {
	let content = minimal_stream();
	let truncated = content[..content.len() - 1].to_vec();

	let err = read(truncated).unwrap_err();
	assert!(matches!(
		err.kind(),
		ErrorKind::Format(FormatError::Page(PageError::NotEnoughData))
	));
}

#[test_log::test]
fn zero_sample_rate() {
	let content = stream(
		&ident_packet(2, 0, 0, 128_000, 0),
		&comment_packet(VENDOR, &[]),
		441_000,
	);

	let err = read(content).unwrap_err();
	assert!(matches!(
		err.kind(),
		ErrorKind::Format(FormatError::ZeroSampleRate)
	));
}

#[test_log::test]
fn negative_final_granule_position() {
	let content = stream(
		&ident_packet(2, 44100, 0, 128_000, 0),
		&comment_packet(VENDOR, &[]),
		-1,
	);

	let err = read(content.clone()).unwrap_err();
	assert!(matches!(
		err.kind(),
		ErrorKind::Format(FormatError::InvalidGranulePosition(-1))
	));

	// The granule position only matters for the duration
	let file = VorbisFile::read_from(
		&mut Cursor::new(content),
		ParseOptions::new().read_properties(false),
	)
	.unwrap();
	assert_eq!(file.comments().vendor(), VENDOR);
}

#[test_log::test]
fn malformed_comment() {
	let content = stream(
		&ident_packet(2, 44100, 0, 128_000, 0),
		&comment_packet(VENDOR, &["TITLE=Foo title", "GARBAGE"]),
		441_000,
	);

	let err = read(content.clone()).unwrap_err();
	assert!(matches!(
		err.kind(),
		ErrorKind::MalformedComment(CommentError::MissingSeparator)
	));

	// Outside of strict mode the bad field is dropped
	let file = VorbisFile::read_from(
		&mut Cursor::new(content),
		ParseOptions::new().parsing_mode(ParsingMode::BestAttempt),
	)
	.unwrap();
	assert_eq!(file.comments().len(), 1);
	assert_eq!(file.comments().title().as_deref(), Some("Foo title"));
}

#[test_log::test]
fn comment_header_spanning_pages() {
	let long_value = "x".repeat(600);
	let comment = format!("DESCRIPTION={long_value}");
	let comments = comment_packet(VENDOR, &["TITLE=Foo title", &comment]);
	let setup = setup_packet();

	// Split the comment header after two full segments, leaving the lace open
	let (head, tail) = comments.split_at(510);

	let mut tail_segments = vec![255; tail.len() / 255];
	tail_segments.push((tail.len() % 255) as u8);
	tail_segments.push(setup.len() as u8);

	let content = [
		page(FIRST, 0, SERIAL, 0, &[&ident_packet(2, 44100, 0, 128_000, 0)[..]]),
		raw_page(0, -1, SERIAL, 1, &[255, 255], head),
		raw_page(CONTINUED, 0, SERIAL, 2, &tail_segments, &[tail, &setup[..]].concat()),
		page(LAST, 441_000, SERIAL, 3, &[&[0; 10][..]]),
	]
	.concat();

	let file = read(content).unwrap();
	assert_eq!(file.comments().vendor(), VENDOR);
	assert_eq!(file.comments().get("DESCRIPTION"), Some(long_value.as_str()));
	assert_eq!(file.comments().title().as_deref(), Some("Foo title"));
}

#[test_log::test]
fn comment_length_past_packet_end() {
	let mut comments = comment_packet(VENDOR, &["TITLE=Foo title"]);
	// Signature (7) + vendor length (4) + vendor + item count (4)
	let item_len_pos = 7 + 4 + VENDOR.len() + 4;
	comments[item_len_pos..item_len_pos + 4].copy_from_slice(&60_u32.to_le_bytes());

	// The setup header follows on the same page, but it isn't part of the comment packet
	let content = stream(&ident_packet(2, 44100, 0, 128_000, 0), &comments, 441_000);

	let err = read(content).unwrap_err();
	assert!(matches!(
		err.kind(),
		ErrorKind::MalformedComment(CommentError::LengthOverrun)
	));
}

#[test_log::test]
fn interleaved_streams() {
	const OTHER_SERIAL: u32 = 42;

	let content = [
		page(FIRST, 0, SERIAL, 0, &[&ident_packet(1, 22050, 0, 64_000, 0)[..]]),
		page(FIRST, 0, OTHER_SERIAL, 0, &[&b"\x80theora"[..]]),
		page(0, 0, SERIAL, 1, &[&comment_packet(VENDOR, &["ALBUM=Baz"])[..]]),
		page(0, 1000, OTHER_SERIAL, 1, &[&[0; 50][..]]),
		page(LAST, 44100, SERIAL, 2, &[&[0; 10][..]]),
	]
	.concat();

	let file = read(content).unwrap();
	assert_eq!(file.properties().channels(), 1);
	assert_eq!(file.properties().duration(), Duration::from_secs(2));
	assert_eq!(file.comments().album().as_deref(), Some("Baz"));
}

#[test_log::test]
fn skip_properties_and_comments() {
	let file = VorbisFile::read_from(
		&mut Cursor::new(minimal_stream()),
		ParseOptions::new().read_properties(false),
	)
	.unwrap();
	assert_eq!(file.properties().channels(), 0);
	assert_eq!(file.comments().len(), 2);

	let file = VorbisFile::read_from(
		&mut Cursor::new(minimal_stream()),
		ParseOptions::new().read_comments(false),
	)
	.unwrap();
	assert_eq!(file.properties().channels(), 2);
	assert!(file.comments().is_empty());
	assert!(file.comments().vendor().is_empty());
}

#[test_log::test]
fn read_path() {
	let file = temp_file(&minimal_stream());

	let vorbis_file = read_from_path(file.path(), ParseOptions::new()).unwrap();
	assert_eq!(vorbis_file.properties().sample_rate(), 44100);

	let (properties, comments) = vorbis_file.into_parts();
	assert_eq!(properties.duration().as_secs(), 10);
	assert_eq!(comments.artist().as_deref(), Some("Bar artist"));
}

#[test_log::test]
fn read_path_or_warn() {
	let good = temp_file(&minimal_stream());
	assert!(read_from_path_or_warn(good.path(), ParseOptions::new()).is_some());

	let mut content = minimal_stream();
	content[0] = b'X';
	let bad = temp_file(&content);
	assert!(read_from_path_or_warn(bad.path(), ParseOptions::new()).is_none());

	let dir = tempfile::tempdir().unwrap();
	let missing = dir.path().join("missing.ogg");
	assert!(read_from_path_or_warn(missing, ParseOptions::new()).is_none());
}

#[test_log::test]
fn recognized_types() {
	assert_eq!(vorbis_info::EXTENSIONS, &[".ogg"]);
	assert!(vorbis_info::MIME_TYPES.contains(&"audio/ogg"));
	assert!(vorbis_info::MIME_TYPES.contains(&"application/ogg"));
	assert!(vorbis_info::MIME_TYPES.contains(&"video/ogg"));
}
