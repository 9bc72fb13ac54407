//! Builders for synthetic OGG Vorbis streams

use std::io::{Seek as _, Write as _};

pub const SERIAL: u32 = 0x1D5E_A13C;
pub const VENDOR: &str = "Xiph.Org libVorbis I 20200704 (Reducing Environment)";

pub const FIRST: u8 = 0x02;
pub const LAST: u8 = 0x04;
pub const CONTINUED: u8 = 0x01;

/// Build a page from a raw segment table and content
pub fn raw_page(
	header_type: u8,
	abgp: i64,
	serial: u32,
	seq_num: u32,
	segment_table: &[u8],
	content: &[u8],
) -> Vec<u8> {
	assert_eq!(
		segment_table.iter().map(|&b| usize::from(b)).sum::<usize>(),
		content.len()
	);

	let mut bytes = Vec::new();
	bytes.extend(b"OggS");
	bytes.push(0);
	bytes.push(header_type);
	bytes.extend(abgp.to_le_bytes());
	bytes.extend(serial.to_le_bytes());
	bytes.extend(seq_num.to_le_bytes());
	// The checksum is never verified
	bytes.extend(0_u32.to_le_bytes());
	bytes.push(segment_table.len() as u8);
	bytes.extend(segment_table);
	bytes.extend(content);

	bytes
}

/// Build a page holding complete packets
pub fn page(header_type: u8, abgp: i64, serial: u32, seq_num: u32, packets: &[&[u8]]) -> Vec<u8> {
	let mut segment_table = Vec::new();
	for packet in packets {
		segment_table.extend(std::iter::repeat_n(255, packet.len() / 255));
		segment_table.push((packet.len() % 255) as u8);
	}

	raw_page(
		header_type,
		abgp,
		serial,
		seq_num,
		&segment_table,
		&packets.concat(),
	)
}

pub fn ident_packet(channels: u8, sample_rate: u32, max: i32, nominal: i32, min: i32) -> Vec<u8> {
	let mut packet = b"\x01vorbis".to_vec();
	// Version
	packet.extend(0_u32.to_le_bytes());
	packet.push(channels);
	packet.extend(sample_rate.to_le_bytes());
	packet.extend(max.to_le_bytes());
	packet.extend(nominal.to_le_bytes());
	packet.extend(min.to_le_bytes());
	// Blocksizes, framing
	packet.extend([0xB8, 0x01]);
	packet
}

pub fn comment_packet(vendor: &str, comments: &[&str]) -> Vec<u8> {
	let mut packet = b"\x03vorbis".to_vec();
	packet.extend((vendor.len() as u32).to_le_bytes());
	packet.extend(vendor.as_bytes());
	packet.extend((comments.len() as u32).to_le_bytes());
	for comment in comments {
		packet.extend((comment.len() as u32).to_le_bytes());
		packet.extend(comment.as_bytes());
	}

	// Framing bit
	packet.push(1);
	packet
}

pub fn setup_packet() -> Vec<u8> {
	let mut packet = b"\x05vorbis".to_vec();
	packet.extend([0x42; 40]);
	packet
}

/// A stream with an identification page, a page holding the comment and setup headers,
/// and two audio pages, the last of which ends at `granule`
pub fn stream(ident: &[u8], comments: &[u8], granule: i64) -> Vec<u8> {
	[
		page(FIRST, 0, SERIAL, 0, &[ident]),
		page(0, 0, SERIAL, 1, &[comments, &setup_packet()[..]]),
		page(0, granule / 2, SERIAL, 2, &[&[0xAA; 300][..], &[0xBB; 20][..]]),
		page(LAST, granule, SERIAL, 3, &[&[0xCC; 100][..]]),
	]
	.concat()
}

/// A stereo 44.1kHz stream, 10 seconds long, with a couple of comments
pub fn minimal_stream() -> Vec<u8> {
	stream(
		&ident_packet(2, 44100, 0, 128_000, 0),
		&comment_packet(VENDOR, &["TITLE=Foo title", "ARTIST=Bar artist"]),
		441_000,
	)
}

/// Create a new temporary file holding `content`
pub fn temp_file(content: &[u8]) -> tempfile::NamedTempFile {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(content).unwrap();
	file.rewind().unwrap();

	file
}
