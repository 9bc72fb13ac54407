use crate::config::ParseOptions;
use crate::constants::VORBIS_COMMENT_HEAD;
use crate::error::Result;
use crate::locate::{locate_headers, stream_pages_from};
use crate::macros::comment_err;
use crate::properties::{AudioInfo, read_properties};
use crate::read::read_comments;
use crate::tag::VorbisComments;

use std::io::{Read, Seek};

use ogg_pages::{Packets, Page, PageError};

/// An OGG Vorbis file
#[derive(Clone, Debug, PartialEq, Default)]
pub struct VorbisFile {
	/// The Vorbis comments contained in the file
	///
	/// NOTE: While a comment header is required, it isn't required to actually have any data.
	pub(crate) comments: VorbisComments,
	/// The file's audio properties
	pub(crate) properties: AudioInfo,
}

impl VorbisFile {
	/// Read a [`VorbisFile`] from a reader
	///
	/// Every page up to the end of the first logical bitstream is read. The reader is returned to
	/// its original position afterwards.
	///
	/// The result is all or nothing, an error will never leave behind partially decoded comments.
	///
	/// # Errors
	///
	/// * The stream is not a valid OGG bitstream ([`ErrorKind::Format`](crate::error::ErrorKind::Format))
	/// * With `read_properties` enabled, the identification header declares a sample rate of 0, or the
	///   last page of the stream has a negative granule position
	///   ([`FormatError::ZeroSampleRate`](crate::error::FormatError::ZeroSampleRate),
	///   [`FormatError::InvalidGranulePosition`](crate::error::FormatError::InvalidGranulePosition))
	/// * The identification header, comment header, or last page of the stream is missing
	///   ([`ErrorKind::MissingHeader`](crate::error::ErrorKind::MissingHeader))
	/// * The comment header is malformed ([`ErrorKind::MalformedComment`](crate::error::ErrorKind::MalformedComment))
	///
	/// # Examples
	///
	/// ```rust,no_run
	/// use vorbis_info::VorbisFile;
	/// use vorbis_info::config::ParseOptions;
	///
	/// # fn main() -> vorbis_info::error::Result<()> {
	/// let mut file = std::fs::File::open("foo.ogg")?;
	///
	/// let vorbis_file = VorbisFile::read_from(&mut file, ParseOptions::new())?;
	/// println!("Channels: {}", vorbis_file.properties().channels());
	/// # Ok(()) }
	/// ```
	pub fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Self>
	where
		R: Read + Seek,
	{
		let pages = ogg_pages::read_pages(reader)?;
		log::debug!("OGG: Read {} page(s)", pages.len());

		let headers = locate_headers(&pages)?;

		let properties = if parse_options.read_properties {
			let packets = first_packet(&pages, headers.identification)?;
			let identification_packet = packets.iter().next().ok_or(PageError::NotEnoughData)?;

			read_properties(identification_packet, &pages[headers.terminal])?
		} else {
			AudioInfo::default()
		};

		let comments = if parse_options.read_comments {
			let packets = first_packet(&pages, headers.comment)?;
			let comment_packet = packets.iter().next().ok_or(PageError::NotEnoughData)?;

			// Remove the signature from the packet
			let Some(comment_content) = comment_packet.get(VORBIS_COMMENT_HEAD.len()..) else {
				comment_err!(LengthOverrun);
			};

			read_comments(comment_content, parse_options.parsing_mode)?
		} else {
			VorbisComments::default()
		};

		Ok(Self {
			comments,
			properties,
		})
	}

	/// Returns a reference to the audio properties
	pub fn properties(&self) -> &AudioInfo {
		&self.properties
	}

	/// Returns a reference to the Vorbis comments
	pub fn comments(&self) -> &VorbisComments {
		&self.comments
	}

	/// Consumes the file, returning its audio properties and comments
	pub fn into_parts(self) -> (AudioInfo, VorbisComments) {
		(self.properties, self.comments)
	}
}

// The packet starting on `pages[start]`, which may continue onto later pages of the same bitstream
fn first_packet(pages: &[Page], start: usize) -> Result<Packets> {
	Ok(Packets::from_pages_count(
		stream_pages_from(pages, start),
		1,
	)?)
}
