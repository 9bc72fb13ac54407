use crate::{
	CONTAINS_FIRST_PAGE_OF_BITSTREAM, CONTAINS_LAST_PAGE_OF_BITSTREAM, CONTINUED_PACKET,
	PageError, Result,
};

use std::io::{Read, Seek};

use byteorder::{LittleEndian, ReadBytesExt};

/// An OGG page header
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PageHeader {
	/// The position in the stream the page started at
	pub start: u64,
	pub(crate) header_type_flag: u8,
	/// The page's absolute granule position
	///
	/// A value of `-1` indicates that no packet finishes on this page.
	pub abgp: i64,
	/// The page's stream serial number
	pub stream_serial: u32,
	/// The page's sequence number
	pub sequence_number: u32,
	pub(crate) checksum: u32,
	pub(crate) segments: Vec<u8>,
}

impl PageHeader {
	/// Attempts to read a page header (and its segment table) from a reader
	///
	/// This will leave the reader at the start of the page content.
	///
	/// # Errors
	///
	/// * [`PageError::MissingMagic`], checked before anything else is interpreted
	/// * [`PageError::InvalidVersion`]
	/// * [`PageError::NotEnoughData`] if the header or segment table is cut short
	pub fn read<R>(data: &mut R) -> Result<Self>
	where
		R: Read + Seek,
	{
		let start = data.stream_position()?;

		let mut sig = [0; 4];
		data.read_exact(&mut sig)?;

		if &sig != b"OggS" {
			return Err(PageError::MissingMagic);
		}

		// Version, always 0
		let version = data.read_u8()?;

		if version != 0 {
			return Err(PageError::InvalidVersion(version));
		}

		let header_type_flag = data.read_u8()?;

		let abgp = data.read_i64::<LittleEndian>()?;
		let stream_serial = data.read_u32::<LittleEndian>()?;
		let sequence_number = data.read_u32::<LittleEndian>()?;
		let checksum = data.read_u32::<LittleEndian>()?;

		let segment_count = data.read_u8()?;

		let mut segments = vec![0; segment_count as usize];
		data.read_exact(&mut segments)?;

		Ok(Self {
			start,
			header_type_flag,
			abgp,
			stream_serial,
			sequence_number,
			checksum,
			segments,
		})
	}

	/// Returns the page's header type flag
	pub fn header_type_flag(&self) -> u8 {
		self.header_type_flag
	}

	/// Returns the page's checksum
	///
	/// NOTE: This is the checksum as stored in the stream, it is never verified.
	pub fn checksum(&self) -> u32 {
		self.checksum
	}

	/// Returns the page's segment table
	pub fn segments(&self) -> &[u8] {
		&self.segments
	}

	/// The total size of the page content, as described by the segment table
	pub fn content_size(&self) -> usize {
		self.segments.iter().map(|&b| usize::from(b)).sum()
	}

	/// Whether the first packet on this page continues one from the previous page
	pub fn is_continued(&self) -> bool {
		self.header_type_flag & CONTINUED_PACKET != 0
	}

	/// Whether this is the first page of its logical bitstream
	pub fn is_first(&self) -> bool {
		self.header_type_flag & CONTAINS_FIRST_PAGE_OF_BITSTREAM != 0
	}

	/// Whether this is the last page of its logical bitstream
	pub fn is_last(&self) -> bool {
		self.header_type_flag & CONTAINS_LAST_PAGE_OF_BITSTREAM != 0
	}
}
