//! A simple OGG page reader
//!
//! Pages are read with [`Page::read`], or all at once with [`read_pages`]. Logical packets
//! spanning multiple pages can be stitched back together with [`Packets`].

mod error;
mod header;
mod packets;
mod scan;

use std::io::{Read, Seek};

pub use error::{PageError, Result};
pub use header::PageHeader;
pub use packets::{Packets, PacketsIter};
pub use scan::read_pages;

/// The first packet on the page continues a packet from the previous page
pub const CONTINUED_PACKET: u8 = 0x01;
/// The page is the first page of the logical bitstream
pub const CONTAINS_FIRST_PAGE_OF_BITSTREAM: u8 = 0x02;
/// The page is the last page of the logical bitstream
pub const CONTAINS_LAST_PAGE_OF_BITSTREAM: u8 = 0x04;

/// An OGG page
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Page {
	content: Vec<u8>,
	header: PageHeader,
	laces: Vec<u64>,
	/// The position in the stream the page ended
	pub end: u64,
}

impl Page {
	/// Returns a reference to the page's header
	pub fn header(&self) -> &PageHeader {
		&self.header
	}

	/// Attempts to get a Page from a reader
	///
	/// # Errors
	///
	/// * [`std::io::Error`]
	/// * [`PageError`]
	pub fn read<V>(data: &mut V) -> Result<Self>
	where
		V: Read + Seek,
	{
		let header = PageHeader::read(data)?;

		let mut content = vec![0; header.content_size()];
		data.read_exact(&mut content)?;

		let end = data.stream_position()?;
		let laces = laces(&header.segments);

		Ok(Page {
			content,
			header,
			laces,
			end,
		})
	}

	/// Returns the page's content
	///
	/// This is every lace on the page, joined together.
	pub fn content(&self) -> &[u8] {
		self.content.as_slice()
	}

	/// Returns the lengths of each lace on the page, see [`laces`]
	pub fn laces(&self) -> &[u64] {
		&self.laces
	}

	/// Returns an iterator over the content of each lace on the page
	///
	/// NOTE: These are page-local. The final lace may be incomplete, see [`Page::ends_with_open_lace`]
	/// and [`Packets`].
	pub fn packets(&self) -> LaceIter<'_> {
		LaceIter {
			content: &self.content,
			laces: &self.laces,
		}
	}

	/// Whether the final lace is left open, to be continued on the next page
	pub fn ends_with_open_lace(&self) -> bool {
		self.header.segments.last() == Some(&255)
	}

	/// Whether the first packet on this page continues one from the previous page
	pub fn is_continued(&self) -> bool {
		self.header.is_continued()
	}

	/// Whether this is the first page of its logical bitstream
	pub fn is_first(&self) -> bool {
		self.header.is_first()
	}

	/// Whether this is the last page of its logical bitstream
	pub fn is_last(&self) -> bool {
		self.header.is_last()
	}
}

/// An iterator over the laces of a [`Page`]
///
/// This is created with [`Page::packets`]
#[derive(Clone, Debug)]
pub struct LaceIter<'a> {
	content: &'a [u8],
	laces: &'a [u64],
}

impl<'a> Iterator for LaceIter<'a> {
	type Item = &'a [u8];

	fn next(&mut self) -> Option<Self::Item> {
		let (&lace, remaining_laces) = self.laces.split_first()?;
		self.laces = remaining_laces;

		let (ret, remaining) = self.content.split_at(lace as usize);
		self.content = remaining;

		Some(ret)
	}
}

/// Derives the lace lengths from a segment table
///
/// Any segment < 255 closes a lace. A run of 255 segments that is still open at the
/// end of the table is emitted as a final lace.
///
/// # Examples
///
/// ```rust
/// use ogg_pages::laces;
///
/// assert_eq!(laces(&[255, 255, 10]), vec![520]);
/// assert_eq!(laces(&[255]), vec![255]);
/// assert_eq!(laces(&[30, 0, 255, 1]), vec![30, 0, 256]);
/// ```
pub fn laces(segment_table: &[u8]) -> Vec<u64> {
	let mut laces = Vec::new();

	let mut count = 0_u64;
	for &segment in segment_table {
		count += u64::from(segment);

		if segment < 255 {
			laces.push(count);
			count = 0;
		}
	}

	if count != 0 {
		laces.push(count);
	}

	laces
}
