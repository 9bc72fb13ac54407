use crate::error::{PageError, Result};
use crate::Page;

use std::io::{Read, Seek, SeekFrom};

/// Read every page up to and including the first one marked as the last page of its bitstream
///
/// The reader is returned to its original position afterwards, regardless of whether
/// the scan succeeded.
///
/// # Errors
///
/// * Any page fails to be read, see [`Page::read`]
/// * The pages do not form a valid bitstream ([`PageError::InvalidStreamStructure`]):
///   * The first page must be marked as the first page, and must not be continued or marked as the last
///   * When more than one page is read, the final page must not be marked as the first page
///
/// # Examples
///
/// ```rust,no_run
/// use ogg_pages::read_pages;
///
/// # fn main() -> Result<(), ogg_pages::PageError> {
/// let mut file = std::fs::File::open("foo.ogg")?;
///
/// let pages = read_pages(&mut file)?;
/// println!("Found {} pages", pages.len());
/// # Ok(()) }
/// ```
pub fn read_pages<R>(data: &mut R) -> Result<Vec<Page>>
where
	R: Read + Seek,
{
	let start = data.stream_position()?;

	let pages = read_until_last_page(data);
	data.seek(SeekFrom::Start(start))?;

	let pages = pages?;
	verify_structure(&pages)?;

	Ok(pages)
}

fn read_until_last_page<R>(data: &mut R) -> Result<Vec<Page>>
where
	R: Read + Seek,
{
	let mut pages = Vec::new();
	loop {
		let page = Page::read(data)?;
		let is_last = page.is_last();

		pages.push(page);

		if is_last {
			return Ok(pages);
		}
	}
}

fn verify_structure(pages: &[Page]) -> Result<()> {
	let (Some(first), Some(last)) = (pages.first(), pages.last()) else {
		return Err(PageError::NotEnoughData);
	};

	if !first.is_first() {
		return Err(PageError::InvalidStreamStructure(
			"first page is not marked as the beginning of a bitstream",
		));
	}

	if first.is_continued() {
		return Err(PageError::InvalidStreamStructure(
			"first page continues a packet",
		));
	}

	if pages.len() == 1 {
		// The scan only stops at a page marked as the last, so this is a complete bitstream
		// contained within a single page
		return Err(PageError::InvalidStreamStructure(
			"first page is marked as the end of a bitstream",
		));
	}

	if last.is_first() {
		return Err(PageError::InvalidStreamStructure(
			"last page is marked as the beginning of a bitstream",
		));
	}

	debug_assert!(last.is_last());

	Ok(())
}
