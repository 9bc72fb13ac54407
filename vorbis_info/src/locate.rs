use crate::constants::{VORBIS_COMMENT_HEAD, VORBIS_IDENT_HEAD};
use crate::error::{ErrorKind, Result, VorbisHeader, VorbisInfoError};

use ogg_pages::Page;

/// Indices of the pages needed to decode a Vorbis stream
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct HeaderPages {
	/// The first page starting with the identification header
	pub(crate) identification: usize,
	/// The first page starting with the comment header
	pub(crate) comment: usize,
	/// The last page marked as the end of the identification header's bitstream
	pub(crate) terminal: usize,
}

/// Find the identification, comment, and terminal pages in a single pass
pub(crate) fn locate_headers(pages: &[Page]) -> Result<HeaderPages> {
	let mut identification: Option<usize> = None;
	let mut comment = None;
	let mut terminal = None;

	for (idx, page) in pages.iter().enumerate() {
		let content = page.content();

		if identification.is_none() && content.starts_with(VORBIS_IDENT_HEAD) {
			log::debug!(
				"Vorbis: Found identification header on page {}",
				page.header().sequence_number
			);
			identification = Some(idx);
		} else if comment.is_none() && content.starts_with(VORBIS_COMMENT_HEAD) {
			log::debug!(
				"Vorbis: Found comment header on page {}",
				page.header().sequence_number
			);
			comment = Some(idx);
		}

		let Some(ident_idx) = identification else {
			continue;
		};

		if page.is_last() && page.header().stream_serial == pages[ident_idx].header().stream_serial
		{
			terminal = Some(idx);
		}
	}

	let missing = |header| VorbisInfoError::new(ErrorKind::MissingHeader(header));

	Ok(HeaderPages {
		identification: identification.ok_or_else(|| missing(VorbisHeader::Identification))?,
		comment: comment.ok_or_else(|| missing(VorbisHeader::Comment))?,
		terminal: terminal.ok_or_else(|| missing(VorbisHeader::Terminal))?,
	})
}

/// The pages following (and including) `start` that belong to the same logical bitstream
pub(crate) fn stream_pages_from(pages: &[Page], start: usize) -> impl Iterator<Item = &Page> {
	let serial = pages[start].header().stream_serial;
	pages[start..]
		.iter()
		.filter(move |page| page.header().stream_serial == serial)
}
