use crate::config::ParsingMode;
use crate::error::Result;
use crate::macros::{comment_err, parse_mode_choice};
use crate::tag::VorbisComments;

use std::borrow::Cow;

use byteorder::{LittleEndian, ReadBytesExt};

/// Decode a comment header, with the `\x03vorbis` signature already stripped
pub(crate) fn read_comments(mut data: &[u8], parse_mode: ParsingMode) -> Result<VorbisComments> {
	let vendor_bytes = read_field(&mut data)?;

	let vendor = match std::str::from_utf8(vendor_bytes) {
		Ok(vendor) => vendor.to_owned(),
		Err(_) => {
			parse_mode_choice!(
				parse_mode,
				STRICT: comment_err!(InvalidUtf8),
				DEFAULT: {
					log::warn!("Possibly corrupt vendor string, replacing invalid sequences");
					String::from_utf8_lossy(vendor_bytes).into_owned()
				}
			)
		},
	};

	let number_of_items = read_length(&mut data)?;

	// Every item needs at least its length
	if number_of_items > (data.len() >> 2) {
		comment_err!(LengthOverrun);
	}

	let mut tag = VorbisComments {
		vendor,
		items: Vec::with_capacity(number_of_items),
	};

	for _ in 0..number_of_items {
		let comment_bytes = read_field(&mut data)?;

		let comment = match std::str::from_utf8(comment_bytes) {
			Ok(comment) => Cow::Borrowed(comment),
			Err(_) => {
				parse_mode_choice!(
					parse_mode,
					STRICT: comment_err!(InvalidUtf8),
					BESTATTEMPT: {
						log::warn!("Non UTF-8 field found, replacing invalid sequences");
						String::from_utf8_lossy(comment_bytes)
					},
					DEFAULT: {
						log::warn!("Non UTF-8 field found, discarding");
						continue;
					}
				)
			},
		};

		// KEY=VALUE
		let Some((key, value)) = comment.split_once('=') else {
			parse_mode_choice!(
				parse_mode,
				STRICT: comment_err!(MissingSeparator),
				DEFAULT: {
					log::warn!("No separator found in field, discarding");
					continue;
				}
			)
		};

		if tag.insert(key.to_owned(), value.to_owned()).is_some() {
			log::debug!("Vorbis: Replaced duplicate field {key:?}");
		}
	}

	Ok(tag)
}

fn read_length(data: &mut &[u8]) -> Result<usize> {
	if data.len() < 4 {
		comment_err!(LengthOverrun);
	}

	Ok(data.read_u32::<LittleEndian>()? as usize)
}

fn read_field<'a>(data: &mut &'a [u8]) -> Result<&'a [u8]> {
	let len = read_length(data)?;
	if len > data.len() {
		comment_err!(LengthOverrun);
	}

	let (field, remaining) = data.split_at(len);
	*data = remaining;

	Ok(field)
}
