use crate::constants::{VORBIS_IDENT_HEAD, VORBIS_IDENT_MIN_SIZE};
use crate::error::Result;
use crate::macros::format_err;

use std::time::Duration;

use byteorder::{LittleEndian, ReadBytesExt};
use ogg_pages::Page;

/// An OGG Vorbis stream's audio properties
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[non_exhaustive]
pub struct AudioInfo {
	pub(crate) duration_secs: f64,
	pub(crate) bitrate: u32,
	pub(crate) sample_rate: u32,
	pub(crate) channels: u8,
	pub(crate) version: u32,
	pub(crate) bitrate_maximum: u32,
	pub(crate) bitrate_nominal: u32,
	pub(crate) bitrate_minimum: u32,
}

impl AudioInfo {
	/// Duration of the audio, in seconds
	///
	/// This is the granule position of the stream's last page divided by the sample rate.
	pub fn duration_secs(&self) -> f64 {
		self.duration_secs
	}

	/// Duration of the audio
	pub fn duration(&self) -> Duration {
		Duration::from_secs_f64(self.duration_secs)
	}

	/// Estimated audio bitrate (bps)
	///
	/// This is derived from the bitrate fields of the identification header:
	///
	/// 1. With no nominal bitrate, the average of the maximum and minimum
	/// 2. With a maximum bitrate below the nominal bitrate, the maximum
	/// 3. With a minimum bitrate above the nominal bitrate, the minimum
	/// 4. Otherwise, the nominal bitrate
	pub fn bitrate(&self) -> u32 {
		self.bitrate
	}

	/// The bitrate ceiling (bps), or 0 if unspecified
	pub fn bitrate_ceiling(&self) -> u32 {
		self.bitrate_maximum
	}

	/// Sample rate (Hz)
	pub fn sample_rate(&self) -> u32 {
		self.sample_rate
	}

	/// Channel count
	pub fn channels(&self) -> u8 {
		self.channels
	}

	/// Vorbis version
	pub fn version(&self) -> u32 {
		self.version
	}

	/// Maximum bitrate (bps), or 0 if unspecified
	pub fn bitrate_max(&self) -> u32 {
		self.bitrate_maximum
	}

	/// Nominal bitrate (bps), or 0 if unspecified
	pub fn bitrate_nominal(&self) -> u32 {
		self.bitrate_nominal
	}

	/// Minimum bitrate (bps), or 0 if unspecified
	pub fn bitrate_min(&self) -> u32 {
		self.bitrate_minimum
	}
}

// Negative bitrates are unspecified
fn clamp_bitrate(bitrate: i32) -> u32 {
	bitrate.max(0) as u32
}

pub(crate) fn estimate_bitrate(maximum: u32, nominal: u32, minimum: u32) -> u32 {
	if nominal == 0 {
		return maximum.midpoint(minimum);
	}

	if maximum != 0 && maximum < nominal {
		return maximum;
	}

	if minimum > nominal {
		return minimum;
	}

	nominal
}

pub(crate) fn read_properties(
	identification_packet: &[u8],
	terminal_page: &Page,
) -> Result<AudioInfo> {
	if identification_packet.len() < VORBIS_IDENT_MIN_SIZE {
		format_err!(ShortIdentificationHeader);
	}

	let mut properties = AudioInfo::default();

	// Skip identification header
	let ident_content = &mut &identification_packet[VORBIS_IDENT_HEAD.len()..];

	properties.version = ident_content.read_u32::<LittleEndian>()?;

	properties.channels = ident_content.read_u8()?;
	properties.sample_rate = ident_content.read_u32::<LittleEndian>()?;

	properties.bitrate_maximum = clamp_bitrate(ident_content.read_i32::<LittleEndian>()?);
	properties.bitrate_nominal = clamp_bitrate(ident_content.read_i32::<LittleEndian>()?);
	properties.bitrate_minimum = clamp_bitrate(ident_content.read_i32::<LittleEndian>()?);

	properties.bitrate = estimate_bitrate(
		properties.bitrate_maximum,
		properties.bitrate_nominal,
		properties.bitrate_minimum,
	);

	if properties.sample_rate == 0 {
		format_err!(ZeroSampleRate);
	}

	let last_page_abgp = terminal_page.header().abgp;
	if last_page_abgp < 0 {
		format_err!(InvalidGranulePosition(last_page_abgp));
	}

	properties.duration_secs = last_page_abgp as f64 / f64::from(properties.sample_rate);

	log::debug!(
		"Vorbis: {} channel(s) @ {} Hz, ~{} bps, {:.3}s",
		properties.channels,
		properties.sample_rate,
		properties.bitrate,
		properties.duration_secs
	);

	Ok(properties)
}
