//! Read audio properties and comments from OGG Vorbis streams.
//!
//! The whole container is scanned once, up to the last page of the first logical bitstream. The
//! identification and comment headers are then located and decoded into an [`AudioInfo`] and
//! [`VorbisComments`].
//!
//! # Examples
//!
//! ## Reading a file
//!
//! ```rust,no_run
//! # fn main() -> vorbis_info::error::Result<()> {
//! use vorbis_info::config::ParseOptions;
//! use vorbis_info::read_from_path;
//!
//! let vorbis_file = read_from_path("test.ogg", ParseOptions::new())?;
//!
//! let properties = vorbis_file.properties();
//! println!("{} channel(s) @ {} Hz", properties.channels(), properties.sample_rate());
//! println!("~{} bps for {:.2}s", properties.bitrate(), properties.duration_secs());
//!
//! for (key, value) in vorbis_file.comments().items() {
//! 	println!("{key}: {value}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Tolerating bad files
//!
//! Audio info is optional for most callers. [`read_from_path_or_warn`] logs any error and
//! returns [`None`] instead.
//!
//! ```rust,no_run
//! use vorbis_info::config::ParseOptions;
//! use vorbis_info::read_from_path_or_warn;
//!
//! let audio_info = read_from_path_or_warn("test.ogg", ParseOptions::new())
//! 	.map(|file| *file.properties());
//! ```

pub mod config;
mod constants;
pub mod error;
mod file;
mod locate;
pub(crate) mod macros;
mod probe;
mod properties;
mod read;
mod tag;

pub use crate::probe::{
	EXTENSIONS, MIME_TYPES, read_from, read_from_path, read_from_path_or_warn,
};

pub use file::VorbisFile;
pub use properties::AudioInfo;
pub use tag::VorbisComments;
