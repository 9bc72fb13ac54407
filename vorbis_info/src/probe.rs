use crate::config::ParseOptions;
use crate::error::Result;
use crate::file::VorbisFile;

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

/// File extensions recognized as OGG Vorbis
pub const EXTENSIONS: &[&str] = &[".ogg"];

/// Mimetypes recognized as OGG
pub const MIME_TYPES: &[&str] = &["audio/ogg", "application/ogg", "video/ogg"];

/// Read a [`VorbisFile`] from a reader
///
/// This is an alias for [`VorbisFile::read_from`].
///
/// # Errors
///
/// See [`VorbisFile::read_from`]
///
/// # Examples
///
/// ```rust,no_run
/// use vorbis_info::config::ParseOptions;
/// use vorbis_info::read_from;
///
/// # fn main() -> vorbis_info::error::Result<()> {
/// let mut file = std::fs::File::open("foo.ogg")?;
///
/// let vorbis_file = read_from(&mut file, ParseOptions::new())?;
/// # Ok(()) }
/// ```
pub fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<VorbisFile>
where
	R: Read + Seek,
{
	VorbisFile::read_from(reader, parse_options)
}

/// Read a [`VorbisFile`] from a path
///
/// The file is closed before returning, regardless of whether reading succeeded.
///
/// # Errors
///
/// * `path` does not exist
/// * See [`VorbisFile::read_from`]
///
/// # Examples
///
/// ```rust,no_run
/// use vorbis_info::config::ParseOptions;
/// use vorbis_info::read_from_path;
///
/// # fn main() -> vorbis_info::error::Result<()> {
/// let vorbis_file = read_from_path("foo.ogg", ParseOptions::new())?;
///
/// let comments = vorbis_file.comments();
/// println!("Encoded by: {}", comments.vendor());
/// # Ok(()) }
/// ```
pub fn read_from_path<P>(path: P, parse_options: ParseOptions) -> Result<VorbisFile>
where
	P: AsRef<Path>,
{
	let mut reader = BufReader::new(File::open(path)?);
	VorbisFile::read_from(&mut reader, parse_options)
}

/// Read a [`VorbisFile`] from a path, treating any failure as "no audio info"
///
/// Errors are logged as warnings, as the file may still be usable for other purposes.
///
/// # Examples
///
/// ```rust,no_run
/// use vorbis_info::config::ParseOptions;
/// use vorbis_info::read_from_path_or_warn;
///
/// match read_from_path_or_warn("foo.ogg", ParseOptions::new()) {
/// 	Some(vorbis_file) => println!("Duration: {:?}", vorbis_file.properties().duration()),
/// 	None => println!("No audio info available"),
/// }
/// ```
pub fn read_from_path_or_warn<P>(path: P, parse_options: ParseOptions) -> Option<VorbisFile>
where
	P: AsRef<Path>,
{
	let path = path.as_ref();
	match read_from_path(path, parse_options) {
		Ok(vorbis_file) => Some(vorbis_file),
		Err(err) => {
			log::warn!("{}: {err}", path.display());
			None
		},
	}
}
