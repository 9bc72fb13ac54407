//! Contains the errors that can arise within vorbis_info
//!
//! The primary error is [`VorbisInfoError`]. The type of error is determined by [`ErrorKind`].

use std::fmt::{Debug, Display, Formatter};

use ogg_pages::PageError;

/// Alias for `Result<T, VorbisInfoError>`
pub type Result<T> = std::result::Result<T, VorbisInfoError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	/// The container or the identification header is malformed
	Format(FormatError),
	/// One of the required header pages could not be found
	MissingHeader(VorbisHeader),
	/// The comment header is malformed
	MalformedComment(CommentError),
	/// Represents all cases of [`std::io::Error`], other than a short read.
	Io(std::io::Error),
}

/// The causes of an [`ErrorKind::Format`]
#[derive(Debug)]
#[non_exhaustive]
pub enum FormatError {
	/// An OGG page or the page sequence is invalid
	///
	/// This includes a bad magic signature, a nonzero stream structure version, and a stream
	/// that ends before its last page.
	Page(PageError),
	/// The identification header declares a sample rate of 0
	ZeroSampleRate,
	/// The last page of the stream has a negative granule position
	InvalidGranulePosition(i64),
	/// The identification packet is too small to hold the audio properties
	ShortIdentificationHeader,
}

impl Display for FormatError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Page(err) => write!(f, "{err}"),
			Self::ZeroSampleRate => write!(f, "Identification header has a sample rate of 0"),
			Self::InvalidGranulePosition(pos) => {
				write!(f, "Last page has an invalid granule position ({pos})")
			},
			Self::ShortIdentificationHeader => write!(f, "Identification header is too short"),
		}
	}
}

/// The Vorbis header pages that are required to be present
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VorbisHeader {
	/// The page starting with the identification header (`\x01vorbis`)
	Identification,
	/// The page starting with the comment header (`\x03vorbis`)
	Comment,
	/// The last page of the identification header's logical bitstream
	Terminal,
}

impl Display for VorbisHeader {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Identification => write!(f, "identification header"),
			Self::Comment => write!(f, "comment header"),
			Self::Terminal => write!(f, "last page of the stream"),
		}
	}
}

/// The causes of an [`ErrorKind::MalformedComment`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CommentError {
	/// A length runs past the end of the comment packet
	LengthOverrun,
	/// A comment has no `=` between its key and value
	MissingSeparator,
	/// The vendor string or a comment is not valid UTF-8
	InvalidUtf8,
}

impl Display for CommentError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::LengthOverrun => write!(f, "length runs past the end of the packet"),
			Self::MissingSeparator => write!(f, "no separator found in field"),
			Self::InvalidUtf8 => write!(f, "encountered invalid UTF-8"),
		}
	}
}

/// Errors that could occur within vorbis_info
pub struct VorbisInfoError {
	pub(crate) kind: ErrorKind,
}

impl VorbisInfoError {
	/// Create a `VorbisInfoError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use vorbis_info::error::{ErrorKind, VorbisHeader, VorbisInfoError};
	///
	/// let missing_comments = VorbisInfoError::new(ErrorKind::MissingHeader(VorbisHeader::Comment));
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use vorbis_info::error::{ErrorKind, VorbisHeader, VorbisInfoError};
	///
	/// let missing_comments = VorbisInfoError::new(ErrorKind::MissingHeader(VorbisHeader::Comment));
	/// if let ErrorKind::MissingHeader(header) = missing_comments.kind() {
	/// 	println!("Where is the {header}?");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for VorbisInfoError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self.kind {
			ErrorKind::Format(FormatError::Page(ref err)) => Some(err),
			ErrorKind::Io(ref err) => Some(err),
			_ => None,
		}
	}
}

impl Debug for VorbisInfoError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<FormatError> for VorbisInfoError {
	fn from(input: FormatError) -> Self {
		Self {
			kind: ErrorKind::Format(input),
		}
	}
}

impl From<CommentError> for VorbisInfoError {
	fn from(input: CommentError) -> Self {
		Self {
			kind: ErrorKind::MalformedComment(input),
		}
	}
}

impl From<PageError> for VorbisInfoError {
	fn from(input: PageError) -> Self {
		match input {
			PageError::Io(err) => Self {
				kind: ErrorKind::Io(err),
			},
			other => Self {
				kind: ErrorKind::Format(FormatError::Page(other)),
			},
		}
	}
}

impl From<std::io::Error> for VorbisInfoError {
	fn from(input: std::io::Error) -> Self {
		// Route short reads through `PageError`, they're a truncated stream
		PageError::from(input).into()
	}
}

impl Display for VorbisInfoError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			ErrorKind::Io(ref err) => write!(f, "{err}"),

			ErrorKind::Format(ref err) => write!(f, "OGG: {err}"),
			ErrorKind::MissingHeader(header) => write!(f, "Vorbis: Couldn't find the {header}"),
			ErrorKind::MalformedComment(err) => write!(f, "Vorbis comments: {err}"),
		}
	}
}
