use std::error::Error;
use std::fmt;
use std::io::ErrorKind;

/// Alias for `Result<T, PageError>`
pub type Result<T> = std::result::Result<T, PageError>;

/// Errors that can occur while performing `Page` operations
#[derive(Debug)]
#[non_exhaustive]
pub enum PageError {
	/// The reader contains a page with a nonzero version
	InvalidVersion(u8),
	/// The reader contains a page without a magic signature (OggS)
	MissingMagic,
	/// The reader contains too little data to extract the expected information
	///
	/// Any short read of a page (or a request for more packets than a stream holds)
	/// ends up here.
	NotEnoughData,
	/// The sequence of pages violates the framing rules of a logical bitstream
	InvalidStreamStructure(&'static str),
	/// Any std::io::Error, other than an unexpected EOF
	Io(std::io::Error),
}

impl fmt::Display for PageError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PageError::InvalidVersion(version) => write!(
				f,
				"Invalid stream structure version {version} (Should always be 0)"
			),
			PageError::MissingMagic => write!(f, "Page is missing a magic signature"),
			PageError::NotEnoughData => {
				write!(f, "Too little data is available for the expected read")
			},
			PageError::InvalidStreamStructure(reason) => {
				write!(f, "Invalid stream structure: {reason}")
			},
			PageError::Io(err) => write!(f, "{}", err),
		}
	}
}

impl Error for PageError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match *self {
			PageError::Io(ref e) => Some(e),
			_ => None,
		}
	}
}

impl From<std::io::Error> for PageError {
	fn from(err: std::io::Error) -> PageError {
		if err.kind() == ErrorKind::UnexpectedEof {
			return PageError::NotEnoughData;
		}

		PageError::Io(err)
	}
}
