/// Options to control how a stream is parsed
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) read_properties: bool,
	pub(crate) read_comments: bool,
	pub(crate) parsing_mode: ParsingMode,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	read_properties: true,
	/// 	read_comments: true,
	/// 	parsing_mode: ParsingMode::Strict,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::Strict;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use vorbis_info::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			read_properties: true,
			read_comments: true,
			parsing_mode: Self::DEFAULT_PARSING_MODE,
		}
	}

	/// Whether or not to decode the audio properties
	///
	/// The identification header must still be present, but it will not be decoded.
	///
	/// # Examples
	///
	/// ```rust
	/// use vorbis_info::config::ParseOptions;
	///
	/// // By default, `read_properties` is enabled. Here, we don't want to read them.
	/// let parsing_options = ParseOptions::new().read_properties(false);
	/// ```
	pub fn read_properties(&mut self, read_properties: bool) -> Self {
		self.read_properties = read_properties;
		*self
	}

	/// Whether or not to decode the comment header
	///
	/// The comment header must still be present, but it will not be decoded.
	///
	/// # Examples
	///
	/// ```rust
	/// use vorbis_info::config::ParseOptions;
	///
	/// // By default, `read_comments` is enabled. Here, we only care about the audio properties.
	/// let parsing_options = ParseOptions::new().read_comments(false);
	/// ```
	pub fn read_comments(&mut self, read_comments: bool) -> Self {
		self.read_comments = read_comments;
		*self
	}

	/// The parsing mode to use, see [`ParsingMode`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use vorbis_info::config::{ParseOptions, ParsingMode};
	///
	/// // By default, `parsing_mode` is ParsingMode::Strict. Here, we'd rather skip over bad comments.
	/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Relaxed);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}
}

/// The parsing strictness mode
///
/// This only affects the decoding of the comment header. Structural problems, such as a length
/// running past the end of the packet, are always errors.
///
/// # Examples
///
/// ```rust,no_run
/// use vorbis_info::config::{ParseOptions, ParsingMode};
///
/// # fn main() -> vorbis_info::error::Result<()> {
/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::BestAttempt);
///
/// let file = vorbis_info::read_from_path("foo.ogg", parsing_options)?;
/// # Ok(()) }
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly error on invalid input
	///
	/// ## Examples of behavior
	///
	/// * Unable to decode text - The parser will error and the entire comment header is discarded
	/// * A comment without a separator - The parser will error and the entire comment header is discarded
	#[default]
	Strict,
	/// Less eager to error on recoverably malformed input
	///
	/// ## Examples of behavior
	///
	/// * Unable to decode text - Invalid sequences are replaced with `U+FFFD` and the parser moves on
	/// * A comment without a separator - The comment is discarded and the parser moves on
	BestAttempt,
	/// Least eager to error, may produce partial output
	///
	/// ## Examples of behavior
	///
	/// * Unable to decode text - The entire comment is discarded and the parser moves on
	/// * A comment without a separator - The comment is discarded and the parser moves on
	Relaxed,
}
