// Shorthand for return Err(VorbisInfoError::from(FormatError::Foo))
//
// Usage:
// - format_err!(Variant)          -> return Err(FormatError::Variant.into())
// - format_err!(Variant(Value))   -> return Err(FormatError::Variant(Value).into())
macro_rules! format_err {
	($variant:ident) => {
		return Err(crate::error::VorbisInfoError::from(
			crate::error::FormatError::$variant,
		))
	};
	($variant:ident($value:expr)) => {
		return Err(crate::error::VorbisInfoError::from(
			crate::error::FormatError::$variant($value),
		))
	};
}

// Shorthand for return Err(VorbisInfoError::from(CommentError::Foo))
//
// Usage:
// - comment_err!(Variant)
macro_rules! comment_err {
	($variant:ident) => {
		return Err(crate::error::VorbisInfoError::from(
			crate::error::CommentError::$variant,
		))
	};
}

// A macro for handling the different `ParsingMode`s
//
// NOTE: `STRICT`, `BESTATTEMPT`, and `RELAXED` are optional, any missing mode
// 		 falls through to `DEFAULT`.
//
// Usage:
//
// - parse_mode_choice!(
// 		ident_of_parsing_mode,
// 		STRICT: some_expr,
// 		BESTATTEMPT: some_expr,
// 		RELAXED: some_expr,
// 		DEFAULT: some_expr
// 	 )
macro_rules! parse_mode_choice {
	(
		$parse_mode:ident,
		$(STRICT: $strict_handler:expr,)?
		$(BESTATTEMPT: $best_attempt_handler:expr,)?
		$(RELAXED: $relaxed_handler:expr,)?
		DEFAULT: $default:expr
	) => {
		match $parse_mode {
			$(crate::config::ParsingMode::Strict => { $strict_handler },)?
			$(crate::config::ParsingMode::BestAttempt => { $best_attempt_handler },)?
			$(crate::config::ParsingMode::Relaxed => { $relaxed_handler },)?
			#[allow(unreachable_patterns)]
			_ => { $default }
		}
	};
}

pub(crate) use {comment_err, format_err, parse_mode_choice};
