//! Various configuration options to control how a stream is read

mod parse_options;

pub use parse_options::{ParseOptions, ParsingMode};
