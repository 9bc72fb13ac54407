#![allow(missing_docs)]

mod util;
mod vorbis;
