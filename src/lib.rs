//! Numeric codecs for GILDAS/CLASS spectrum and image files.
//!
//! A file announces its numeric encoding through a tag in its header. The
//! [`codec::format_tag`] selectors resolve that tag to a [`NumericFormat`],
//! whose [`NumericCodec`] implementation reads and writes shorts, ints,
//! floats, doubles and dates at byte offsets of a caller-owned buffer.
//! Decoded header values are gathered in a [`SpectrumHeader`].
pub mod codec;
pub mod codec_errors;
pub mod constants;
pub mod header;
pub mod time;

pub use codec::format_tag::{select_for_image, select_for_spectrum};
pub use codec::{NumericCodec, NumericFormat};
pub use codec_errors::CodecError;
pub use header::SpectrumHeader;
