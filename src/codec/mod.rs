//! Numeric codecs of the GILDAS/CLASS binary formats.
//!
//! Files written by CLASS store their numbers in one of three encodings,
//! announced by a tag at the start of the file:
//!
//! | Encoding | Spectrum tag | Image tag | Integers      | Floats            |
//! |----------|--------------|-----------|---------------|-------------------|
//! | VAX      | `"1   "`     | `'_'`     | little-endian | VAX F/D_floating  |
//! | IEEE     | `"1A  "`     | `'-'`     | big-endian    | IEEE 754          |
//! | EEEI     | `"1B  "`     | `'.'`     | little-endian | IEEE 754          |
//!
//! Every encoding implements the [`NumericCodec`] contract over the same
//! fixed-width byte windows (2, 4, 4, 8 bytes for short, int, float, double);
//! only the interpretation of the bits differs. The codecs are zero-sized and
//! stateless, so a single instance can be shared across threads.
//!
//! # Example
//!
//! ```rust
//! use gildas_codec::codec::{format_tag::select_for_spectrum, NumericCodec};
//!
//! let format = select_for_spectrum("1A  ").unwrap();
//! let mut buffer = [0u8; 8];
//! format.write_f64(&mut buffer, 0, 1.5).unwrap();
//! assert_eq!(format.read_f64(&buffer, 0).unwrap(), 1.5);
//! ```
use std::fmt;
use std::str::FromStr;

use hifitime::Epoch;
use serde::{Deserialize, Serialize};

use crate::codec_errors::CodecError;
use crate::constants::{
    EEEI_IMAGE_TAG, EEEI_SPECTRUM_TAG, FLOAT_WIDTH, IEEE_IMAGE_TAG, IEEE_SPECTRUM_TAG,
    VAX_IMAGE_TAG, VAX_SPECTRUM_TAG,
};
use crate::time::{day_from_epoch, decode_day, encode_day};

pub mod eeei;
pub mod format_tag;
pub mod ieee;
pub mod vax;

pub use eeei::EeeiCodec;
pub use ieee::IeeeCodec;
pub use vax::VaxCodec;

/// Copy the `N` bytes starting at `offset` out of `buffer`.
pub(crate) fn window<const N: usize>(
    buffer: &[u8],
    offset: usize,
) -> Result<[u8; N], CodecError> {
    let bytes = offset
        .checked_add(N)
        .and_then(|end| buffer.get(offset..end))
        .ok_or(CodecError::OutOfBounds {
            offset,
            width: N,
            len: buffer.len(),
        })?;
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    Ok(out)
}

/// Mutable view on the `N` bytes starting at `offset` in `buffer`.
pub(crate) fn window_mut<const N: usize>(
    buffer: &mut [u8],
    offset: usize,
) -> Result<&mut [u8], CodecError> {
    let len = buffer.len();
    offset
        .checked_add(N)
        .and_then(|end| buffer.get_mut(offset..end))
        .ok_or(CodecError::OutOfBounds {
            offset,
            width: N,
            len,
        })
}

fn check_span(len: usize, offset: usize, width: usize) -> Result<(), CodecError> {
    match offset.checked_add(width) {
        Some(end) if end <= len => Ok(()),
        _ => Err(CodecError::OutOfBounds { offset, width, len }),
    }
}

/// Read and write operations shared by all numeric encodings.
///
/// Offsets are zero-based byte offsets into the caller's buffer. A field
/// that does not fit entirely in the buffer yields
/// [`CodecError::OutOfBounds`]; nothing is read or written in that case.
///
/// The date operations are provided on top of the integer ones: a date is a
/// 32-bit day count converted with [`decode_day`] and [`encode_day`].
pub trait NumericCodec: fmt::Debug + Send + Sync {
    fn read_i16(&self, buffer: &[u8], offset: usize) -> Result<i16, CodecError>;
    fn read_i32(&self, buffer: &[u8], offset: usize) -> Result<i32, CodecError>;
    fn read_f32(&self, buffer: &[u8], offset: usize) -> Result<f32, CodecError>;
    fn read_f64(&self, buffer: &[u8], offset: usize) -> Result<f64, CodecError>;

    fn write_i16(&self, buffer: &mut [u8], offset: usize, value: i16) -> Result<(), CodecError>;
    fn write_i32(&self, buffer: &mut [u8], offset: usize, value: i32) -> Result<(), CodecError>;
    fn write_f32(&self, buffer: &mut [u8], offset: usize, value: f32) -> Result<(), CodecError>;
    fn write_f64(&self, buffer: &mut [u8], offset: usize, value: f64) -> Result<(), CodecError>;

    /// Read a day count and convert it to the epoch at 00:00 UTC of that day.
    fn read_date(&self, buffer: &[u8], offset: usize) -> Result<Epoch, CodecError> {
        decode_day(self.read_i32(buffer, offset)?)
    }

    /// Encode the civil day containing the Julian Date `julian_day`.
    fn write_date(
        &self,
        buffer: &mut [u8],
        offset: usize,
        julian_day: f64,
    ) -> Result<(), CodecError> {
        let day = encode_day(julian_day)?;
        self.write_i32(buffer, offset, day)
    }

    fn write_epoch(
        &self,
        buffer: &mut [u8],
        offset: usize,
        epoch: &Epoch,
    ) -> Result<(), CodecError> {
        let day = day_from_epoch(epoch)?;
        self.write_i32(buffer, offset, day)
    }

    /// Read `count` consecutive single-precision values, e.g. the channels of a spectrum.
    fn read_f32_array(
        &self,
        buffer: &[u8],
        offset: usize,
        count: usize,
    ) -> Result<Vec<f32>, CodecError> {
        check_span(buffer.len(), offset, count.saturating_mul(FLOAT_WIDTH))?;
        (0..count)
            .map(|i| self.read_f32(buffer, offset + i * FLOAT_WIDTH))
            .collect()
    }

    /// Write `values` as consecutive single-precision values starting at `offset`.
    ///
    /// The buffer is left untouched when the values do not fit or when one of
    /// them cannot be encoded.
    fn write_f32_array(
        &self,
        buffer: &mut [u8],
        offset: usize,
        values: &[f32],
    ) -> Result<(), CodecError> {
        let width = values.len().saturating_mul(FLOAT_WIDTH);
        check_span(buffer.len(), offset, width)?;
        let mut encoded = vec![0u8; width];
        values
            .iter()
            .enumerate()
            .try_for_each(|(i, v)| self.write_f32(&mut encoded, i * FLOAT_WIDTH, *v))?;
        buffer[offset..offset + width].copy_from_slice(&encoded);
        Ok(())
    }
}

/// The numeric encoding of a file, as announced by its format tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericFormat {
    /// VAX F/D_floating, little-endian integers
    Vax,
    /// IEEE 754, big-endian
    Ieee,
    /// IEEE 754, little-endian
    Eeei,
}

impl NumericFormat {
    pub const ALL: [NumericFormat; 3] = [
        NumericFormat::Vax,
        NumericFormat::Ieee,
        NumericFormat::Eeei,
    ];

    /// Codec implementing this encoding.
    pub fn codec(&self) -> &'static dyn NumericCodec {
        match self {
            NumericFormat::Vax => &VaxCodec,
            NumericFormat::Ieee => &IeeeCodec,
            NumericFormat::Eeei => &EeeiCodec,
        }
    }

    /// Canonical 4-character tag of a spectrum file in this encoding.
    pub fn spectrum_tag(&self) -> &'static str {
        match self {
            NumericFormat::Vax => VAX_SPECTRUM_TAG,
            NumericFormat::Ieee => IEEE_SPECTRUM_TAG,
            NumericFormat::Eeei => EEEI_SPECTRUM_TAG,
        }
    }

    /// Single-character tag of an image file in this encoding.
    pub fn image_tag(&self) -> char {
        match self {
            NumericFormat::Vax => VAX_IMAGE_TAG,
            NumericFormat::Ieee => IEEE_IMAGE_TAG,
            NumericFormat::Eeei => EEEI_IMAGE_TAG,
        }
    }
}

impl NumericCodec for NumericFormat {
    fn read_i16(&self, buffer: &[u8], offset: usize) -> Result<i16, CodecError> {
        self.codec().read_i16(buffer, offset)
    }

    fn read_i32(&self, buffer: &[u8], offset: usize) -> Result<i32, CodecError> {
        self.codec().read_i32(buffer, offset)
    }

    fn read_f32(&self, buffer: &[u8], offset: usize) -> Result<f32, CodecError> {
        self.codec().read_f32(buffer, offset)
    }

    fn read_f64(&self, buffer: &[u8], offset: usize) -> Result<f64, CodecError> {
        self.codec().read_f64(buffer, offset)
    }

    fn write_i16(&self, buffer: &mut [u8], offset: usize, value: i16) -> Result<(), CodecError> {
        self.codec().write_i16(buffer, offset, value)
    }

    fn write_i32(&self, buffer: &mut [u8], offset: usize, value: i32) -> Result<(), CodecError> {
        self.codec().write_i32(buffer, offset, value)
    }

    fn write_f32(&self, buffer: &mut [u8], offset: usize, value: f32) -> Result<(), CodecError> {
        self.codec().write_f32(buffer, offset, value)
    }

    fn write_f64(&self, buffer: &mut [u8], offset: usize, value: f64) -> Result<(), CodecError> {
        self.codec().write_f64(buffer, offset, value)
    }
}

impl fmt::Display for NumericFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NumericFormat::Vax => "VAX",
            NumericFormat::Ieee => "IEEE",
            NumericFormat::Eeei => "EEEI",
        };
        write!(f, "{s}")
    }
}

impl FromStr for NumericFormat {
    type Err = CodecError;

    /// Resolve a 4-character spectrum tag, see [`format_tag::select_for_spectrum`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        format_tag::select_for_spectrum(s)
    }
}
