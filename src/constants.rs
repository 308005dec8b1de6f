//! # Constants of the GILDAS/CLASS binary formats
//!
//! This module centralizes the **fixed numbers** of the on-disk format: the
//! byte width of every numeric field, the format tags found in spectrum and
//! image headers, and the epoch used by the integer day encoding.
//!
//! ## Overview
//!
//! - Field widths (short, int, float, double, date)
//! - Format tags of the three numeric encodings
//! - Day encoding epoch and supported calendar range
//! - Layout constants of the legacy VAX floating-point formats

// -------------------------------------------------------------------------------------------------
// Field widths
// -------------------------------------------------------------------------------------------------

/// Width in bytes of a 16-bit integer field
pub const SHORT_WIDTH: usize = 2;

/// Width in bytes of a 32-bit integer field
pub const INT_WIDTH: usize = 4;

/// Width in bytes of a single-precision float field
pub const FLOAT_WIDTH: usize = 4;

/// Width in bytes of a double-precision float field
pub const DOUBLE_WIDTH: usize = 8;

/// Width in bytes of a date field (stored as a 32-bit integer day count)
pub const DATE_WIDTH: usize = INT_WIDTH;

// -------------------------------------------------------------------------------------------------
// Format tags
// -------------------------------------------------------------------------------------------------

/// Number of characters of the format tag at the start of a spectrum file
pub const SPECTRUM_TAG_LEN: usize = 4;

/// Spectrum tag of files written with VAX floating-point numbers
pub const VAX_SPECTRUM_TAG: &str = "1   ";

/// Spectrum tag of files written in big-endian IEEE 754
pub const IEEE_SPECTRUM_TAG: &str = "1A  ";

/// Spectrum tag of files written in little-endian IEEE 754
pub const EEEI_SPECTRUM_TAG: &str = "1B  ";

/// First tag character of the second revision of the spectrum file format
pub const REVISION_2_MARKER: char = '2';

/// Image tag of files written with VAX floating-point numbers
pub const VAX_IMAGE_TAG: char = '_';

/// Image tag of files written in big-endian IEEE 754
pub const IEEE_IMAGE_TAG: char = '-';

/// Image tag of files written in little-endian IEEE 754
pub const EEEI_IMAGE_TAG: char = '.';

// -------------------------------------------------------------------------------------------------
// Day encoding
// -------------------------------------------------------------------------------------------------

/// Offset in days between the stored day count and the Modified Julian Date
pub const EPOCH_OFFSET_DAYS: i32 = 60549;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2400000.5;

/// MJD of 0001-01-01, first day of the supported calendar range
pub const MIN_CALENDAR_MJD: i64 = -678_575;

/// MJD of 9999-12-31, last day of the supported calendar range
pub const MAX_CALENDAR_MJD: i64 = 2_973_483;

/// Tolerance (in days, about 86 µs) used when snapping a Julian Date to its civil day.
/// Covers the rounding of a `f64` Julian Date around 2.4e6 days, nothing more.
pub const DAY_EPSILON: f64 = 1e-9;

/// MJD of 1970-01-01, origin of the proleptic Gregorian day count
pub const UNIX_EPOCH_MJD: i64 = 40_587;

// -------------------------------------------------------------------------------------------------
// VAX floating point layout
// -------------------------------------------------------------------------------------------------

/// Exponent bias of VAX F_floating and D_floating (value = 0.1f × 2^(e - 128))
pub const VAX_EXPONENT_BIAS: i32 = 128;

/// Exponent bias of IEEE 754 binary32
pub const IEEE_F32_EXPONENT_BIAS: i32 = 127;

/// Exponent bias of IEEE 754 binary64
pub const IEEE_F64_EXPONENT_BIAS: i32 = 1023;

/// Number of explicit fraction bits of VAX D_floating
pub const VAX_D_FRACTION_BITS: u32 = 55;

/// Number of explicit fraction bits of IEEE 754 binary64
pub const IEEE_F64_FRACTION_BITS: u32 = 52;
