//! Resolution of a format tag to its [`NumericFormat`].
//!
//! Spectrum files start with a 4-character tag, image files carry a single
//! character inside their `GILDAS?IMAGE` signature. Both resolve to one of the
//! three encodings; anything else is an error, never a default.
//!
//! # Spectrum tag rules
//!
//! 1. Exact match against `"1   "`, `"1A  "` and `"1B  "`.
//! 2. A tag starting with `'2'` belongs to the second revision of the file
//!    format and is rejected with [`CodecError::UnsupportedRevision`].
//! 3. Otherwise the second character alone is matched against the second
//!    character of the three known tags (`' '`, `'A'`, `'B'`). This tolerates
//!    tags whose first or trailing characters were altered by old writers.
//!    No other variant is guessed.
//! 4. Anything else is [`CodecError::UnsupportedFormat`].
use nom::{
    branch::alt,
    bytes::complete::{tag, take},
    IResult,
};
use tracing::{debug, trace, warn};

use crate::codec::NumericFormat;
use crate::codec_errors::CodecError;
use crate::constants::{REVISION_2_MARKER, SPECTRUM_TAG_LEN};

/// Select the encoding announced by the 4-character tag of a spectrum file.
///
/// Arguments
/// -----------------
/// * `tag`: the tag as read from the file, e.g. `"1A  "`
///
/// Return
/// ----------
/// * the matching [`NumericFormat`], or [`CodecError::UnsupportedRevision`] /
///   [`CodecError::UnsupportedFormat`]
///
/// See also
/// ------------
/// * [`select_for_image`] – Same resolution for image files.
/// * [`read_spectrum_tag`] – Reads the tag from the start of a header buffer.
pub fn select_for_spectrum(tag: &str) -> Result<NumericFormat, CodecError> {
    if let Some(format) = NumericFormat::ALL
        .into_iter()
        .find(|f| f.spectrum_tag() == tag)
    {
        trace!(tag, %format, "spectrum tag resolved");
        return Ok(format);
    }

    if tag.starts_with(REVISION_2_MARKER) {
        warn!(tag, "revision 2 spectrum files are not supported");
        return Err(CodecError::UnsupportedRevision {
            tag: tag.to_string(),
        });
    }

    let second = tag.chars().nth(1);
    let fallback = NumericFormat::ALL
        .into_iter()
        .find(|f| second.is_some() && f.spectrum_tag().chars().nth(1) == second);
    match fallback {
        Some(format) => {
            debug!(tag, %format, "spectrum tag resolved on its second character");
            Ok(format)
        }
        None => Err(CodecError::UnsupportedFormat {
            tag: tag.to_string(),
        }),
    }
}

/// Select the encoding announced by the tag character of an image file.
///
/// `'_'` is VAX, `'-'` is IEEE and `'.'` is EEEI; any other character fails.
pub fn select_for_image(tag: char) -> Result<NumericFormat, CodecError> {
    let format = NumericFormat::ALL
        .into_iter()
        .find(|f| f.image_tag() == tag)
        .ok_or_else(|| CodecError::UnsupportedFormat {
            tag: tag.to_string(),
        })?;
    trace!(%tag, %format, "image tag resolved");
    Ok(format)
}

fn spectrum_tag(input: &[u8]) -> IResult<&[u8], &[u8]> {
    take(SPECTRUM_TAG_LEN)(input)
}

/// `GILDAS` + tag character + `IMAGE` or `UVFIL`
fn image_signature(input: &[u8]) -> IResult<&[u8], u8> {
    let (input, _) = tag("GILDAS")(input)?;
    let (input, code) = take(1usize)(input)?;
    let (input, _) = alt((tag("IMAGE"), tag("UVFIL")))(input)?;
    Ok((input, code[0]))
}

/// Read the 4-character tag at the start of a spectrum file and select its encoding.
pub fn read_spectrum_tag(header: &[u8]) -> Result<NumericFormat, CodecError> {
    let (_, raw) = spectrum_tag(header)?;
    select_for_spectrum(&String::from_utf8_lossy(raw))
}

/// Read the `GILDAS?IMAGE` signature at the start of an image file and select its encoding.
pub fn read_image_tag(header: &[u8]) -> Result<NumericFormat, CodecError> {
    let (_, code) = image_signature(header)?;
    select_for_image(char::from(code))
}
