//! VAX encoding (spectrum tag `"1   "`, image tag `'_'`).
//!
//! Integers are little-endian two's complement. Floats use the VAX
//! F_floating (32 bits) and D_floating (64 bits) formats:
//!
//! * the value is stored as 16-bit little-endian words, most significant
//!   word first, so a word swap is needed before the bit fields line up;
//! * once swapped, sign, exponent and fraction sit at the same positions as
//!   in IEEE 754 binary32 (D_floating keeps the 8-bit exponent and widens the
//!   fraction to 55 bits);
//! * the exponent is biased by 128 and the hidden bit stands for `0.1b`
//!   instead of `1.0b`, so `value = 0.1f × 2^(e - 128)`;
//! * an exponent of zero means zero regardless of the fraction, and zero with
//!   the sign bit set is the reserved operand. There are no infinities, NaNs
//!   or subnormals.
//!
//! VAX F_floating reaches `2^-128` at the low end, below the smallest normal
//! binary32, so its two lowest exponents decode to binary32 subnormals. VAX
//! D_floating has three more fraction bits than binary64; they are truncated
//! on decoding.
use crate::codec::{window, window_mut, NumericCodec};
use crate::codec_errors::CodecError;
use crate::constants::{
    DOUBLE_WIDTH, FLOAT_WIDTH, IEEE_F32_EXPONENT_BIAS, IEEE_F64_EXPONENT_BIAS,
    IEEE_F64_FRACTION_BITS, INT_WIDTH, SHORT_WIDTH, VAX_D_FRACTION_BITS, VAX_EXPONENT_BIAS,
};

const F32_SIGN: u32 = 0x8000_0000;
const F32_FRACTION: u32 = 0x007f_ffff;
const F32_HIDDEN: u32 = 0x0080_0000;
const F64_SIGN: u64 = 0x8000_0000_0000_0000;
const F64_FRACTION: u64 = (1 << IEEE_F64_FRACTION_BITS) - 1;
const VAX_D_FRACTION: u64 = (1 << VAX_D_FRACTION_BITS) - 1;
const FRACTION_BITS_DROPPED: u32 = VAX_D_FRACTION_BITS - IEEE_F64_FRACTION_BITS;

/// Exponent shift from VAX to binary32 (`e - 129 + 127`).
const F_REBIAS: i32 = IEEE_F32_EXPONENT_BIAS - (VAX_EXPONENT_BIAS + 1);
/// Exponent shift from VAX to binary64 (`e - 129 + 1023`).
const D_REBIAS: i32 = IEEE_F64_EXPONENT_BIAS - (VAX_EXPONENT_BIAS + 1);

/// Codec of files written on VAX/VMS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VaxCodec;

/// Reassemble the 16-bit little-endian words of `bytes`, first word most significant.
fn words_to_bits<const N: usize>(bytes: [u8; N]) -> u64 {
    bytes
        .chunks_exact(2)
        .fold(0u64, |acc, w| (acc << 16) | u64::from(u16::from_le_bytes([w[0], w[1]])))
}

/// Split `bits` into `out.len() / 2` little-endian words, most significant first.
fn bits_to_words(bits: u64, out: &mut [u8]) {
    let n_words = out.len() / 2;
    for (i, w) in out.chunks_exact_mut(2).enumerate() {
        let shift = 16 * (n_words - 1 - i);
        w.copy_from_slice(&((bits >> shift) as u16).to_le_bytes());
    }
}

/// Transformation from a VAX F_floating bit pattern to binary32
///
/// Argument
/// --------
/// * `bits`: the 32 bits of the value, words already swapped (sign in bit 31)
///
/// Return
/// ------
/// * the same value as `f32`, a subnormal for VAX exponents 1 and 2
/// * [`CodecError::ReservedOperand`] for a zero exponent with the sign set
///
/// See also
/// --------
/// * [`f32_to_vax_f`] for the reverse transformation
pub fn vax_f_to_f32(bits: u32) -> Result<f32, CodecError> {
    let sign = bits & F32_SIGN;
    let exponent = ((bits >> 23) & 0xff) as i32;
    let fraction = bits & F32_FRACTION;

    if exponent == 0 {
        return if sign == 0 {
            Ok(0.0)
        } else {
            Err(CodecError::ReservedOperand)
        };
    }

    let ieee_exponent = exponent + F_REBIAS;
    if ieee_exponent >= 1 {
        return Ok(f32::from_bits(sign | ((ieee_exponent as u32) << 23) | fraction));
    }
    // exponents 1 and 2 fall below the binary32 normal range
    let mantissa = (F32_HIDDEN | fraction) >> (1 - ieee_exponent);
    Ok(f32::from_bits(sign | mantissa))
}

/// Transformation from binary32 to a VAX F_floating bit pattern
///
/// Argument
/// --------
/// * `value`: any finite `f32`, negative zero is encoded as zero
///
/// Return
/// ------
/// * the 32 bits of the VAX value, words not yet swapped for storage
/// * [`CodecError::NonRepresentable`] for NaN and infinities
/// * [`CodecError::ExponentOverflow`] when `|value|` is outside `2^-128..2^127`
///
/// See also
/// --------
/// * [`vax_f_to_f32`] for the reverse transformation
pub fn f32_to_vax_f(value: f32) -> Result<u32, CodecError> {
    if !value.is_finite() {
        return Err(CodecError::NonRepresentable(f64::from(value)));
    }
    let bits = value.to_bits();
    let sign = bits & F32_SIGN;
    let mut exponent = ((bits >> 23) & 0xff) as i32;
    let mut fraction = bits & F32_FRACTION;

    // VAX has no negative zero
    if exponent == 0 && fraction == 0 {
        return Ok(0);
    }
    if exponent == 0 {
        let shift = fraction.leading_zeros() - 8;
        fraction = (fraction << shift) & F32_FRACTION;
        exponent = 1 - shift as i32;
    }

    let vax_exponent = exponent - F_REBIAS;
    if !(1..=255).contains(&vax_exponent) {
        return Err(CodecError::ExponentOverflow {
            exponent: vax_exponent,
        });
    }
    Ok(sign | ((vax_exponent as u32) << 23) | fraction)
}

/// Transformation from a VAX D_floating bit pattern to binary64
///
/// Argument
/// --------
/// * `bits`: the 64 bits of the value, words already swapped (sign in bit 63)
///
/// Return
/// ------
/// * the same value as `f64`, the 3 lowest fraction bits truncated
/// * [`CodecError::ReservedOperand`] for a zero exponent with the sign set
///
/// See also
/// --------
/// * [`f64_to_vax_d`] for the reverse transformation
pub fn vax_d_to_f64(bits: u64) -> Result<f64, CodecError> {
    let sign = bits & F64_SIGN;
    let exponent = ((bits >> VAX_D_FRACTION_BITS) & 0xff) as i32;
    let fraction = (bits & VAX_D_FRACTION) >> FRACTION_BITS_DROPPED;

    if exponent == 0 {
        return if sign == 0 {
            Ok(0.0)
        } else {
            Err(CodecError::ReservedOperand)
        };
    }

    let ieee_exponent = (exponent + D_REBIAS) as u64;
    Ok(f64::from_bits(
        sign | (ieee_exponent << IEEE_F64_FRACTION_BITS) | fraction,
    ))
}

/// Transformation from binary64 to a VAX D_floating bit pattern
///
/// Argument
/// --------
/// * `value`: any finite `f64`, negative zero is encoded as zero
///
/// Return
/// ------
/// * the 64 bits of the VAX value, words not yet swapped for storage
/// * [`CodecError::NonRepresentable`] for NaN and infinities
/// * [`CodecError::ExponentOverflow`] when `|value|` is outside `2^-128..2^127`
///
/// See also
/// --------
/// * [`vax_d_to_f64`] for the reverse transformation
pub fn f64_to_vax_d(value: f64) -> Result<u64, CodecError> {
    if !value.is_finite() {
        return Err(CodecError::NonRepresentable(value));
    }
    let bits = value.to_bits();
    let sign = bits & F64_SIGN;
    let exponent = ((bits >> IEEE_F64_FRACTION_BITS) & 0x7ff) as i32;
    let fraction = bits & F64_FRACTION;

    if exponent == 0 && fraction == 0 {
        return Ok(0);
    }
    // binary64 subnormals are far below the VAX range, exponent 0 fails below
    let vax_exponent = exponent - D_REBIAS;
    if exponent == 0 || !(1..=255).contains(&vax_exponent) {
        return Err(CodecError::ExponentOverflow {
            exponent: vax_exponent,
        });
    }
    Ok(sign
        | ((vax_exponent as u64) << VAX_D_FRACTION_BITS)
        | (fraction << FRACTION_BITS_DROPPED))
}

impl NumericCodec for VaxCodec {
    fn read_i16(&self, buffer: &[u8], offset: usize) -> Result<i16, CodecError> {
        Ok(i16::from_le_bytes(window(buffer, offset)?))
    }

    fn read_i32(&self, buffer: &[u8], offset: usize) -> Result<i32, CodecError> {
        Ok(i32::from_le_bytes(window(buffer, offset)?))
    }

    fn read_f32(&self, buffer: &[u8], offset: usize) -> Result<f32, CodecError> {
        let bytes: [u8; FLOAT_WIDTH] = window(buffer, offset)?;
        vax_f_to_f32(words_to_bits(bytes) as u32)
    }

    fn read_f64(&self, buffer: &[u8], offset: usize) -> Result<f64, CodecError> {
        let bytes: [u8; DOUBLE_WIDTH] = window(buffer, offset)?;
        vax_d_to_f64(words_to_bits(bytes))
    }

    fn write_i16(&self, buffer: &mut [u8], offset: usize, value: i16) -> Result<(), CodecError> {
        window_mut::<SHORT_WIDTH>(buffer, offset)?.copy_from_slice(&value.to_le_bytes());
        Ok(())
    }

    fn write_i32(&self, buffer: &mut [u8], offset: usize, value: i32) -> Result<(), CodecError> {
        window_mut::<INT_WIDTH>(buffer, offset)?.copy_from_slice(&value.to_le_bytes());
        Ok(())
    }

    fn write_f32(&self, buffer: &mut [u8], offset: usize, value: f32) -> Result<(), CodecError> {
        let out = window_mut::<FLOAT_WIDTH>(buffer, offset)?;
        let bits = f32_to_vax_f(value)?;
        bits_to_words(u64::from(bits), out);
        Ok(())
    }

    fn write_f64(&self, buffer: &mut [u8], offset: usize, value: f64) -> Result<(), CodecError> {
        let out = window_mut::<DOUBLE_WIDTH>(buffer, offset)?;
        let bits = f64_to_vax_d(value)?;
        bits_to_words(bits, out);
        Ok(())
    }
}

#[cfg(test)]
mod test_vax {
    use super::*;

    #[test]
    fn test_known_f_floating() {
        let codec = VaxCodec;
        assert_eq!(codec.read_f32(&[0x80, 0x40, 0x00, 0x00], 0), Ok(1.0));
        assert_eq!(codec.read_f32(&[0x80, 0xc0, 0x00, 0x00], 0), Ok(-1.0));
        assert_eq!(codec.read_f32(&[0x00, 0x40, 0x00, 0x00], 0), Ok(0.5));
        assert_eq!(codec.read_f32(&[0xc0, 0x40, 0x00, 0x00], 0), Ok(1.5));

        let mut buffer = [0u8; 4];
        codec.write_f32(&mut buffer, 0, 1.0).unwrap();
        assert_eq!(buffer, [0x80, 0x40, 0x00, 0x00]);
        codec.write_f32(&mut buffer, 0, -2.0).unwrap();
        assert_eq!(buffer, [0x00, 0xc1, 0x00, 0x00]);
    }

    #[test]
    fn test_known_d_floating() {
        let codec = VaxCodec;
        let one = [0x80, 0x40, 0, 0, 0, 0, 0, 0];
        assert_eq!(codec.read_f64(&one, 0), Ok(1.0));

        let mut buffer = [0u8; 8];
        codec.write_f64(&mut buffer, 0, 1.5).unwrap();
        assert_eq!(buffer, [0xc0, 0x40, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_word_order_of_fraction() {
        // 1 + 2^-23: lowest fraction bit lives in the second word
        let value = 1.0f32 + f32::EPSILON;
        let mut buffer = [0u8; 4];
        VaxCodec.write_f32(&mut buffer, 0, value).unwrap();
        assert_eq!(buffer, [0x80, 0x40, 0x01, 0x00]);
        assert_eq!(VaxCodec.read_f32(&buffer, 0), Ok(value));
    }

    #[test]
    fn test_zero() {
        assert_eq!(f32_to_vax_f(0.0), Ok(0));
        assert_eq!(f32_to_vax_f(-0.0), Ok(0));
        assert_eq!(f64_to_vax_d(-0.0), Ok(0));
        assert_eq!(vax_f_to_f32(0), Ok(0.0));
        // dirty zero: fraction bits are ignored
        assert_eq!(vax_f_to_f32(0x0000_1234), Ok(0.0));
        assert_eq!(vax_d_to_f64(0), Ok(0.0));
    }

    #[test]
    fn test_reserved_operand() {
        assert_eq!(vax_f_to_f32(F32_SIGN), Err(CodecError::ReservedOperand));
        assert_eq!(vax_d_to_f64(F64_SIGN), Err(CodecError::ReservedOperand));
    }

    #[test]
    fn test_f_floating_extremes() {
        // largest VAX F value: 2^127 × (1 - 2^-24)
        let max = vax_f_to_f32(0x7fff_ffff).unwrap();
        assert_eq!(max, f32::from_bits(0x7eff_ffff));
        assert_eq!(f32_to_vax_f(max), Ok(0x7fff_ffff));

        // smallest VAX F value: 2^-128, a binary32 subnormal
        let min = vax_f_to_f32(0x0080_0000).unwrap();
        assert_eq!(min, f32::from_bits(0x0020_0000));
        assert_eq!(f32_to_vax_f(min), Ok(0x0080_0000));

        assert_eq!(f32_to_vax_f(f32::MIN_POSITIVE), Ok(0x0180_0000));
        assert_eq!(
            f32_to_vax_f(f32::MAX),
            Err(CodecError::ExponentOverflow { exponent: 256 })
        );
        assert!(matches!(
            f32_to_vax_f(f32::from_bits(1)),
            Err(CodecError::ExponentOverflow { .. })
        ));
        assert_eq!(
            f32_to_vax_f(f32::INFINITY),
            Err(CodecError::NonRepresentable(f64::INFINITY))
        );
    }

    #[test]
    fn test_d_floating_extremes() {
        assert!(matches!(
            f64_to_vax_d(f64::MAX),
            Err(CodecError::ExponentOverflow { .. })
        ));
        assert!(matches!(
            f64_to_vax_d(f64::MIN_POSITIVE),
            Err(CodecError::ExponentOverflow { .. })
        ));
        assert!(f64_to_vax_d(f64::NAN).is_err());

        let max = vax_d_to_f64(0x7fff_ffff_ffff_ffff).unwrap();
        assert_eq!(f64_to_vax_d(max), Ok(0x7fff_ffff_ffff_fff8));
        assert!(f64_to_vax_d(max * 2.0).is_err());
    }

    #[test]
    fn test_d_floating_truncates_low_bits() {
        let exact = vax_d_to_f64(0x4080_0000_0000_0000).unwrap();
        let dirty = vax_d_to_f64(0x4080_0000_0000_0007).unwrap();
        assert_eq!(exact, dirty);
    }
}
