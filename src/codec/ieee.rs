//! IEEE encoding (spectrum tag `"1A  "`, image tag `'-'`): big-endian IEEE 754.
//!
//! The bit layout already matches the host floats, only the byte order is
//! reversed.
use crate::codec::{window, window_mut, NumericCodec};
use crate::codec_errors::CodecError;
use crate::constants::{DOUBLE_WIDTH, FLOAT_WIDTH, INT_WIDTH, SHORT_WIDTH};

/// Codec of files written on big-endian IEEE hosts (SPARC, PowerPC, HP-UX).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IeeeCodec;

impl NumericCodec for IeeeCodec {
    fn read_i16(&self, buffer: &[u8], offset: usize) -> Result<i16, CodecError> {
        Ok(i16::from_be_bytes(window(buffer, offset)?))
    }

    fn read_i32(&self, buffer: &[u8], offset: usize) -> Result<i32, CodecError> {
        Ok(i32::from_be_bytes(window(buffer, offset)?))
    }

    fn read_f32(&self, buffer: &[u8], offset: usize) -> Result<f32, CodecError> {
        Ok(f32::from_be_bytes(window(buffer, offset)?))
    }

    fn read_f64(&self, buffer: &[u8], offset: usize) -> Result<f64, CodecError> {
        Ok(f64::from_be_bytes(window(buffer, offset)?))
    }

    fn write_i16(&self, buffer: &mut [u8], offset: usize, value: i16) -> Result<(), CodecError> {
        window_mut::<SHORT_WIDTH>(buffer, offset)?.copy_from_slice(&value.to_be_bytes());
        Ok(())
    }

    fn write_i32(&self, buffer: &mut [u8], offset: usize, value: i32) -> Result<(), CodecError> {
        window_mut::<INT_WIDTH>(buffer, offset)?.copy_from_slice(&value.to_be_bytes());
        Ok(())
    }

    fn write_f32(&self, buffer: &mut [u8], offset: usize, value: f32) -> Result<(), CodecError> {
        window_mut::<FLOAT_WIDTH>(buffer, offset)?.copy_from_slice(&value.to_be_bytes());
        Ok(())
    }

    fn write_f64(&self, buffer: &mut [u8], offset: usize, value: f64) -> Result<(), CodecError> {
        window_mut::<DOUBLE_WIDTH>(buffer, offset)?.copy_from_slice(&value.to_be_bytes());
        Ok(())
    }
}
