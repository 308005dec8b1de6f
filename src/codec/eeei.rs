//! EEEI encoding (spectrum tag `"1B  "`, image tag `'.'`): little-endian IEEE 754.
//!
//! This is the layout of every modern x86/ARM host, read and write are plain
//! reinterpretations of the bytes.
use crate::codec::{window, window_mut, NumericCodec};
use crate::codec_errors::CodecError;
use crate::constants::{DOUBLE_WIDTH, FLOAT_WIDTH, INT_WIDTH, SHORT_WIDTH};

/// Codec of files written on little-endian IEEE hosts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EeeiCodec;

impl NumericCodec for EeeiCodec {
    fn read_i16(&self, buffer: &[u8], offset: usize) -> Result<i16, CodecError> {
        Ok(i16::from_le_bytes(window(buffer, offset)?))
    }

    fn read_i32(&self, buffer: &[u8], offset: usize) -> Result<i32, CodecError> {
        Ok(i32::from_le_bytes(window(buffer, offset)?))
    }

    fn read_f32(&self, buffer: &[u8], offset: usize) -> Result<f32, CodecError> {
        Ok(f32::from_le_bytes(window(buffer, offset)?))
    }

    fn read_f64(&self, buffer: &[u8], offset: usize) -> Result<f64, CodecError> {
        Ok(f64::from_le_bytes(window(buffer, offset)?))
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
        window_mut::<FLOAT_WIDTH>(buffer, offset)?.copy_from_slice(&value.to_le_bytes());
        Ok(())
    }

    fn write_f64(&self, buffer: &mut [u8], offset: usize, value: f64) -> Result<(), CodecError> {
        window_mut::<DOUBLE_WIDTH>(buffer, offset)?.copy_from_slice(&value.to_le_bytes());
        Ok(())
    }
}

#[cfg(test)]
mod test_eeei {
    use super::*;

    #[test]
    fn test_byte_order() {
        let mut buffer = [0u8; 6];
        EeeiCodec.write_i32(&mut buffer, 2, 0x0102_0304).unwrap();
        assert_eq!(buffer, [0, 0, 0x04, 0x03, 0x02, 0x01]);
        assert_eq!(EeeiCodec.read_i16(&buffer, 2), Ok(0x0304));

        EeeiCodec.write_f32(&mut buffer, 0, 1.0).unwrap();
        assert_eq!(buffer[..4], [0x00, 0x00, 0x80, 0x3f]);
    }

    #[test]
    fn test_out_of_bounds_leaves_buffer_untouched() {
        let mut buffer = [0xaau8; 7];
        assert_eq!(
            EeeiCodec.write_f64(&mut buffer, 0, 1.0),
            Err(CodecError::OutOfBounds {
                offset: 0,
                width: 8,
                len: 7
            })
        );
        assert_eq!(buffer, [0xaa; 7]);
    }
}
