mod common;

use approx::assert_relative_eq;
use common::{all_formats, random_vax_f32, random_vax_f64, seeded_rng};
use gildas_codec::{CodecError, NumericCodec, NumericFormat};
use rand::Rng;

#[test]
fn test_integer_round_trip() {
    let mut rng = seeded_rng();
    let mut buffer = vec![0u8; 16];

    for format in all_formats() {
        for value in [i16::MIN, -1, 0, 1, i16::MAX] {
            format.write_i16(&mut buffer, 3, value).unwrap();
            assert_eq!(format.read_i16(&buffer, 3), Ok(value));
        }
        for value in [i32::MIN, -1, 0, 1, i32::MAX] {
            format.write_i32(&mut buffer, 5, value).unwrap();
            assert_eq!(format.read_i32(&buffer, 5), Ok(value));
        }
        for _ in 0..10_000 {
            let short: i16 = rng.random();
            let int: i32 = rng.random();
            format.write_i16(&mut buffer, 0, short).unwrap();
            format.write_i32(&mut buffer, 2, int).unwrap();
            assert_eq!(format.read_i16(&buffer, 0), Ok(short));
            assert_eq!(format.read_i32(&buffer, 2), Ok(int));
        }
    }
}

#[test]
fn test_ieee_float_round_trip_is_bit_exact() {
    let values = [
        0.0f64,
        -0.0,
        f64::MIN_POSITIVE,
        -f64::MIN_POSITIVE,
        f64::MAX,
        f64::MIN,
        f64::EPSILON,
        std::f64::consts::PI,
        5e-324,
    ];
    let mut buffer = [0u8; 8];
    for format in [NumericFormat::Ieee, NumericFormat::Eeei] {
        for value in values {
            format.write_f64(&mut buffer, 0, value).unwrap();
            assert_eq!(format.read_f64(&buffer, 0).unwrap().to_bits(), value.to_bits());

            let single = value as f32;
            format.write_f32(&mut buffer, 2, single).unwrap();
            assert_eq!(format.read_f32(&buffer, 2).unwrap().to_bits(), single.to_bits());
        }
    }
}

#[test]
fn test_ieee_and_eeei_are_byte_reversed() {
    let mut big = [0u8; 8];
    let mut little = [0u8; 8];
    NumericFormat::Ieee.write_f64(&mut big, 0, -1234.5678).unwrap();
    NumericFormat::Eeei.write_f64(&mut little, 0, -1234.5678).unwrap();
    little.reverse();
    assert_eq!(big, little);
}

#[test]
fn test_vax_float_round_trip() {
    let mut rng = seeded_rng();
    let mut buffer = [0u8; 12];
    let vax = NumericFormat::Vax;

    for value in [0.0f32, 1.0, -1.0, f32::MIN_POSITIVE, 1.7e38, -3.25e-38] {
        vax.write_f32(&mut buffer, 0, value).unwrap();
        assert_eq!(vax.read_f32(&buffer, 0), Ok(value));
    }
    // VAX has no negative zero
    vax.write_f32(&mut buffer, 0, -0.0).unwrap();
    assert_eq!(vax.read_f32(&buffer, 0).unwrap().to_bits(), 0);

    for _ in 0..10_000 {
        let single = random_vax_f32(&mut rng);
        let double = random_vax_f64(&mut rng);
        vax.write_f32(&mut buffer, 0, single).unwrap();
        vax.write_f64(&mut buffer, 4, double).unwrap();
        assert_eq!(vax.read_f32(&buffer, 0), Ok(single));
        assert_eq!(vax.read_f64(&buffer, 4), Ok(double));
    }
}

#[test]
fn test_vax_matches_ieee_values() {
    let mut vax_buffer = [0u8; 8];
    for value in [1.0e-30f64, 0.001, 42.0, 6.02214076e23, -1.0e38] {
        NumericFormat::Vax.write_f64(&mut vax_buffer, 0, value).unwrap();
        assert_relative_eq!(
            NumericFormat::Vax.read_f64(&vax_buffer, 0).unwrap(),
            value,
            max_relative = 1e-15
        );
    }
}

#[test]
fn test_vax_overflow() {
    let mut buffer = [0u8; 8];
    let vax = NumericFormat::Vax;
    assert!(matches!(
        vax.write_f32(&mut buffer, 0, f32::MAX),
        Err(CodecError::ExponentOverflow { .. })
    ));
    assert!(matches!(
        vax.write_f64(&mut buffer, 0, 1.0e300),
        Err(CodecError::ExponentOverflow { .. })
    ));
    assert!(matches!(
        vax.write_f64(&mut buffer, 0, f64::NAN),
        Err(CodecError::NonRepresentable(_))
    ));
    assert_eq!(buffer, [0u8; 8]);
}

#[test]
fn test_read_double_near_end_of_buffer() {
    let buffer = vec![0u8; 32];
    for format in all_formats() {
        assert!(format.read_f64(&buffer, 24).is_ok());
        for offset in 25..32 {
            assert_eq!(
                format.read_f64(&buffer, offset),
                Err(CodecError::OutOfBounds {
                    offset,
                    width: 8,
                    len: 32
                })
            );
        }
        assert!(format.read_i16(&buffer, 31).is_err());
        assert!(format.read_i32(&buffer, 29).is_err());
        assert!(format.read_f32(&buffer, usize::MAX).is_err());
        assert!(format.read_date(&buffer, 30).is_err());
    }
}

#[test]
fn test_date_round_trip_through_codecs() {
    let mut buffer = [0u8; 4];
    for format in all_formats() {
        // one and a half century on each side of the epoch
        for stored in (-55_000..=55_000).step_by(97) {
            format.write_i32(&mut buffer, 0, stored).unwrap();
            let epoch = format.read_date(&buffer, 0).unwrap();
            format.write_epoch(&mut buffer, 0, &epoch).unwrap();
            assert_eq!(format.read_i32(&buffer, 0), Ok(stored));

            format.write_date(&mut buffer, 0, epoch.to_jde_utc_days() + 0.75).unwrap();
            assert_eq!(format.read_i32(&buffer, 0), Ok(stored));
        }
    }
}

#[test]
fn test_codecs_are_shareable_across_threads() {
    let handles: Vec<_> = all_formats()
        .into_iter()
        .map(|format| {
            std::thread::spawn(move || {
                let codec = format.codec();
                let mut buffer = vec![0u8; 4 * 256];
                let values: Vec<f32> = (0..256).map(|i| i as f32 * 0.25).collect();
                codec.write_f32_array(&mut buffer, 0, &values).unwrap();
                codec.read_f32_array(&buffer, 0, 256).unwrap() == values
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
