#![allow(dead_code)]

use gildas_codec::NumericFormat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SEED: u64 = 0x6c61_7373;

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// Random binary32 whose exponent fits in VAX F_floating.
pub fn random_vax_f32(rng: &mut StdRng) -> f32 {
    let sign: u32 = if rng.random::<bool>() { 0x8000_0000 } else { 0 };
    let exponent: u32 = rng.random_range(1..=253);
    let fraction: u32 = rng.random_range(0..0x0080_0000);
    f32::from_bits(sign | (exponent << 23) | fraction)
}

/// Random binary64 whose exponent fits in VAX D_floating.
pub fn random_vax_f64(rng: &mut StdRng) -> f64 {
    let sign: u64 = if rng.random::<bool>() { 1 << 63 } else { 0 };
    let exponent: u64 = rng.random_range(895..=1149);
    let fraction: u64 = rng.random_range(0..(1u64 << 52));
    f64::from_bits(sign | (exponent << 52) | fraction)
}

pub fn all_formats() -> [NumericFormat; 3] {
    NumericFormat::ALL
}
