//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! All randomness in the tracer flows through this module so a given seed
//! reproduces the same scatter directions on every run. Stream seeds are
//! derived with BLAKE3 so independent components draw from independent
//! sequences.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f64::consts::TAU;

use crate::vec2::Vec2;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    // Expand 32-bit seed to 64-bit for PCG32 state
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives a seed for a named stream from the base seed.
///
/// Hashes the base seed concatenated with the stream key using BLAKE3, so
/// each key gets an independent random sequence.
pub fn derive_stream_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);

    // Truncate to u32 (first 4 bytes, little-endian)
    let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().unwrap();
    u32::from_le_bytes(bytes)
}

/// Draws a uniformly distributed unit direction.
///
/// Thin wrapper over the generator: a uniform angle in `[0, 2 pi)` mapped
/// through [`Vec2::from_angle`].
pub fn random_unit_vector(rng: &mut Pcg32) -> Vec2 {
    Vec2::from_angle(rng.gen_range(0.0..TAU), 1.0)
}
