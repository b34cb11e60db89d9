//! Wavecast acoustic tracing primitives
//!
//! 2D vector and ray geometry for toy acoustic simulation, plus a
//! deterministic seeded RNG for random scatter directions. All randomness
//! flows through [`rng`] so a given seed reproduces the same trace
//! byte-for-byte.
//!
//! # Crate Structure
//!
//! - [`vec2`] - planar vectors: projection, reflection, rotation
//! - [`ray`] - rays and axis-aligned room walls
//! - [`rng`] - seeded PCG32 and random unit directions

pub mod ray;
pub mod rng;
pub mod vec2;

pub use ray::{Ray, Room, WallHit};
pub use vec2::Vec2;

/// Speed of sound in air, meters per second.
pub const SPEED_OF_SOUND: f64 = 343.0;
