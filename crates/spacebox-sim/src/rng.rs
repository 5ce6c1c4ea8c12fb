//! Uniform random helpers with defensive range handling.
//!
//! All simulation randomness flows through the engine's seeded
//! `ChaCha8Rng`. Inverted or empty ranges return the lower bound instead
//! of panicking, so degenerate configs degrade to fixed values.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use spacebox_core::types::FieldExtent;

/// Uniform float in [min, max); `min` itself when the range is empty.
pub fn uniform(rng: &mut ChaCha8Rng, min: f32, max: f32) -> f32 {
    if max <= min {
        min
    } else {
        rng.gen_range(min..max)
    }
}

/// Uniform integer in [min, max]; `min` itself when the range is empty.
pub fn uniform_int(rng: &mut ChaCha8Rng, min: u32, max: u32) -> u32 {
    if max <= min {
        min
    } else {
        rng.gen_range(min..=max)
    }
}

/// Uniform point inside the field.
pub fn point_in(rng: &mut ChaCha8Rng, extent: FieldExtent) -> Vec2 {
    Vec2::new(
        uniform(rng, 0.0, extent.width),
        uniform(rng, 0.0, extent.height),
    )
}
