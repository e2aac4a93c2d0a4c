//! Reusable layout fixtures.
//!
//! - [`seeded_radii`]: reproducible radius sequences from a ChaCha8 RNG.
//! - [`saturating_radius`]: the radius sequence that packs nine orbits
//!   from a 64-unit core in 65 insertions.

use std::f64::consts::{FRAC_PI_4, FRAC_PI_8};
use std::ops::Range;

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `count` radii drawn uniformly from `range`, identical for identical
/// `seed`.
pub fn seeded_radii(seed: u64, count: usize, range: Range<f64>) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let width = range.end - range.start;
    (0..count)
        .map(|_| {
            // 53 random bits give a uniform f64 in [0, 1).
            let unit = (rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
            range.start + unit * width
        })
        .collect()
}

/// Radius for the next object given the current system radius:
/// `sin(pi/8) * cos(pi/4) * system_radius`.
pub fn saturating_radius(system_radius: f64) -> f64 {
    FRAC_PI_8.sin() * FRAC_PI_4.cos() * system_radius
}
