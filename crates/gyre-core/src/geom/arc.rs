//! Arc math for packing circles around a ring.
//!
//! A circle of radius `r` whose center sits at distance `d` from the ring
//! center occupies a wedge of the ring. [`half_angle`] is half of that
//! wedge, measured between the center-to-center line and a tangent from
//! the ring center.

use std::f64::consts::{PI, TAU};

/// Half of the angle subtended at the ring center by a circle of
/// `radius` whose center lies at `distance` from the ring center.
///
/// - `radius <= 0` subtends nothing: `0`.
/// - `distance <= radius` means the circle covers the ring center and
///   blocks every direction: `pi` (a full revolution for the whole arc).
/// - otherwise `asin(radius / distance)`.
///
/// ```
/// use gyre_core::geom::arc::half_angle;
///
/// // Six equal circles fit exactly around a ring of twice their radius.
/// let h = half_angle(1.0, 2.0);
/// assert!((6.0 * 2.0 * h - std::f64::consts::TAU).abs() < 1e-12);
/// ```
pub fn half_angle(radius: f64, distance: f64) -> f64 {
    if radius <= 0.0 {
        0.0
    } else if distance <= radius {
        PI
    } else {
        (radius / distance).asin()
    }
}

/// Full angular span (twice [`half_angle`]) of a circle on a ring.
pub fn span(radius: f64, distance: f64) -> f64 {
    2.0 * half_angle(radius, distance)
}

/// Total angular span of circles with the given radii, all centered at
/// `distance` from the ring center.
pub fn total_span<I>(radii: I, distance: f64) -> f64
where
    I: IntoIterator<Item = f64>,
{
    radii.into_iter().map(|r| span(r, distance)).sum()
}

/// Whether a total angular span fits in one revolution, allowing
/// `tolerance` radians of rounding slack.
pub fn fits_revolution(total: f64, tolerance: f64) -> bool {
    total <= TAU + tolerance
}

/// Iteration cap for [`fit_distance`]. Each step halves the bracket, so
/// 64 steps exhaust `f64` precision for any realistic bracket.
const BISECTION_STEPS: u32 = 64;

/// Smallest ring distance `>= min_distance` at which circles with the
/// given radii fit in one revolution.
///
/// Returns `min_distance` when they already fit there. Otherwise the
/// result is found by bisection and always errs on the side of fitting
/// (the returned distance satisfies [`fits_revolution`] with zero
/// tolerance). Deterministic for identical input.
///
/// A NaN radius, or radii that cannot fit at any finite distance, give
/// `f64::INFINITY`.
pub fn fit_distance(radii: &[f64], min_distance: f64, tolerance: f64) -> f64 {
    let total_at = |d: f64| total_span(radii.iter().copied(), d);
    if fits_revolution(total_at(min_distance), tolerance) {
        return min_distance;
    }

    let largest = radii.iter().copied().fold(0.0_f64, f64::max);
    let mut lo = min_distance.max(largest);
    let mut hi = (lo * 2.0).max(f64::MIN_POSITIVE);
    while !fits_revolution(total_at(hi), 0.0) {
        if !hi.is_finite() {
            return f64::INFINITY;
        }
        lo = hi;
        hi *= 2.0;
    }

    for _ in 0..BISECTION_STEPS {
        let mid = lo + (hi - lo) / 2.0;
        if mid <= lo || mid >= hi {
            break;
        }
        if fits_revolution(total_at(mid), 0.0) {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    hi
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_radius_subtends_nothing() {
        assert_eq!(half_angle(0.0, 0.0), 0.0);
        assert_eq!(half_angle(0.0, 10.0), 0.0);
    }

    #[test]
    fn covering_the_center_blocks_everything() {
        assert_eq!(half_angle(5.0, 0.0), PI);
        assert_eq!(half_angle(5.0, 5.0), PI);
        assert_eq!(span(5.0, 3.0), TAU);
    }

    #[test]
    fn half_angle_is_asin_ratio() {
        let h = half_angle(1.0, 2.0);
        assert!((h - PI / 6.0).abs() < 1e-15);
    }

    #[test]
    fn total_span_sums_spans() {
        let t = total_span([1.0, 1.0, 0.0], 2.0);
        assert!((t - 2.0 * PI / 3.0).abs() < 1e-12);
    }

    #[test]
    fn fits_revolution_uses_tolerance() {
        assert!(fits_revolution(TAU, 0.0));
        assert!(!fits_revolution(TAU + 1e-6, 1e-9));
        assert!(fits_revolution(TAU + 1e-12, 1e-9));
    }

    #[test]
    fn fit_distance_keeps_minimum_when_fitting() {
        assert_eq!(fit_distance(&[1.0, 1.0], 10.0, 1e-9), 10.0);
        assert_eq!(fit_distance(&[], 3.0, 1e-9), 3.0);
    }

    #[test]
    fn fit_distance_widens_crowded_ring() {
        // Eight unit circles cannot fit at distance 2 (only six can).
        let radii = [1.0; 8];
        let d = fit_distance(&radii, 2.0, 1e-9);
        assert!(d > 2.0);
        assert!(fits_revolution(total_span(radii, d), 0.0));
        // Eight circles touching neighbours: d = 1 / sin(pi / 8).
        let exact = 1.0 / (PI / 8.0).sin();
        assert!((d - exact).abs() < 1e-9, "d = {d}, exact = {exact}");
    }

    #[test]
    fn fit_distance_gives_up_on_unfittable_radii() {
        assert_eq!(fit_distance(&[1.0, f64::NAN, 1.0], 2.0, 1e-9), f64::INFINITY);
        assert_eq!(
            fit_distance(&[f64::INFINITY, f64::INFINITY], 1.0, 1e-9),
            f64::INFINITY
        );
    }

    #[test]
    fn fit_distance_is_deterministic() {
        let radii = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        let a = fit_distance(&radii, 9.0, 1e-9);
        let b = fit_distance(&radii, 9.0, 1e-9);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    proptest! {
        #[test]
        fn half_angle_bounded(r in 0.0f64..100.0, d in 0.0f64..1000.0) {
            let h = half_angle(r, d);
            prop_assert!((0.0..=PI).contains(&h));
        }

        #[test]
        fn half_angle_shrinks_with_distance(r in 0.1f64..10.0, d in 10.5f64..100.0, extra in 0.0f64..100.0) {
            prop_assert!(half_angle(r, d + extra) <= half_angle(r, d));
        }

        #[test]
        fn fit_distance_result_fits(
            radii in proptest::collection::vec(0.0f64..50.0, 1..40),
            min in 0.0f64..200.0,
        ) {
            let d = fit_distance(&radii, min, 1e-9);
            prop_assert!(d >= min);
            prop_assert!(fits_revolution(total_span(radii.iter().copied(), d), 1e-9));
        }
    }
}
