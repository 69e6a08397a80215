//! Spin planning and animation easing.

use std::time::Duration;

use rand::Rng;

use crate::config::SpinSettings;

// Control points of the animation timing curve, cubic-bezier(0.2, 0.8, 0.2, 1).
// Starts fast and decelerates into the final heading without overshoot.
const EASE_X1: f64 = 0.2;
const EASE_Y1: f64 = 0.8;
const EASE_X2: f64 = 0.2;
const EASE_Y2: f64 = 1.0;

/// A planned spin: where the wheel will stop and how long it takes to
/// get there.
///
/// The target rotation is the running total plus the random magnitude,
/// so successive spins accumulate rather than reset. The random element
/// lives entirely here; the selector itself is deterministic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    /// Total accumulated rotation, in degrees, once the spin completes.
    pub target_rotation_deg: f64,
    /// Duration of the visual animation.
    pub duration: Duration,
}

impl SpinPlan {
    /// Plan a spin from the current accumulated rotation using the
    /// thread-local RNG.
    pub fn random(current_rotation_deg: f64, settings: &SpinSettings) -> Self {
        Self::random_from(current_rotation_deg, settings, &mut rand::thread_rng())
    }

    /// Plan a spin with an explicit RNG (for reproducible tests).
    ///
    /// The magnitude is at least `min_full_turns` complete revolutions
    /// plus a random sub-360-degree offset.
    pub fn random_from<R: Rng>(
        current_rotation_deg: f64,
        settings: &SpinSettings,
        rng: &mut R,
    ) -> Self {
        let magnitude = rng.gen_range(0.0..360.0) + 360.0 * f64::from(settings.min_full_turns);
        Self {
            target_rotation_deg: current_rotation_deg + magnitude,
            duration: Duration::from_millis(settings.duration_ms),
        }
    }
}

/// Evaluate the spin timing curve at time fraction `t` in `[0, 1]`.
///
/// Returns the eased progress fraction, also in `[0, 1]`. Input outside
/// the unit interval is clamped.
pub fn ease(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);

    // Invert x(s) = t by bisection; x is monotone because both control
    // x-coordinates lie inside the unit interval.
    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    for _ in 0..48 {
        let mid = (lo + hi) / 2.0;
        if bezier_component(EASE_X1, EASE_X2, mid) < t {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    bezier_component(EASE_Y1, EASE_Y2, (lo + hi) / 2.0)
}

/// One coordinate of a cubic bezier anchored at 0 and 1.
fn bezier_component(c1: f64, c2: f64, s: f64) -> f64 {
    let u = 1.0 - s;
    3.0 * u * u * s * c1 + 3.0 * u * s * s * c2 + s * s * s
}

/// Visual rotation at animation progress `progress` for a spin from
/// `from_deg` towards `plan.target_rotation_deg`.
pub fn rotation_at(from_deg: f64, plan: &SpinPlan, progress: f64) -> f64 {
    from_deg + (plan.target_rotation_deg - from_deg) * ease(progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn settings() -> SpinSettings {
        SpinSettings::default()
    }

    #[test]
    fn magnitude_is_at_least_seven_full_turns() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let plan = SpinPlan::random_from(0.0, &settings(), &mut rng);
            assert!(plan.target_rotation_deg >= 7.0 * 360.0);
            assert!(plan.target_rotation_deg < 8.0 * 360.0);
        }
    }

    #[test]
    fn successive_spins_accumulate() {
        let mut rng = StdRng::seed_from_u64(42);
        let first = SpinPlan::random_from(0.0, &settings(), &mut rng);
        let second = SpinPlan::random_from(first.target_rotation_deg, &settings(), &mut rng);
        assert!(second.target_rotation_deg > first.target_rotation_deg);
    }

    #[test]
    fn duration_comes_from_settings() {
        let mut cfg = settings();
        cfg.duration_ms = 1500;
        let mut rng = StdRng::seed_from_u64(1);
        let plan = SpinPlan::random_from(0.0, &cfg, &mut rng);
        assert_eq!(plan.duration, Duration::from_millis(1500));
    }

    #[test]
    fn ease_hits_endpoints() {
        assert!(ease(0.0).abs() < 1e-6);
        assert!((ease(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn ease_is_monotone() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let y = ease(f64::from(i) / 100.0);
            assert!(y >= prev - 1e-9);
            prev = y;
        }
    }

    #[test]
    fn ease_clamps_out_of_range_input() {
        assert_eq!(ease(-0.5), ease(0.0));
        assert_eq!(ease(1.5), ease(1.0));
    }

    #[test]
    fn rotation_at_interpolates_between_endpoints() {
        let plan = SpinPlan {
            target_rotation_deg: 2880.0,
            duration: Duration::from_millis(6000),
        };
        assert!((rotation_at(360.0, &plan, 0.0) - 360.0).abs() < 1e-6);
        assert!((rotation_at(360.0, &plan, 1.0) - 2880.0).abs() < 1e-6);
        let mid = rotation_at(360.0, &plan, 0.5);
        assert!(mid > 360.0 && mid < 2880.0);
    }
}
