//! Accumulated wheel rotation state.

use super::selector::select_winner;
use super::spin::SpinPlan;

/// Owner of the wheel's total accumulated rotation.
///
/// The rotation is process-wide state that only ever grows: each spin
/// adds its magnitude to the running total, which is what keeps the
/// visual rotation continuous between spins. Kept as an explicit value
/// object rather than ambient state so rendering and selection receive
/// it by reference.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WheelState {
    rotation_deg: f64,
}

impl WheelState {
    /// Create a wheel at its zero orientation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total accumulated rotation in degrees.
    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    /// Commit a finished spin, making its target the new accumulated
    /// rotation.
    pub fn commit(&mut self, plan: &SpinPlan) {
        debug_assert!(
            plan.target_rotation_deg >= self.rotation_deg,
            "rotation is monotonically non-decreasing"
        );
        self.rotation_deg = plan.target_rotation_deg;
    }

    /// Index of the segment currently under the pointer for an
    /// `n`-entry roster.
    pub fn winning_index(&self, n: usize) -> usize {
        select_winner(self.rotation_deg, n)
    }
}
