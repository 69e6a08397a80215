//! Wheel geometry, winner selection, and spin animation math.
//!
//! This module provides:
//! - The winner selector: a pure mapping from accumulated rotation to a
//!   roster index
//! - Segment arc layout and label truncation for rendering
//! - Spin planning (random magnitude, duration) and the easing curve
//!   driving the animation
//! - [`WheelState`], the single owner of the accumulated rotation
//!
//! # Example
//!
//! ```
//! use wheel_core::wheel::select_winner;
//!
//! // Four segments, wheel rotated a quarter turn clockwise.
//! assert_eq!(select_winner(270.0, 4), 0);
//! ```

mod selector;
mod spin;
mod state;

pub use selector::{segment_arc, segment_label, select_winner, POINTER_ANGLE_DEG};
pub use spin::{ease, rotation_at, SpinPlan};
pub use state::WheelState;
