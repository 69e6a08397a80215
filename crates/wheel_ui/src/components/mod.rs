//! Reusable canvas components.

pub mod confetti;
pub mod wheel;
