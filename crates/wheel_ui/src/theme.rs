//! Theme configuration for Decision Wheel.
//!
//! Converts the core palette into iced colors and centralizes spacing
//! constants.

use iced::Color;

use wheel_core::palette;

/// iced color for the segment at `index`.
pub fn segment_color(index: usize) -> Color {
    let [r, g, b] = palette::color_for(index);
    Color::from_rgb8(r, g, b)
}

/// Label color drawn on top of segments.
pub const SEGMENT_TEXT: Color = Color::WHITE;

/// Pointer fill color.
pub const POINTER: Color = Color::from_rgb(0.85, 0.15, 0.25);

/// Spacing constants.
pub mod spacing {
    /// Extra small spacing (4px)
    pub const XS: f32 = 4.0;
    /// Small spacing (8px)
    pub const SM: f32 = 8.0;
    /// Medium spacing (12px)
    pub const MD: f32 = 12.0;
    /// Large spacing (16px)
    pub const LG: f32 = 16.0;
    /// Extra large spacing (24px)
    pub const XL: f32 = 24.0;
}
