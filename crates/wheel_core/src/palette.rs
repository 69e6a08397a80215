//! Fixed segment color palette.
//!
//! Colors are assigned by entry index modulo the palette length, so the
//! mapping from roster position to color is stable across redraws.

/// Segment colors as RGB triples.
pub const SEGMENT_COLORS: [[u8; 3]; 8] = [
    [0xe6, 0x19, 0x4b], // red
    [0x3c, 0xb4, 0x4b], // green
    [0xff, 0xe1, 0x19], // yellow
    [0x43, 0x63, 0xd8], // blue
    [0xf5, 0x82, 0x31], // orange
    [0x91, 0x1e, 0xb4], // purple
    [0x46, 0xf0, 0xf0], // cyan
    [0xf0, 0x32, 0xe6], // magenta
];

/// Color for the segment at `index`.
pub fn color_for(index: usize) -> [u8; 3] {
    SEGMENT_COLORS[index % SEGMENT_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_wrap_around() {
        assert_eq!(color_for(0), SEGMENT_COLORS[0]);
        assert_eq!(color_for(8), SEGMENT_COLORS[0]);
        assert_eq!(color_for(11), SEGMENT_COLORS[3]);
    }
}
