//! Winner selection and segment layout.
//!
//! Angle convention: 0 degrees is the rightmost point of the wheel and
//! angles increase clockwise (canvas coordinates, y axis pointing down).
//! Segments are laid out starting at angle 0 in the wheel's own,
//! undisturbed frame; entry `i` of an `n`-entry roster occupies the arc
//! `[i * 360/n, (i + 1) * 360/n)`.

/// Angle of the fixed pointer at the top of the wheel, in the wheel's
/// coordinate system.
pub const POINTER_ANGLE_DEG: f64 = 270.0;

/// Maximum label length before truncation, in characters.
const MAX_LABEL_CHARS: usize = 12;

/// Select the winning roster index for a given total accumulated rotation.
///
/// The wheel has rotated clockwise by `total_rotation_deg` since its zero
/// orientation, so the segment now under the pointer is the one whose
/// original angle equals `(360 - final_angle + 270) mod 360`, where
/// `final_angle` is the rotation reduced to `[0, 360)`.
///
/// Pure and deterministic: equal inputs always yield equal indices. The
/// result is always in `[0, n - 1]`. Must not be called with `n == 0`.
pub fn select_winner(total_rotation_deg: f64, n: usize) -> usize {
    debug_assert!(n >= 1, "selector is undefined for an empty roster");

    let final_angle = total_rotation_deg.rem_euclid(360.0);
    let arc_size = 360.0 / n as f64;
    let winning_angle = (360.0 - final_angle + POINTER_ANGLE_DEG).rem_euclid(360.0);

    // winning_angle is in [0, 360) so the quotient is in [0, n - 1] except
    // for float rounding at arc boundaries; clamp covers that case.
    ((winning_angle / arc_size) as usize).min(n - 1)
}

/// Arc occupied by segment `index` of `n`, as `(start, end)` degrees in
/// the wheel's own frame.
pub fn segment_arc(index: usize, n: usize) -> (f64, f64) {
    debug_assert!(index < n);
    let arc_size = 360.0 / n as f64;
    let start = index as f64 * arc_size;
    (start, start + arc_size)
}

/// Display label for a name, truncated past 12 characters with an
/// ellipsis.
pub fn segment_label(name: &str) -> String {
    if name.chars().count() > MAX_LABEL_CHARS {
        let head: String = name.chars().take(MAX_LABEL_CHARS - 1).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turn_with_four_segments_selects_first() {
        // winning angle = (360 - 270 + 270) mod 360 = 0 -> index 0
        assert_eq!(select_winner(270.0, 4), 0);
    }

    #[test]
    fn zero_rotation_with_four_segments_selects_last() {
        // winning angle = (360 - 0 + 270) mod 360 = 270, arc 90 -> index 3
        assert_eq!(select_winner(0.0, 4), 3);
    }

    #[test]
    fn full_turns_reduce_to_heading() {
        // 630 mod 360 = 270, two segments -> winning angle 0 -> index 0
        assert_eq!(select_winner(630.0, 2), 0);
    }

    #[test]
    fn selector_is_deterministic() {
        for _ in 0..10 {
            assert_eq!(select_winner(1234.5, 7), select_winner(1234.5, 7));
        }
    }

    #[test]
    fn result_always_in_range() {
        for n in 1..=12 {
            let mut angle = -720.0;
            while angle < 1440.0 {
                let idx = select_winner(angle, n);
                assert!(idx < n, "index {idx} out of range for n={n}, angle={angle}");
                angle += 0.37;
            }
        }
    }

    #[test]
    fn negative_rotation_normalizes() {
        // -90 mod 360 = 270, same heading as a 270-degree spin
        assert_eq!(select_winner(-90.0, 4), select_winner(270.0, 4));
    }

    #[test]
    fn single_segment_always_wins() {
        for angle in [0.0, 90.0, 359.9, 7200.0] {
            assert_eq!(select_winner(angle, 1), 0);
        }
    }

    #[test]
    fn segment_arcs_tile_the_wheel() {
        let n = 5;
        let mut expected_start = 0.0;
        for i in 0..n {
            let (start, end) = segment_arc(i, n);
            assert!((start - expected_start).abs() < 1e-9);
            assert!((end - start - 72.0).abs() < 1e-9);
            expected_start = end;
        }
        assert!((expected_start - 360.0).abs() < 1e-9);
    }

    #[test]
    fn labels_truncate_past_twelve_chars() {
        assert_eq!(segment_label("Alice"), "Alice");
        assert_eq!(segment_label("TwelveChars!"), "TwelveChars!");
        assert_eq!(segment_label("ThirteenChars"), "ThirteenCha...");
    }
}
