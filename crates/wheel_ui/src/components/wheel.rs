//! Wheel canvas rendering.
//!
//! Draws the colored segments in the wheel's own frame, rotates the
//! whole disc by the current display rotation, and overlays the fixed
//! pointer at the top. Selection geometry (segment arcs, the 270-degree
//! pointer position) lives in `wheel_core`; this module only renders it.

use iced::alignment;
use iced::mouse;
use iced::widget::canvas::path::Arc;
use iced::widget::canvas::{self, Path, Stroke};
use iced::widget::text;
use iced::{Point, Radians, Rectangle, Renderer, Theme, Vector};

use wheel_core::wheel::{segment_arc, segment_label};

use crate::theme::{segment_color, POINTER, SEGMENT_TEXT};

/// Labels sit at this fraction of the radius from the center.
const LABEL_RADIUS_FRAC: f32 = 0.71;

/// Canvas program for the wheel.
pub struct WheelView<'a> {
    pub names: &'a [String],
    pub rotation_deg: f64,
}

impl<Message> canvas::Program<Message> for WheelView<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = center.x.min(center.y) - 10.0;

        if self.names.is_empty() {
            draw_placeholder(&mut frame, theme, center, radius);
            return vec![frame.into_geometry()];
        }

        let n = self.names.len();

        frame.with_save(|frame| {
            frame.translate(Vector::new(center.x, center.y));
            frame.rotate(Radians(self.rotation_deg.to_radians() as f32));

            for (index, name) in self.names.iter().enumerate() {
                let (start_deg, end_deg) = segment_arc(index, n);
                let start = start_deg.to_radians() as f32;
                let end = end_deg.to_radians() as f32;

                let slice = Path::new(|builder| {
                    builder.move_to(Point::ORIGIN);
                    builder.arc(Arc {
                        center: Point::ORIGIN,
                        radius,
                        start_angle: Radians(start),
                        end_angle: Radians(end),
                    });
                    builder.close();
                });
                frame.fill(&slice, segment_color(index));

                // Label along the segment bisector, rotated to read
                // outward from the center.
                let mid = (start + end) / 2.0;
                frame.with_save(|frame| {
                    frame.translate(Vector::new(
                        mid.cos() * radius * LABEL_RADIUS_FRAC,
                        mid.sin() * radius * LABEL_RADIUS_FRAC,
                    ));
                    frame.rotate(Radians(mid + std::f32::consts::FRAC_PI_2));
                    frame.fill_text(canvas::Text {
                        content: segment_label(name),
                        position: Point::ORIGIN,
                        color: SEGMENT_TEXT,
                        size: 16.0.into(),
                        align_x: text::Alignment::Center,
                        align_y: alignment::Vertical::Center,
                        ..canvas::Text::default()
                    });
                });
            }
        });

        // Fixed pointer at the top of the wheel.
        let pointer = Path::new(|builder| {
            builder.move_to(Point::new(center.x - 14.0, 2.0));
            builder.line_to(Point::new(center.x + 14.0, 2.0));
            builder.line_to(Point::new(center.x, 36.0));
            builder.close();
        });
        frame.fill(&pointer, POINTER);

        vec![frame.into_geometry()]
    }
}

/// Empty-roster disc with a hint message.
fn draw_placeholder(frame: &mut canvas::Frame, theme: &Theme, center: Point, radius: f32) {
    let palette = theme.extended_palette();

    let disc = Path::circle(center, radius);
    frame.fill(&disc, palette.background.weak.color);
    frame.stroke(
        &disc,
        Stroke::default()
            .with_width(8.0)
            .with_color(palette.background.strong.color),
    );

    frame.fill_text(canvas::Text {
        content: "Add names to spin".to_string(),
        position: center,
        color: palette.background.base.text,
        size: 24.0.into(),
        align_x: text::Alignment::Center,
        align_y: alignment::Vertical::Center,
        ..canvas::Text::default()
    });
}
