//! Confetti particle overlay shown when a winner is announced.
//!
//! Purely a visual sink: the burst is spawned by the app on winner
//! display, stepped by the animation tick, and despawns once every
//! particle has expired.

use iced::mouse;
use iced::widget::canvas::{self, Path};
use iced::{Color, Point, Radians, Rectangle, Renderer, Size, Theme, Vector};
use rand::Rng;

use crate::theme::segment_color;

/// Downward acceleration in px/s^2.
const GRAVITY: f32 = 600.0;

/// Particle lifetime in seconds.
const LIFETIME: f32 = 2.5;

/// Half-angle of the launch fan around straight up, in radians (~80
/// degree total spread).
const SPREAD: f32 = 0.7;

/// Burst origin as fractions of the canvas size.
const ORIGIN_X_FRAC: f32 = 0.5;
const ORIGIN_Y_FRAC: f32 = 0.6;

#[derive(Debug, Clone, Copy)]
struct Particle {
    /// Offset from the burst origin, in px.
    offset: Vector,
    velocity: Vector,
    color: Color,
    rotation: f32,
    angular_velocity: f32,
    age: f32,
}

/// Particle field state, owned by the app and stepped on every tick.
#[derive(Debug, Default)]
pub struct Confetti {
    particles: Vec<Particle>,
}

impl Confetti {
    pub fn new() -> Self {
        Self::default()
    }

    /// No particles left to animate or draw.
    pub fn is_idle(&self) -> bool {
        self.particles.is_empty()
    }

    /// Spawn a celebratory burst of `count` particles fanned upward.
    pub fn burst(&mut self, count: usize) {
        let mut rng = rand::thread_rng();
        self.particles.reserve(count);

        for _ in 0..count {
            let angle = -std::f32::consts::FRAC_PI_2 + rng.gen_range(-SPREAD..SPREAD);
            let speed = rng.gen_range(250.0..700.0_f32);
            self.particles.push(Particle {
                offset: Vector::new(0.0, 0.0),
                velocity: Vector::new(angle.cos() * speed, angle.sin() * speed),
                color: segment_color(rng.gen_range(0..8)),
                rotation: rng.gen_range(0.0..std::f32::consts::TAU),
                angular_velocity: rng.gen_range(-6.0..6.0),
                age: 0.0,
            });
        }
    }

    /// Advance the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        for p in &mut self.particles {
            p.velocity.y += GRAVITY * dt;
            p.offset = p.offset + p.velocity * dt;
            p.rotation += p.angular_velocity * dt;
            p.age += dt;
        }
        self.particles.retain(|p| p.age < LIFETIME);
    }
}

/// Canvas program drawing the particle field over the whole window.
pub struct ConfettiLayer<'a> {
    confetti: &'a Confetti,
}

impl<'a> ConfettiLayer<'a> {
    pub fn new(confetti: &'a Confetti) -> Self {
        Self { confetti }
    }
}

impl<Message> canvas::Program<Message> for ConfettiLayer<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let origin = Vector::new(
            bounds.width * ORIGIN_X_FRAC,
            bounds.height * ORIGIN_Y_FRAC,
        );

        for p in &self.confetti.particles {
            let alpha = (1.0 - p.age / LIFETIME).clamp(0.0, 1.0);
            frame.with_save(|frame| {
                frame.translate(origin + p.offset);
                frame.rotate(Radians(p.rotation));
                let flake = Path::rectangle(Point::new(-4.0, -2.0), Size::new(8.0, 4.0));
                frame.fill(&flake, Color { a: alpha, ..p.color });
            });
        }

        vec![frame.into_geometry()]
    }
}
