//! Main application state and update/view logic.
//!
//! Follows the Elm architecture: every user action and timer tick is a
//! [`Message`], `update` mutates the [`App`] state, `view` rebuilds the
//! widget tree from it.

use std::path::PathBuf;
use std::time::Duration;

use iced::time::Instant;
use iced::widget::canvas::Canvas;
use iced::widget::{
    button, center, column, container, mouse_area, opaque, row, scrollable, text, text_input,
    toggler, Space, Stack,
};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};

use wheel_core::config::{ConfigManager, ConfigSection};
use wheel_core::models::Theme as ThemePreference;
use wheel_core::roster::NameRoster;
use wheel_core::wheel::{rotation_at, SpinPlan, WheelState};

use crate::components::confetti::{Confetti, ConfettiLayer};
use crate::components::wheel::WheelView;
use crate::theme::spacing;

/// Animation frame interval (~60 fps).
const TICK: Duration = Duration::from_millis(16);

/// Particles spawned when a winner is announced.
const CONFETTI_COUNT: usize = 150;

/// Default config path: .config/settings.toml (relative to current working directory)
fn default_config_path() -> PathBuf {
    PathBuf::from(".config").join("settings.toml")
}

/// All possible messages the application can receive.
#[derive(Debug, Clone)]
pub enum Message {
    NameInputChanged(String),
    AddName,
    RemoveName(usize),
    SpinPressed,
    Tick(Instant),
    CloseWinner,
    ThemeToggled(bool),
}

/// A spin currently animating.
///
/// The generation counter lets `update` discard ticks that belong to a
/// superseded spin, so two pending winner computations can never race.
#[derive(Debug, Clone, Copy)]
struct ActiveSpin {
    plan: SpinPlan,
    from_deg: f64,
    started: Instant,
    generation: u64,
}

/// Application state.
pub struct App {
    config: ConfigManager,
    roster: NameRoster,
    wheel: WheelState,
    /// Rotation currently shown by the canvas; tracks the easing curve
    /// during a spin and the committed rotation otherwise.
    display_rotation_deg: f64,
    name_input: String,
    spin: Option<ActiveSpin>,
    spin_generation: u64,
    winner: Option<String>,
    confetti: Confetti,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let config_path = default_config_path();
        let mut config = ConfigManager::new(&config_path);
        if let Err(e) = config.load_or_create() {
            tracing::warn!("Failed to load config: {}. Using defaults.", e);
        }
        tracing::info!("Config: {}", config.path().display());

        let app = Self {
            config,
            roster: NameRoster::new(),
            wheel: WheelState::new(),
            display_rotation_deg: 0.0,
            name_input: String::new(),
            spin: None,
            spin_generation: 0,
            winner: None,
            confetti: Confetti::new(),
        };
        (app, Task::none())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NameInputChanged(value) => {
                self.name_input = value;
            }
            Message::AddName => {
                // Invalid adds (empty after trim, duplicate) are silently
                // ignored; the input keeps its text.
                let raw = self.name_input.clone();
                if self.roster.add(&raw) {
                    self.name_input.clear();
                    tracing::debug!("Name added, roster size {}", self.roster.len());
                }
            }
            Message::RemoveName(index) => {
                if let Some(name) = self.roster.remove_at(index) {
                    tracing::debug!("Removed '{}', roster size {}", name, self.roster.len());
                }
            }
            Message::SpinPressed => return self.start_spin(),
            Message::Tick(now) => self.tick(now),
            Message::CloseWinner => {
                self.winner = None;
            }
            Message::ThemeToggled(is_light) => {
                let theme = ThemePreference::from_light_flag(is_light);
                self.config.settings_mut().ui.theme = theme;
                if let Err(e) = self.config.update_section(ConfigSection::Ui) {
                    tracing::warn!("Failed to save theme preference: {}", e);
                }
                tracing::info!("Theme switched to {}", theme);
            }
        }
        Task::none()
    }

    /// Start a spin if one is not already in flight.
    ///
    /// The button is disabled while spinning; this guard covers queued
    /// messages as well.
    fn start_spin(&mut self) -> Task<Message> {
        if self.spin.is_some() || !self.roster.can_spin() {
            return Task::none();
        }

        let plan = SpinPlan::random(self.wheel.rotation_deg(), &self.config.settings().spin);
        self.spin_generation += 1;
        self.winner = None;

        tracing::info!(
            "Spin {} started: target {:.1} deg over {:?}",
            self.spin_generation,
            plan.target_rotation_deg,
            plan.duration
        );

        self.spin = Some(ActiveSpin {
            plan,
            from_deg: self.wheel.rotation_deg(),
            started: Instant::now(),
            generation: self.spin_generation,
        });
        Task::none()
    }

    fn tick(&mut self, now: Instant) {
        self.confetti.step(TICK.as_secs_f32());

        let Some(active) = self.spin else {
            return;
        };

        // Stale spin from a superseded generation: drop it without
        // computing a winner.
        if active.generation != self.spin_generation {
            self.spin = None;
            return;
        }

        let elapsed = now.saturating_duration_since(active.started);
        if elapsed < active.plan.duration {
            let progress = elapsed.as_secs_f64() / active.plan.duration.as_secs_f64();
            self.display_rotation_deg = rotation_at(active.from_deg, &active.plan, progress);
            return;
        }

        // Animation finished: commit the rotation and announce the winner.
        self.wheel.commit(&active.plan);
        self.display_rotation_deg = self.wheel.rotation_deg();
        self.spin = None;

        if self.roster.is_empty() {
            // Roster was emptied mid-spin; nothing to announce.
            return;
        }

        let index = self.wheel.winning_index(self.roster.len());
        if let Some(name) = self.roster.get(index) {
            tracing::info!("Winner: '{}' (segment {})", name, index);
            self.winner = Some(name.to_string());
            self.confetti.burst(CONFETTI_COUNT);
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        // Only tick while something is animating.
        if self.spin.is_some() || !self.confetti.is_idle() {
            iced::time::every(TICK).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    pub fn theme(&self) -> Theme {
        match self.config.settings().ui.theme {
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::Light => Theme::Light,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let wheel_canvas = Canvas::new(WheelView {
            names: self.roster.names(),
            rotation_deg: self.display_rotation_deg,
        })
        .width(Length::Fixed(460.0))
        .height(Length::Fixed(460.0));

        let spin_enabled = self.roster.can_spin() && self.spin.is_none();
        let spin_button = button(text("SPIN").size(18))
            .on_press_maybe(spin_enabled.then_some(Message::SpinPressed))
            .padding([10.0, 40.0])
            .style(button::primary);

        let wheel_panel = column![wheel_canvas, spin_button]
            .spacing(spacing::LG)
            .align_x(Alignment::Center);

        let base = row![
            container(wheel_panel)
                .width(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
            self.side_panel(),
        ]
        .spacing(spacing::XL)
        .padding(spacing::XL);

        let mut layers = Stack::new().push(base);

        if let Some(winner) = &self.winner {
            layers = layers.push(self.winner_popup(winner));
        }

        if !self.confetti.is_idle() {
            layers = layers.push(
                Canvas::new(ConfettiLayer::new(&self.confetti))
                    .width(Length::Fill)
                    .height(Length::Fill),
            );
        }

        layers.into()
    }

    fn side_panel(&self) -> Element<'_, Message> {
        let input_row = row![
            text_input("Enter a name", &self.name_input)
                .on_input(Message::NameInputChanged)
                .on_submit(Message::AddName)
                .width(Length::Fill),
            button(text("Add")).on_press(Message::AddName),
        ]
        .spacing(spacing::SM);

        let name_rows = self.roster.names().iter().enumerate().fold(
            column![].spacing(spacing::XS),
            |col, (index, name)| {
                col.push(
                    container(
                        row![
                            text(name).width(Length::Fill),
                            button(text("✕").size(12))
                                .on_press(Message::RemoveName(index))
                                .style(button::danger),
                        ]
                        .spacing(spacing::SM)
                        .align_y(Alignment::Center),
                    )
                    .padding(spacing::SM)
                    .style(container::rounded_box),
                )
            },
        );

        let theme_row = row![
            text("Light theme"),
            Space::new().width(Length::Fill),
            toggler(self.config.settings().ui.theme.is_light()).on_toggle(Message::ThemeToggled),
        ]
        .align_y(Alignment::Center);

        column![
            text("Names").size(20),
            input_row,
            scrollable(name_rows).height(Length::Fill),
            theme_row,
        ]
        .spacing(spacing::MD)
        .width(Length::Fixed(320.0))
        .into()
    }

    fn winner_popup<'a>(&'a self, winner: &'a str) -> Element<'a, Message> {
        let card = container(
            column![
                text("We Have a Winner!").size(24),
                text(format!("{winner} Will Pay (Sorry {winner})")).size(18),
                button(text("Close")).on_press(Message::CloseWinner),
            ]
            .spacing(spacing::LG)
            .align_x(Alignment::Center),
        )
        .padding(spacing::XL)
        .style(container::rounded_box);

        // Click outside the card also dismisses the popup.
        opaque(mouse_area(center(opaque(card))).on_press(Message::CloseWinner))
    }
}
