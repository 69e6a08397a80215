//! Decision Wheel - Main entry point
//!
//! Initializes application-level logging, then hands control to the
//! iced event loop. Configuration is loaded by the App itself during
//! boot.

use iced::Size;

use wheel_core::logging::{init_tracing, LogLevel};

mod app;
mod components;
mod theme;

use app::App;

fn main() -> iced::Result {
    init_tracing(LogLevel::Info);

    tracing::info!("Decision Wheel starting");
    tracing::info!("Core version: {}", wheel_core::version());

    iced::application(App::new, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .title("Decision Wheel")
        .window_size(Size::new(980.0, 660.0))
        .antialiasing(true)
        .run()
}
