//! Configuration management for Decision Wheel.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Section-level updates (only changed section is modified)
//! - Validation on load with automatic defaults
//!
//! # Example
//!
//! ```no_run
//! use wheel_core::config::{ConfigManager, ConfigSection};
//! use wheel_core::models::Theme;
//!
//! // Create manager and load (or create default) config
//! let mut config = ConfigManager::new(".config/settings.toml");
//! config.load_or_create().unwrap();
//!
//! // Toggle the theme and persist just the [ui] section atomically
//! config.settings_mut().ui.theme = Theme::Light;
//! config.update_section(ConfigSection::Ui).unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{ConfigSection, Settings, SpinSettings, UiSettings};
