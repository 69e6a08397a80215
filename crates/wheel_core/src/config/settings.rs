//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level
//! updates.

use serde::{Deserialize, Serialize};

use crate::models::Theme;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// UI preferences.
    #[serde(default)]
    pub ui: UiSettings,

    /// Spin behavior tuning.
    #[serde(default)]
    pub spin: SpinSettings,
}

/// UI preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiSettings {
    /// Color theme, read once at startup and written on every toggle.
    #[serde(default)]
    pub theme: Theme,
}

/// Spin behavior tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinSettings {
    /// Duration of the spin animation in milliseconds.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,

    /// Minimum number of complete revolutions per spin. The actual
    /// magnitude adds a random sub-360-degree offset on top.
    #[serde(default = "default_min_full_turns")]
    pub min_full_turns: u32,
}

fn default_duration_ms() -> u64 {
    6000
}

fn default_min_full_turns() -> u32 {
    7
}

impl Default for SpinSettings {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            min_full_turns: default_min_full_turns(),
        }
    }
}

/// Names of config sections for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigSection {
    Ui,
    Spin,
}

impl ConfigSection {
    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Ui => "ui",
            ConfigSection::Spin => "spin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_serializes() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        assert!(toml.contains("[ui]"));
        assert!(toml.contains("[spin]"));
        assert!(toml.contains("theme"));
    }

    #[test]
    fn settings_round_trip() {
        let mut settings = Settings::default();
        settings.ui.theme = Theme::Light;
        let toml = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.ui.theme, Theme::Light);
        assert_eq!(parsed.spin.duration_ms, settings.spin.duration_ms);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let minimal = "[ui]\ntheme = \"light\"";
        let parsed: Settings = toml::from_str(minimal).unwrap();
        // Custom value preserved
        assert_eq!(parsed.ui.theme, Theme::Light);
        // Defaults applied for missing
        assert_eq!(parsed.spin.duration_ms, 6000);
        assert_eq!(parsed.spin.min_full_turns, 7);
    }
}
