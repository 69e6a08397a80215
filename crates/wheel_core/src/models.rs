//! Data models shared between the core crate and the UI.

use serde::{Deserialize, Serialize};

/// Color theme preference.
///
/// Stored in the config file and read once at startup; every toggle
/// writes it back so the choice survives restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark theme (application default).
    #[default]
    Dark,
    /// Light theme.
    Light,
}

impl Theme {
    /// Build a theme from the light-theme toggle state.
    pub fn from_light_flag(is_light: bool) -> Self {
        if is_light {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    /// Whether this is the light theme.
    pub fn is_light(&self) -> bool {
        matches!(self, Theme::Light)
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn round_trips_through_toggle_flag() {
        assert_eq!(Theme::from_light_flag(true), Theme::Light);
        assert_eq!(Theme::from_light_flag(false), Theme::Dark);
        assert!(Theme::Light.is_light());
        assert!(!Theme::Dark.is_light());
    }
}
