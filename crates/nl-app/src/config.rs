//! Surface configuration

use nl_a11y::DisplayPreferences;
use serde::{Deserialize, Serialize};

use crate::AppError;

/// Rendering configuration shared by the listing and detail surfaces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Width available to content (points)
    pub container_width: f32,

    /// Gap between platform badges
    pub badge_spacing: f32,

    /// Average glyph advance at the default text size
    pub glyph_width: f32,

    /// Line height at the default text size
    pub line_height: f32,

    /// User display settings
    pub preferences: DisplayPreferences,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            container_width: 358.0, // 390pt screen minus 16pt margins
            badge_spacing: nl_layout::DEFAULT_SPACING,
            glyph_width: 7.0,
            line_height: 16.0,
            preferences: DisplayPreferences::default(),
        }
    }
}

impl Config {
    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_preferences(mut self, preferences: DisplayPreferences) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn with_container_width(mut self, width: f32) -> Self {
        self.container_width = width;
        self
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let checks = [
            ("container_width", self.container_width),
            ("badge_spacing", self.badge_spacing),
            ("glyph_width", self.glyph_width),
            ("line_height", self.line_height),
        ];
        for (field, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::InvalidConfig { field, value });
            }
        }
        Ok(())
    }
}
