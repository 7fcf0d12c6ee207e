//! Display Preferences
//!
//! User display settings passed explicitly into rendering code.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::A11yError;

/// Dynamic type size, ordered from smallest to largest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DynamicTypeSize {
    XSmall,
    Small,
    Medium,
    #[default]
    Large,
    XLarge,
    XxLarge,
    XxxLarge,
    #[serde(rename = "accessibility-1")]
    Accessibility1,
    #[serde(rename = "accessibility-2")]
    Accessibility2,
    #[serde(rename = "accessibility-3")]
    Accessibility3,
    #[serde(rename = "accessibility-4")]
    Accessibility4,
    #[serde(rename = "accessibility-5")]
    Accessibility5,
}

impl DynamicTypeSize {
    pub const ALL: [DynamicTypeSize; 12] = [
        Self::XSmall, Self::Small, Self::Medium, Self::Large, Self::XLarge, Self::XxLarge,
        Self::XxxLarge, Self::Accessibility1, Self::Accessibility2, Self::Accessibility3,
        Self::Accessibility4, Self::Accessibility5,
    ];

    /// Sizes at or above `Accessibility1` call for simplified layouts.
    pub fn is_accessibility_size(&self) -> bool {
        *self >= Self::Accessibility1
    }

    /// Body text scale relative to `Large`
    pub fn scale_factor(&self) -> f32 {
        match self {
            Self::XSmall => 0.82, Self::Small => 0.88, Self::Medium => 0.94,
            Self::Large => 1.0, Self::XLarge => 1.12, Self::XxLarge => 1.24,
            Self::XxxLarge => 1.35, Self::Accessibility1 => 1.65, Self::Accessibility2 => 2.0,
            Self::Accessibility3 => 2.41, Self::Accessibility4 => 2.88, Self::Accessibility5 => 3.12,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::XSmall => "x-small", Self::Small => "small", Self::Medium => "medium",
            Self::Large => "large", Self::XLarge => "x-large", Self::XxLarge => "xx-large",
            Self::XxxLarge => "xxx-large", Self::Accessibility1 => "accessibility-1",
            Self::Accessibility2 => "accessibility-2", Self::Accessibility3 => "accessibility-3",
            Self::Accessibility4 => "accessibility-4", Self::Accessibility5 => "accessibility-5",
        }
    }
}

impl fmt::Display for DynamicTypeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DynamicTypeSize {
    type Err = A11yError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|size| size.name() == wanted)
            .ok_or_else(|| A11yError::UnknownTypeSize(s.to_string()))
    }
}

/// Color scheme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// Contrast preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContrastPreference {
    #[default]
    Standard,
    Increased,
}

/// Motion preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotionPreference {
    #[default]
    NoPreference,
    Reduce,
}

/// Everything a surface needs to adapt to the user's settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayPreferences {
    pub type_size: DynamicTypeSize,
    pub color_scheme: ColorScheme,
    pub contrast: ContrastPreference,
    pub motion: MotionPreference,
    pub differentiate_without_color: bool,
}

impl DisplayPreferences {
    pub fn is_accessibility_size(&self) -> bool {
        self.type_size.is_accessibility_size()
    }

    pub fn reduce_motion(&self) -> bool {
        self.motion == MotionPreference::Reduce
    }

    pub fn increased_contrast(&self) -> bool {
        self.contrast == ContrastPreference::Increased
    }

    pub fn is_dark(&self) -> bool {
        self.color_scheme == ColorScheme::Dark
    }
}
