//! Feature categories

use std::fmt;

use serde::Serialize;

use crate::feature::Tint;

/// Grouping bucket for catalog features. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    #[serde(rename = "Vision")]
    Vision,
    #[serde(rename = "Motor")]
    Motor,
    #[serde(rename = "Cognitive")]
    Cognitive,
    #[serde(rename = "Audio & Captions")]
    AudioAndCaptions,
}

impl Category {
    /// Every category in display order
    pub const ALL: [Category; 4] = [
        Self::Vision,
        Self::Motor,
        Self::Cognitive,
        Self::AudioAndCaptions,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Vision => "Vision",
            Self::Motor => "Motor",
            Self::Cognitive => "Cognitive",
            Self::AudioAndCaptions => "Audio & Captions",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Vision => "eye.fill",
            Self::Motor => "hand.raised.fill",
            Self::Cognitive => "brain.head.profile",
            Self::AudioAndCaptions => "ear.fill",
        }
    }

    pub fn tint(&self) -> Tint {
        match self {
            Self::Vision => Tint::Blue,
            Self::Motor => Tint::Green,
            Self::Cognitive => Tint::Purple,
            Self::AudioAndCaptions => Tint::Orange,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
