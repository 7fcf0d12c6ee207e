//! Status Indicators
//!
//! Status that stays distinguishable when color cannot be relied on.

use crate::contrast::Rgb;

/// Status conveyed by an indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Warning,
    Error,
    Info,
}

impl Status {
    pub const ALL: [Status; 4] = [Self::Success, Self::Warning, Self::Error, Self::Info];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Info => "Info",
        }
    }

    pub fn tint(&self) -> Rgb {
        match self {
            Self::Success => Rgb::new(52, 199, 89),
            Self::Warning => Rgb::new(255, 149, 0),
            Self::Error => Rgb::new(255, 59, 48),
            Self::Info => Rgb::new(0, 122, 255),
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Success => "checkmark",
            Self::Warning => "exclamationmark",
            Self::Error => "xmark",
            Self::Info => "info",
        }
    }

    fn caption(&self) -> &'static str {
        match self {
            Self::Success => "Completed",
            Self::Warning => "Needs attention",
            Self::Error => "Failed",
            Self::Info => "For your information",
        }
    }
}

/// Resolved indicator for a status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusIndicator {
    pub status: Status,
    pub tint: Rgb,
    pub label: &'static str,
    pub icon: Option<&'static str>,
    pub caption: Option<&'static str>,
}

impl StatusIndicator {
    /// Icon and caption are added when differentiate-without-color is on.
    pub fn resolve(status: Status, differentiate_without_color: bool) -> Self {
        Self {
            status,
            tint: status.tint(),
            label: status.label(),
            icon: differentiate_without_color.then(|| status.symbol()),
            caption: differentiate_without_color.then(|| status.caption()),
        }
    }

    /// Whether the indicator can be told apart from others without seeing color
    pub fn distinguishable_without_color(&self) -> bool {
        self.icon.is_some()
    }
}
