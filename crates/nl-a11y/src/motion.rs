//! Reduced Motion
//!
//! Animation and transition choices under the motion preference.

use std::time::Duration;

use crate::preferences::MotionPreference;

/// Animation applied to a state change
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Animation {
    None,
    Spring { duration: Duration },
    Linear { duration: Duration, repeat_forever: bool },
}

impl Animation {
    pub fn duration(&self) -> Duration {
        match self {
            Self::None => Duration::ZERO,
            Self::Spring { duration } | Self::Linear { duration, .. } => *duration,
        }
    }

    pub fn is_animated(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Transition for inserted or removed content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Slide,
    Opacity,
}

/// Busy indicator style
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadingIndicator {
    /// Static progress spinner provided by the platform
    Progress,
    /// Decorative icon rotating continuously
    SpinningIcon(Animation),
}

pub fn state_change_animation(pref: MotionPreference) -> Animation {
    match pref {
        MotionPreference::NoPreference => Animation::Spring { duration: Duration::from_millis(600) },
        MotionPreference::Reduce => Animation::None,
    }
}

pub fn insertion_transition(pref: MotionPreference) -> Transition {
    match pref {
        MotionPreference::NoPreference => Transition::Slide,
        MotionPreference::Reduce => Transition::Opacity,
    }
}

pub fn loading_indicator(pref: MotionPreference) -> LoadingIndicator {
    match pref {
        MotionPreference::NoPreference => LoadingIndicator::SpinningIcon(Animation::Linear {
            duration: Duration::from_secs(1),
            repeat_forever: true,
        }),
        MotionPreference::Reduce => LoadingIndicator::Progress,
    }
}
