//! Nutrition Labels Accessibility
//!
//! Display preferences and the policies surfaces apply under them.
//!
//! Features:
//! - Dynamic type sizes, color scheme, contrast and motion preferences
//! - WCAG contrast checking and contrast-aware styling
//! - Reduced motion animation and transition choices
//! - Status indicators that do not rely on color alone
//! - Light and dark surface palettes

pub mod preferences;
pub mod contrast;
pub mod motion;
pub mod status;
pub mod appearance;

pub use preferences::{
    ColorScheme, ContrastPreference, DisplayPreferences, DynamicTypeSize, MotionPreference,
};
pub use contrast::{contrast_ratio, meets_aa, meets_aaa, Rgb, WcagLevel};
pub use motion::{Animation, LoadingIndicator, Transition};
pub use status::{Status, StatusIndicator};
pub use appearance::Palette;

/// Accessibility error
#[derive(Debug, thiserror::Error)]
pub enum A11yError {
    #[error("Unknown dynamic type size: {0}")]
    UnknownTypeSize(String),
}
