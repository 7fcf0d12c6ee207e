//! Appearance
//!
//! Semantic surface colors for light and dark schemes.

use crate::contrast::Rgb;
use crate::preferences::ColorScheme;

/// Semantic palette for one color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub grouped_background: Rgb,
    pub card_background: Rgb,
    pub primary_text: Rgb,
    pub secondary_text: Rgb,
}

impl Palette {
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self {
                grouped_background: Rgb::new(242, 242, 247),
                card_background: Rgb::WHITE,
                primary_text: Rgb::BLACK,
                secondary_text: Rgb::new(60, 60, 67),
            },
            // Cards use the raised gray so they stay visible on the black background.
            ColorScheme::Dark => Self {
                grouped_background: Rgb::BLACK,
                card_background: Rgb::new(28, 28, 30),
                primary_text: Rgb::WHITE,
                secondary_text: Rgb::new(235, 235, 245),
            },
        }
    }
}
