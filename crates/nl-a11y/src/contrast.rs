//! Contrast
//!
//! WCAG contrast checking and contrast-aware styling values.

use serde::{Deserialize, Serialize};

use crate::preferences::ContrastPreference;

/// 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Relative luminance
    pub fn luminance(&self) -> f64 {
        fn channel(c: u8) -> f64 {
            let c = c as f64 / 255.0;
            if c <= 0.03928 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
        }
        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }

    /// Scale each channel toward black. `amount` of 0.0 is unchanged, 1.0 is black.
    pub fn darkened(&self, amount: f64) -> Self {
        let keep = 1.0 - amount.clamp(0.0, 1.0);
        let scale = |c: u8| (c as f64 * keep).round() as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Contrast ratio between two colors, from 1.0 to 21.0
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let (l1, l2) = (a.luminance(), b.luminance());
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG conformance level reached by a contrast ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WcagLevel {
    Fail,
    AA,
    AAA,
}

impl WcagLevel {
    pub fn classify(ratio: f64, large_text: bool) -> Self {
        if meets_aaa(ratio, large_text) {
            Self::AAA
        } else if meets_aa(ratio, large_text) {
            Self::AA
        } else {
            Self::Fail
        }
    }
}

/// WCAG AA: 4.5:1 for normal text, 3:1 for large text
pub fn meets_aa(ratio: f64, large_text: bool) -> bool {
    if large_text { ratio >= 3.0 } else { ratio >= 4.5 }
}

/// WCAG AAA: 7:1 for normal text, 4.5:1 for large text
pub fn meets_aaa(ratio: f64, large_text: bool) -> bool {
    if large_text { ratio >= 4.5 } else { ratio >= 7.0 }
}

/// Level a surface should aim for under the given preference
pub fn target_level(contrast: ContrastPreference) -> WcagLevel {
    match contrast {
        ContrastPreference::Standard => WcagLevel::AA,
        ContrastPreference::Increased => WcagLevel::AAA,
    }
}

/// Outline width for bordered controls
pub fn stroke_width(contrast: ContrastPreference) -> f32 {
    match contrast {
        ContrastPreference::Standard => 1.0,
        ContrastPreference::Increased => 2.0,
    }
}

/// Opacity of tinted panel backgrounds
pub fn background_opacity(contrast: ContrastPreference) -> f32 {
    match contrast {
        ContrastPreference::Standard => 0.1,
        ContrastPreference::Increased => 0.3,
    }
}

/// Fill color for a filled button
pub fn fill_color(base: Rgb, contrast: ContrastPreference) -> Rgb {
    match contrast {
        ContrastPreference::Standard => base,
        ContrastPreference::Increased => base.darkened(0.25),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_on_white() {
        let ratio = contrast_ratio(Rgb::WHITE, Rgb::BLACK);
        assert!((ratio - 21.0).abs() < 0.1);
        assert_eq!(contrast_ratio(Rgb::BLACK, Rgb::WHITE), ratio);
    }

    #[test]
    fn test_same_color_is_one() {
        let gray = Rgb::new(128, 128, 128);
        assert!((contrast_ratio(gray, gray) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_wcag_thresholds() {
        assert!(meets_aa(5.0, false));
        assert!(!meets_aa(3.0, false));
        assert!(meets_aa(3.0, true));
        assert!(meets_aaa(7.0, false));
        assert!(!meets_aaa(6.9, false));
        assert_eq!(WcagLevel::classify(21.0, false), WcagLevel::AAA);
        assert_eq!(WcagLevel::classify(5.0, false), WcagLevel::AA);
        assert_eq!(WcagLevel::classify(2.0, true), WcagLevel::Fail);
    }

    #[test]
    fn test_increased_contrast_styling() {
        assert_eq!(stroke_width(ContrastPreference::Standard), 1.0);
        assert_eq!(stroke_width(ContrastPreference::Increased), 2.0);
        assert!(background_opacity(ContrastPreference::Increased) > background_opacity(ContrastPreference::Standard));
        assert_eq!(target_level(ContrastPreference::Increased), WcagLevel::AAA);
    }

    #[test]
    fn test_darkened_fill_raises_contrast_against_white() {
        let blue = Rgb::new(0, 122, 255);
        let darker = fill_color(blue, ContrastPreference::Increased);
        assert!(contrast_ratio(darker, Rgb::WHITE) > contrast_ratio(blue, Rgb::WHITE));
        assert_eq!(fill_color(blue, ContrastPreference::Standard), blue);
    }

    #[test]
    fn test_hex() {
        assert_eq!(Rgb::new(0, 122, 255).hex(), "#007aff");
    }
}
