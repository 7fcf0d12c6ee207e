//! Platform badges
//!
//! A badge is an icon and a label inside a capsule. Badges are measured
//! here and handed to the flow layout for placement.

use nl_catalog::Platform;
use nl_layout::{FlowLayout, PackResult, Rect, Size};

use crate::Config;

const HORIZONTAL_PADDING: f32 = 12.0;
const VERTICAL_PADDING: f32 = 6.0;
const ICON_GAP: f32 = 6.0;

/// Caption text is drawn smaller than body text.
const CAPTION_SCALE: f32 = 0.75;

/// A measured, positioned badge
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub label: &'static str,
    pub icon: &'static str,
    pub frame: Rect,
    pub line: usize,
}

/// Natural size of a badge label at the configured text size
pub fn measure(label: &str, config: &Config) -> Size {
    let scale = config.preferences.type_size.scale_factor() * CAPTION_SCALE;
    let glyph = config.glyph_width * scale;
    let text_height = config.line_height * scale;

    // The icon is drawn at caption size, roughly one line tall and square.
    let icon = text_height;
    let text = label.chars().count() as f32 * glyph;

    Size::new(
        HORIZONTAL_PADDING * 2.0 + icon + ICON_GAP + text,
        VERTICAL_PADDING * 2.0 + text_height,
    )
}

/// Badges for `platforms`, packed into the configured container width
pub fn layout_badges(platforms: &[Platform], config: &Config) -> (Vec<Badge>, PackResult) {
    let sizes: Vec<Size> = platforms.iter().map(|p| measure(p.name(), config)).collect();
    let packed = nl_layout::pack(config.container_width, &sizes, config.badge_spacing);

    let badges = platforms
        .iter()
        .zip(&packed.placements)
        .map(|(platform, placed)| Badge {
            label: platform.name(),
            icon: platform.icon(),
            frame: placed.frame(),
            line: placed.line,
        })
        .collect();

    (badges, packed)
}

/// Badge frames inside `bounds`, as a container would place them
pub fn place_badges(platforms: &[Platform], bounds: Rect, config: &Config) -> Vec<Rect> {
    let sizes: Vec<Size> = platforms.iter().map(|p| measure(p.name(), config)).collect();
    FlowLayout::new(config.badge_spacing).place_in(bounds, &sizes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nl_a11y::{DisplayPreferences, DynamicTypeSize};

    #[test]
    fn test_longer_labels_are_wider() {
        let config = Config::default();
        assert!(measure("visionOS", &config).width > measure("iOS", &config).width);
        assert_eq!(measure("iOS", &config).height, measure("visionOS", &config).height);
    }

    #[test]
    fn test_measure_default_size() {
        let config = Config::default();
        // scale 0.75: glyph 5.25, text height 12, icon 12
        let size = measure("iOS", &config);
        assert_eq!(size, Size::new(24.0 + 12.0 + 6.0 + 15.75, 24.0));
    }

    #[test]
    fn test_larger_type_makes_badges_bigger() {
        let base = Config::default();
        let large = Config::default().with_preferences(DisplayPreferences {
            type_size: DynamicTypeSize::Accessibility3,
            ..Default::default()
        });
        assert!(measure("macOS", &large).width > measure("macOS", &base).width);
    }

    #[test]
    fn test_badges_keep_platform_order() {
        let platforms = Platform::ALL;
        let (badges, packed) = layout_badges(&platforms, &Config::default());

        assert_eq!(badges.len(), platforms.len());
        assert_eq!(packed.placements.len(), platforms.len());
        for (badge, platform) in badges.iter().zip(platforms) {
            assert_eq!(badge.label, platform.name());
        }
    }

    #[test]
    fn test_narrow_container_wraps_badges() {
        let config = Config::default().with_container_width(120.0);
        let (_, packed) = layout_badges(&Platform::ALL, &config);
        assert!(packed.line_count > 1);
        assert_eq!(packed.size.width, 120.0);
    }

    #[test]
    fn test_place_badges_offsets_into_bounds() {
        let config = Config::default();
        let frames = place_badges(&[Platform::Ios], Rect::new(16.0, 40.0, 358.0, 0.0), &config);
        assert_eq!(frames[0].x, 16.0);
        assert_eq!(frames[0].y, 40.0);
    }
}
