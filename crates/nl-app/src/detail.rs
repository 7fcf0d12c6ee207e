//! Detail surface
//!
//! Everything shown for a single feature: description, platform badges,
//! activation steps and the feature's playground.

use nl_a11y::contrast::{self, WcagLevel};
use nl_a11y::motion::{self, Animation, LoadingIndicator, Transition};
use nl_a11y::{DisplayPreferences, Rgb, Status, StatusIndicator};
use nl_catalog::{Feature, Playground};
use nl_layout::Size;

use crate::badge::{self, Badge};
use crate::Config;

pub const DEVELOPER_TIPS: &str = "Ensure your app supports this feature by following Apple's Human \
    Interface Guidelines and testing with the Accessibility Inspector.";

/// How activation steps are arranged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepLayout {
    /// Number column beside the step text
    Horizontal,
    /// Number above the step text
    Stacked,
}

/// Activation steps and their arrangement
#[derive(Debug, Clone, PartialEq)]
pub struct Steps {
    pub layout: StepLayout,
    pub spacing: f32,
    pub items: Vec<(usize, &'static str)>,
}

impl Steps {
    fn build(feature: &Feature, prefs: &DisplayPreferences) -> Self {
        let (layout, spacing) = if prefs.is_accessibility_size() {
            (StepLayout::Stacked, 16.0)
        } else {
            (StepLayout::Horizontal, 8.0)
        };
        Self {
            layout,
            spacing,
            items: feature.activation_steps.iter().enumerate().map(|(i, s)| (i + 1, *s)).collect(),
        }
    }
}

/// Platform badges packed for the container width
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeStrip {
    pub badges: Vec<Badge>,
    pub size: Size,
    pub line_count: usize,
}

/// Playground values resolved against the display preferences
#[derive(Debug, Clone, PartialEq)]
pub struct PlaygroundState {
    pub kind: Playground,
    pub title: &'static str,
    pub stroke_width: f32,
    pub fill: Rgb,
    pub background_opacity: f32,
    pub target_level: WcagLevel,
    pub animation: Animation,
    pub transition: Transition,
    pub loading: LoadingIndicator,
    pub indicators: Vec<StatusIndicator>,
    pub media_url: Option<&'static str>,
}

impl PlaygroundState {
    fn build(feature: &Feature, prefs: &DisplayPreferences) -> Self {
        let kind = Playground::for_feature(feature);
        Self {
            kind,
            title: kind.title(),
            stroke_width: contrast::stroke_width(prefs.contrast),
            fill: contrast::fill_color(feature.tint.rgb(), prefs.contrast),
            background_opacity: contrast::background_opacity(prefs.contrast),
            target_level: contrast::target_level(prefs.contrast),
            animation: motion::state_change_animation(prefs.motion),
            transition: motion::insertion_transition(prefs.motion),
            loading: motion::loading_indicator(prefs.motion),
            indicators: Status::ALL
                .iter()
                .map(|s| StatusIndicator::resolve(*s, prefs.differentiate_without_color))
                .collect(),
            media_url: kind.media_url(),
        }
    }
}

/// The detail screen for one feature
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub feature_id: &'static str,
    pub name: &'static str,
    pub icon: Option<&'static str>,
    pub short_description: Option<&'static str>,
    pub badges: Option<BadgeStrip>,
    pub about: &'static str,
    pub steps: Steps,
    pub playground: PlaygroundState,
    pub developer_tips: Option<&'static str>,
}

impl DetailView {
    /// Decorative and secondary sections are dropped at accessibility sizes.
    pub fn build(feature: &Feature, config: &Config) -> Self {
        let prefs = &config.preferences;
        let compact = !prefs.is_accessibility_size();

        let badges = compact.then(|| {
            let (badges, packed) = badge::layout_badges(feature.platforms, config);
            BadgeStrip { badges, size: packed.size, line_count: packed.line_count }
        });

        tracing::info!(
            feature = feature.id,
            type_size = %prefs.type_size,
            badge_lines = badges.as_ref().map_or(0, |b| b.line_count),
            "built detail view"
        );

        Self {
            feature_id: feature.id,
            name: feature.name,
            icon: compact.then_some(feature.icon),
            short_description: compact.then_some(feature.short_description),
            badges,
            about: feature.full_description,
            steps: Steps::build(feature, prefs),
            playground: PlaygroundState::build(feature, prefs),
            developer_tips: compact.then_some(DEVELOPER_TIPS),
        }
    }

    /// Plain text rendering
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        if let Some(icon) = self.icon {
            lines.push(format!("[{icon}]"));
        }
        lines.push(self.name.to_string());
        if let Some(short) = self.short_description {
            lines.push(short.to_string());
        }

        if let Some(strip) = &self.badges {
            lines.extend([String::new(), "Available On".to_string()]);
            for line in 0..strip.line_count {
                let row: Vec<String> = strip
                    .badges
                    .iter()
                    .filter(|b| b.line == line)
                    .map(|b| format!("({}) {}", b.icon, b.label))
                    .collect();
                lines.push(format!("  {}", row.join("  ")));
            }
        }

        lines.extend([String::new(), "About".to_string(), self.about.to_string()]);

        lines.extend([String::new(), "How to Enable".to_string()]);
        for (number, step) in &self.steps.items {
            match self.steps.layout {
                StepLayout::Horizontal => lines.push(format!("  {number}. {step}")),
                StepLayout::Stacked => {
                    lines.push(format!("  {number}."));
                    lines.push(format!("  {step}"));
                }
            }
        }

        lines.extend([String::new(), format!("Try It Out: {}", self.playground.title)]);
        if let Some(url) = self.playground.media_url {
            lines.push(format!("  Media: {url}"));
        }

        if let Some(tips) = self.developer_tips {
            lines.extend([String::new(), "For Developers".to_string(), tips.to_string()]);
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nl_a11y::{ContrastPreference, DynamicTypeSize, MotionPreference};
    use nl_catalog::CatalogIndex;

    fn voiceover() -> &'static Feature {
        CatalogIndex::builtin().get("voiceover").unwrap()
    }

    fn config_with(prefs: DisplayPreferences) -> Config {
        Config::default().with_preferences(prefs)
    }

    #[test]
    fn test_default_detail_has_all_sections() {
        let view = DetailView::build(voiceover(), &Config::default());
        assert!(view.icon.is_some());
        assert!(view.short_description.is_some());
        assert!(view.developer_tips.is_some());
        let strip = view.badges.as_ref().unwrap();
        assert_eq!(strip.badges.len(), voiceover().platforms.len());
        assert_eq!(view.steps.layout, StepLayout::Horizontal);
        assert_eq!(view.steps.spacing, 8.0);
        assert_eq!(view.playground.kind, Playground::VoiceOver);
    }

    #[test]
    fn test_accessibility_size_simplifies_detail() {
        let view = DetailView::build(
            voiceover(),
            &config_with(DisplayPreferences {
                type_size: DynamicTypeSize::Accessibility1,
                ..Default::default()
            }),
        );
        assert_eq!(view.icon, None);
        assert_eq!(view.short_description, None);
        assert_eq!(view.badges, None);
        assert_eq!(view.developer_tips, None);
        assert_eq!(view.steps.layout, StepLayout::Stacked);
        assert_eq!(view.steps.spacing, 16.0);
    }

    #[test]
    fn test_steps_are_numbered_from_one() {
        let view = DetailView::build(voiceover(), &Config::default());
        assert_eq!(view.steps.items[0], (1, "Open Settings"));
        assert_eq!(view.steps.items.len(), voiceover().activation_steps.len());
    }

    #[test]
    fn test_playground_follows_preferences() {
        let prefs = DisplayPreferences {
            contrast: ContrastPreference::Increased,
            motion: MotionPreference::Reduce,
            differentiate_without_color: true,
            ..Default::default()
        };
        let view = DetailView::build(voiceover(), &config_with(prefs));
        assert_eq!(view.playground.stroke_width, 2.0);
        assert_eq!(view.playground.target_level, WcagLevel::AAA);
        assert_eq!(view.playground.animation, Animation::None);
        assert_eq!(view.playground.transition, Transition::Opacity);
        assert_eq!(view.playground.background_opacity, 0.3);
        assert_eq!(view.playground.loading, LoadingIndicator::Progress);
        assert!(view.playground.indicators.iter().all(|i| i.icon.is_some()));
    }

    #[test]
    fn test_playground_defaults_animate() {
        let view = DetailView::build(voiceover(), &Config::default());
        assert_eq!(view.playground.stroke_width, 1.0);
        assert_eq!(view.playground.background_opacity, 0.1);
        assert!(matches!(view.playground.loading, LoadingIndicator::SpinningIcon(_)));
        assert_eq!(view.playground.transition, Transition::Slide);
    }

    #[test]
    fn test_render_badge_rows_and_steps() {
        let config = Config::default().with_container_width(150.0);
        let text = DetailView::build(voiceover(), &config).render();
        assert!(text.contains("Available On"));
        assert!(text.contains("(iphone) iOS"));
        assert!(text.contains("  1. Open Settings"));
        assert!(text.contains("For Developers"));
    }

    #[test]
    fn test_render_media_url_for_captions() {
        let captions = CatalogIndex::builtin().get("captions").unwrap();
        let text = DetailView::build(captions, &Config::default()).render();
        assert!(text.contains("Media: https://"));
    }
}
