//! Built-in feature table

use crate::category::Category;
use crate::feature::{Feature, Platform, Tint};

const ALL_PLATFORMS: &[Platform] = &[
    Platform::Ios, Platform::IpadOs, Platform::MacOs, Platform::WatchOs, Platform::TvOs, Platform::VisionOs,
];

const MOBILE_AND_MAC: &[Platform] = &[Platform::Ios, Platform::IpadOs, Platform::MacOs, Platform::VisionOs];

const MEDIA_PLATFORMS: &[Platform] = &[Platform::Ios, Platform::IpadOs, Platform::MacOs, Platform::TvOs, Platform::VisionOs];

static FEATURES: [Feature; 9] = [
    Feature {
        id: "voiceover",
        name: "VoiceOver",
        short_description: "A gesture-based screen reader that describes what is on screen.",
        full_description: "VoiceOver speaks the label, value, hint and traits of every element \
            the user touches or navigates to. Apps support it by giving controls meaningful \
            labels, announcing state changes and grouping related content into single elements.",
        icon: "speaker.wave.3.fill",
        tint: Tint::Blue,
        category: Category::Vision,
        platforms: ALL_PLATFORMS,
        activation_steps: &[
            "Open Settings",
            "Tap Accessibility",
            "Tap VoiceOver",
            "Turn on VoiceOver",
        ],
    },
    Feature {
        id: "voice-control",
        name: "Voice Control",
        short_description: "Navigate and interact with the device using only your voice.",
        full_description: "Voice Control lets people tap, swipe and type by speaking commands. \
            Controls are addressed by their visible names, so every interactive element needs a \
            label that matches what is shown, plus alternative input labels for short commands.",
        icon: "mic.fill",
        tint: Tint::Green,
        category: Category::Motor,
        platforms: MOBILE_AND_MAC,
        activation_steps: &[
            "Open Settings",
            "Tap Accessibility",
            "Tap Voice Control",
            "Turn on Voice Control",
        ],
    },
    Feature {
        id: "larger-text",
        name: "Larger Text",
        short_description: "Scale text up to sizes that are comfortable to read.",
        full_description: "Dynamic Type lets people choose a preferred reading size. Apps should \
            use text styles that scale, allow text to wrap instead of truncating, and switch to \
            stacked layouts when the size reaches the accessibility range.",
        icon: "textformat.size",
        tint: Tint::Indigo,
        category: Category::Vision,
        platforms: ALL_PLATFORMS,
        activation_steps: &[
            "Open Settings",
            "Tap Accessibility",
            "Tap Display & Text Size",
            "Tap Larger Text",
            "Drag the slider to choose a size",
        ],
    },
    Feature {
        id: "dark-interface",
        name: "Dark Interface",
        short_description: "A dark color scheme that is easier on the eyes in low light.",
        full_description: "Dark Mode switches the system to a darker palette. Apps should use \
            semantic colors that adapt automatically and check that custom colors keep enough \
            contrast in both appearances.",
        icon: "moon.fill",
        tint: Tint::Purple,
        category: Category::Vision,
        platforms: MOBILE_AND_MAC,
        activation_steps: &[
            "Open Settings",
            "Tap Display & Brightness",
            "Select Dark",
        ],
    },
    Feature {
        id: "differentiate-without-color",
        name: "Differentiate Without Color Alone",
        short_description: "Convey status with shapes, icons or text in addition to color.",
        full_description: "Some people cannot tell certain colors apart. When this setting is on, \
            apps should add symbols or text to anything that is otherwise communicated by color, \
            such as success and error states or chart series.",
        icon: "circle.lefthalf.filled",
        tint: Tint::Orange,
        category: Category::Vision,
        platforms: ALL_PLATFORMS,
        activation_steps: &[
            "Open Settings",
            "Tap Accessibility",
            "Tap Display & Text Size",
            "Turn on Differentiate Without Color",
        ],
    },
    Feature {
        id: "sufficient-contrast",
        name: "Sufficient Contrast",
        short_description: "Keep text and controls clearly distinguishable from their background.",
        full_description: "Low contrast makes content hard to read for people with low vision. \
            Aim for at least 4.5:1 for body text, and when Increase Contrast is on, strengthen \
            borders, darken fills and target the AAA level of 7:1.",
        icon: "circle.righthalf.filled",
        tint: Tint::Teal,
        category: Category::Vision,
        platforms: ALL_PLATFORMS,
        activation_steps: &[
            "Open Settings",
            "Tap Accessibility",
            "Tap Display & Text Size",
            "Turn on Increase Contrast",
        ],
    },
    Feature {
        id: "reduced-motion",
        name: "Reduced Motion",
        short_description: "Minimize animation for people sensitive to movement on screen.",
        full_description: "Large or continuous motion can cause discomfort. When Reduce Motion \
            is on, apps should replace sliding and spinning effects with simple fades or no \
            animation at all.",
        icon: "figure.walk.motion",
        tint: Tint::Pink,
        category: Category::Cognitive,
        platforms: ALL_PLATFORMS,
        activation_steps: &[
            "Open Settings",
            "Tap Accessibility",
            "Tap Motion",
            "Turn on Reduce Motion",
        ],
    },
    Feature {
        id: "captions",
        name: "Captions",
        short_description: "Text for dialog and meaningful sounds in video and audio content.",
        full_description: "Captions show spoken words, sound effects, music cues and speaker \
            names. Streams should carry caption tracks so the system player can offer them to \
            people who prefer or need to read along.",
        icon: "captions.bubble.fill",
        tint: Tint::Red,
        category: Category::AudioAndCaptions,
        platforms: MEDIA_PLATFORMS,
        activation_steps: &[
            "Open Settings",
            "Tap Accessibility",
            "Tap Subtitles & Captioning",
            "Turn on Closed Captions + SDH",
        ],
    },
    Feature {
        id: "audio-descriptions",
        name: "Audio Descriptions",
        short_description: "Narration of important visual details in video content.",
        full_description: "Audio descriptions narrate actions, scene changes and on-screen text \
            during natural pauses in dialog. Media should include a described audio track that \
            the player selects when the preference is on.",
        icon: "waveform.and.mic",
        tint: Tint::Yellow,
        category: Category::AudioAndCaptions,
        platforms: MEDIA_PLATFORMS,
        activation_steps: &[
            "Open Settings",
            "Tap Accessibility",
            "Tap Audio Descriptions",
            "Turn on Audio Descriptions",
        ],
    },
];

/// Every built-in feature in catalog order
pub fn all_features() -> &'static [Feature] {
    &FEATURES
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = all_features().iter().map(|f| f.id).collect();
        assert_eq!(ids.len(), all_features().len());
    }

    #[test]
    fn test_every_feature_is_complete() {
        for feature in all_features() {
            assert!(!feature.name.is_empty());
            assert!(!feature.short_description.is_empty());
            assert!(!feature.platforms.is_empty(), "{} has no platforms", feature.id);
            assert!(!feature.activation_steps.is_empty(), "{} has no steps", feature.id);
        }
    }

    #[test]
    fn test_every_category_is_used() {
        for category in Category::ALL {
            assert!(all_features().iter().any(|f| f.category == category));
        }
    }
}
