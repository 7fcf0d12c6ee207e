//! Playground routing
//!
//! Each feature's detail page ends with an interactive playground. The
//! playground is picked by feature name; unknown names get the generic one.

use serde::Serialize;

use crate::feature::Feature;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Playground {
    VoiceOver,
    VoiceControl,
    LargerText,
    DarkInterface,
    DifferentiateColor,
    Contrast,
    ReducedMotion,
    Captions,
    AudioDescriptions,
    Generic,
}

impl Playground {
    pub fn for_name(name: &str) -> Self {
        match name {
            "VoiceOver" => Self::VoiceOver,
            "Voice Control" => Self::VoiceControl,
            "Larger Text" => Self::LargerText,
            "Dark Interface" => Self::DarkInterface,
            "Differentiate Without Color Alone" => Self::DifferentiateColor,
            "Sufficient Contrast" => Self::Contrast,
            "Reduced Motion" => Self::ReducedMotion,
            "Captions" => Self::Captions,
            "Audio Descriptions" => Self::AudioDescriptions,
            _ => Self::Generic,
        }
    }

    pub fn for_feature(feature: &Feature) -> Self {
        Self::for_name(feature.name)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::VoiceOver => "Screen reader labels, values and hints",
            Self::VoiceControl => "Spoken names for controls",
            Self::LargerText => "Layouts that adapt to text size",
            Self::DarkInterface => "Adaptive colors",
            Self::DifferentiateColor => "Status without color alone",
            Self::Contrast => "Contrast-aware controls",
            Self::ReducedMotion => "Motion alternatives",
            Self::Captions => "Captioned video",
            Self::AudioDescriptions => "Described video",
            Self::Generic => "Try it out",
        }
    }

    /// Sample stream played by media playgrounds
    pub fn media_url(&self) -> Option<&'static str> {
        match self {
            Self::Captions | Self::AudioDescriptions => Some(
                "https://devstreaming-cdn.apple.com/videos/streaming/examples/img_bipbop_adv_example_fmp4/master.m3u8",
            ),
            _ => None,
        }
    }
}
