//! Feature records

use std::fmt;
use std::str::FromStr;

use nl_a11y::Rgb;
use serde::Serialize;

use crate::category::Category;

/// Icon shown for a platform name that is not recognized
pub const UNKNOWN_PLATFORM_ICON: &str = "questionmark.circle";

/// Accent color of a feature or category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tint {
    Blue,
    Green,
    Indigo,
    Mint,
    Orange,
    Pink,
    Purple,
    Red,
    Teal,
    Yellow,
}

impl Tint {
    pub fn rgb(&self) -> Rgb {
        match self {
            Self::Blue => Rgb::new(0, 122, 255),
            Self::Green => Rgb::new(52, 199, 89),
            Self::Indigo => Rgb::new(88, 86, 214),
            Self::Mint => Rgb::new(0, 199, 190),
            Self::Orange => Rgb::new(255, 149, 0),
            Self::Pink => Rgb::new(255, 45, 85),
            Self::Purple => Rgb::new(175, 82, 222),
            Self::Red => Rgb::new(255, 59, 48),
            Self::Teal => Rgb::new(48, 176, 199),
            Self::Yellow => Rgb::new(255, 204, 0),
        }
    }
}

/// Platform a feature is available on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Platform {
    #[serde(rename = "iOS")]
    Ios,
    #[serde(rename = "iPadOS")]
    IpadOs,
    #[serde(rename = "macOS")]
    MacOs,
    #[serde(rename = "watchOS")]
    WatchOs,
    #[serde(rename = "tvOS")]
    TvOs,
    #[serde(rename = "visionOS")]
    VisionOs,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Self::Ios, Self::IpadOs, Self::MacOs, Self::WatchOs, Self::TvOs, Self::VisionOs,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ios => "iOS",
            Self::IpadOs => "iPadOS",
            Self::MacOs => "macOS",
            Self::WatchOs => "watchOS",
            Self::TvOs => "tvOS",
            Self::VisionOs => "visionOS",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Ios => "iphone",
            Self::IpadOs => "ipad",
            Self::MacOs => "macbook",
            Self::WatchOs => "applewatch",
            Self::TvOs => "appletv",
            Self::VisionOs => "visionpro",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|p| p.name() == s).ok_or(())
    }
}

/// Badge icon for a platform name, falling back for unknown names
pub fn platform_icon(name: &str) -> &'static str {
    name.parse::<Platform>()
        .map(|p| p.icon())
        .unwrap_or(UNKNOWN_PLATFORM_ICON)
}

/// One accessibility capability in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub id: &'static str,
    pub name: &'static str,
    pub short_description: &'static str,
    pub full_description: &'static str,
    pub icon: &'static str,
    pub tint: Tint,
    pub category: Category,
    pub platforms: &'static [Platform],
    pub activation_steps: &'static [&'static str],
}
