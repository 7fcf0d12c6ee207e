//! Nutrition Labels
//!
//! The catalog listing and feature detail surfaces, built from the catalog
//! index and the flow layout, and adapted to the user's display preferences.
//!
//! # Example
//! ```rust,ignore
//! use nl_app::{Config, ListingView, DetailView};
//! use nl_catalog::CatalogIndex;
//!
//! let index = CatalogIndex::builtin();
//! let config = Config::default();
//! print!("{}", ListingView::build(&index, "voice", &config.preferences).render());
//! let feature = index.get("voiceover").unwrap();
//! print!("{}", DetailView::build(feature, &config).render());
//! ```

mod config;
pub mod badge;
pub mod listing;
pub mod detail;

pub use config::Config;
pub use badge::Badge;
pub use listing::{Card, ListingView, Section};
pub use detail::{BadgeStrip, DetailView, PlaygroundState, StepLayout, Steps};

use nl_catalog::{CatalogIndex, Feature};

/// Version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application error
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    #[error("Invalid config value for {field}: {value}")]
    InvalidConfig { field: &'static str, value: f32 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Look up a feature by id, failing with [`AppError::UnknownFeature`]
pub fn find_feature<'a>(index: &CatalogIndex<'a>, id: &str) -> Result<&'a Feature, AppError> {
    index.get(id).ok_or_else(|| AppError::UnknownFeature(id.to_string()))
}
