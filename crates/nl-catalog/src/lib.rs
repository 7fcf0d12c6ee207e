//! Nutrition Labels Catalog
//!
//! The accessibility feature catalog: a static table of features, search
//! and grouping over it, and routing to each feature's playground.
//!
//! Everything here is immutable after startup and safe to share between
//! threads.

mod category;
mod feature;
mod table;
pub mod index;
pub mod playground;

pub use category::Category;
pub use feature::{platform_icon, Feature, Platform, Tint, UNKNOWN_PLATFORM_ICON};
pub use table::all_features;
pub use index::{filter, group_by_category, CatalogIndex, CategoryGroup};
pub use playground::Playground;
