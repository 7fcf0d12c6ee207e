//! Catalog Index
//!
//! Search and category grouping over a static feature list.

use serde::Serialize;

use crate::category::Category;
use crate::feature::Feature;

/// Features of one category, in catalog order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub features: Vec<&'a Feature>,
}

/// Filter features by a search query.
///
/// - the query is trimmed before matching, so `"voice "` matches
///   "VoiceOver"; a query that trims to empty returns every feature
/// - case-insensitive substring match on `name` and `short_description`
/// - matches keep their original relative order
pub fn filter<'a>(query: &str, features: &'a [Feature]) -> Vec<&'a Feature> {
    let query = query.trim();
    if query.is_empty() {
        return features.iter().collect();
    }

    let query = query.to_lowercase();
    features
        .iter()
        .filter(|f| {
            f.name.to_lowercase().contains(&query)
                || f.short_description.to_lowercase().contains(&query)
        })
        .collect()
}

/// Group features by category following `order`.
///
/// Categories with no features are omitted, categories missing from `order`
/// are dropped, and a category repeated in `order` is emitted once.
pub fn group_by_category<'a>(features: &[&'a Feature], order: &[Category]) -> Vec<CategoryGroup<'a>> {
    let mut groups: Vec<CategoryGroup<'a>> = Vec::new();

    for &category in order {
        if groups.iter().any(|g| g.category == category) {
            continue;
        }
        let members: Vec<&'a Feature> = features
            .iter()
            .copied()
            .filter(|f| f.category == category)
            .collect();
        if !members.is_empty() {
            groups.push(CategoryGroup { category, features: members });
        }
    }

    groups
}

/// Read-only index over a feature list
#[derive(Debug, Clone, Copy)]
pub struct CatalogIndex<'a> {
    features: &'a [Feature],
}

impl CatalogIndex<'static> {
    /// Index over the built-in feature table
    pub fn builtin() -> Self {
        Self::new(crate::all_features())
    }
}

impl<'a> CatalogIndex<'a> {
    pub fn new(features: &'a [Feature]) -> Self {
        Self { features }
    }

    pub fn features(&self) -> &'a [Feature] {
        self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Look up a feature by id
    pub fn get(&self, id: &str) -> Option<&'a Feature> {
        self.features.iter().find(|f| f.id == id)
    }

    pub fn filter(&self, query: &str) -> Vec<&'a Feature> {
        filter(query, self.features)
    }

    /// Filtered features grouped in category display order
    pub fn search(&self, query: &str) -> Vec<CategoryGroup<'a>> {
        let matches = self.filter(query);
        let groups = group_by_category(&matches, &Category::ALL);
        tracing::debug!(
            query,
            matches = matches.len(),
            groups = groups.len(),
            "catalog search"
        );
        groups
    }
}
