//! Listing surface
//!
//! The catalog screen: a header, then one section per category holding a
//! card for each matching feature.

use nl_a11y::{DisplayPreferences, Palette, Rgb};
use nl_catalog::{CatalogIndex, Category, Feature};

pub const TITLE: &str = "Accessibility";
pub const SUBTITLE: &str = "iOS Nutrition Labels";
pub const BLURB: &str =
    "Discover how apps can support accessibility features to ensure everyone can use them effectively.";

/// A feature card in the listing
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub feature_id: &'static str,
    pub name: &'static str,
    /// Decorative; hidden at accessibility sizes
    pub icon: Option<&'static str>,
    /// Hidden at accessibility sizes
    pub short_description: Option<&'static str>,
    /// Decorative disclosure chevron; hidden at accessibility sizes
    pub chevron: bool,
    pub background: Rgb,
}

impl Card {
    fn build(feature: &Feature, prefs: &DisplayPreferences, palette: &Palette) -> Self {
        let compact = !prefs.is_accessibility_size();
        Self {
            feature_id: feature.id,
            name: feature.name,
            icon: compact.then_some(feature.icon),
            short_description: compact.then_some(feature.short_description),
            chevron: compact,
            background: palette.card_background,
        }
    }
}

/// A category heading and its cards
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub category: Category,
    pub title: &'static str,
    pub icon: &'static str,
    pub cards: Vec<Card>,
}

/// The catalog screen for one query
#[derive(Debug, Clone, PartialEq)]
pub struct ListingView {
    pub query: String,
    pub blurb: Option<&'static str>,
    pub background: Rgb,
    pub sections: Vec<Section>,
}

impl ListingView {
    pub fn build(index: &CatalogIndex<'_>, query: &str, prefs: &DisplayPreferences) -> Self {
        let palette = Palette::for_scheme(prefs.color_scheme);
        let sections: Vec<Section> = index
            .search(query)
            .into_iter()
            .map(|group| Section {
                category: group.category,
                title: group.category.label(),
                // Category icons stay visible at every size.
                icon: group.category.icon(),
                cards: group
                    .features
                    .iter()
                    .map(|f| Card::build(f, prefs, &palette))
                    .collect(),
            })
            .collect();

        tracing::info!(query, sections = sections.len(), "built listing");

        Self {
            query: query.to_string(),
            blurb: (!prefs.is_accessibility_size()).then_some(BLURB),
            background: palette.grouped_background,
            sections,
        }
    }

    pub fn card_count(&self) -> usize {
        self.sections.iter().map(|s| s.cards.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Plain text rendering
    pub fn render(&self) -> String {
        let mut lines = vec![TITLE.to_string(), SUBTITLE.to_string()];
        if let Some(blurb) = self.blurb {
            lines.push(blurb.to_string());
        }

        if self.sections.is_empty() {
            lines.extend([String::new(), format!("No features match \"{}\"", self.query.trim())]);
        }

        for section in &self.sections {
            lines.extend([String::new(), format!("[{}] {}", section.icon, section.title)]);
            for card in &section.cards {
                let icon = card.icon.map(|i| format!("[{i}] ")).unwrap_or_default();
                let chevron = if card.chevron { " >" } else { "" };
                lines.push(format!("  {icon}{}{chevron}", card.name));
                if let Some(description) = card.short_description {
                    lines.push(format!("    {description}"));
                }
            }
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
