//! The loaded icon library and the lookups the application builds on it.
//!
//! An `IconLibrary` owns the icon and category tables produced by a
//! successful load. Everything downstream - symbol choosers, autocomplete,
//! symbology editors - goes through these helpers rather than indexing the
//! tables directly.

use crate::models::{Category, CategoryTable, Icon, IconTable};

/// Label used when an icon name has no entry in the table
const UNNAMED_ICON_LABEL: &str = "Unnamed icon";

// Field weights for search ranking; label matches matter most
const LABEL_WEIGHT: u32 = 5;
const NAME_WEIGHT: u32 = 3;
const CATEGORY_WEIGHT: u32 = 2;
const TERM_WEIGHT: u32 = 1;

#[derive(Debug)]
pub struct IconLibrary {
    icons: IconTable,
    categories: CategoryTable,
}

impl IconLibrary {
    pub fn new(icons: IconTable, categories: CategoryTable) -> Self {
        Self { icons, categories }
    }

    pub fn icons(&self) -> &IconTable {
        &self.icons
    }

    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    pub fn icon_count(&self) -> usize {
        self.icons.len()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn icon(&self, name: &str) -> Option<&Icon> {
        self.icons.get(name)
    }

    /// Display label for an icon name, with a fallback for unknown icons
    pub fn icon_label(&self, name: &str) -> &str {
        self.icon(name)
            .map(|icon| icon.label.as_str())
            .unwrap_or(UNNAMED_ICON_LABEL)
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    pub fn category_label(&self, name: &str) -> Option<&str> {
        self.category(name).map(|category| category.label.as_str())
    }

    /// Member icons of a category, in the category's own order.
    /// Member names with no icon entry are skipped.
    pub fn icons_for_category(&self, category_name: &str) -> Vec<&Icon> {
        let Some(category) = self.category(category_name) else {
            return Vec::new();
        };

        category
            .icons
            .iter()
            .filter_map(|icon_name| self.icon(icon_name))
            .collect()
    }

    /// Deduplicated category labels across a set of icon names,
    /// in first-seen order
    pub fn category_labels_for_icons(&self, icon_names: &[&str]) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();

        for icon_name in icon_names {
            let Some(icon) = self.icon(icon_name) else {
                continue;
            };
            for category_name in &icon.categories {
                if let Some(label) = self.category_label(category_name) {
                    if !labels.iter().any(|seen| seen == label) {
                        labels.push(label.to_string());
                    }
                }
            }
        }

        labels
    }

    /// Ranked search over icon labels, names, categories, and search terms.
    ///
    /// The query is split into whitespace tokens; every token must match at
    /// least one field for an icon to qualify. Scoring favours label matches
    /// over name matches over category/term matches, with a small bonus for
    /// prefix matches so "moto" ranks "motorcycle" ahead of incidental hits.
    pub fn search(&self, query: &str, category_name: Option<&str>) -> Vec<&Icon> {
        let tokens: Vec<String> = query
            .split_whitespace()
            .map(|token| token.to_lowercase())
            .collect();
        if tokens.is_empty() {
            return Vec::new();
        }

        let candidates: Vec<&Icon> = match category_name {
            Some(name) => self.icons_for_category(name),
            None => self.icons.values().collect(),
        };

        let mut hits: Vec<(u32, &Icon)> = candidates
            .into_iter()
            .filter_map(|icon| {
                let mut total = 0;
                for token in &tokens {
                    let score = Self::token_score(icon, token);
                    if score == 0 {
                        return None;
                    }
                    total += score;
                }
                Some((total, icon))
            })
            .collect();

        // Highest score first; name breaks ties so results are stable
        hits.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.name.cmp(&b.1.name)));
        hits.into_iter().map(|(_, icon)| icon).collect()
    }

    fn token_score(icon: &Icon, token: &str) -> u32 {
        let mut score = 0;

        score += field_score(&icon.label.to_lowercase(), token, LABEL_WEIGHT);
        score += field_score(&icon.name.to_lowercase(), token, NAME_WEIGHT);

        for category in &icon.categories {
            score += field_score(&category.to_lowercase(), token, CATEGORY_WEIGHT);
        }
        for term in &icon.search.terms {
            score += field_score(&term.to_lowercase(), token, TERM_WEIGHT);
        }

        score
    }
}

fn field_score(field: &str, token: &str, weight: u32) -> u32 {
    if field == token {
        weight * 3
    } else if field.starts_with(token) {
        weight * 2
    } else if field.contains(token) {
        weight
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryTable, IconTable};

    fn library() -> IconLibrary {
        let icons: IconTable = serde_json::from_str(
            r#"{
                "tent": {
                    "name": "tent",
                    "label": "Tent",
                    "categories": ["camping"],
                    "search": { "terms": ["campsite", "shelter"] },
                    "svgs": { "solid": { "svg": "<svg/>" } }
                },
                "campfire": {
                    "name": "campfire",
                    "label": "Campfire",
                    "categories": ["camping"],
                    "search": { "terms": ["fire"] },
                    "svgs": { "solid": { "svg": "<svg/>" } }
                },
                "motorcycle": {
                    "name": "motorcycle",
                    "label": "Motorcycle",
                    "categories": ["automotive"],
                    "search": { "terms": ["bike"] },
                    "svgs": { "solid": { "svg": "<svg/>" } }
                }
            }"#,
        )
        .expect("Failed to parse test icons");

        let categories: CategoryTable = serde_json::from_str(
            r#"{
                "camping": {
                    "name": "camping",
                    "label": "Camping",
                    "hero_icon": "tent",
                    "icons": ["tent", "campfire", "ghost-icon"]
                },
                "automotive": {
                    "name": "automotive",
                    "label": "Automotive",
                    "hero_icon": "motorcycle",
                    "icons": ["motorcycle"]
                }
            }"#,
        )
        .expect("Failed to parse test categories");

        IconLibrary::new(icons, categories)
    }

    #[test]
    fn test_icon_label_fallback() {
        let lib = library();
        assert_eq!(lib.icon_label("tent"), "Tent");
        assert_eq!(lib.icon_label("no-such-icon"), "Unnamed icon");
    }

    #[test]
    fn test_icons_for_category_skips_unknown_members() {
        let lib = library();
        let icons = lib.icons_for_category("camping");
        let names: Vec<&str> = icons.iter().map(|icon| icon.name.as_str()).collect();
        // "ghost-icon" is listed by the category but has no icon entry
        assert_eq!(names, vec!["tent", "campfire"]);
    }

    #[test]
    fn test_icons_for_unknown_category_is_empty() {
        let lib = library();
        assert!(lib.icons_for_category("nope").is_empty());
    }

    #[test]
    fn test_category_labels_for_icons_dedupes() {
        let lib = library();
        let labels = lib.category_labels_for_icons(&["tent", "campfire", "motorcycle"]);
        assert_eq!(labels, vec!["Camping", "Automotive"]);
    }

    #[test]
    fn test_search_prefix_match() {
        let lib = library();
        let results = lib.search("moto", None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "motorcycle");
    }

    #[test]
    fn test_search_matches_terms() {
        let lib = library();
        let results = lib.search("shelter", None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "tent");
    }

    #[test]
    fn test_search_all_tokens_must_match() {
        let lib = library();
        assert_eq!(lib.search("camp fire", None).len(), 1);
        assert!(lib.search("camp zzz", None).is_empty());
    }

    #[test]
    fn test_search_scoped_to_category() {
        let lib = library();
        // "camping" as a token matches the motorcycle only via nothing;
        // scoping to automotive excludes the camping icons entirely
        let results = lib.search("camp", Some("automotive"));
        assert!(results.is_empty());

        let results = lib.search("camp", Some("camping"));
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_search_label_outranks_term_match() {
        let lib = library();
        // "camp" prefix-matches Campfire's label and name, but only
        // matches tent via its category and the "campsite" term
        let results = lib.search("camp", None);
        assert_eq!(results[0].name, "campfire");
    }

    #[test]
    fn test_search_empty_query() {
        let lib = library();
        assert!(lib.search("   ", None).is_empty());
    }
}
