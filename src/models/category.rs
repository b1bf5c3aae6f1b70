use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The category table: category name -> display metadata and member icons.
/// This is the smaller of the two JSON documents the loader fetches.
pub type CategoryTable = HashMap<String, Category>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub label: String,
    pub hero_icon: String,
    #[serde(default)]
    pub icons: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_table() {
        let json = r#"{
            "camping": {
                "name": "camping",
                "label": "Camping",
                "hero_icon": "tent",
                "icons": ["tent", "campfire", "compass"]
            }
        }"#;

        let table: CategoryTable = serde_json::from_str(json).expect("Failed to parse categories");
        let camping = table.get("camping").expect("Missing camping category");
        assert_eq!(camping.label, "Camping");
        assert_eq!(camping.hero_icon, "tent");
        assert_eq!(camping.icons.len(), 3);
    }
}
