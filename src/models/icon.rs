use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The icon table: icon name -> rendering metadata.
/// This is the shape of the large JSON document the loader fetches.
pub type IconTable = HashMap<String, Icon>;

/// Rendering styles an icon may ship SVGs for.
/// Kebab-case on the wire, matching the published library files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconStyle {
    Solid,
    Regular,
    Light,
    Thin,
    Duotone,
    SharpSolid,
    SharpRegular,
    SharpLight,
    SharpThin,
    Brands,
    Coloured,
    ColouredOutlined,
    Outlined,
}

impl IconStyle {
    /// Human-readable style name: "sharp-solid" becomes "Sharp Solid"
    pub fn display_name(&self) -> String {
        self.wire_name()
            .split('-')
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The kebab-case name used in the JSON documents
    pub fn wire_name(&self) -> &'static str {
        match self {
            IconStyle::Solid => "solid",
            IconStyle::Regular => "regular",
            IconStyle::Light => "light",
            IconStyle::Thin => "thin",
            IconStyle::Duotone => "duotone",
            IconStyle::SharpSolid => "sharp-solid",
            IconStyle::SharpRegular => "sharp-regular",
            IconStyle::SharpLight => "sharp-light",
            IconStyle::SharpThin => "sharp-thin",
            IconStyle::Brands => "brands",
            IconStyle::Coloured => "coloured",
            IconStyle::ColouredOutlined => "coloured-outlined",
            IconStyle::Outlined => "outlined",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Icon {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub search: SearchTerms,
    #[serde(default)]
    pub svgs: HashMap<IconStyle, SvgVariant>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchTerms {
    #[serde(default)]
    pub terms: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SvgVariant {
    /// Icons whose palette is part of their identity can't be recoloured
    #[serde(default)]
    pub colour_locked: bool,
    pub svg: String,
}

impl Icon {
    /// Styles this icon ships an SVG for
    pub fn available_styles(&self) -> Vec<IconStyle> {
        self.svgs.keys().copied().collect()
    }

    /// Preferred style when none is chosen: coloured variants win over monochrome,
    /// then the library default, then whatever the icon has.
    pub fn default_style(&self) -> Option<IconStyle> {
        for style in [IconStyle::Coloured, IconStyle::ColouredOutlined, IconStyle::Solid] {
            if self.svgs.contains_key(&style) {
                return Some(style);
            }
        }
        self.svgs.keys().next().copied()
    }

    /// SVG source for a style, if the icon ships one
    pub fn svg(&self, style: IconStyle) -> Option<&str> {
        self.svgs.get(&style).map(|variant| variant.svg.as_str())
    }

    pub fn is_colour_locked(&self, style: IconStyle) -> bool {
        self.svgs
            .get(&style)
            .map(|variant| variant.colour_locked)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_icon_json() -> &'static str {
        r#"{
            "name": "tent",
            "label": "Tent",
            "categories": ["camping", "maps"],
            "search": { "terms": ["campsite", "shelter"] },
            "svgs": {
                "solid": { "svg": "<svg>solid</svg>" },
                "duotone": { "svg": "<svg>duo</svg>" },
                "coloured": { "colour_locked": true, "svg": "<svg>col</svg>" }
            }
        }"#
    }

    #[test]
    fn test_parse_icon() {
        let icon: Icon = serde_json::from_str(sample_icon_json()).expect("Failed to parse icon");
        assert_eq!(icon.name, "tent");
        assert_eq!(icon.categories, vec!["camping", "maps"]);
        assert_eq!(icon.search.terms, vec!["campsite", "shelter"]);
        assert_eq!(icon.svg(IconStyle::Solid), Some("<svg>solid</svg>"));
        assert_eq!(icon.svg(IconStyle::Brands), None);
    }

    #[test]
    fn test_parse_icon_missing_optional_fields() {
        let icon: Icon = serde_json::from_str(r#"{"name": "dot", "label": "Dot"}"#)
            .expect("Failed to parse minimal icon");
        assert!(icon.categories.is_empty());
        assert!(icon.search.terms.is_empty());
        assert!(icon.svgs.is_empty());
        assert_eq!(icon.default_style(), None);
    }

    #[test]
    fn test_default_style_prefers_coloured() {
        let icon: Icon = serde_json::from_str(sample_icon_json()).expect("Failed to parse icon");
        assert_eq!(icon.default_style(), Some(IconStyle::Coloured));
    }

    #[test]
    fn test_default_style_falls_back_to_solid() {
        let icon: Icon = serde_json::from_str(
            r#"{"name": "x", "label": "X", "svgs": {"thin": {"svg": "a"}, "solid": {"svg": "b"}}}"#,
        )
        .expect("Failed to parse icon");
        assert_eq!(icon.default_style(), Some(IconStyle::Solid));
    }

    #[test]
    fn test_colour_locked() {
        let icon: Icon = serde_json::from_str(sample_icon_json()).expect("Failed to parse icon");
        assert!(icon.is_colour_locked(IconStyle::Coloured));
        assert!(!icon.is_colour_locked(IconStyle::Solid));
        assert!(!icon.is_colour_locked(IconStyle::Brands));
    }

    #[test]
    fn test_style_display_name() {
        assert_eq!(IconStyle::Solid.display_name(), "Solid");
        assert_eq!(IconStyle::SharpSolid.display_name(), "Sharp Solid");
        assert_eq!(IconStyle::ColouredOutlined.display_name(), "Coloured Outlined");
    }

    #[test]
    fn test_style_wire_name_round_trip() {
        let style: IconStyle = serde_json::from_str("\"sharp-regular\"").expect("Failed to parse style");
        assert_eq!(style, IconStyle::SharpRegular);
        assert_eq!(serde_json::to_string(&style).unwrap(), "\"sharp-regular\"");
    }
}
