//! Structured popup content for feature detail display.
//!
//! The content is a small node model, never a markup string: backends turn
//! the nodes into DOM elements or native widgets themselves, so untrusted
//! property values can't smuggle script into the page.

use crate::core::constants::{POPUP_CLASS, POPUP_OFFSET};
use crate::core::geo::LngLat;
use crate::data::geojson::Feature;

/// Image node shown between the description and the link.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupImage {
    pub url: String,
    pub alt: String,
}

/// External link node. `new_tab` and `rel` tell DOM-producing backends to
/// open a new browsing context with no back-reference to the opener.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupLink {
    pub href: String,
    pub label: String,
    pub new_tab: bool,
    pub rel: String,
}

/// Structured detail view for one feature.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    /// Optional heading from the feature's name.
    pub title: Option<String>,
    /// Always present, empty when the feature carries no description.
    pub description: String,
    pub image: Option<PopupImage>,
    pub link: Option<PopupLink>,
}

impl PopupContent {
    /// Composes the content from a feature's properties.
    ///
    /// Empty-string properties count as absent, matching how hand-edited
    /// documents leave fields blank rather than removing them.
    pub fn from_feature(feature: &Feature, link_label: &str) -> Self {
        let name = feature.name().filter(|name| !name.is_empty());

        Self {
            title: name.map(str::to_string),
            description: feature.description().unwrap_or_default().to_string(),
            image: feature
                .picture_url()
                .filter(|url| !url.is_empty())
                .map(|url| PopupImage {
                    url: url.to_string(),
                    alt: name.unwrap_or("Point").to_string(),
                }),
            link: feature
                .link()
                .filter(|href| !href.is_empty())
                .map(|href| PopupLink {
                    href: href.to_string(),
                    label: link_label.to_string(),
                    new_tab: true,
                    rel: "noopener noreferrer".to_string(),
                }),
        }
    }
}

/// A popup command: content anchored at a coordinate, plus the presentation
/// options the widget's popup primitive takes.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupSpec {
    pub anchor: LngLat,
    pub content: PopupContent,
    /// Pixel offset from the anchor.
    pub offset: f64,
    pub close_button: bool,
    pub class_name: String,
}

impl PopupSpec {
    pub fn new(anchor: LngLat, content: PopupContent) -> Self {
        Self {
            anchor,
            content,
            offset: POPUP_OFFSET,
            close_button: false,
            class_name: POPUP_CLASS.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::geojson::Geometry;
    use serde_json::{json, Map, Value};

    fn feature(properties: &[(&str, Value)]) -> Feature {
        let mut map = Map::new();
        for (key, value) in properties {
            map.insert((*key).to_string(), value.clone());
        }
        Feature {
            id: None,
            geometry: Some(Geometry::Point {
                coordinates: [0.0, 0.0],
            }),
            properties: Some(map),
        }
    }

    #[test]
    fn test_full_content() {
        let feature = feature(&[
            ("name", json!("Springfield")),
            ("description", json!("Day 3 stop")),
            ("pictureurl", json!("photo.jpg")),
            ("link", json!("https://example.com/springfield")),
        ]);

        let content = PopupContent::from_feature(&feature, "En savoir plus");

        assert_eq!(content.title.as_deref(), Some("Springfield"));
        assert_eq!(content.description, "Day 3 stop");

        let image = content.image.unwrap();
        assert_eq!(image.url, "photo.jpg");
        assert_eq!(image.alt, "Springfield");

        let link = content.link.unwrap();
        assert_eq!(link.href, "https://example.com/springfield");
        assert_eq!(link.label, "En savoir plus");
        assert!(link.new_tab);
        assert_eq!(link.rel, "noopener noreferrer");
    }

    #[test]
    fn test_missing_properties_degrade_quietly() {
        let content = PopupContent::from_feature(&feature(&[]), "More");

        assert_eq!(content.title, None);
        assert_eq!(content.description, "");
        assert_eq!(content.image, None);
        assert_eq!(content.link, None);
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let feature = feature(&[
            ("name", json!("")),
            ("pictureurl", json!("photo.jpg")),
            ("link", json!("")),
        ]);

        let content = PopupContent::from_feature(&feature, "More");

        assert_eq!(content.title, None);
        assert_eq!(content.image.unwrap().alt, "Point");
        assert_eq!(content.link, None);
    }

    #[test]
    fn test_untrusted_values_stay_data() {
        let feature = feature(&[("description", json!("<script>alert(1)</script>"))]);
        let content = PopupContent::from_feature(&feature, "More");

        // The node model carries the raw text; there is no markup channel.
        assert_eq!(content.description, "<script>alert(1)</script>");
    }

    #[test]
    fn test_popup_spec_defaults() {
        let spec = PopupSpec::new(
            LngLat::new(1.0, 2.0),
            PopupContent::from_feature(&feature(&[]), "More"),
        );

        assert_eq!(spec.offset, 16.0);
        assert!(!spec.close_button);
        assert_eq!(spec.class_name, "map-popup");
    }
}
