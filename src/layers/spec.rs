//! The four rendering rules this map declares, as style-spec layer objects.
//! Registration order determines paint order: the route line goes under all
//! point symbols.

use crate::core::constants::{
    AVATAR_ICON_ID, ICON_SIZE, LINE_LAYER_ID, POINT_AVATAR_LAYER_ID, POINT_LABEL_LAYER_ID,
    POI_LAYER_ID, POI_TYPE,
};
use crate::layers::expression;
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;

/// Style-spec layer kinds used by this pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Line,
    Symbol,
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerKind::Line => write!(f, "line"),
            LayerKind::Symbol => write!(f, "symbol"),
        }
    }
}

/// A declarative rendering rule registered against the widget: geometry
/// filter plus layout and paint values, serialized as a style-spec object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerSpec {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: LayerKind,
    pub source: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub filter: Value,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub layout: Value,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub paint: Value,
}

/// Dashed route stroke. The geometry-type filter is also what keeps the
/// synthesized route out of every point-targeted layer.
pub fn route_line(source: &str) -> LayerSpec {
    LayerSpec {
        id: LINE_LAYER_ID.to_string(),
        kind: LayerKind::Line,
        source: source.to_string(),
        filter: expression::geometry_is("LineString"),
        layout: Value::Null,
        paint: json!({
            "line-color": "#1f2937",
            "line-width": 1,
            "line-dasharray": [5, 10],
        }),
    }
}

/// Avatar symbols on every plain (non-POI) waypoint.
pub fn avatar_points(source: &str) -> LayerSpec {
    LayerSpec {
        id: POINT_AVATAR_LAYER_ID.to_string(),
        kind: LayerKind::Symbol,
        source: source.to_string(),
        filter: expression::all(&[
            expression::geometry_is("Point"),
            expression::not_equals("type", POI_TYPE),
        ]),
        layout: json!({
            "icon-image": AVATAR_ICON_ID,
            "icon-size": ICON_SIZE,
            "icon-allow-overlap": true,
        }),
        paint: Value::Null,
    }
}

/// Name labels under the avatar symbols; labels may drop out rather than
/// overlap.
pub fn point_labels(source: &str) -> LayerSpec {
    LayerSpec {
        id: POINT_LABEL_LAYER_ID.to_string(),
        kind: LayerKind::Symbol,
        source: source.to_string(),
        filter: expression::all(&[
            expression::geometry_is("Point"),
            expression::not_equals("type", POI_TYPE),
        ]),
        layout: json!({
            "text-field": expression::get("name"),
            "text-size": 14,
            "text-offset": [0, 1.25],
            "text-anchor": "top",
            "text-allow-overlap": false,
        }),
        paint: json!({
            "text-color": "#1f2937",
            "text-halo-color": "#ffffff",
            "text-halo-width": 1,
        }),
    }
}

/// POI symbols, each selecting its atlas image through the feature's
/// `iconId`. Untagged POIs resolve to no image and render without an icon.
pub fn poi_points(source: &str) -> LayerSpec {
    LayerSpec {
        id: POI_LAYER_ID.to_string(),
        kind: LayerKind::Symbol,
        source: source.to_string(),
        filter: expression::all(&[
            expression::geometry_is("Point"),
            expression::equals("type", POI_TYPE),
        ]),
        layout: json!({
            "icon-image": expression::get("iconId"),
            "icon-size": ICON_SIZE,
            "icon-allow-overlap": true,
        }),
        paint: Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_layer_kind_display() {
        assert_eq!(LayerKind::Line.to_string(), "line");
        assert_eq!(LayerKind::Symbol.to_string(), "symbol");
    }

    #[test]
    fn test_route_line_spec() {
        let layer = route_line("map-data");
        assert_eq!(layer.id, "map-line");
        assert_eq!(layer.kind, LayerKind::Line);
        assert_eq!(layer.filter, json!(["==", ["geometry-type"], "LineString"]));
        assert_eq!(layer.paint["line-dasharray"], json!([5, 10]));
    }

    #[test]
    fn test_point_layers_exclude_pois() {
        for layer in [avatar_points("map-data"), point_labels("map-data")] {
            assert_eq!(
                layer.filter,
                json!([
                    "all",
                    ["==", ["geometry-type"], "Point"],
                    ["!=", ["get", "type"], "POI"]
                ])
            );
        }
    }

    #[test]
    fn test_poi_layer_reads_icon_id() {
        let layer = poi_points("map-data");
        assert_eq!(
            layer.filter,
            json!([
                "all",
                ["==", ["geometry-type"], "Point"],
                ["==", ["get", "type"], "POI"]
            ])
        );
        assert_eq!(layer.layout["icon-image"], json!(["get", "iconId"]));
    }

    #[test]
    fn test_serialized_layer_uses_style_spec_keys() {
        let value = serde_json::to_value(route_line("map-data")).unwrap();
        assert_eq!(value["type"], json!("line"));
        assert_eq!(value["source"], json!("map-data"));
        assert!(value.get("layout").is_none());
    }
}
