//! Route synthesis: a LineString following the day-ordered waypoints.

use crate::core::constants::ROUTE_FEATURE_NAME;
use crate::data::geojson::{Feature, FeatureCollection, Geometry};
use serde_json::{Map, Value};

/// Builds a LineString feature from points sorted by their `day` property.
///
/// Only Point features carrying a finite numeric `day` participate; ties
/// keep encounter order. Returns `None` when fewer than two points qualify —
/// a valid outcome, not an error. Never mutates its input.
pub fn build_route(features: &[Feature]) -> Option<Feature> {
    let mut points: Vec<(f64, [f64; 2])> = Vec::new();

    for feature in features {
        let Some(coordinates) = feature.point_coordinates() else {
            continue;
        };
        let Some(day) = feature.day() else {
            continue;
        };
        points.push((day, coordinates));
    }

    if points.len() < 2 {
        return None;
    }

    // Days are pre-filtered finite, so total_cmp is the plain ascending
    // order; sort_by is stable, preserving encounter order on ties.
    points.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut properties = Map::new();
    properties.insert(
        "name".to_string(),
        Value::String(ROUTE_FEATURE_NAME.to_string()),
    );

    Some(Feature {
        id: None,
        geometry: Some(Geometry::LineString {
            coordinates: points.into_iter().map(|(_, coords)| coords).collect(),
        }),
        properties: Some(properties),
    })
}

/// Appends the synthesized route to the collection when one exists;
/// otherwise leaves the collection untouched.
pub fn ensure_route(collection: &mut FeatureCollection) {
    if let Some(route) = build_route(&collection.features) {
        collection.features.push(route);
    }
}
