//! Serde data model for the journey document, plus the typed property
//! accessors the pipeline reads. Only the fields the pipeline consumes get
//! accessors; everything else rides along untouched in the property map.

use crate::core::constants::POI_TYPE;
use crate::core::geo::LngLatBounds;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const PROP_DAY: &str = "day";
const PROP_TYPE: &str = "type";
const PROP_NAME: &str = "name";
const PROP_DESCRIPTION: &str = "description";
const PROP_PICTURE_URL: &str = "pictureurl";
const PROP_LINK: &str = "link";
const PROP_IMAGE: &str = "image";
const PROP_ICON_ID: &str = "iconId";

/// GeoJSON geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        coordinates: [f64; 2],
    },
    LineString {
        coordinates: Vec<[f64; 2]>,
    },
    Polygon {
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    MultiPoint {
        coordinates: Vec<[f64; 2]>,
    },
    MultiLineString {
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<[f64; 2]>>>,
    },
}

impl Geometry {
    /// Extends the bounds by this geometry's coordinates.
    ///
    /// Viewport framing follows waypoints and the synthesized route only, so
    /// geometry kinds other than Point and LineString contribute nothing.
    pub fn extend_bounds(&self, bounds: &mut LngLatBounds) {
        match self {
            Geometry::Point { coordinates } => bounds.extend_coordinate(*coordinates),
            Geometry::LineString { coordinates } => {
                for coordinate in coordinates {
                    bounds.extend_coordinate(*coordinate);
                }
            }
            _ => {}
        }
    }
}

/// GeoJSON feature with geometry and properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Feature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub geometry: Option<Geometry>,
    pub properties: Option<Map<String, Value>>,
}

impl Feature {
    /// Looks up a raw property value
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref()?.get(key)
    }

    /// Looks up a string property
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.property(key)?.as_str()
    }

    /// Numeric `day` ordering key.
    ///
    /// Hand-edited documents carry days both as JSON numbers and as numeric
    /// strings; both count. Non-finite and non-numeric values count as
    /// absent, never as errors.
    pub fn day(&self) -> Option<f64> {
        let day = match self.property(PROP_DAY)? {
            Value::Number(number) => number.as_f64()?,
            Value::String(text) => text.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        day.is_finite().then_some(day)
    }

    pub fn name(&self) -> Option<&str> {
        self.property_str(PROP_NAME)
    }

    pub fn description(&self) -> Option<&str> {
        self.property_str(PROP_DESCRIPTION)
    }

    pub fn picture_url(&self) -> Option<&str> {
        self.property_str(PROP_PICTURE_URL)
    }

    pub fn link(&self) -> Option<&str> {
        self.property_str(PROP_LINK)
    }

    /// POI image URL; empty strings count as absent
    pub fn image_url(&self) -> Option<&str> {
        self.property_str(PROP_IMAGE).filter(|url| !url.is_empty())
    }

    /// Atlas icon identifier assigned by the icon assigner
    pub fn icon_id(&self) -> Option<&str> {
        self.property_str(PROP_ICON_ID)
    }

    /// Tags the feature with an atlas icon identifier
    pub fn set_icon_id(&mut self, icon_id: String) {
        self.properties
            .get_or_insert_with(Map::new)
            .insert(PROP_ICON_ID.to_string(), Value::String(icon_id));
    }

    /// Whether the feature is marked as a point of interest
    pub fn is_poi(&self) -> bool {
        self.property_str(PROP_TYPE) == Some(POI_TYPE)
    }

    /// The coordinate pair of a Point feature
    pub fn point_coordinates(&self) -> Option<[f64; 2]> {
        match &self.geometry {
            Some(Geometry::Point { coordinates }) => Some(*coordinates),
            _ => None,
        }
    }
}

/// Root GeoJSON object of the journey document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Union bounding box over every Point and LineString coordinate.
    ///
    /// `None` when no geometry contributes, so callers can treat "nothing to
    /// frame" as a plain no-op.
    pub fn bounds(&self) -> Option<LngLatBounds> {
        let mut bounds = LngLatBounds::empty();

        for feature in &self.features {
            if let Some(geometry) = &feature.geometry {
                geometry.extend_bounds(&mut bounds);
            }
        }

        if bounds.is_empty() {
            None
        } else {
            Some(bounds)
        }
    }
}
