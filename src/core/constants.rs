//! Identifiers and fixed style values shared across the setup pipeline.
//! Keeping them in a single place makes it easier to tweak the widget-facing
//! naming without chasing string literals.

/// Name under which the feature collection is registered with the widget.
pub const SOURCE_ID: &str = "map-data";

/// Dashed route line layer.
pub const LINE_LAYER_ID: &str = "map-line";

/// Avatar symbols for plain (non-POI) waypoints.
pub const POINT_AVATAR_LAYER_ID: &str = "map-point-avatar";

/// Name labels for plain waypoints.
pub const POINT_LABEL_LAYER_ID: &str = "map-point-label";

/// Per-feature icons for points of interest.
pub const POI_LAYER_ID: &str = "map-poi";

/// Prefix of the per-POI icon identifiers in the widget's image atlas.
pub const POI_ICON_PREFIX: &str = "poi-icon-";

/// Atlas name of the generic avatar icon.
pub const AVATAR_ICON_ID: &str = "avatar";

/// `properties.type` value marking a point of interest.
pub const POI_TYPE: &str = "POI";

/// `properties.name` given to the synthesized route feature.
pub const ROUTE_FEATURE_NAME: &str = "Route";

/// Icon scale applied to avatar and POI symbols.
pub const ICON_SIZE: f64 = 0.05;

/// Popup anchor offset in pixels.
pub const POPUP_OFFSET: f64 = 16.0;

/// CSS class handed to DOM-producing popup backends.
pub const POPUP_CLASS: &str = "map-popup";
