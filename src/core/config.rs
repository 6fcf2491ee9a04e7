//! Static configuration for one map session: widget options, resource
//! locations and the knobs the load sequence honors.

use crate::core::geo::LngLat;

/// How a failing POI image load affects the rest of the setup sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PoiImagePolicy {
    /// Any image failure aborts the remaining setup steps.
    #[default]
    Fatal,
    /// Log and skip the image; the feature renders without an icon.
    FailSoft,
}

/// Camera framing options for fit-bounds commands.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    /// Padding in pixels kept around the framed bounds.
    pub padding: f64,
    /// Zoom ceiling, so a single point or tight cluster is not over-zoomed.
    pub max_zoom: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            padding: 48.0,
            max_zoom: 8.0,
        }
    }
}

/// Static configuration for one map session.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// Access credential forwarded to the widget.
    pub access_token: String,
    /// Widget style URL.
    pub style: String,
    /// Initial camera center.
    pub center: LngLat,
    /// Initial camera zoom.
    pub zoom: f64,
    /// Location of the journey document.
    pub geojson_url: String,
    /// Location of the generic avatar icon.
    pub avatar_url: String,
    /// Label of the external link shown in popups.
    pub popup_link_label: String,
    /// Behavior when a POI image fails to load.
    pub poi_image_policy: PoiImagePolicy,
    /// Camera framing applied after setup.
    pub fit: FitOptions,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            access_token:
                "pk.eyJ1IjoicGFjaGlyb24iLCJhIjoiY2xiZjBuMzVmMDFzNzNubXJhdTQwMTFldCJ9.CB4AVXkG_Ow0XPYRT_CI5A"
                    .to_string(),
            style: "mapbox://styles/mapbox/standard".to_string(),
            center: LngLat::new(-93.28783303276339, 37.20398932063159),
            zoom: 4.0,
            geojson_url: "resources/map.geojson".to_string(),
            avatar_url: "resources/img/avatar_bulle.png".to_string(),
            popup_link_label: "En savoir plus".to_string(),
            poi_image_policy: PoiImagePolicy::default(),
            fit: FitOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fit_options() {
        let options = FitOptions::default();
        assert_eq!(options.padding, 48.0);
        assert_eq!(options.max_zoom, 8.0);
    }

    #[test]
    fn test_default_policy_is_fatal() {
        assert_eq!(PoiImagePolicy::default(), PoiImagePolicy::Fatal);
        assert_eq!(MapConfig::default().poi_image_policy, PoiImagePolicy::Fatal);
    }
}
