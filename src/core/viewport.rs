use crate::core::config::FitOptions;
use crate::core::geo::{LngLat, LngLatBounds, Point};
use serde::{Deserialize, Serialize};

/// Camera state for a headless rendering surface: center, zoom and the
/// surface size in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: LngLat,
    /// The current zoom level
    pub zoom: f64,
    /// The size of the viewport in pixels
    pub size: Point,
    /// The minimum allowed zoom level
    pub min_zoom: f64,
    /// The maximum allowed zoom level
    pub max_zoom: f64,
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(center: LngLat, zoom: f64, size: Point) -> Self {
        Self {
            center,
            zoom: zoom.clamp(0.0, 22.0),
            size,
            min_zoom: 0.0,
            max_zoom: 22.0,
        }
    }

    /// Sets the zoom level, clamping to valid range
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Fits the viewport to contain the given bounds.
    ///
    /// Centers on the bounds and scans integer zooms for the largest level
    /// at which the padded projection still fits, never exceeding
    /// `options.max_zoom`. Empty bounds leave the camera untouched.
    pub fn fit_bounds(&mut self, bounds: &LngLatBounds, options: &FitOptions) {
        if bounds.is_empty() {
            return;
        }

        self.center = bounds.center();

        let usable = Point::new(
            (self.size.x - 2.0 * options.padding).max(1.0),
            (self.size.y - 2.0 * options.padding).max(1.0),
        );

        let ceiling = options.max_zoom.min(self.max_zoom);
        let mut best_zoom = self.min_zoom;

        for test_zoom in (self.min_zoom as i32)..=(ceiling as i32) {
            let zoom = test_zoom as f64;

            let nw = LngLat::new(bounds.south_west.lng, bounds.north_east.lat).project(zoom);
            let se = LngLat::new(bounds.north_east.lng, bounds.south_west.lat).project(zoom);

            let bounds_width = (se.x - nw.x).abs();
            let bounds_height = (se.y - nw.y).abs();

            if bounds_width <= usable.x && bounds_height <= usable.y {
                best_zoom = zoom;
            } else {
                break;
            }
        }

        self.set_zoom(best_zoom.min(ceiling));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(LngLat::new(0.0, 0.0), 4.0, Point::new(800.0, 600.0))
    }

    #[test]
    fn test_empty_bounds_leave_camera_untouched() {
        let mut viewport = viewport();
        let before = viewport.clone();

        viewport.fit_bounds(&LngLatBounds::empty(), &FitOptions::default());
        assert_eq!(viewport, before);
    }

    #[test]
    fn test_single_point_lands_on_zoom_ceiling() {
        let mut viewport = viewport();
        let mut bounds = LngLatBounds::empty();
        bounds.extend_coordinate([2.3522, 48.8566]);

        viewport.fit_bounds(&bounds, &FitOptions::default());

        assert_eq!(viewport.zoom, 8.0);
        assert_eq!(viewport.center, LngLat::new(2.3522, 48.8566));
    }

    #[test]
    fn test_wide_bounds_stay_below_ceiling() {
        let mut viewport = viewport();
        let mut bounds = LngLatBounds::empty();
        bounds.extend_coordinate([-120.0, 30.0]);
        bounds.extend_coordinate([-70.0, 45.0]);

        viewport.fit_bounds(&bounds, &FitOptions::default());

        assert!(viewport.zoom < 8.0);
        assert_eq!(viewport.center, LngLat::new(-95.0, 37.5));
    }
}
