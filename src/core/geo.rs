use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Web Mercator projection constants
const WORLD_SIZE: f64 = 256.0;
const MAX_LATITUDE: f64 = 85.0511287798;

/// A geographical coordinate in GeoJSON order: longitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    /// Creates a new LngLat coordinate
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Creates a coordinate from a GeoJSON `[lng, lat]` pair
    pub fn from_coordinate(coordinate: [f64; 2]) -> Self {
        Self::new(coordinate[0], coordinate[1])
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Projects to world pixel space at the given zoom (256px world at zoom 0)
    pub fn project(&self, zoom: f64) -> Point {
        let scale = WORLD_SIZE * 2f64.powf(zoom);
        let lat = self.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let x = (self.lng + 180.0) / 360.0 * scale;
        let y = (1.0 - ((PI / 4.0 + lat / 2.0).tan().ln()) / PI) / 2.0 * scale;
        Point::new(x, y)
    }
}

impl Default for LngLat {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a point in screen or projected coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// A bounding box of geographical coordinates.
///
/// Starts out empty (inverted infinities) and snaps onto the first extended
/// coordinate, so a union over an arbitrary feature walk needs no special
/// first-element case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LngLatBounds {
    pub south_west: LngLat,
    pub north_east: LngLat,
}

impl LngLatBounds {
    pub fn new(south_west: LngLat, north_east: LngLat) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Creates empty bounds that any `extend` call will snap onto
    pub fn empty() -> Self {
        Self::new(
            LngLat::new(f64::INFINITY, f64::INFINITY),
            LngLat::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        )
    }

    /// True until at least one coordinate has been extended into the bounds
    pub fn is_empty(&self) -> bool {
        self.south_west.lng > self.north_east.lng || self.south_west.lat > self.north_east.lat
    }

    /// Extends the bounds to include a coordinate
    pub fn extend(&mut self, point: &LngLat) {
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
    }

    /// Extends the bounds to include a GeoJSON `[lng, lat]` pair
    pub fn extend_coordinate(&mut self, coordinate: [f64; 2]) {
        self.extend(&LngLat::from_coordinate(coordinate));
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LngLat {
        LngLat::new(
            (self.south_west.lng + self.north_east.lng) / 2.0,
            (self.south_west.lat + self.north_east.lat) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lnglat_from_coordinate() {
        let point = LngLat::from_coordinate([-74.0060, 40.7128]);
        assert_eq!(point.lng, -74.0060);
        assert_eq!(point.lat, 40.7128);
        assert!(point.is_valid());
    }

    #[test]
    fn test_empty_bounds_snap_onto_first_point() {
        let mut bounds = LngLatBounds::empty();
        assert!(bounds.is_empty());

        bounds.extend(&LngLat::new(2.0, 48.0));
        assert!(!bounds.is_empty());
        assert_eq!(bounds.south_west, LngLat::new(2.0, 48.0));
        assert_eq!(bounds.north_east, LngLat::new(2.0, 48.0));
    }

    #[test]
    fn test_bounds_extend_and_center() {
        let mut bounds = LngLatBounds::empty();
        bounds.extend_coordinate([0.0, 0.0]);
        bounds.extend_coordinate([10.0, 20.0]);

        assert_eq!(bounds.south_west, LngLat::new(0.0, 0.0));
        assert_eq!(bounds.north_east, LngLat::new(10.0, 20.0));
        assert_eq!(bounds.center(), LngLat::new(5.0, 10.0));
    }

    #[test]
    fn test_projection_is_monotonic_in_lng() {
        let west = LngLat::new(-10.0, 0.0).project(4.0);
        let east = LngLat::new(10.0, 0.0).project(4.0);
        assert!(west.x < east.x);
    }
}
