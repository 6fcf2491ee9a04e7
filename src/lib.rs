//! # travelmap
//!
//! Setup engine for a travel map: loads a GeoJSON journey document, derives
//! a day-ordered route line from its waypoints, declares line/symbol layers,
//! composes feature popups, gates scroll-zoom behind a modifier key and
//! frames the camera over everything rendered.
//!
//! The mapping widget itself (tiles, style, symbol placement, hit testing)
//! is an external collaborator reached through the [`MapBackend`] trait, so
//! the whole pipeline runs unchanged against a GL widget, a WASM binding or
//! the bundled [`HeadlessBackend`].

pub mod backend;
pub mod core;
pub mod data;
pub mod input;
pub mod layers;
pub mod setup;
pub mod ui;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{FitOptions, MapConfig, PoiImagePolicy},
    geo::{LngLat, LngLatBounds, Point},
    viewport::Viewport,
};

pub use crate::data::{
    geojson::{Feature, FeatureCollection, Geometry},
    icons::{assign_poi_icons, poi_images},
    loader::load_feature_collection,
    route::{build_route, ensure_route},
};

pub use crate::backend::{headless::HeadlessBackend, Cursor, ImageData, MapBackend};

pub use crate::input::{
    binder::InteractionBinder,
    events::{LayerEvent, ScrollZoomGate, WheelDisposition, WheelInput},
};

pub use crate::layers::spec::{LayerKind, LayerSpec};

pub use crate::ui::popup::{PopupContent, PopupImage, PopupLink, PopupSpec};

pub use crate::setup::{fit_to_data, register_image, MapSession};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("geojson load failed: HTTP {status} for {url}")]
    Http { status: u16, url: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("image load failed for {url}: {reason}")]
    Image { url: String, reason: String },

    #[error("layer error: {0}")]
    Layer(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Error type alias for convenience
pub type Error = MapError;
