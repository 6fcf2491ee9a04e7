//! The mapping-collaborator seam.
//!
//! Everything the pipeline does to the map goes through [`MapBackend`]; the
//! widget behind it owns the camera, the layer stack and the image atlas.
//! Keeping the contract behind a trait means the load sequence runs
//! unchanged against a GL widget binding, a WASM bridge or the in-memory
//! [`headless::HeadlessBackend`].

pub mod headless;

use crate::core::config::FitOptions;
use crate::core::geo::LngLatBounds;
use crate::data::geojson::FeatureCollection;
use crate::layers::spec::LayerSpec;
use crate::ui::popup::PopupSpec;
use crate::Result;
use async_trait::async_trait;

/// Mouse cursor shown over the widget canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}

/// An image payload for the widget's atlas. The bytes are the encoded
/// asset; decoding is the widget's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    pub bytes: Vec<u8>,
}

/// Contract of the external mapping widget.
#[async_trait]
pub trait MapBackend {
    /// Registers a dataset under a name, referenced by layers.
    fn add_source(&mut self, id: &str, collection: &FeatureCollection) -> Result<()>;

    /// Registers a rendering rule; later layers paint above earlier ones.
    fn add_layer(&mut self, layer: &LayerSpec) -> Result<()>;

    /// Fetches one image asset.
    async fn load_image(&mut self, url: &str) -> Result<ImageData>;

    /// Registers a loaded image in the atlas under a name.
    fn add_image(&mut self, name: &str, image: ImageData) -> Result<()>;

    /// Whether the atlas already holds an image under this name.
    fn has_image(&self, name: &str) -> bool;

    /// Frames the camera over the bounds, honoring padding and the zoom
    /// ceiling.
    fn fit_bounds(&mut self, bounds: &LngLatBounds, options: &FitOptions);

    /// Opens a popup, replacing any popup currently open.
    fn show_popup(&mut self, popup: PopupSpec) -> Result<()>;

    /// Sets the cursor shown over the canvas.
    fn set_cursor(&mut self, cursor: Cursor);
}
