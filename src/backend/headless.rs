//! In-memory mapping widget for tests, tooling and server-side checks.

use crate::backend::{Cursor, ImageData, MapBackend};
use crate::core::config::FitOptions;
use crate::core::geo::LngLatBounds;
use crate::core::viewport::Viewport;
use crate::data::geojson::FeatureCollection;
use crate::data::loader;
use crate::layers::spec::LayerSpec;
use crate::ui::popup::PopupSpec;
use crate::{MapError, Result};
use async_trait::async_trait;
use fxhash::FxHashMap as HashMap;

/// Keeps the registries the real widget would — source, layer order, image
/// atlas, the single open popup — and a camera with real fit-bounds math.
pub struct HeadlessBackend {
    viewport: Viewport,
    source: Option<(String, FeatureCollection)>,
    layers: Vec<LayerSpec>,
    images: HashMap<String, ImageData>,
    popup: Option<PopupSpec>,
    cursor: Cursor,
    fetch_images: bool,
}

impl HeadlessBackend {
    /// Backend that fetches image assets over HTTP.
    pub fn new(viewport: Viewport) -> Self {
        Self::build(viewport, true)
    }

    /// Backend that refuses to fetch: every image must be preloaded with
    /// [`insert_image`](Self::insert_image); any other load call fails.
    pub fn offline(viewport: Viewport) -> Self {
        Self::build(viewport, false)
    }

    fn build(viewport: Viewport, fetch_images: bool) -> Self {
        Self {
            viewport,
            source: None,
            layers: Vec::new(),
            images: HashMap::default(),
            popup: None,
            cursor: Cursor::Default,
            fetch_images,
        }
    }

    /// Preloads an atlas image under a name.
    pub fn insert_image(&mut self, name: &str, image: ImageData) {
        self.images.insert(name.to_string(), image);
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn source(&self) -> Option<&FeatureCollection> {
        self.source.as_ref().map(|(_, collection)| collection)
    }

    pub fn layers(&self) -> &[LayerSpec] {
        &self.layers
    }

    /// Layer identifiers in registration (paint) order.
    pub fn layer_ids(&self) -> Vec<&str> {
        self.layers.iter().map(|layer| layer.id.as_str()).collect()
    }

    pub fn popup(&self) -> Option<&PopupSpec> {
        self.popup.as_ref()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
}

#[async_trait]
impl MapBackend for HeadlessBackend {
    fn add_source(&mut self, id: &str, collection: &FeatureCollection) -> Result<()> {
        if self.source.is_some() {
            return Err(MapError::Backend(format!(
                "a source is already registered, cannot add {}",
                id
            )));
        }
        self.source = Some((id.to_string(), collection.clone()));
        Ok(())
    }

    fn add_layer(&mut self, layer: &LayerSpec) -> Result<()> {
        if self.layers.iter().any(|existing| existing.id == layer.id) {
            return Err(MapError::Layer(format!("layer {} already exists", layer.id)));
        }
        match &self.source {
            Some((id, _)) if *id == layer.source => {}
            _ => {
                return Err(MapError::Layer(format!(
                    "unknown source {} for layer {}",
                    layer.source, layer.id
                )))
            }
        }
        self.layers.push(layer.clone());
        Ok(())
    }

    async fn load_image(&mut self, url: &str) -> Result<ImageData> {
        if !self.fetch_images {
            return Err(MapError::Image {
                url: url.to_string(),
                reason: "offline backend has no preloaded image for this url".to_string(),
            });
        }
        let bytes = loader::fetch_bytes(url).await?;
        Ok(ImageData { bytes })
    }

    fn add_image(&mut self, name: &str, image: ImageData) -> Result<()> {
        self.images.insert(name.to_string(), image);
        Ok(())
    }

    fn has_image(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    fn fit_bounds(&mut self, bounds: &LngLatBounds, options: &FitOptions) {
        self.viewport.fit_bounds(bounds, options);
    }

    fn show_popup(&mut self, popup: PopupSpec) -> Result<()> {
        self.popup = Some(popup);
        Ok(())
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::{LngLat, Point};
    use crate::layers::spec;
    use crate::ui::popup::PopupContent;

    fn backend_with_source() -> HeadlessBackend {
        let mut backend = HeadlessBackend::offline(Viewport::new(
            LngLat::new(0.0, 0.0),
            4.0,
            Point::new(800.0, 600.0),
        ));
        backend
            .add_source("map-data", &FeatureCollection { features: vec![] })
            .unwrap();
        backend
    }

    #[test]
    fn test_duplicate_layer_is_rejected() {
        let mut backend = backend_with_source();
        backend.add_layer(&spec::route_line("map-data")).unwrap();

        let err = backend.add_layer(&spec::route_line("map-data")).unwrap_err();
        assert!(matches!(err, MapError::Layer(_)));
    }

    #[test]
    fn test_layer_against_unknown_source_is_rejected() {
        let mut backend = backend_with_source();
        let err = backend.add_layer(&spec::route_line("elsewhere")).unwrap_err();
        assert!(matches!(err, MapError::Layer(_)));
    }

    #[test]
    fn test_popup_is_single_instance() {
        let mut backend = backend_with_source();
        let content = |description: &str| {
            let mut feature = crate::data::geojson::Feature {
                id: None,
                geometry: None,
                properties: Some(serde_json::Map::new()),
            };
            feature.properties.as_mut().unwrap().insert(
                "description".to_string(),
                serde_json::Value::String(description.to_string()),
            );
            PopupContent::from_feature(&feature, "More")
        };

        backend
            .show_popup(PopupSpec::new(LngLat::new(0.0, 0.0), content("first")))
            .unwrap();
        backend
            .show_popup(PopupSpec::new(LngLat::new(1.0, 1.0), content("second")))
            .unwrap();

        let popup = backend.popup().unwrap();
        assert_eq!(popup.content.description, "second");
        assert_eq!(popup.anchor, LngLat::new(1.0, 1.0));
    }

    #[tokio::test]
    async fn test_offline_backend_fails_image_loads() {
        let mut backend = backend_with_source();
        let err = backend.load_image("resources/img/a.png").await.unwrap_err();
        assert!(matches!(err, MapError::Image { .. }));
    }
}
