//! Load-sequence orchestration.
//!
//! [`MapSession`] is the explicit context object for one map: configuration,
//! the widget seam, the interaction dispatch table and the scroll-zoom gate,
//! threaded through every step instead of living in module globals. The
//! sequence mirrors the widget's load continuation: fetch, augment, source,
//! layers, images, interactions, viewport.

use crate::backend::MapBackend;
use crate::core::config::{FitOptions, MapConfig, PoiImagePolicy};
use crate::core::constants::{
    AVATAR_ICON_ID, POINT_AVATAR_LAYER_ID, POINT_LABEL_LAYER_ID, POI_LAYER_ID, SOURCE_ID,
};
use crate::core::geo::LngLat;
use crate::data::geojson::FeatureCollection;
use crate::data::{icons, loader, route};
use crate::input::binder::InteractionBinder;
use crate::input::events::{LayerEvent, ScrollZoomGate, WheelDisposition, WheelInput};
use crate::layers::spec;
use crate::ui::popup::{PopupContent, PopupSpec};
use crate::Result;

/// One map session over a widget backend.
pub struct MapSession<B: MapBackend> {
    config: MapConfig,
    backend: B,
    binder: InteractionBinder,
    gate: ScrollZoomGate,
}

impl<B: MapBackend> MapSession<B> {
    /// Creates the session and arms the scroll-zoom gate. The gate works
    /// before and regardless of any data load.
    pub fn new(config: MapConfig, backend: B) -> Self {
        Self {
            config,
            backend,
            binder: InteractionBinder::new(),
            gate: ScrollZoomGate,
        }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Runs the full load sequence, logging and swallowing any error: the
    /// widget keeps whatever partial state was set up before the failure.
    pub async fn run(&mut self) {
        if let Err(error) = self.run_load_sequence().await {
            log::error!("map setup aborted: {}", error);
        }
    }

    /// Fetches the journey document and installs it.
    pub async fn run_load_sequence(&mut self) -> Result<()> {
        let collection = loader::load_feature_collection(&self.config.geojson_url).await?;
        self.install_collection(collection).await
    }

    /// Augments and renders an already-loaded collection.
    ///
    /// Steps, in order: synthesize the route, assign POI icons, register the
    /// source, the route layer, the avatar image (fatal on failure), each
    /// POI image (per [`PoiImagePolicy`]), the three point layers, the popup
    /// bindings, and finally the camera framing. Images load one at a time;
    /// a slow one delays the ones after it.
    pub async fn install_collection(&mut self, mut collection: FeatureCollection) -> Result<()> {
        route::ensure_route(&mut collection);
        icons::assign_poi_icons(&mut collection);

        self.backend.add_source(SOURCE_ID, &collection)?;
        self.backend.add_layer(&spec::route_line(SOURCE_ID))?;

        register_image(&mut self.backend, AVATAR_ICON_ID, &self.config.avatar_url).await?;
        self.register_poi_images(&collection).await?;

        self.backend.add_layer(&spec::avatar_points(SOURCE_ID))?;
        self.backend.add_layer(&spec::point_labels(SOURCE_ID))?;
        self.backend.add_layer(&spec::poi_points(SOURCE_ID))?;

        self.bind_popup_layers();
        fit_to_data(&mut self.backend, &collection, &self.config.fit);
        Ok(())
    }

    async fn register_poi_images(&mut self, collection: &FeatureCollection) -> Result<()> {
        for (icon_id, url) in icons::poi_images(collection) {
            match register_image(&mut self.backend, &icon_id, &url).await {
                Ok(()) => {}
                Err(error) => match self.config.poi_image_policy {
                    PoiImagePolicy::Fatal => return Err(error),
                    PoiImagePolicy::FailSoft => {
                        log::warn!("skipping poi image {} ({}): {}", icon_id, url, error);
                    }
                },
            }
        }
        Ok(())
    }

    fn bind_popup_layers(&mut self) {
        for layer_id in [POINT_AVATAR_LAYER_ID, POINT_LABEL_LAYER_ID, POI_LAYER_ID] {
            let link_label = self.config.popup_link_label.clone();
            self.binder.on_click(layer_id, move |backend, feature| {
                let Some(coordinates) = feature.point_coordinates() else {
                    return Ok(());
                };
                let content = PopupContent::from_feature(feature, &link_label);
                backend.show_popup(PopupSpec::new(LngLat::from_coordinate(coordinates), content))
            });
        }
    }

    /// Routes one widget event through the dispatch table.
    pub fn handle_event(&mut self, event: &LayerEvent) -> Result<()> {
        self.binder.dispatch(&mut self.backend, event)
    }

    /// Scroll-zoom gate decision for a wheel event over the canvas.
    pub fn assess_wheel(&self, input: WheelInput) -> WheelDisposition {
        self.gate.assess(input)
    }
}

/// Loads and registers one atlas image, skipping names already present.
pub async fn register_image<B: MapBackend + ?Sized>(
    backend: &mut B,
    name: &str,
    url: &str,
) -> Result<()> {
    if backend.has_image(name) {
        return Ok(());
    }
    let image = backend.load_image(url).await?;
    backend.add_image(name, image)
}

/// Frames the camera over all rendered geometry; no geometry, no camera
/// move.
pub fn fit_to_data<B: MapBackend + ?Sized>(
    backend: &mut B,
    collection: &FeatureCollection,
    options: &FitOptions,
) {
    if let Some(bounds) = collection.bounds() {
        backend.fit_bounds(&bounds, options);
    }
}
