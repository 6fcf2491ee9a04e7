//! Interaction dispatch: a table keyed by layer identifier, mapping each
//! interactive layer to its click handler and hover-cursor behavior.

use crate::backend::{Cursor, MapBackend};
use crate::data::geojson::Feature;
use crate::input::events::LayerEvent;
use crate::Result;
use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};

/// Callback invoked with the topmost feature hit on a layer
pub type ClickCallback = Box<dyn Fn(&mut dyn MapBackend, &Feature) -> Result<()>>;

/// Routes per-layer widget events to their handlers.
#[derive(Default)]
pub struct InteractionBinder {
    click_handlers: HashMap<String, ClickCallback>,
    hover_layers: HashSet<String>,
}

impl InteractionBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a click handler for a layer and tracks it for the pointer
    /// cursor on hover. Re-registering a layer replaces its handler.
    pub fn on_click<F>(&mut self, layer_id: &str, callback: F)
    where
        F: Fn(&mut dyn MapBackend, &Feature) -> Result<()> + 'static,
    {
        self.click_handlers
            .insert(layer_id.to_string(), Box::new(callback));
        self.hover_layers.insert(layer_id.to_string());
    }

    /// Whether a layer has a registered handler
    pub fn is_bound(&self, layer_id: &str) -> bool {
        self.click_handlers.contains_key(layer_id)
    }

    /// Dispatches one widget event.
    ///
    /// Clicks run the bound handler with the topmost hit only; events for
    /// unbound layers and clicks with no hits fall through silently.
    pub fn dispatch(&self, backend: &mut dyn MapBackend, event: &LayerEvent) -> Result<()> {
        match event {
            LayerEvent::Click { layer_id, hits } => {
                if let (Some(callback), Some(feature)) =
                    (self.click_handlers.get(layer_id), hits.first())
                {
                    callback(backend, feature)?;
                }
            }
            LayerEvent::Enter { layer_id } => {
                if self.hover_layers.contains(layer_id) {
                    backend.set_cursor(Cursor::Pointer);
                }
            }
            LayerEvent::Leave { layer_id } => {
                if self.hover_layers.contains(layer_id) {
                    backend.set_cursor(Cursor::Default);
                }
            }
        }
        Ok(())
    }
}
