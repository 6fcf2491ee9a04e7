use crate::data::geojson::Feature;

/// Per-layer interaction events forwarded from the host widget.
///
/// One click produces one event, for the topmost hit layer only; `hits` is
/// ordered topmost first. A feature participating in several stacked layers
/// therefore reaches the dispatch table exactly once.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerEvent {
    /// Click on a layer's hit area
    Click {
        layer_id: String,
        hits: Vec<Feature>,
    },
    /// Pointer entered a layer's hit area
    Enter { layer_id: String },
    /// Pointer left a layer's hit area
    Leave { layer_id: String },
}

impl LayerEvent {
    /// The layer this event belongs to
    pub fn layer_id(&self) -> &str {
        match self {
            LayerEvent::Click { layer_id, .. } => layer_id,
            LayerEvent::Enter { layer_id } => layer_id,
            LayerEvent::Leave { layer_id } => layer_id,
        }
    }
}

/// Wheel event state relevant to the zoom gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WheelInput {
    pub ctrl: bool,
    pub meta: bool,
}

/// What the host should do with a wheel event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelDisposition {
    /// Let the widget's zoom handler see the event
    pub zoom: bool,
    /// Suppress the browser's default (page zoom) for the event
    pub prevent_default: bool,
    /// Keep the event away from the widget, leaving it to page scroll
    pub stop_propagation: bool,
}

/// Gates zoom-by-scroll behind a modifier key.
///
/// Armed once at session startup, before and independent of any data load:
/// plain wheel events stay page scrolls, modifier-held wheel events zoom the
/// map while the browser's own page zoom is suppressed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollZoomGate;

impl ScrollZoomGate {
    pub fn assess(&self, input: WheelInput) -> WheelDisposition {
        if input.ctrl || input.meta {
            WheelDisposition {
                zoom: true,
                prevent_default: true,
                stop_propagation: false,
            }
        } else {
            WheelDisposition {
                zoom: false,
                prevent_default: false,
                stop_propagation: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_event_layer_id() {
        let event = LayerEvent::Enter {
            layer_id: "map-poi".to_string(),
        };
        assert_eq!(event.layer_id(), "map-poi");
    }

    #[test]
    fn test_plain_wheel_scrolls_the_page() {
        let disposition = ScrollZoomGate.assess(WheelInput::default());

        assert!(!disposition.zoom);
        assert!(!disposition.prevent_default);
        assert!(disposition.stop_propagation);
    }

    #[test]
    fn test_modifier_wheel_zooms_the_map() {
        for input in [
            WheelInput {
                ctrl: true,
                meta: false,
            },
            WheelInput {
                ctrl: false,
                meta: true,
            },
        ] {
            let disposition = ScrollZoomGate.assess(input);

            assert!(disposition.zoom);
            assert!(disposition.prevent_default);
            assert!(!disposition.stop_propagation);
        }
    }
}
