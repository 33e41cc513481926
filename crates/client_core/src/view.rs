//! Render model derived from [`MapState`] for map renderers.
//!
//! Renderers only read this model; nothing here feeds back into the store.

use serde::Serialize;
use shared::domain::{Bounds, Coordinate};

use crate::store::MapState;

/// Plaza de la Paz, Barranquilla.
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    lat: 10.987982,
    lng: -74.789139,
};
pub const DEFAULT_ZOOM: u8 = 13;
pub const FIT_PADDING_PX: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Viewport {
    /// Fit to the server-provided bounds.
    FitBounds { bounds: Bounds },
    /// Fit to the envelope of the submitted points.
    FitPoints { bounds: Bounds },
    Default { center: Coordinate, zoom: u8 },
}

impl Viewport {
    pub fn for_state(state: &MapState) -> Self {
        if let Some(bounds) = state.bounds {
            return Self::FitBounds { bounds };
        }
        match Bounds::enclosing(&state.coordinates) {
            Some(bounds) => Self::FitPoints { bounds },
            None => Self::Default {
                center: DEFAULT_CENTER,
                zoom: DEFAULT_ZOOM,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerView {
    pub position: Coordinate,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub viewport: Viewport,
    pub markers: Vec<MarkerView>,
    pub rectangle: Option<Bounds>,
    pub centroid: Option<MarkerView>,
}

impl MapView {
    pub fn from_state(state: &MapState) -> Self {
        Self {
            viewport: Viewport::for_state(state),
            markers: state
                .coordinates
                .iter()
                .map(|position| MarkerView {
                    position: *position,
                    label: format!("Marker at {}", format_position(position)),
                })
                .collect(),
            rectangle: state.bounds,
            centroid: state.centroid.map(|position| MarkerView {
                position,
                label: format!("Centroid at {}", format_position(&position)),
            }),
        }
    }
}

pub fn format_position(position: &Coordinate) -> String {
    format!("[{:.5}, {:.5}]", position.lat, position.lng)
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
