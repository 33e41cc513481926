//! Shared map state: submitted coordinates plus server-derived bounds and centroid.

use shared::domain::{Bounds, Coordinate};
use tokio::sync::watch;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapState {
    pub coordinates: Vec<Coordinate>,
    pub bounds: Option<Bounds>,
    pub centroid: Option<Coordinate>,
}

impl MapState {
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty() && self.bounds.is_none() && self.centroid.is_none()
    }
}

/// Single source of truth read by renderers and written by the submission
/// workflow. Every mutation replaces state through the watch channel, so a
/// snapshot never shows half of an update.
#[derive(Debug)]
pub struct CoordinateStore {
    state: watch::Sender<MapState>,
}

impl Default for CoordinateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordinateStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(MapState::default());
        Self { state }
    }

    pub fn snapshot(&self) -> MapState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<MapState> {
        self.state.subscribe()
    }

    pub fn coordinates(&self) -> Vec<Coordinate> {
        self.state.borrow().coordinates.clone()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.state.borrow().bounds
    }

    pub fn centroid(&self) -> Option<Coordinate> {
        self.state.borrow().centroid
    }

    pub fn set_coordinates(&self, coordinates: Vec<Coordinate>) {
        self.state.send_modify(|state| state.coordinates = coordinates);
    }

    pub fn set_bounds(&self, bounds: Option<Bounds>) {
        self.state.send_modify(|state| state.bounds = bounds);
    }

    pub fn set_centroid(&self, centroid: Option<Coordinate>) {
        self.state.send_modify(|state| state.centroid = centroid);
    }

    pub fn clear_all(&self) {
        self.state.send_replace(MapState::default());
    }

    /// Drops the previous cycle's derived fields and echoes the new input.
    pub fn reset_for_submission(&self, coordinates: Vec<Coordinate>) {
        self.state.send_replace(MapState {
            coordinates,
            bounds: None,
            centroid: None,
        });
    }

    pub fn reconcile(&self, bounds: Bounds, centroid: Coordinate) {
        self.state.send_modify(|state| {
            state.bounds = Some(bounds);
            state.centroid = Some(centroid);
        });
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
