//! Web-mercator projection fitted to a [`Viewport`].

use std::f64::consts::PI;

use client_core::Viewport;
use shared::domain::{Bounds, Coordinate};

pub const TILE_SIZE: f64 = 256.0;
pub const MAX_ZOOM: f64 = 18.0;
const MAX_LATITUDE: f64 = 85.051_128_78;

/// Position on the unit mercator square; y grows southwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

pub fn to_world(coordinate: &Coordinate) -> WorldPoint {
    let lat = coordinate.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    WorldPoint {
        x: (coordinate.lng + 180.0) / 360.0,
        y: (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    center: WorldPoint,
    /// Screen pixels per unit of world space.
    scale: f64,
}

impl Projection {
    pub fn for_viewport(viewport: &Viewport, width: f64, height: f64, padding: f64) -> Self {
        match viewport {
            Viewport::FitBounds { bounds } | Viewport::FitPoints { bounds } => {
                Self::fit(bounds, width, height, padding)
            }
            Viewport::Default { center, zoom } => Self::centered(center, f64::from(*zoom)),
        }
    }

    pub fn centered(center: &Coordinate, zoom: f64) -> Self {
        Self {
            center: to_world(center),
            scale: TILE_SIZE * zoom.min(MAX_ZOOM).exp2(),
        }
    }

    pub fn fit(bounds: &Bounds, width: f64, height: f64, padding: f64) -> Self {
        let south_west = to_world(&bounds.south_west());
        let north_east = to_world(&bounds.north_east());
        let center = WorldPoint {
            x: (south_west.x + north_east.x) / 2.0,
            y: (south_west.y + north_east.y) / 2.0,
        };

        let max_scale = TILE_SIZE * MAX_ZOOM.exp2();
        let axis_scale = |available: f64, span: f64| {
            if span > f64::EPSILON {
                available.max(1.0) / span
            } else {
                max_scale
            }
        };
        let scale_x = axis_scale(width - 2.0 * padding, (north_east.x - south_west.x).abs());
        let scale_y = axis_scale(height - 2.0 * padding, (south_west.y - north_east.y).abs());

        Self {
            center,
            scale: scale_x.min(scale_y).min(max_scale),
        }
    }

    /// Offset in pixels from the centre of the canvas.
    pub fn project(&self, coordinate: &Coordinate) -> [f64; 2] {
        let point = to_world(coordinate);
        [
            (point.x - self.center.x) * self.scale,
            (point.y - self.center.y) * self.scale,
        ]
    }

    pub fn zoom(&self) -> f64 {
        (self.scale / TILE_SIZE).log2()
    }
}
