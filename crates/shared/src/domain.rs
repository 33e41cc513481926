use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// Server-side record form of a bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundsExtent {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

/// Corner pair `[[south, west], [north, east]]`, the form map renderers fit to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bounds(pub [[f64; 2]; 2]);

impl Bounds {
    pub fn from_corners(south_west: Coordinate, north_east: Coordinate) -> Self {
        Self([
            [south_west.lat, south_west.lng],
            [north_east.lat, north_east.lng],
        ])
    }

    pub fn from_extent(extent: BoundsExtent) -> Self {
        Self([[extent.south, extent.west], [extent.north, extent.east]])
    }

    pub fn to_extent(&self) -> BoundsExtent {
        BoundsExtent {
            north: self.north(),
            south: self.south(),
            east: self.east(),
            west: self.west(),
        }
    }

    pub fn south(&self) -> f64 {
        self.0[0][0]
    }

    pub fn west(&self) -> f64 {
        self.0[0][1]
    }

    pub fn north(&self) -> f64 {
        self.0[1][0]
    }

    pub fn east(&self) -> f64 {
        self.0[1][1]
    }

    pub fn south_west(&self) -> Coordinate {
        Coordinate::new(self.south(), self.west())
    }

    pub fn north_east(&self) -> Coordinate {
        Coordinate::new(self.north(), self.east())
    }

    /// Smallest box enclosing every point, or `None` for an empty slice.
    pub fn enclosing(points: &[Coordinate]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut south = first.lat;
        let mut north = first.lat;
        let mut west = first.lng;
        let mut east = first.lng;
        for point in rest {
            south = south.min(point.lat);
            north = north.max(point.lat);
            west = west.min(point.lng);
            east = east.max(point.lng);
        }
        Some(Self([[south, west], [north, east]]))
    }
}

impl From<BoundsExtent> for Bounds {
    fn from(value: BoundsExtent) -> Self {
        Self::from_extent(value)
    }
}

impl From<Bounds> for BoundsExtent {
    fn from(value: Bounds) -> Self {
        value.to_extent()
    }
}
