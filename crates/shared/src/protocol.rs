use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Bounds, BoundsExtent, Coordinate};

pub const POINTS_PATH: &str = "points";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitPointsRequest {
    pub points: Vec<Coordinate>,
}

impl SubmitPointsRequest {
    pub fn new(points: &[Coordinate]) -> Self {
        Self {
            points: points.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Server-computed fields the client reconciles into its map state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointsSummary {
    pub bounds: Bounds,
    pub centroid: Coordinate,
}

impl PointsSummary {
    /// Reads `result.bounds` and `result.centroid` from a success body.
    ///
    /// Both must be present and well formed; anything else in the body is
    /// ignored.
    pub fn from_response(body: &Value) -> Option<Self> {
        let result = body.get("result")?;
        let bounds = BoundsExtent::deserialize(result.get("bounds")?).ok()?;
        let centroid = Coordinate::deserialize(result.get("centroid")?).ok()?;
        Some(Self {
            bounds: Bounds::from_extent(bounds),
            centroid,
        })
    }
}
