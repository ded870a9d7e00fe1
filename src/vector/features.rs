//! Typed GeoJSON-style input schema.

use serde::{Deserialize, Serialize};

use crate::core::MapPoint;

/// Raw position as authored: at least two numbers, extras (altitude) ignored
pub type Position = Vec<f32>;

/// Which component of an authored position is the horizontal axis
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisOrder {
    /// `[x, y]` (GeoJSON order)
    #[default]
    XY,
    /// `[y, x]` (latitude-first order)
    YX,
}

impl AxisOrder {
    /// Interpret the first two components of a position.
    ///
    /// Returns `Err` with a reason if the position is short or non-finite.
    pub fn to_point(self, position: &[f32]) -> Result<MapPoint, String> {
        let (a, b) = match position {
            [a, b, ..] => (*a, *b),
            _ => {
                return Err(format!(
                    "expected at least 2 components, found {}",
                    position.len()
                ));
            }
        };
        if !a.is_finite() || !b.is_finite() {
            return Err(format!("non-finite component in [{}, {}]", a, b));
        }
        Ok(match self {
            AxisOrder::XY => MapPoint::new(a, b),
            AxisOrder::YX => MapPoint::new(b, a),
        })
    }
}

/// Geometry, tagged by its `type` field
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// One continuous corridor
    LineString {
        /// Vertices in walking order
        coordinates: Vec<Position>,
    },
    /// Several corridors sharing one feature
    MultiLineString {
        /// One vertex list per corridor
        coordinates: Vec<Vec<Position>>,
    },
    /// A single location (not a corridor)
    Point {
        /// The location
        coordinates: Position,
    },
    /// Any other geometry kind (polygons, collections, ...)
    #[serde(other)]
    Unsupported,
}

impl Geometry {
    /// Corridors carried by this geometry (empty for non-polylines)
    pub fn polylines(&self) -> Vec<&[Position]> {
        match self {
            Geometry::LineString { coordinates } => vec![coordinates.as_slice()],
            Geometry::MultiLineString { coordinates } => {
                coordinates.iter().map(Vec::as_slice).collect()
            }
            Geometry::Point { .. } | Geometry::Unsupported => Vec::new(),
        }
    }
}

/// One feature; `properties` are carried but not interpreted
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Geometry (GeoJSON allows `null`)
    #[serde(default)]
    pub geometry: Option<Geometry>,

    /// Free-form properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
}

impl Feature {
    /// Feature with a line-string geometry
    pub fn line_string(coordinates: Vec<Position>) -> Self {
        Self {
            geometry: Some(Geometry::LineString { coordinates }),
            properties: None,
        }
    }
}

/// Top-level collection of features
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    /// Features in authoring order
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
