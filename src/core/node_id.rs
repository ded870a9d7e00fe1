//! Node identifiers.
//!
//! Builders derive identifiers from coordinates (`"{x}_{y}"` on rounded
//! integer components) so repeated runs over the same input agree.
//! Hand-authored graphs may use arbitrary names; the graph only requires
//! uniqueness.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use super::{GridCoord, MapPoint};

/// Round half up (towards +infinity), as `floor(v + 0.5)`.
///
/// Evaluated in f64 so values just below one half do not round up
/// through f32 addition error.
#[inline]
pub fn round_half_up(value: f32) -> i64 {
    (value as f64 + 0.5).floor() as i64
}

/// Unique node identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Wrap an arbitrary identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier for a position, rounding both components to integers
    pub fn from_point(point: MapPoint) -> Self {
        Self::from_grid(GridCoord::new(
            round_half_up(point.x),
            round_half_up(point.y),
        ))
    }

    /// Identifier for an integer grid position
    pub fn from_grid(coord: GridCoord) -> Self {
        Self(format!("{}_{}", coord.x, coord.y))
    }

    /// Identifier as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
