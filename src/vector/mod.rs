//! Vector corridor ingestion.
//!
//! Derives a [`SpatialGraph`](crate::graph::SpatialGraph) from polylines,
//! either typed in code or read from a GeoJSON-style feature collection:
//!
//! - Every consecutive vertex pair of a polyline becomes an edge.
//! - Vertices are snapped to integer identifiers, so nearly identical
//!   vertices from different polylines collapse onto one node.
//! - Only `LineString` and `MultiLineString` geometries are polylines; other
//!   geometry kinds are skipped.
//!
//! Positions are `[x, y]` unless [`AxisOrder::YX`] is configured, in which
//! case they are swapped on the way in. Nothing downstream ever swaps.

mod builder;
mod error;
mod features;

pub use builder::{VectorConfig, VectorGraphBuilder};
pub use error::VectorError;
pub use features::{AxisOrder, Feature, FeatureCollection, Geometry, Position};
