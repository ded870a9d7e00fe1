//! Core types for the marga-nav navigation graph library.
//!
//! This module provides the fundamental types used throughout the library:
//! - [`MapPoint`]: Position in source-map units (e.g. floor-plan pixels)
//! - [`GridCoord`]: Integer sampling position on the raster grid
//! - [`NodeId`]: Coordinate-derived node identifier

mod node_id;
mod point;

pub use node_id::{NodeId, round_half_up};
pub use point::{GridCoord, MapPoint};
