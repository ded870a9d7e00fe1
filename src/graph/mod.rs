//! Spatial navigation graph.
//!
//! An immutable (post-construction) mapping from [`NodeId`] to [`Node`],
//! stored as an array of nodes plus an identifier index:
//!
//! - Nodes are kept sorted by identifier, so a [`NodeIndex`] order is the
//!   identifier order. Searches rely on this for deterministic tie-breaks.
//! - Edges are symmetric, unweighted (one hop each) and never self-loops.
//! - Isolated nodes (degree 0) are legal.
//!
//! Graphs are produced by [`GraphBuilder`], which the raster and vector
//! builders and the file loader all go through.
//!
//! [`NodeId`]: crate::core::NodeId

mod builder;
mod node;
mod spatial;
mod stats;

pub use builder::GraphBuilder;
pub use node::{Node, NodeIndex};
pub use spatial::SpatialGraph;
pub use stats::GraphStats;
