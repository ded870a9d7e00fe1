//! Graph node record.

use crate::core::{MapPoint, NodeId};

/// Position of a node inside [`SpatialGraph`](super::SpatialGraph) storage
pub type NodeIndex = usize;

/// A walkable position in the navigation graph.
///
/// Neighbors are references into the owning graph (indices), never
/// embedded nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    id: NodeId,
    position: MapPoint,
    /// Sorted, deduplicated neighbor indices
    neighbors: Vec<NodeIndex>,
}

impl Node {
    pub(crate) fn new(id: NodeId, position: MapPoint, neighbors: Vec<NodeIndex>) -> Self {
        Self {
            id,
            position,
            neighbors,
        }
    }

    /// Node identifier
    #[inline]
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Node position in source-map units
    #[inline]
    pub fn position(&self) -> MapPoint {
        self.position
    }

    /// Horizontal coordinate
    #[inline]
    pub fn x(&self) -> f32 {
        self.position.x
    }

    /// Vertical coordinate
    #[inline]
    pub fn y(&self) -> f32 {
        self.position.y
    }

    /// Neighbor indices in identifier order
    #[inline]
    pub fn neighbors(&self) -> &[NodeIndex] {
        &self.neighbors
    }

    /// Number of neighbors
    #[inline]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// True if the node has no neighbors
    #[inline]
    pub fn is_isolated(&self) -> bool {
        self.neighbors.is_empty()
    }
}
