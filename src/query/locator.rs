//! Nearest-node lookup.

use std::cmp::Ordering;

use crate::core::{MapPoint, NodeId};
use crate::graph::{NodeIndex, SpatialGraph};

/// A located node and its distance from the query point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeMatch {
    /// Storage index in the graph
    pub index: NodeIndex,
    /// Euclidean distance from the query point
    pub distance: f32,
}

impl NodeMatch {
    /// Ordering used to pick the winner: distance, then identifier.
    ///
    /// Node indices follow identifier order, so comparing indices compares ids.
    #[inline]
    pub(crate) fn is_better_than(&self, other: &NodeMatch) -> bool {
        match self.distance.total_cmp(&other.distance) {
            Ordering::Less => true,
            Ordering::Equal => self.index < other.index,
            Ordering::Greater => false,
        }
    }
}

/// Snaps coordinates to graph nodes.
///
/// Implementations must agree on semantics: the result is the node with the
/// minimum Euclidean distance to `point`, only if that distance is strictly
/// less than `max_distance`; exact ties resolve to the lowest identifier.
pub trait NodeLocator {
    /// Graph being searched
    fn graph(&self) -> &SpatialGraph;

    /// Find the nearest node strictly within `max_distance`
    fn locate(&self, point: MapPoint, max_distance: f32) -> Option<NodeMatch>;

    /// Identifier of the nearest node strictly within `max_distance`
    fn locate_id(&self, point: MapPoint, max_distance: f32) -> Option<&NodeId> {
        let found = self.locate(point, max_distance)?;
        self.graph().node(found.index).map(|node| node.id())
    }
}

/// Exhaustive O(n) locator
#[derive(Clone, Copy, Debug)]
pub struct LinearScanLocator<'a> {
    graph: &'a SpatialGraph,
}

impl<'a> LinearScanLocator<'a> {
    /// Create a locator over `graph`
    pub fn new(graph: &'a SpatialGraph) -> Self {
        Self { graph }
    }
}

impl NodeLocator for LinearScanLocator<'_> {
    fn graph(&self) -> &SpatialGraph {
        self.graph
    }

    fn locate(&self, point: MapPoint, max_distance: f32) -> Option<NodeMatch> {
        if !valid_query(point, max_distance) {
            return None;
        }
        closest_among(self.graph, 0..self.graph.len(), point, max_distance)
    }
}

/// Snap `(x, y)` to the nearest node strictly within `max_distance` using a
/// linear scan.
///
/// # Example
///
/// ```rust
/// use marga_nav::core::MapPoint;
/// use marga_nav::query::locate_nearest_node;
/// use marga_nav::vector::VectorGraphBuilder;
///
/// let graph = VectorGraphBuilder::default()
///     .build_polylines(&[vec![MapPoint::new(0.0, 0.0), MapPoint::new(30.0, 0.0)]]);
///
/// assert_eq!(locate_nearest_node(&graph, 27.0, 4.0, 10.0).unwrap().as_str(), "30_0");
/// assert!(locate_nearest_node(&graph, 1000.0, 1000.0, 5.0).is_none());
/// ```
pub fn locate_nearest_node(
    graph: &SpatialGraph,
    x: f32,
    y: f32,
    max_distance: f32,
) -> Option<&NodeId> {
    let found = LinearScanLocator::new(graph).locate(MapPoint::new(x, y), max_distance)?;
    graph.node(found.index).map(|node| node.id())
}

/// Queries with a NaN point or a non-positive (or NaN) tolerance match nothing
#[inline]
pub(crate) fn valid_query(point: MapPoint, max_distance: f32) -> bool {
    !point.x.is_nan() && !point.y.is_nan() && max_distance > 0.0
}

/// Best candidate among `indices`, honoring the strict distance bound
pub(crate) fn closest_among(
    graph: &SpatialGraph,
    indices: impl IntoIterator<Item = NodeIndex>,
    point: MapPoint,
    max_distance: f32,
) -> Option<NodeMatch> {
    let nodes = graph.nodes();
    let mut best: Option<NodeMatch> = None;

    for index in indices {
        let distance = nodes[index].position().distance(&point);
        if distance.is_nan() || distance >= max_distance {
            continue;
        }
        let candidate = NodeMatch { index, distance };
        if best.is_none_or(|b| candidate.is_better_than(&b)) {
            best = Some(candidate);
        }
    }

    best
}
