//! Immutable spatial graph storage.

use std::collections::HashMap;

use super::node::{Node, NodeIndex};
use super::stats::GraphStats;
use crate::core::{MapPoint, NodeId};

/// Navigation graph: array of nodes plus an identifier index.
///
/// Read-only after construction, so one instance can back any number of
/// concurrent lookups and searches.
///
/// # Example
///
/// ```rust
/// use marga_nav::core::{MapPoint, NodeId};
/// use marga_nav::graph::GraphBuilder;
///
/// let mut builder = GraphBuilder::new();
/// let a = builder.add_node(NodeId::from("0_0"), MapPoint::new(0.0, 0.0));
/// let b = builder.add_node(NodeId::from("0_2"), MapPoint::new(0.0, 2.0));
/// builder.connect(a, b);
///
/// let graph = builder.build();
/// assert_eq!(graph.len(), 2);
/// assert!(graph.are_adjacent("0_0", "0_2"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpatialGraph {
    nodes: Vec<Node>,
    index: HashMap<NodeId, NodeIndex>,
    edge_count: usize,
    /// Largest Manhattan length of any edge (0 when there are no edges)
    max_edge_span: f32,
}

impl SpatialGraph {
    /// Assemble from nodes already sorted by identifier with symmetric,
    /// sorted neighbor lists.
    pub(crate) fn from_nodes(nodes: Vec<Node>) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.id().clone(), i))
            .collect();

        let mut edge_count = 0;
        let mut max_edge_span: f32 = 0.0;
        for (i, node) in nodes.iter().enumerate() {
            for &j in node.neighbors() {
                if i < j {
                    edge_count += 1;
                    let span = node.position().manhattan_distance(&nodes[j].position());
                    max_edge_span = max_edge_span.max(span);
                }
            }
        }

        Self {
            nodes,
            index,
            edge_count,
            max_edge_span,
        }
    }

    /// Number of nodes
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the graph has no nodes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected edges
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All nodes in identifier order
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Node at a storage index
    #[inline]
    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Node by identifier
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.index_of(id).map(|i| &self.nodes[i])
    }

    /// Storage index of an identifier
    #[inline]
    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// Check whether an identifier exists
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Position of the node at `index`
    #[inline]
    pub fn position(&self, index: NodeIndex) -> Option<MapPoint> {
        self.nodes.get(index).map(Node::position)
    }

    /// Neighbor identifiers of a node, in identifier order
    pub fn neighbor_ids(&self, id: &str) -> Option<impl Iterator<Item = &NodeId> + '_> {
        let node = self.get(id)?;
        Some(node.neighbors().iter().map(|&j| self.nodes[j].id()))
    }

    /// Check whether two identifiers share an edge
    pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(i), Some(j)) => self.nodes[i].neighbors().binary_search(&j).is_ok(),
            _ => false,
        }
    }

    /// Undirected edges as `(lower, higher)` index pairs
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.nodes.iter().enumerate().flat_map(|(i, node)| {
            node.neighbors()
                .iter()
                .copied()
                .filter(move |&j| i < j)
                .map(move |j| (i, j))
        })
    }

    /// Largest Manhattan length of any edge.
    ///
    /// Used to express coordinate distances in hop units.
    #[inline]
    pub fn max_edge_span(&self) -> f32 {
        self.max_edge_span
    }

    /// Verify the structural invariants: every edge is listed on both
    /// endpoints and no node lists itself.
    pub fn is_symmetric(&self) -> bool {
        self.nodes.iter().enumerate().all(|(i, node)| {
            node.neighbors().iter().all(|&j| {
                j != i
                    && self
                        .nodes
                        .get(j)
                        .is_some_and(|other| other.neighbors().binary_search(&i).is_ok())
            })
        })
    }

    /// Summary statistics (components, isolated nodes)
    pub fn stats(&self) -> GraphStats {
        GraphStats::compute(self)
    }
}
