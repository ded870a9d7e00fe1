//! Incremental graph construction.

use std::collections::HashMap;

use log::trace;

use super::node::{Node, NodeIndex};
use super::spatial::SpatialGraph;
use crate::core::{MapPoint, NodeId};

/// Accumulates nodes and undirected edges, then freezes them into a
/// [`SpatialGraph`].
///
/// - Adding an identifier twice returns the existing node (first position wins).
/// - Edges are stored on both endpoints; duplicates and self-loops are dropped.
/// - [`build`](Self::build) orders nodes by identifier, so the result does not
///   depend on insertion order.
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<(NodeId, MapPoint)>,
    index: HashMap<NodeId, NodeIndex>,
    adjacency: Vec<Vec<NodeIndex>>,
}

impl GraphBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            adjacency: Vec::with_capacity(capacity),
        }
    }

    /// Register a node, returning its builder-local index.
    ///
    /// If `id` already exists the stored position is kept.
    pub fn add_node(&mut self, id: NodeId, position: MapPoint) -> NodeIndex {
        if let Some(&idx) = self.index.get(&id) {
            return idx;
        }

        let idx = self.nodes.len();
        self.index.insert(id.clone(), idx);
        self.nodes.push((id, position));
        self.adjacency.push(Vec::new());
        idx
    }

    /// Builder-local index of an identifier
    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// Check whether an identifier has been registered
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Connect two registered nodes in both directions.
    ///
    /// Returns `false` when nothing was added (self-loop, existing edge, or
    /// unknown index).
    pub fn connect(&mut self, a: NodeIndex, b: NodeIndex) -> bool {
        if a == b || a >= self.nodes.len() || b >= self.nodes.len() {
            return false;
        }
        if self.adjacency[a].contains(&b) {
            return false;
        }

        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
        true
    }

    /// Check whether two builder-local nodes are connected
    pub fn is_connected(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.adjacency.get(a).is_some_and(|n| n.contains(&b))
    }

    /// Number of registered nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Freeze into an immutable graph with nodes in identifier order
    pub fn build(self) -> SpatialGraph {
        let GraphBuilder {
            nodes, adjacency, ..
        } = self;
        let n = nodes.len();

        let mut entries: Vec<(NodeIndex, NodeId, MapPoint)> = nodes
            .into_iter()
            .enumerate()
            .map(|(i, (id, position))| (i, id, position))
            .collect();
        entries.sort_by(|a, b| a.1.cmp(&b.1));

        let mut remap = vec![0; n];
        for (new_idx, (old_idx, _, _)) in entries.iter().enumerate() {
            remap[*old_idx] = new_idx;
        }

        let graph_nodes: Vec<Node> = entries
            .into_iter()
            .map(|(old_idx, id, position)| {
                let mut neighbors: Vec<NodeIndex> =
                    adjacency[old_idx].iter().map(|&old| remap[old]).collect();
                neighbors.sort_unstable();
                Node::new(id, position, neighbors)
            })
            .collect();

        trace!("[GraphBuilder] froze {} nodes", graph_nodes.len());
        SpatialGraph::from_nodes(graph_nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> NodeId {
        NodeId::from(s)
    }

    #[test]
    fn test_duplicate_node_keeps_first_position() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_node(id("a"), MapPoint::new(1.0, 1.0));
        let again = builder.add_node(id("a"), MapPoint::new(9.0, 9.0));

        assert_eq!(a, again);
        assert_eq!(builder.node_count(), 1);

        let graph = builder.build();
        assert_eq!(graph.get("a").unwrap().position(), MapPoint::new(1.0, 1.0));
    }

    #[test]
    fn test_connect_rejects_self_loops_and_duplicates() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_node(id("a"), MapPoint::new(0.0, 0.0));
        let b = builder.add_node(id("b"), MapPoint::new(1.0, 0.0));

        assert!(!builder.connect(a, a));
        assert!(builder.connect(a, b));
        assert!(!builder.connect(b, a));
        assert!(!builder.connect(a, 42));
        assert!(builder.is_connected(b, a));

        let graph = builder.build();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.get("a").unwrap().degree(), 1);
        assert_eq!(graph.get("b").unwrap().degree(), 1);
    }

    #[test]
    fn test_build_orders_by_identifier() {
        let mut builder = GraphBuilder::new();
        let c = builder.add_node(id("c"), MapPoint::new(2.0, 0.0));
        let a = builder.add_node(id("a"), MapPoint::new(0.0, 0.0));
        let b = builder.add_node(id("b"), MapPoint::new(1.0, 0.0));
        builder.connect(c, a);
        builder.connect(a, b);

        let graph = builder.build();
        let ids: Vec<&str> = graph.nodes().iter().map(|n| n.id().as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        // Neighbor indices were remapped and sorted
        assert_eq!(graph.nodes()[0].neighbors(), &[1, 2]);
        assert_eq!(graph.nodes()[2].neighbors(), &[0]);
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let mut first = GraphBuilder::new();
        let a = first.add_node(id("a"), MapPoint::new(0.0, 0.0));
        let b = first.add_node(id("b"), MapPoint::new(1.0, 0.0));
        first.connect(a, b);

        let mut second = GraphBuilder::new();
        let b = second.add_node(id("b"), MapPoint::new(1.0, 0.0));
        let a = second.add_node(id("a"), MapPoint::new(0.0, 0.0));
        second.connect(b, a);

        assert_eq!(first.build(), second.build());
    }
}
