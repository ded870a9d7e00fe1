//! Graph summary statistics.

use std::collections::VecDeque;
use std::fmt;

use super::spatial::SpatialGraph;

/// Connectivity summary of a [`SpatialGraph`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphStats {
    /// Number of nodes
    pub nodes: usize,
    /// Number of undirected edges
    pub edges: usize,
    /// Nodes with degree 0
    pub isolated: usize,
    /// Connected components (isolated nodes count as components)
    pub components: usize,
    /// Node count of the largest component
    pub largest_component: usize,
}

impl GraphStats {
    pub(crate) fn compute(graph: &SpatialGraph) -> Self {
        let n = graph.len();
        let nodes = graph.nodes();
        let mut visited = vec![false; n];
        let mut components = 0;
        let mut largest_component = 0;
        let mut queue = VecDeque::new();

        for start in 0..n {
            if visited[start] {
                continue;
            }
            components += 1;
            visited[start] = true;
            queue.push_back(start);
            let mut size = 0;

            while let Some(current) = queue.pop_front() {
                size += 1;
                for &next in nodes[current].neighbors() {
                    if !visited[next] {
                        visited[next] = true;
                        queue.push_back(next);
                    }
                }
            }
            largest_component = largest_component.max(size);
        }

        Self {
            nodes: n,
            edges: graph.edge_count(),
            isolated: nodes.iter().filter(|node| node.is_isolated()).count(),
            components,
            largest_component,
        }
    }
}

impl fmt::Display for GraphStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes, {} edges, {} components (largest {}), {} isolated",
            self.nodes, self.edges, self.components, self.largest_component, self.isolated
        )
    }
}
