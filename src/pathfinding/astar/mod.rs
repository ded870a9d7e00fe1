//! A* search over the navigation graph.
//!
//! Implements A* with:
//! - Uniform one-hop edge cost
//! - Manhattan heuristic scaled to hop units
//! - Binary-heap frontier with identifier tie-breaks
//! - Iteration and wall-clock safety limits

mod planner;
mod types;

pub use planner::AStarPlanner;
pub use types::{AStarConfig, AbortReason, PathFailure, PathResult};

use crate::graph::SpatialGraph;

/// Quick path finding with default configuration
pub fn find_path(graph: &SpatialGraph, start: &str, goal: &str) -> Result<PathResult, PathFailure> {
    AStarPlanner::with_defaults(graph).find_path(start, goal)
}

/// Check if a path exists between two identifiers
pub fn path_exists(graph: &SpatialGraph, start: &str, goal: &str) -> bool {
    find_path(graph, start, goal).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MapPoint, NodeId};
    use crate::graph::GraphBuilder;

    /// Square cycle with step 2: (0,0) - (0,2) - (2,2) - (2,0) - (0,0)
    fn square() -> SpatialGraph {
        let mut builder = GraphBuilder::new();
        let corners = [(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)];
        let idx: Vec<usize> = corners
            .iter()
            .map(|&(x, y)| {
                let p = MapPoint::new(x, y);
                builder.add_node(NodeId::from_point(p), p)
            })
            .collect();
        for i in 0..4 {
            builder.connect(idx[i], idx[(i + 1) % 4]);
        }
        builder.build()
    }

    #[test]
    fn test_square_diagonal() {
        let graph = square();
        let result = find_path(&graph, "0_0", "2_2").unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result.hops, 2);
        assert_eq!(result.path[0], MapPoint::new(0.0, 0.0));
        assert_eq!(result.path[2], MapPoint::new(2.0, 2.0));
        // Both corners are optimal; the lower identifier wins the tie
        assert_eq!(result.node_ids[1].as_str(), "0_2");
        assert!(graph.are_adjacent("0_0", result.node_ids[1].as_str()));
        assert!(graph.are_adjacent(result.node_ids[1].as_str(), "2_2"));
    }

    #[test]
    fn test_start_equals_goal() {
        let graph = square();
        let result = find_path(&graph, "2_0", "2_0").unwrap();

        assert_eq!(result.path, vec![MapPoint::new(2.0, 0.0)]);
        assert_eq!(result.node_ids, vec![NodeId::from("2_0")]);
        assert_eq!(result.hops, 0);
        assert_eq!(result.length(), 0.0);
    }

    #[test]
    fn test_path_exists() {
        let graph = square();
        assert!(path_exists(&graph, "0_0", "2_0"));
        assert!(!path_exists(&graph, "0_0", "5_5"));
    }

    #[test]
    fn test_deterministic() {
        let graph = square();
        let a = find_path(&graph, "2_2", "0_0").unwrap();
        let b = find_path(&graph, "2_2", "0_0").unwrap();
        assert_eq!(a, b);
    }
}
