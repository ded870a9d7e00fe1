//! A* planner implementation.

use std::collections::BinaryHeap;
use std::time::Instant;

use log::{debug, trace};

use super::types::{AStarConfig, AStarNode, AbortReason, PathFailure, PathResult};
use crate::core::{MapPoint, NodeId};
use crate::graph::{NodeIndex, SpatialGraph};

/// Expansions between wall-clock checks
const DEADLINE_CHECK_INTERVAL: usize = 1024;

/// A* pathfinder over a [`SpatialGraph`].
///
/// Every edge costs one hop. The heuristic is the Manhattan distance to the
/// goal divided by the graph's longest edge span, i.e. a lower bound on the
/// remaining hop count, which keeps the search optimal.
///
/// The planner only borrows the graph; all search state lives on the stack
/// of each call, so planners can be shared across threads.
#[derive(Clone, Debug)]
pub struct AStarPlanner<'a> {
    graph: &'a SpatialGraph,
    config: AStarConfig,
}

impl<'a> AStarPlanner<'a> {
    /// Create a new A* planner
    pub fn new(graph: &'a SpatialGraph, config: AStarConfig) -> Self {
        Self { graph, config }
    }

    /// Create with default configuration
    pub fn with_defaults(graph: &'a SpatialGraph) -> Self {
        Self::new(graph, AStarConfig::default())
    }

    /// Get the configuration
    pub fn config(&self) -> &AStarConfig {
        &self.config
    }

    /// Find a path between two node identifiers
    pub fn find_path(&self, start: &str, goal: &str) -> Result<PathResult, PathFailure> {
        trace!("[AStar] find_path: start={} goal={}", start, goal);

        let start_idx = self.graph.index_of(start);
        let goal_idx = self.graph.index_of(goal);

        match (start_idx, goal_idx) {
            (Some(s), Some(g)) => self.find_path_indices(s, g),
            _ => {
                let unknown: Vec<NodeId> = [(start, start_idx), (goal, goal_idx)]
                    .into_iter()
                    .filter(|(_, idx)| idx.is_none())
                    .map(|(id, _)| NodeId::from(id))
                    .collect();
                debug!("[AStar] FAILED: InvalidEndpoints {:?}", unknown);
                Err(PathFailure::InvalidEndpoints { unknown })
            }
        }
    }

    /// Find a path between two storage indices
    pub fn find_path_indices(
        &self,
        start: NodeIndex,
        goal: NodeIndex,
    ) -> Result<PathResult, PathFailure> {
        let nodes = self.graph.nodes();
        let unknown: Vec<NodeId> = [start, goal]
            .into_iter()
            .filter(|&i| i >= nodes.len())
            .map(|i| NodeId::new(format!("#{}", i)))
            .collect();
        if !unknown.is_empty() {
            debug!("[AStar] FAILED: InvalidEndpoints {:?}", unknown);
            return Err(PathFailure::InvalidEndpoints { unknown });
        }

        let goal_pos = nodes[goal].position();
        let span = self.graph.max_edge_span() as f64;
        let deadline = self
            .config
            .timeout
            .and_then(|timeout| Instant::now().checked_add(timeout));

        let mut open_set = BinaryHeap::new();
        let mut closed = vec![false; nodes.len()];
        let mut came_from: Vec<Option<NodeIndex>> = vec![None; nodes.len()];
        let mut g_scores: Vec<u32> = vec![u32::MAX; nodes.len()];

        g_scores[start] = 0;
        open_set.push(AStarNode {
            index: start,
            g_cost: 0,
            f_cost: heuristic(nodes[start].position(), goal_pos, span),
        });

        let mut nodes_expanded = 0;

        while let Some(current) = open_set.pop() {
            // Stale entry superseded by a cheaper one
            if closed[current.index] || current.g_cost > g_scores[current.index] {
                continue;
            }

            nodes_expanded += 1;

            if nodes_expanded > self.config.max_iterations {
                debug!(
                    "[AStar] FAILED: IterationLimit ({} nodes)",
                    nodes_expanded
                );
                return Err(PathFailure::Aborted {
                    reason: AbortReason::IterationLimit,
                    nodes_expanded,
                });
            }

            if nodes_expanded % DEADLINE_CHECK_INTERVAL == 0
                && deadline.is_some_and(|d| Instant::now() >= d)
            {
                debug!("[AStar] FAILED: Deadline ({} nodes)", nodes_expanded);
                return Err(PathFailure::Aborted {
                    reason: AbortReason::Deadline,
                    nodes_expanded,
                });
            }

            // Goal reached
            if current.index == goal {
                return Ok(self.reconstruct_path(&came_from, goal, nodes_expanded));
            }

            closed[current.index] = true;

            let tentative_g = current.g_cost + 1;
            for &neighbor in nodes[current.index].neighbors() {
                if closed[neighbor] || tentative_g >= g_scores[neighbor] {
                    continue;
                }
                came_from[neighbor] = Some(current.index);
                g_scores[neighbor] = tentative_g;
                open_set.push(AStarNode {
                    index: neighbor,
                    g_cost: tentative_g,
                    f_cost: tentative_g as f64
                        + heuristic(nodes[neighbor].position(), goal_pos, span),
                });
            }
        }

        debug!(
            "[AStar] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        Err(PathFailure::NoPath { nodes_expanded })
    }

    /// Walk the predecessor chain back from the goal
    fn reconstruct_path(
        &self,
        came_from: &[Option<NodeIndex>],
        goal: NodeIndex,
        nodes_expanded: usize,
    ) -> PathResult {
        let mut indices = vec![goal];
        let mut current = goal;
        while let Some(prev) = came_from[current] {
            indices.push(prev);
            current = prev;
        }
        indices.reverse();

        let nodes = self.graph.nodes();
        let node_ids: Vec<NodeId> = indices.iter().map(|&i| nodes[i].id().clone()).collect();
        let path: Vec<MapPoint> = indices.iter().map(|&i| nodes[i].position()).collect();
        let hops = indices.len() - 1;

        trace!(
            "[AStar] SUCCESS: {} hops, nodes_expanded={}",
            hops,
            nodes_expanded
        );

        PathResult {
            nodes: indices,
            node_ids,
            path,
            hops,
            nodes_expanded,
        }
    }
}

/// Manhattan distance in hop units (0 when the graph has no edges)
#[inline]
fn heuristic(from: MapPoint, to: MapPoint, span: f64) -> f64 {
    if span <= 0.0 {
        return 0.0;
    }
    let dx = (from.x as f64 - to.x as f64).abs();
    let dy = (from.y as f64 - to.y as f64).abs();
    (dx + dy) / span
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;
    use std::time::Duration;

    /// Open `w` x `h` lattice at unit spacing, ids "{x}_{y}"
    fn lattice(w: i32, h: i32, blocked: &[(i32, i32)]) -> SpatialGraph {
        let mut builder = GraphBuilder::new();
        let mut idx = std::collections::HashMap::new();
        for x in 0..w {
            for y in 0..h {
                if blocked.contains(&(x, y)) {
                    continue;
                }
                let p = MapPoint::new(x as f32, y as f32);
                idx.insert((x, y), builder.add_node(NodeId::from_point(p), p));
            }
        }
        for (&(x, y), &a) in &idx {
            for (nx, ny) in [(x + 1, y), (x, y + 1)] {
                if let Some(&b) = idx.get(&(nx, ny)) {
                    builder.connect(a, b);
                }
            }
        }
        builder.build()
    }

    fn two_islands() -> SpatialGraph {
        // 40x40 block plus a detached pair far away
        let mut builder = GraphBuilder::new();
        let mut idx = std::collections::HashMap::new();
        for x in 0..40 {
            for y in 0..40 {
                let p = MapPoint::new(x as f32, y as f32);
                idx.insert((x, y), builder.add_node(NodeId::from_point(p), p));
            }
        }
        for x in 0..40 {
            for y in 0..40 {
                if x + 1 < 40 {
                    builder.connect(idx[&(x, y)], idx[&(x + 1, y)]);
                }
                if y + 1 < 40 {
                    builder.connect(idx[&(x, y)], idx[&(x, y + 1)]);
                }
            }
        }
        let a = builder.add_node(NodeId::from("island_a"), MapPoint::new(500.0, 500.0));
        let b = builder.add_node(NodeId::from("island_b"), MapPoint::new(501.0, 500.0));
        builder.connect(a, b);
        builder.build()
    }

    #[test]
    fn test_straight_corridor() {
        let graph = lattice(10, 1, &[]);
        let result = AStarPlanner::with_defaults(&graph).find_path("0_0", "9_0").unwrap();

        assert_eq!(result.hops, 9);
        assert_eq!(result.path.first(), Some(&MapPoint::new(0.0, 0.0)));
        assert_eq!(result.path.last(), Some(&MapPoint::new(9.0, 0.0)));
        assert_eq!(result.length(), 9.0);
    }

    #[test]
    fn test_path_around_wall() {
        // Wall at x = 2 for y in 0..4, gap at y = 4
        let wall: Vec<(i32, i32)> = (0..4).map(|y| (2, y)).collect();
        let graph = lattice(5, 5, &wall);
        let result = AStarPlanner::with_defaults(&graph).find_path("0_0", "4_0").unwrap();

        // Down 4, across 4, up 4
        assert_eq!(result.hops, 12);
        for pair in result.node_ids.windows(2) {
            assert!(graph.are_adjacent(pair[0].as_str(), pair[1].as_str()));
        }
    }

    #[test]
    fn test_invalid_endpoints() {
        let graph = lattice(3, 3, &[]);
        let planner = AStarPlanner::with_defaults(&graph);

        assert_eq!(
            planner.find_path("0_0", "7_7"),
            Err(PathFailure::InvalidEndpoints {
                unknown: vec![NodeId::from("7_7")]
            })
        );
        assert_eq!(
            planner.find_path("x", "y"),
            Err(PathFailure::InvalidEndpoints {
                unknown: vec![NodeId::from("x"), NodeId::from("y")]
            })
        );
        assert!(matches!(
            planner.find_path_indices(0, 99),
            Err(PathFailure::InvalidEndpoints { .. })
        ));
    }

    #[test]
    fn test_disconnected_is_no_path() {
        let graph = two_islands();
        let result = AStarPlanner::with_defaults(&graph).find_path("0_0", "island_a");

        match result {
            Err(PathFailure::NoPath { nodes_expanded }) => assert_eq!(nodes_expanded, 1600),
            other => panic!("expected NoPath, got {:?}", other),
        }
    }

    #[test]
    fn test_iteration_limit() {
        let graph = two_islands();
        let planner = AStarPlanner::new(&graph, AStarConfig::default().with_max_iterations(10));

        assert_eq!(
            planner.find_path("0_0", "island_a"),
            Err(PathFailure::Aborted {
                reason: AbortReason::IterationLimit,
                nodes_expanded: 11,
            })
        );
    }

    #[test]
    fn test_deadline() {
        let graph = two_islands();
        let config = AStarConfig::default().with_timeout(Duration::ZERO);
        let planner = AStarPlanner::new(&graph, config);

        assert_eq!(
            planner.find_path("0_0", "island_a"),
            Err(PathFailure::Aborted {
                reason: AbortReason::Deadline,
                nodes_expanded: DEADLINE_CHECK_INTERVAL,
            })
        );
    }

    #[test]
    fn test_edgeless_graph() {
        let mut builder = GraphBuilder::new();
        builder.add_node(NodeId::from("a"), MapPoint::ZERO);
        builder.add_node(NodeId::from("b"), MapPoint::new(1.0, 0.0));
        let graph = builder.build();
        let planner = AStarPlanner::with_defaults(&graph);

        assert_eq!(planner.find_path("a", "a").unwrap().hops, 0);
        assert_eq!(
            planner.find_path("a", "b"),
            Err(PathFailure::NoPath { nodes_expanded: 1 })
        );
    }

    #[test]
    fn test_heuristic_is_hop_scaled() {
        let a = MapPoint::new(0.0, 0.0);
        let b = MapPoint::new(30.0, 15.0);
        assert_eq!(heuristic(a, b, 15.0), 3.0);
        assert_eq!(heuristic(a, b, 0.0), 0.0);
    }
}
