//! A* search types.

use std::cmp::Ordering;
use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::config::defaults;
use crate::core::{MapPoint, NodeId};
use crate::graph::NodeIndex;
use crate::pathfinding::polyline_length;

/// A frontier entry in the A* search
#[derive(Clone, Copy, Debug)]
pub(super) struct AStarNode {
    pub index: NodeIndex,
    pub g_cost: u32, // Hops from start
    pub f_cost: f64, // g_cost + heuristic
}

impl Eq for AStarNode {}

impl PartialEq for AStarNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for AStarNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior; equal f pops the lowest id
        other
            .f_cost
            .total_cmp(&self.f_cost)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for AStarNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* search configuration
#[derive(Clone, Debug, PartialEq)]
pub struct AStarConfig {
    /// Maximum number of nodes to expand before giving up
    pub max_iterations: usize,
    /// Wall-clock budget for one search (`None` = unbounded)
    pub timeout: Option<Duration>,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self {
            max_iterations: defaults::max_iterations(),
            timeout: None,
        }
    }
}

impl AStarConfig {
    /// Limit expansions
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Limit wall-clock time
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// A successful search
#[derive(Clone, Debug, PartialEq)]
pub struct PathResult {
    /// Storage indices from start to goal, inclusive
    pub nodes: Vec<NodeIndex>,
    /// Identifiers from start to goal, inclusive
    pub node_ids: Vec<NodeId>,
    /// Node positions from start to goal, inclusive
    pub path: Vec<MapPoint>,
    /// Edges traversed (`path.len() - 1`)
    pub hops: usize,
    /// Number of nodes expanded during search
    pub nodes_expanded: usize,
}

impl PathResult {
    /// Path length in waypoints
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// True only for a default-constructed result; searches always return
    /// at least the start node
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Geometric length in map units
    pub fn length(&self) -> f32 {
        polyline_length(&self.path)
    }
}

/// Why a search gave up before finishing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbortReason {
    /// `max_iterations` expansions used
    IterationLimit,
    /// `timeout` elapsed
    Deadline,
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::IterationLimit => f.write_str("iteration limit reached"),
            AbortReason::Deadline => f.write_str("deadline exceeded"),
        }
    }
}

/// Reason for path failure.
///
/// `NoPath` is an ordinary outcome (the endpoints are in different
/// components); `InvalidEndpoints` points at a caller or data bug.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PathFailure {
    /// Start and/or goal identifier is not in the graph; no search ran
    #[error("invalid endpoints: unknown node(s) {}", join_ids(.unknown))]
    InvalidEndpoints {
        /// The missing identifiers (start first)
        unknown: Vec<NodeId>,
    },

    /// Frontier exhausted without reaching the goal
    #[error("no path between endpoints ({nodes_expanded} nodes expanded)")]
    NoPath {
        /// Nodes expanded before giving up
        nodes_expanded: usize,
    },

    /// Search stopped by a safety limit; a path may still exist
    #[error("search aborted: {reason} after {nodes_expanded} nodes")]
    Aborted {
        /// Which limit fired
        reason: AbortReason,
        /// Nodes expanded before stopping
        nodes_expanded: usize,
    },
}

fn join_ids(ids: &[NodeId]) -> String {
    ids.iter()
        .map(NodeId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
