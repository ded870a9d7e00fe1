//! Snapping, search, route and output sections.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::pathfinding::AStarConfig;

/// Nearest-node tolerances, in map units
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnappingSection {
    /// Tolerance for ad-hoc coordinate lookups
    #[serde(default = "defaults::max_distance")]
    pub max_distance: f32,

    /// Tolerance when anchoring POIs
    #[serde(default = "defaults::poi_max_distance")]
    pub poi_max_distance: f32,
}

impl Default for SnappingSection {
    fn default() -> Self {
        Self {
            max_distance: defaults::max_distance(),
            poi_max_distance: defaults::poi_max_distance(),
        }
    }
}

/// A* safety limits
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchSection {
    /// Expansion budget per search
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: usize,

    /// Wall-clock budget per search (milliseconds, 0=unbounded)
    #[serde(default)]
    pub timeout_ms: u64,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            max_iterations: defaults::max_iterations(),
            timeout_ms: 0,
        }
    }
}

impl SearchSection {
    /// Convert to the planner configuration
    pub fn to_astar_config(&self) -> AStarConfig {
        AStarConfig {
            max_iterations: self.max_iterations,
            timeout: (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms)),
        }
    }
}

/// Route metric settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteSection {
    /// Metres per map unit (unset = no metric lengths)
    #[serde(default)]
    pub meters_per_unit: Option<f32>,

    /// Walking speed for ETA (m/s)
    #[serde(default = "defaults::walking_speed_mps")]
    pub walking_speed_mps: f32,
}

impl Default for RouteSection {
    fn default() -> Self {
        Self {
            meters_per_unit: None,
            walking_speed_mps: defaults::walking_speed_mps(),
        }
    }
}

/// Output locations
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    /// Where builders write the graph when no path is given
    #[serde(default = "defaults::graph_path")]
    pub graph_path: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            graph_path: defaults::graph_path(),
        }
    }
}
