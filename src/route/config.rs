//! Route planner configuration.

use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Snapping and metric parameters for POI routes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// POI snapping tolerance in map units (default: 120)
    #[serde(default = "defaults::poi_max_distance")]
    pub snap_distance: f32,

    /// Physical scale of one map unit; metres and ETA are only reported
    /// when this is set
    #[serde(default)]
    pub meters_per_unit: Option<f32>,

    /// Walking speed for ETA (default: 1.4 m/s)
    #[serde(default = "defaults::walking_speed_mps")]
    pub walking_speed_mps: f32,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            snap_distance: defaults::poi_max_distance(),
            meters_per_unit: None,
            walking_speed_mps: defaults::walking_speed_mps(),
        }
    }
}

impl RouteConfig {
    /// Set the map scale
    pub fn with_meters_per_unit(mut self, meters_per_unit: f32) -> Self {
        self.meters_per_unit = Some(meters_per_unit);
        self
    }
}
