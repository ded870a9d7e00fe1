//! Raster builder configuration.

use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Raster sampling parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RasterConfig {
    /// Sampling spacing in pixels, both axes (default: 15)
    #[serde(default = "defaults::grid_step")]
    pub grid_step: u32,

    /// A cell is walkable iff R, G and B all exceed this value (default: 200)
    #[serde(default = "defaults::walkable_threshold")]
    pub walkable_threshold: u8,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            grid_step: defaults::grid_step(),
            walkable_threshold: defaults::walkable_threshold(),
        }
    }
}

impl RasterConfig {
    /// Create with a custom grid step and the default threshold
    pub fn with_grid_step(grid_step: u32) -> Self {
        Self {
            grid_step,
            ..Default::default()
        }
    }

    /// Override the walkable threshold
    pub fn with_threshold(mut self, walkable_threshold: u8) -> Self {
        self.walkable_threshold = walkable_threshold;
        self
    }
}
