//! Main MargaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigLoadError;
use super::sections::{OutputSection, RouteSection, SearchSection, SnappingSection};
use crate::pathfinding::AStarConfig;
use crate::raster::RasterConfig;
use crate::route::RouteConfig;
use crate::vector::VectorConfig;

/// Default config file location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "configs/marga.toml";

/// Full navigation configuration loaded from TOML
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MargaConfig {
    /// Raster builder settings
    #[serde(default)]
    pub raster: RasterConfig,

    /// Vector builder settings
    #[serde(default)]
    pub vector: VectorConfig,

    /// Nearest-node tolerances
    #[serde(default)]
    pub snapping: SnappingSection,

    /// A* limits
    #[serde(default)]
    pub search: SearchSection,

    /// Route metrics
    #[serde(default)]
    pub route: RouteSection,

    /// Output locations
    #[serde(default)]
    pub output: OutputSection,
}

impl MargaConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Load from default config path (configs/marga.toml), or defaults if absent
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigLoadError> {
        toml::from_str(toml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Get the A* planner config
    pub fn astar_config(&self) -> AStarConfig {
        self.search.to_astar_config()
    }

    /// Get the route planner config
    pub fn route_config(&self) -> RouteConfig {
        RouteConfig {
            snap_distance: self.snapping.poi_max_distance,
            meters_per_unit: self.route.meters_per_unit,
            walking_speed_mps: self.route.walking_speed_mps,
        }
    }
}
