//! Configuration loading.
//!
//! Loads all settings from a single TOML file; every field has a default,
//! so an empty (or missing) file is valid.
//!
//! ```rust,ignore
//! use marga_nav::config::MargaConfig;
//!
//! // Load from default path (configs/marga.toml)
//! let config = MargaConfig::load_default()?;
//!
//! let planner = AStarPlanner::new(&graph, config.astar_config());
//! let routes = RoutePlanner::new(&graph, config.route_config(), config.astar_config());
//! ```
//!
//! ## Example TOML
//!
//! ```toml
//! [raster]
//! grid_step = 15              # pixels between samples
//! walkable_threshold = 200    # R, G and B must all exceed this
//!
//! [vector]
//! axis_order = "xy"           # or "yx" for [y, x] positions
//!
//! [snapping]
//! max_distance = 50.0
//! poi_max_distance = 120.0
//!
//! [search]
//! max_iterations = 1000000
//! timeout_ms = 0              # 0 = no deadline
//!
//! [route]
//! meters_per_unit = 0.05      # omit to skip metric lengths
//! walking_speed_mps = 1.4
//!
//! [output]
//! graph_path = "navgraph.json"
//! ```

pub(crate) mod defaults;
mod error;
mod marga;
mod sections;

pub use error::ConfigLoadError;
pub use marga::{DEFAULT_CONFIG_PATH, MargaConfig};
pub use sections::{OutputSection, RouteSection, SearchSection, SnappingSection};
