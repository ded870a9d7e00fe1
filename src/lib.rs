//! # Marga-Nav: Indoor Navigation Graph Engine
//!
//! Turns indoor floor plans into walkable graphs and routes across them.
//!
//! ## Features
//!
//! - **Raster ingestion**: samples a floor-plan image on a regular grid;
//!   bright cells become nodes joined to their axis-aligned neighbors
//! - **Vector ingestion**: builds the graph from authored corridor polylines
//!   (GeoJSON-style line strings)
//! - **Nearest-node snapping**: maps an arbitrary coordinate to the closest
//!   walkable node within a tolerance
//! - **A\* search**: fewest-hop paths between nodes, with iteration and
//!   deadline limits
//! - **POI routing**: anchored points of interest, route length and walking ETA
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use marga_nav::io::{load_graph, save_graph};
//! use marga_nav::pathfinding::find_path;
//! use marga_nav::query::locate_nearest_node;
//! use marga_nav::raster::{RasterConfig, RasterGraphBuilder};
//!
//! # fn main() -> marga_nav::Result<()> {
//! // One-shot build step
//! let builder = RasterGraphBuilder::new(RasterConfig::default())?;
//! let graph = builder.build_from_path("floor-plan.png")?;
//! save_graph(&graph, "navgraph.json")?;
//!
//! // Serving side
//! let graph = load_graph("navgraph.json")?;
//! let from = locate_nearest_node(&graph, 120.0, 40.0, 50.0).cloned();
//! let to = locate_nearest_node(&graph, 610.0, 300.0, 50.0).cloned();
//! if let (Some(from), Some(to)) = (from, to) {
//!     match find_path(&graph, from.as_str(), to.as_str()) {
//!         Ok(result) => println!("{} hops", result.hops),
//!         Err(failure) => println!("No route: {}", failure),
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Coordinate Convention
//!
//! Every coordinate in the crate is `(x, y)` in source-map units:
//! - **x**: image column / horizontal axis
//! - **y**: image row / vertical axis (grows downward for raster plans)
//!
//! Node identifiers are `"{x}_{y}"` with both components rounded half up.
//! Vector input authored as `[y, x]` is swapped once at ingestion
//! ([`vector::AxisOrder::YX`]); nothing downstream ever swaps.
//!
//! ## Architecture
//!
//! - [`core`]: Fundamental types (MapPoint, GridCoord, NodeId)
//! - [`graph`]: Immutable spatial graph and its builder
//! - [`raster`]: Floor-plan image to graph
//! - [`vector`]: Corridor polylines to graph
//! - [`query`]: Nearest-node locators
//! - [`pathfinding`]: A* search and polyline helpers
//! - [`route`]: POI anchoring and route metrics
//! - [`io`]: Versioned JSON graph files
//! - [`config`]: TOML configuration
//!
//! ## Data Flow
//!
//! ```text
//!   floor-plan image        corridor polylines
//!          │                        │
//!          ▼                        ▼
//!   RasterGraphBuilder      VectorGraphBuilder
//!          │                        │
//!          └──────────┬─────────────┘
//!                     ▼
//!               SpatialGraph ──► save_graph / load_graph
//!                     │
//!          ┌──────────┼──────────┐
//!          ▼                     ▼
//!     NodeLocator           AStarPlanner
//!   (coordinate → id)    (id, id → path)
//!          └──────────┬──────────┘
//!                     ▼
//!               RoutePlanner
//!         (POI → POI, length, ETA)
//! ```
//!
//! ## Concurrency
//!
//! A built [`SpatialGraph`] is read-only and `Send + Sync`. Locators and
//! planners borrow it and keep all search state local to each call, so any
//! number of threads may query one graph without locking.

pub mod config;
pub mod core;
pub mod error;
pub mod graph;
pub mod io;
pub mod pathfinding;
pub mod query;
pub mod raster;
pub mod route;
pub mod vector;

// Re-export main types at crate root
pub use error::{Error, Result};
pub use graph::{GraphBuilder, SpatialGraph};
pub use pathfinding::{AStarPlanner, PathFailure, PathResult};
pub use query::{NodeLocator, locate_nearest_node};
pub use raster::RasterGraphBuilder;
pub use vector::VectorGraphBuilder;
