//! Raster floor-plan ingestion.
//!
//! Samples a floor-plan image on a regular grid and emits a
//! [`SpatialGraph`](crate::graph::SpatialGraph) of walkable cells joined to
//! their axis-aligned neighbors.
//!
//! ```rust,ignore
//! use marga_nav::raster::{RasterConfig, RasterGraphBuilder};
//!
//! let builder = RasterGraphBuilder::new(RasterConfig::default())?;
//! let graph = builder.build_from_path("floor-plan.png")?;
//! println!("{}", graph.stats());
//! ```

mod builder;
mod config;
mod error;

pub use builder::{RasterGraphBuilder, is_walkable};
pub use config::RasterConfig;
pub use error::BuildError;
