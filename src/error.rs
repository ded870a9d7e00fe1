//! Error types for Marga

use crate::config::ConfigLoadError;
use crate::io::GraphFileError;
use crate::pathfinding::PathFailure;
use crate::raster::BuildError;
use crate::route::RouteError;
use crate::vector::VectorError;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Marga error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Raster graph construction failed
    #[error("Raster build failed: {0}")]
    Raster(#[from] BuildError),

    /// Vector graph construction failed
    #[error("Vector build failed: {0}")]
    Vector(#[from] VectorError),

    /// Graph file could not be read or written
    #[error("Graph file error: {0}")]
    GraphFile(#[from] GraphFileError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigLoadError),

    /// Search between two nodes failed
    #[error("Path search failed: {0}")]
    Path(#[from] PathFailure),

    /// Route between two POIs failed
    #[error("Routing failed: {0}")]
    Route(#[from] RouteError),

    /// Coordinate did not snap to any node
    #[error("No node within {max_distance} units of ({x}, {y})")]
    NoNearbyNode {
        /// Query x
        x: f32,
        /// Query y
        y: f32,
        /// Tolerance used
        max_distance: f32,
    },
}
