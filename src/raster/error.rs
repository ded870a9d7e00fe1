//! Raster construction errors.

use thiserror::Error;

/// Fatal graph construction failure. No partial graph is produced.
#[derive(Error, Debug)]
pub enum BuildError {
    /// Source image could not be opened or decoded
    #[error("Failed to read floor-plan image: {0}")]
    Image(#[from] image::ImageError),

    /// Builder parameters are unusable
    #[error("Invalid raster configuration: {0}")]
    InvalidConfig(String),
}
