//! Vector ingestion errors.

use thiserror::Error;

/// Vector input rejected at the boundary
#[derive(Error, Debug)]
pub enum VectorError {
    /// Input file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input is not a valid feature collection
    #[error("Invalid feature collection: {0}")]
    Json(#[from] serde_json::Error),

    /// A vertex is malformed
    #[error("Invalid position at feature {feature}, vertex {vertex}: {reason}")]
    InvalidPosition {
        /// Feature index in the collection
        feature: usize,
        /// Vertex index within the feature's flattened coordinates
        vertex: usize,
        /// What is wrong with it
        reason: String,
    },
}
