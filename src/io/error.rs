//! Graph file errors.

use thiserror::Error;

use crate::core::NodeId;

/// Error reading or writing a graph file
#[derive(Debug, Error)]
pub enum GraphFileError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON or wrong field types
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Envelope names a different format
    #[error("Unknown graph format '{0}'")]
    UnknownFormat(String),

    /// Envelope version this build cannot read
    #[error("Unsupported graph file version {found} (supported: {supported})")]
    UnsupportedVersion {
        /// Version in the file (0 if missing)
        found: u64,
        /// Version this build reads
        supported: u32,
    },

    /// A neighbor list names a node that does not exist
    #[error("Node '{node}' lists unknown neighbor '{neighbor}'")]
    UnknownNeighbor {
        /// Node holding the list
        node: NodeId,
        /// Missing identifier
        neighbor: NodeId,
    },

    /// Edge listed on one endpoint only
    #[error("Edge {from} -> {to} has no reverse entry")]
    AsymmetricEdge {
        /// Endpoint listing the edge
        from: NodeId,
        /// Endpoint missing the reverse entry
        to: NodeId,
    },

    /// Node lists itself as a neighbor
    #[error("Node '{0}' lists itself as a neighbor")]
    SelfLoop(NodeId),

    /// NaN or infinite coordinate
    #[error("Node '{0}' has a non-finite coordinate")]
    InvalidCoordinate(NodeId),
}
