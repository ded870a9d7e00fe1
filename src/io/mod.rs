//! Graph persistence.
//!
//! The navigation graph is built once (from a raster or vector source),
//! saved as a JSON artifact and loaded by the serving process at startup:
//!
//! ```rust,ignore
//! use marga_nav::io::{load_graph, save_graph};
//!
//! save_graph(&graph, "navgraph.json")?;
//! let graph = load_graph("navgraph.json")?;
//! ```
//!
//! Loading validates the document before any lookup runs: unknown or
//! one-way neighbors, self-loops and non-finite coordinates are rejected.

mod error;
mod graph_file;

pub use error::GraphFileError;
pub use graph_file::{FORMAT_NAME, FORMAT_VERSION, load_graph, read_graph, save_graph, write_graph};
