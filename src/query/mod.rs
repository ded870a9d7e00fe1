//! Graph queries.
//!
//! - [`NodeLocator`]: snap an arbitrary coordinate to the nearest node
//!   within a tolerance
//! - [`LinearScanLocator`]: exhaustive scan, no setup cost
//! - [`GridBucketLocator`]: uniform-grid spatial index for large graphs
//!
//! Both locators return the same node for the same query: the minimum
//! Euclidean distance strictly below `max_distance`, ties going to the
//! lowest identifier.

mod locator;
mod spatial_index;

pub use locator::{LinearScanLocator, NodeLocator, NodeMatch, locate_nearest_node};
pub use spatial_index::GridBucketLocator;
