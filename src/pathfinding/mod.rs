//! Path planning over the navigation graph.
//!
//! - **A* Search**: fewest-hop paths between two node identifiers
//! - **Polyline helpers**: length and interpolation along a found path
//!
//! ## A* Pathfinding
//!
//! ```rust,ignore
//! use marga_nav::pathfinding::{AStarConfig, AStarPlanner};
//!
//! let planner = AStarPlanner::new(&graph, AStarConfig::default());
//! match planner.find_path("15_30", "300_45") {
//!     Ok(result) => println!("{} hops, {:.1} units", result.hops, result.length()),
//!     Err(failure) => println!("no route: {}", failure),
//! }
//! ```

pub mod astar;
mod polyline;

pub use astar::{
    AStarConfig, AStarPlanner, AbortReason, PathFailure, PathResult, find_path, path_exists,
};
pub use polyline::{point_along, polyline_length};
