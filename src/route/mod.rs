//! Routes between points of interest.
//!
//! POIs are snapped once to their nearest node ([`Poi::snap`]); a
//! [`RouteRequest`] then names an origin and destination and
//! [`RoutePlanner::plan`] runs A* between their anchors and derives the
//! route metrics (length, metres, walking time).

mod config;
mod error;
mod planner;
mod poi;
mod types;

pub use config::RouteConfig;
pub use error::RouteError;
pub use planner::RoutePlanner;
pub use poi::Poi;
pub use types::{Route, RouteRequest};
