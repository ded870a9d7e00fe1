//! Route request and result types.

use std::time::Duration;

use super::config::RouteConfig;
use super::poi::Poi;
use crate::core::{MapPoint, NodeId};
use crate::pathfinding::{PathResult, point_along};

/// One routing request between two POIs.
///
/// Carries everything a plan needs; the planner holds no per-user state.
#[derive(Clone, Copy, Debug)]
pub struct RouteRequest<'p> {
    /// Where the route starts
    pub origin: &'p Poi,
    /// Where the route ends
    pub destination: &'p Poi,
}

impl<'p> RouteRequest<'p> {
    /// Create a request from `origin` to `destination`
    pub fn new(origin: &'p Poi, destination: &'p Poi) -> Self {
        Self {
            origin,
            destination,
        }
    }
}

/// A planned route with its derived metrics
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    /// Node positions from origin anchor to destination anchor
    pub path: Vec<MapPoint>,
    /// Node identifiers along the path
    pub node_ids: Vec<NodeId>,
    /// Edges traversed
    pub hops: usize,
    /// Polyline length in map units
    pub length: f32,
    /// Length in metres, when the map scale is configured
    pub length_meters: Option<f32>,
    /// Walking time, when metres are known
    pub eta: Option<Duration>,
}

impl Route {
    pub(super) fn from_path(result: PathResult, config: &RouteConfig) -> Self {
        let length = result.length();
        let length_meters = config
            .meters_per_unit
            .filter(|scale| scale.is_finite() && *scale > 0.0)
            .map(|scale| length * scale);
        let eta = length_meters.and_then(|meters| walking_time(meters, config.walking_speed_mps));

        Self {
            path: result.path,
            node_ids: result.node_ids,
            hops: result.hops,
            length,
            length_meters,
            eta,
        }
    }

    /// Position at fraction `progress` (clamped to `[0, 1]`) of the route
    pub fn point_at(&self, progress: f32) -> Option<MapPoint> {
        point_along(&self.path, progress)
    }
}

fn walking_time(meters: f32, speed_mps: f32) -> Option<Duration> {
    if !(speed_mps.is_finite() && speed_mps > 0.0) {
        return None;
    }
    Duration::try_from_secs_f32(meters / speed_mps).ok()
}
