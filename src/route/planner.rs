//! POI-to-POI route planning.

use log::debug;

use super::config::RouteConfig;
use super::error::RouteError;
use super::poi::Poi;
use super::types::{Route, RouteRequest};
use crate::core::NodeId;
use crate::graph::SpatialGraph;
use crate::pathfinding::{AStarConfig, AStarPlanner};
use crate::query::GridBucketLocator;

/// Plans walking routes between anchored POIs over a shared graph
#[derive(Debug)]
pub struct RoutePlanner<'a> {
    graph: &'a SpatialGraph,
    locator: GridBucketLocator<'a>,
    search: AStarConfig,
    config: RouteConfig,
}

impl<'a> RoutePlanner<'a> {
    /// Create a route planner over `graph`
    pub fn new(graph: &'a SpatialGraph, config: RouteConfig, search: AStarConfig) -> Self {
        Self {
            graph,
            locator: GridBucketLocator::with_auto_cell_size(graph),
            search,
            config,
        }
    }

    /// Create with default routing and search configuration
    pub fn with_defaults(graph: &'a SpatialGraph) -> Self {
        Self::new(graph, RouteConfig::default(), AStarConfig::default())
    }

    /// Get the routing configuration
    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// Snap a POI to the graph using the configured tolerance
    pub fn anchor(&self, poi: &mut Poi) -> Result<(), RouteError> {
        poi.snap(&self.locator, self.config.snap_distance)?;
        Ok(())
    }

    /// Snap every POI, returning the ones that found no nearby node
    pub fn anchor_all(&self, pois: &mut [Poi]) -> Vec<RouteError> {
        pois.iter_mut()
            .filter_map(|poi| self.anchor(poi).err())
            .collect()
    }

    /// Plan a route between the anchors of two POIs
    pub fn plan(&self, request: &RouteRequest<'_>) -> Result<Route, RouteError> {
        let (origin, destination) = (request.origin, request.destination);
        if origin.id() == destination.id() {
            return Err(RouteError::SameEndpoints);
        }

        let start = anchor_of(origin)?;
        let goal = anchor_of(destination)?;

        let result = AStarPlanner::new(self.graph, self.search.clone())
            .find_path(start.as_str(), goal.as_str())?;
        let route = Route::from_path(result, &self.config);

        debug!(
            "[Route] {} -> {}: {} hops, {:.1} units",
            origin.id(),
            destination.id(),
            route.hops,
            route.length
        );
        Ok(route)
    }
}

fn anchor_of(poi: &Poi) -> Result<&NodeId, RouteError> {
    poi.anchor().ok_or_else(|| RouteError::Unanchored {
        poi: poi.id().to_string(),
    })
}
