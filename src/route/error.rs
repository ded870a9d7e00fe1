//! Route planning errors.

use thiserror::Error;

use crate::pathfinding::PathFailure;

/// Why a route between two POIs could not be produced
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Origin and destination are the same POI
    #[error("origin and destination are the same point of interest")]
    SameEndpoints,

    /// POI has not been snapped to the graph
    #[error("point of interest '{poi}' has no graph anchor")]
    Unanchored {
        /// POI identifier
        poi: String,
    },

    /// No node lies within the snapping tolerance of the POI
    #[error("no walkable node near point of interest '{poi}'")]
    NoNearbyNode {
        /// POI identifier
        poi: String,
    },

    /// Graph search failed between the anchors
    #[error(transparent)]
    Search(#[from] PathFailure),
}
