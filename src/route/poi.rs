//! Points of interest and their graph anchors.

use serde::{Deserialize, Serialize};

use super::error::RouteError;
use crate::core::{MapPoint, NodeId};
use crate::query::NodeLocator;

/// A named destination placed in map coordinates.
///
/// The anchor is the identifier of the nearest graph node, cached by
/// [`Poi::snap`] and dropped whenever the POI moves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    id: String,
    name: String,
    position: MapPoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    anchor: Option<NodeId>,
}

impl Poi {
    /// Create an unanchored POI
    pub fn new(id: impl Into<String>, name: impl Into<String>, position: MapPoint) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            anchor: None,
        }
    }

    /// Attach a known anchor without a lookup
    pub fn with_anchor(mut self, anchor: NodeId) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Stable POI identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position in map units
    pub fn position(&self) -> MapPoint {
        self.position
    }

    /// Cached nearest node, if snapped
    pub fn anchor(&self) -> Option<&NodeId> {
        self.anchor.as_ref()
    }

    /// Move the POI; the cached anchor no longer applies
    pub fn set_position(&mut self, position: MapPoint) {
        self.position = position;
        self.anchor = None;
    }

    /// Snap to the nearest node strictly within `max_distance` and cache it.
    ///
    /// On failure the POI is left unanchored.
    pub fn snap<L: NodeLocator + ?Sized>(
        &mut self,
        locator: &L,
        max_distance: f32,
    ) -> Result<&NodeId, RouteError> {
        self.anchor = locator.locate_id(self.position, max_distance).cloned();
        self.anchor.as_ref().ok_or_else(|| RouteError::NoNearbyNode {
            poi: self.id.clone(),
        })
    }
}
