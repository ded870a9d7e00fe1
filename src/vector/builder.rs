//! Polyline-to-graph construction.

use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::error::VectorError;
use super::features::{AxisOrder, FeatureCollection};
use crate::core::{MapPoint, NodeId, round_half_up};
use crate::graph::{GraphBuilder, SpatialGraph};

/// Vector builder configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorConfig {
    /// Component order of authored positions (default: `xy`)
    #[serde(default)]
    pub axis_order: AxisOrder,
}

/// Builds a navigation graph from corridor polylines.
///
/// Nodes sit at the rounded vertex coordinates, so identifier and position
/// always agree and the result does not depend on feature order.
#[derive(Clone, Debug, Default)]
pub struct VectorGraphBuilder {
    config: VectorConfig,
}

impl VectorGraphBuilder {
    /// Create a new builder
    pub fn new(config: VectorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &VectorConfig {
        &self.config
    }

    /// Build from typed polylines already in `(x, y)` order
    pub fn build_polylines(&self, polylines: &[Vec<MapPoint>]) -> SpatialGraph {
        let mut builder = GraphBuilder::new();
        for polyline in polylines {
            add_polyline(&mut builder, polyline);
        }
        finish(builder, polylines.len())
    }

    /// Build from a feature collection.
    ///
    /// Every position is validated before any node is created; one bad
    /// vertex rejects the whole input.
    pub fn build(&self, collection: &FeatureCollection) -> Result<SpatialGraph, VectorError> {
        let axis_order = self.config.axis_order;
        let mut polylines: Vec<Vec<MapPoint>> = Vec::new();
        let mut skipped = 0;

        for (feature_idx, feature) in collection.features.iter().enumerate() {
            let Some(geometry) = &feature.geometry else {
                skipped += 1;
                continue;
            };
            let parts = geometry.polylines();
            if parts.is_empty() {
                skipped += 1;
                continue;
            }

            let mut vertex = 0;
            for part in parts {
                let mut points = Vec::with_capacity(part.len());
                for position in part {
                    let point = axis_order.to_point(position).map_err(|reason| {
                        VectorError::InvalidPosition {
                            feature: feature_idx,
                            vertex,
                            reason,
                        }
                    })?;
                    points.push(point);
                    vertex += 1;
                }
                polylines.push(points);
            }
        }

        if skipped > 0 {
            debug!("[Vector] Ignored {} non-polyline features", skipped);
        }
        Ok(self.build_polylines(&polylines))
    }

    /// Parse a GeoJSON feature collection from disk and build its graph
    pub fn build_from_path<P: AsRef<Path>>(&self, path: P) -> Result<SpatialGraph, VectorError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let collection = FeatureCollection::from_json(&contents)?;
        self.build(&collection)
    }
}

/// Register each consecutive vertex pair as a bidirectional edge
fn add_polyline(builder: &mut GraphBuilder, polyline: &[MapPoint]) {
    if polyline.len() < 2 {
        debug!(
            "[Vector] Skipping polyline with {} vertex(es)",
            polyline.len()
        );
        return;
    }

    for pair in polyline.windows(2) {
        let a = register(builder, pair[0]);
        let b = register(builder, pair[1]);
        // Endpoints rounding to the same id register one node and no edge
        builder.connect(a, b);
    }
}

fn register(builder: &mut GraphBuilder, point: MapPoint) -> usize {
    let canonical = MapPoint::new(
        round_half_up(point.x) as f32,
        round_half_up(point.y) as f32,
    );
    builder.add_node(NodeId::from_point(canonical), canonical)
}

fn finish(builder: GraphBuilder, polylines: usize) -> SpatialGraph {
    let graph = builder.build();
    info!(
        "[Vector] {} polylines: {} nodes, {} edges",
        polylines,
        graph.len(),
        graph.edge_count()
    );
    graph
}
