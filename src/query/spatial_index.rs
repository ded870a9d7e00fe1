//! Grid-based spatial index for nearest-node queries.
//!
//! Divides the plane into square buckets of side `cell_size`; a query only
//! visits the buckets overlapping the `max_distance` box around the point.
//!
//! # Performance
//!
//! - Build: O(n)
//! - Query: O(k) where k = nodes in the visited buckets
//!
//! Falls back to scanning every node when the query box covers more
//! buckets than exist (e.g. an unbounded tolerance).

use std::collections::HashMap;

use log::debug;

use super::locator::{NodeLocator, NodeMatch, closest_among, valid_query};
use crate::core::MapPoint;
use crate::graph::{NodeIndex, SpatialGraph};

/// Bucket side used when none is supplied and the graph has no edges
const FALLBACK_CELL_SIZE: f32 = 64.0;

/// Buckets per edge span when sizing automatically
const SPANS_PER_CELL: f32 = 4.0;

/// Nearest-node locator backed by a uniform bucket grid
#[derive(Clone, Debug)]
pub struct GridBucketLocator<'a> {
    graph: &'a SpatialGraph,
    cell_size: f32,
    buckets: HashMap<(i64, i64), Vec<NodeIndex>>,
}

impl<'a> GridBucketLocator<'a> {
    /// Index `graph` with buckets of side `cell_size` (map units).
    ///
    /// Non-positive or non-finite sizes fall back to automatic sizing.
    pub fn new(graph: &'a SpatialGraph, cell_size: f32) -> Self {
        let cell_size = if cell_size.is_finite() && cell_size > 0.0 {
            cell_size
        } else {
            auto_cell_size(graph)
        };

        let mut buckets: HashMap<(i64, i64), Vec<NodeIndex>> = HashMap::new();
        for (index, node) in graph.nodes().iter().enumerate() {
            buckets
                .entry(cell_key(node.position(), cell_size))
                .or_default()
                .push(index);
        }

        debug!(
            "[GridIndex] {} nodes in {} buckets (cell size {:.1})",
            graph.len(),
            buckets.len(),
            cell_size
        );

        Self {
            graph,
            cell_size,
            buckets,
        }
    }

    /// Index with a cell size derived from the graph's edge lengths
    pub fn with_auto_cell_size(graph: &'a SpatialGraph) -> Self {
        Self::new(graph, auto_cell_size(graph))
    }

    /// Bucket side length
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Number of non-empty buckets
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

impl NodeLocator for GridBucketLocator<'_> {
    fn graph(&self) -> &SpatialGraph {
        self.graph
    }

    fn locate(&self, point: MapPoint, max_distance: f32) -> Option<NodeMatch> {
        if !valid_query(point, max_distance) {
            return None;
        }

        let low = cell_key(
            MapPoint::new(point.x - max_distance, point.y - max_distance),
            self.cell_size,
        );
        let high = cell_key(
            MapPoint::new(point.x + max_distance, point.y + max_distance),
            self.cell_size,
        );

        let span_x = high.0 as i128 - low.0 as i128 + 1;
        let span_y = high.1 as i128 - low.1 as i128 + 1;
        let covered = span_x.checked_mul(span_y);
        if !max_distance.is_finite() || covered.is_none_or(|n| n > self.buckets.len() as i128) {
            return closest_among(self.graph, 0..self.graph.len(), point, max_distance);
        }

        let candidates = (low.0..=high.0)
            .flat_map(|cx| (low.1..=high.1).map(move |cy| (cx, cy)))
            .filter_map(|key| self.buckets.get(&key))
            .flatten()
            .copied();

        closest_among(self.graph, candidates, point, max_distance)
    }
}

#[inline]
fn cell_key(point: MapPoint, cell_size: f32) -> (i64, i64) {
    (
        (point.x / cell_size).floor() as i64,
        (point.y / cell_size).floor() as i64,
    )
}

fn auto_cell_size(graph: &SpatialGraph) -> f32 {
    let span = graph.max_edge_span();
    if span > 0.0 {
        span * SPANS_PER_CELL
    } else {
        FALLBACK_CELL_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NodeId;
    use crate::graph::GraphBuilder;
    use crate::query::LinearScanLocator;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn scattered_graph(rng: &mut StdRng, count: usize) -> SpatialGraph {
        let mut builder = GraphBuilder::new();
        for _ in 0..count {
            let p = MapPoint::new(
                rng.gen_range(0..400) as f32,
                rng.gen_range(0..400) as f32,
            );
            builder.add_node(NodeId::from_point(p), p);
        }
        builder.build()
    }

    #[test]
    fn test_matches_linear_scan() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = scattered_graph(&mut rng, 300);
        let linear = LinearScanLocator::new(&graph);
        let indexed = GridBucketLocator::new(&graph, 25.0);

        for _ in 0..500 {
            let point = MapPoint::new(rng.gen_range(-50.0..450.0), rng.gen_range(-50.0..450.0));
            let max_distance = rng.gen_range(1.0..80.0);
            assert_eq!(
                linear.locate(point, max_distance),
                indexed.locate(point, max_distance),
                "query {:?} within {}",
                point,
                max_distance
            );
        }
    }

    #[test]
    fn test_ties_match_linear_scan() {
        // Four nodes equidistant from the origin, in different buckets
        let mut builder = GraphBuilder::new();
        for (id, x, y) in [("w", -3.0, 0.0), ("e", 3.0, 0.0), ("n", 0.0, -3.0), ("s", 0.0, 3.0)] {
            builder.add_node(NodeId::from(id), MapPoint::new(x, y));
        }
        let graph = builder.build();
        let indexed = GridBucketLocator::new(&graph, 2.0);

        assert_eq!(indexed.locate_id(MapPoint::ZERO, 5.0).unwrap().as_str(), "e");
    }

    #[test]
    fn test_unbounded_tolerance_scans_everything() {
        let mut builder = GraphBuilder::new();
        builder.add_node(NodeId::from("far"), MapPoint::new(1.0e6, 1.0e6));
        let graph = builder.build();
        let indexed = GridBucketLocator::new(&graph, 10.0);

        assert!(indexed.locate(MapPoint::ZERO, f32::INFINITY).is_some());
        assert!(indexed.locate(MapPoint::ZERO, 100.0).is_none());
    }

    #[test]
    fn test_huge_finite_tolerance_scans_everything() {
        let mut builder = GraphBuilder::new();
        builder.add_node(NodeId::from("0_0"), MapPoint::new(0.0, 0.0));
        builder.add_node(NodeId::from("10_0"), MapPoint::new(10.0, 0.0));
        let graph = builder.build();
        let indexed = GridBucketLocator::with_auto_cell_size(&graph);
        let linear = LinearScanLocator::new(&graph);

        let point = MapPoint::new(3.0, 0.0);
        let found = indexed.locate(point, 1.0e30);
        assert_eq!(found, linear.locate(point, 1.0e30));
        assert_eq!(indexed.locate_id(point, 1.0e30).unwrap().as_str(), "0_0");
        assert!(indexed.locate(point, f32::MAX).is_some());
    }

    #[test]
    fn test_auto_cell_size() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_node(NodeId::from("0_0"), MapPoint::new(0.0, 0.0));
        let b = builder.add_node(NodeId::from("15_0"), MapPoint::new(15.0, 0.0));
        builder.connect(a, b);
        let graph = builder.build();

        let indexed = GridBucketLocator::with_auto_cell_size(&graph);
        assert_eq!(indexed.cell_size(), 60.0);
        assert_eq!(indexed.bucket_count(), 1);

        let invalid = GridBucketLocator::new(&graph, -1.0);
        assert_eq!(invalid.cell_size(), 60.0);
    }
}
