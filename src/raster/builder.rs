//! Grid sampling of floor-plan images.

use std::path::Path;

use image::{DynamicImage, Rgb, RgbImage};
use log::{debug, info};

use super::config::RasterConfig;
use super::error::BuildError;
use crate::core::{GridCoord, MapPoint, NodeId};
use crate::graph::{GraphBuilder, NodeIndex, SpatialGraph};

/// Binary open-floor test: every color channel strictly above `threshold`.
///
/// Bright pixels are floor; anything darker is a wall, obstacle or fixture.
#[inline]
pub fn is_walkable(pixel: &Rgb<u8>, threshold: u8) -> bool {
    pixel.0.iter().all(|&channel| channel > threshold)
}

/// Builds a navigation graph from a rasterized floor plan.
///
/// Samples `(x, y)` for `x` in `0..width` and `y` in `0..height`, both
/// stepping by `grid_step`. Each walkable sample becomes node `"{x}_{y}"`
/// and is connected to the samples at `(x ± step, y)` and `(x, y ± step)`
/// when those are walkable too. Diagonals are never connected.
#[derive(Clone, Debug, Default)]
pub struct RasterGraphBuilder {
    config: RasterConfig,
}

impl RasterGraphBuilder {
    /// Create a builder, rejecting a zero grid step
    pub fn new(config: RasterConfig) -> Result<Self, BuildError> {
        if config.grid_step == 0 {
            return Err(BuildError::InvalidConfig(
                "grid_step must be at least 1 pixel".to_string(),
            ));
        }
        Ok(Self { config })
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Get the configuration
    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    /// Decode an image file and build its graph.
    ///
    /// An unreadable or corrupt file fails the whole build.
    pub fn build_from_path<P: AsRef<Path>>(&self, path: P) -> Result<SpatialGraph, BuildError> {
        let path = path.as_ref();
        debug!("[Raster] Reading {}", path.display());
        let image = image::open(path)?;
        Ok(self.build_image(&image))
    }

    /// Build from an already decoded image of any color type
    pub fn build_image(&self, image: &DynamicImage) -> SpatialGraph {
        self.build(&image.to_rgb8())
    }

    /// Build from RGB pixels
    pub fn build(&self, image: &RgbImage) -> SpatialGraph {
        let step = self.config.grid_step.max(1);
        let threshold = self.config.walkable_threshold;
        let (width, height) = image.dimensions();

        let sampler = SampleGrid {
            step: step as i64,
            cols: width.div_ceil(step) as usize,
            rows: height.div_ceil(step) as usize,
        };

        // Pass 1: classify samples, one node per walkable cell
        let mut builder = GraphBuilder::with_capacity(sampler.cols * sampler.rows);
        let mut cells: Vec<Option<NodeIndex>> = vec![None; sampler.cols * sampler.rows];

        for row in 0..sampler.rows {
            for col in 0..sampler.cols {
                let x = col as u32 * step;
                let y = row as u32 * step;
                if is_walkable(image.get_pixel(x, y), threshold) {
                    let coord = GridCoord::new(x as i64, y as i64);
                    let idx = builder.add_node(NodeId::from_grid(coord), MapPoint::from(coord));
                    cells[row * sampler.cols + col] = Some(idx);
                }
            }
        }

        // Pass 2: axis-aligned adjacency between walkable samples
        for row in 0..sampler.rows {
            for col in 0..sampler.cols {
                let Some(current) = cells[row * sampler.cols + col] else {
                    continue;
                };
                let coord = sampler.coord(col, row);
                for candidate in coord.neighbors_4(sampler.step) {
                    if let Some(neighbor) = sampler.cell_of(candidate).and_then(|c| cells[c]) {
                        builder.connect(current, neighbor);
                    }
                }
            }
        }

        let graph = builder.build();
        info!(
            "[Raster] {}x{} image, grid step {}: {} walkable nodes, {} edges",
            width,
            height,
            step,
            graph.len(),
            graph.edge_count()
        );
        graph
    }
}

/// Sampling lattice over the image
struct SampleGrid {
    step: i64,
    cols: usize,
    rows: usize,
}

impl SampleGrid {
    fn coord(&self, col: usize, row: usize) -> GridCoord {
        GridCoord::new(col as i64 * self.step, row as i64 * self.step)
    }

    /// Flat cell index of a pixel position, if it lies on the lattice
    fn cell_of(&self, coord: GridCoord) -> Option<usize> {
        if coord.x < 0 || coord.y < 0 || coord.x % self.step != 0 || coord.y % self.step != 0 {
            return None;
        }
        let col = (coord.x / self.step) as usize;
        let row = (coord.y / self.step) as usize;
        (col < self.cols && row < self.rows).then_some(row * self.cols + col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    fn builder(step: u32) -> RasterGraphBuilder {
        RasterGraphBuilder::new(RasterConfig::with_grid_step(step)).unwrap()
    }

    #[test]
    fn test_walkable_threshold_is_strict() {
        assert!(is_walkable(&Rgb([201, 201, 201]), 200));
        assert!(!is_walkable(&Rgb([200, 255, 255]), 200));
        assert!(!is_walkable(&Rgb([255, 255, 120]), 200));
        assert!(!is_walkable(&BLACK, 200));
    }

    #[test]
    fn test_zero_grid_step_rejected() {
        let result = RasterGraphBuilder::new(RasterConfig::with_grid_step(0));
        assert!(matches!(result, Err(BuildError::InvalidConfig(_))));
    }

    #[test]
    fn test_white_block_degrees() {
        let image = RgbImage::from_pixel(3, 3, WHITE);
        let graph = builder(1).build(&image);

        assert_eq!(graph.len(), 9);
        assert_eq!(graph.edge_count(), 12);
        assert_eq!(graph.get("1_1").unwrap().degree(), 4);
        for edge in ["1_0", "0_1", "2_1", "1_2"] {
            assert_eq!(graph.get(edge).unwrap().degree(), 3, "edge node {}", edge);
        }
        for corner in ["0_0", "2_0", "0_2", "2_2"] {
            assert_eq!(graph.get(corner).unwrap().degree(), 2, "corner {}", corner);
        }
        assert!(graph.is_symmetric());
    }

    #[test]
    fn test_samples_only_on_grid() {
        // 31x16 at step 15 samples x in {0, 15, 30} and y in {0, 15}
        let image = RgbImage::from_pixel(31, 16, WHITE);
        let graph = builder(15).build(&image);

        assert_eq!(graph.len(), 6);
        assert!(graph.contains("30_15"));
        assert!(graph.are_adjacent("0_0", "15_0"));
        assert!(graph.are_adjacent("15_0", "15_15"));
        assert!(!graph.are_adjacent("0_0", "15_15"));
        assert_eq!(graph.max_edge_span(), 15.0);
    }

    #[test]
    fn test_dark_pixels_block() {
        // Column x = 2 is a wall splitting the floor in two
        let mut image = RgbImage::from_pixel(5, 3, WHITE);
        for y in 0..3 {
            image.put_pixel(2, y, BLACK);
        }
        let graph = builder(1).build(&image);

        assert_eq!(graph.len(), 12);
        assert!(!graph.contains("2_1"));
        assert!(!graph.are_adjacent("1_1", "3_1"));

        let stats = graph.stats();
        assert_eq!(stats.components, 2);
    }

    #[test]
    fn test_isolated_cells_are_kept() {
        let mut image = RgbImage::from_pixel(3, 3, BLACK);
        image.put_pixel(1, 1, WHITE);
        let graph = builder(1).build(&image);

        assert_eq!(graph.len(), 1);
        assert!(graph.get("1_1").unwrap().is_isolated());
    }

    #[test]
    fn test_deterministic() {
        let mut image = RgbImage::from_pixel(40, 40, WHITE);
        for i in 0..40 {
            image.put_pixel(i, 20, BLACK);
            image.put_pixel(20, i, Rgb([210, 190, 255]));
        }
        let b = builder(4);
        assert_eq!(b.build(&image), b.build(&image));
    }

    #[test]
    fn test_empty_image() {
        let image = RgbImage::new(0, 0);
        assert!(builder(5).build(&image).is_empty());
    }

    #[test]
    fn test_corrupt_image_fails() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"definitely not a png").unwrap();

        let result = builder(15).build_from_path(file.path());
        assert!(matches!(result, Err(BuildError::Image(_))));
    }

    #[test]
    fn test_missing_image_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = builder(15).build_from_path(dir.path().join("nope.png"));
        assert!(matches!(result, Err(BuildError::Image(_))));
    }
}
