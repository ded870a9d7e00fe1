//! Point and coordinate types for the navigation graph.
//!
//! All positions use one axis order: `x` is the horizontal axis (image
//! column), `y` the vertical axis (image row).

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Position in source-map units (f32)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct MapPoint {
    /// Horizontal coordinate (image column)
    pub x: f32,
    /// Vertical coordinate (image row)
    pub y: f32,
}

impl MapPoint {
    /// Create a new map point
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Origin
    pub const ZERO: MapPoint = MapPoint { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &MapPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Squared distance (faster, avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: &MapPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Manhattan distance (|dx| + |dy|)
    #[inline]
    pub fn manhattan_distance(&self, other: &MapPoint) -> f32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Linear interpolation towards `other` (`t` = 0 gives self, 1 gives other)
    #[inline]
    pub fn lerp(&self, other: &MapPoint, t: f32) -> MapPoint {
        MapPoint::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Both components are finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<GridCoord> for MapPoint {
    fn from(coord: GridCoord) -> Self {
        MapPoint::new(coord.x as f32, coord.y as f32)
    }
}

impl Add for MapPoint {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        MapPoint::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for MapPoint {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        MapPoint::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for MapPoint {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        MapPoint::new(self.x * scalar, self.y * scalar)
    }
}

/// Integer sampling position on a raster grid (pixel units, not cell indices)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct GridCoord {
    /// Pixel column
    pub x: i64,
    /// Pixel row
    pub y: i64,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The 4 axis-aligned neighbors at distance `step` (E, W, S, N)
    #[inline]
    pub fn neighbors_4(&self, step: i64) -> [GridCoord; 4] {
        [
            GridCoord::new(self.x + step, self.y), // East
            GridCoord::new(self.x - step, self.y), // West
            GridCoord::new(self.x, self.y + step), // South (image rows grow downward)
            GridCoord::new(self.x, self.y - step), // North
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distances() {
        let a = MapPoint::new(0.0, 0.0);
        let b = MapPoint::new(3.0, 4.0);
        assert_relative_eq!(a.distance(&b), 5.0);
        assert_relative_eq!(a.distance_squared(&b), 25.0);
        assert_relative_eq!(a.manhattan_distance(&b), 7.0);
    }

    #[test]
    fn test_lerp() {
        let a = MapPoint::new(0.0, 10.0);
        let b = MapPoint::new(10.0, 10.0);
        let mid = a.lerp(&b, 0.25);
        assert_relative_eq!(mid.x, 2.5);
        assert_relative_eq!(mid.y, 10.0);
    }

    #[test]
    fn test_grid_neighbors() {
        let c = GridCoord::new(15, 30);
        let n = c.neighbors_4(15);
        assert_eq!(n[0], GridCoord::new(30, 30));
        assert_eq!(n[1], GridCoord::new(0, 30));
        assert_eq!(n[2], GridCoord::new(15, 45));
        assert_eq!(n[3], GridCoord::new(15, 15));
    }

    #[test]
    fn test_non_finite() {
        assert!(MapPoint::new(1.0, 2.0).is_finite());
        assert!(!MapPoint::new(f32::NAN, 2.0).is_finite());
        assert!(!MapPoint::new(1.0, f32::INFINITY).is_finite());
    }
}
