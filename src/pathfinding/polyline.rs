//! Geometry over waypoint sequences.

use crate::core::MapPoint;

/// Total Euclidean length of a polyline
pub fn polyline_length(path: &[MapPoint]) -> f32 {
    if path.len() < 2 {
        return 0.0;
    }

    path.windows(2).map(|w| w[0].distance(&w[1])).sum()
}

/// Position at fraction `progress` of the way along `path`.
///
/// `progress` is clamped to `[0, 1]` (NaN counts as 0). A path with zero
/// total length yields its last point. Returns `None` for an empty path.
pub fn point_along(path: &[MapPoint], progress: f32) -> Option<MapPoint> {
    let (&first, &last) = (path.first()?, path.last()?);
    if path.len() == 1 {
        return Some(first);
    }

    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    let total = polyline_length(path);
    if total <= 0.0 {
        return Some(last);
    }

    let target = total * progress;
    let mut covered = 0.0;
    for w in path.windows(2) {
        let segment = w[0].distance(&w[1]);
        if covered + segment >= target {
            let ratio = if segment > 0.0 {
                (target - covered) / segment
            } else {
                0.0
            };
            return Some(w[0].lerp(&w[1], ratio));
        }
        covered += segment;
    }

    Some(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn l_shape() -> Vec<MapPoint> {
        vec![
            MapPoint::new(0.0, 0.0),
            MapPoint::new(10.0, 0.0),
            MapPoint::new(10.0, 30.0),
        ]
    }

    #[test]
    fn test_length() {
        assert_eq!(polyline_length(&l_shape()), 40.0);
        assert_eq!(polyline_length(&[MapPoint::new(3.0, 3.0)]), 0.0);
        assert_eq!(polyline_length(&[]), 0.0);
    }

    #[test]
    fn test_point_along() {
        let path = l_shape();

        assert_eq!(point_along(&path, 0.0), Some(MapPoint::new(0.0, 0.0)));
        assert_eq!(point_along(&path, 1.0), Some(MapPoint::new(10.0, 30.0)));

        let quarter = point_along(&path, 0.25).unwrap();
        assert_relative_eq!(quarter.x, 10.0);
        assert_relative_eq!(quarter.y, 0.0);

        let half = point_along(&path, 0.5).unwrap();
        assert_relative_eq!(half.x, 10.0);
        assert_relative_eq!(half.y, 10.0);
    }

    #[test]
    fn test_point_along_clamps() {
        let path = l_shape();
        assert_eq!(point_along(&path, -3.0), point_along(&path, 0.0));
        assert_eq!(point_along(&path, 7.0), point_along(&path, 1.0));
        assert_eq!(point_along(&path, f32::NAN), point_along(&path, 0.0));
    }

    #[test]
    fn test_point_along_degenerate() {
        assert_eq!(point_along(&[], 0.5), None);

        let single = [MapPoint::new(4.0, 2.0)];
        assert_eq!(point_along(&single, 0.5), Some(single[0]));

        let stacked = [MapPoint::new(1.0, 1.0), MapPoint::new(1.0, 1.0)];
        assert_eq!(point_along(&stacked, 0.5), Some(stacked[1]));
    }
}
