//! Minimal geometric support for the topological operators.
//!
//! The kernel is topological; coordinates are carried alongside the
//! connectivity only so that refinement operators can place the vertices
//! they create and so meshes can round-trip through OBJ.

/// A point in 3-space.
pub type Point3 = [f64; 3];

/// Midpoint of two points.
pub fn midpoint(a: Point3, b: Point3) -> Point3 {
    [
        (a[0] + b[0]) / 2.0,
        (a[1] + b[1]) / 2.0,
        (a[2] + b[2]) / 2.0,
    ]
}

/// Arithmetic mean of a set of points. Empty input yields the origin.
pub fn centroid(points: &[Point3]) -> Point3 {
    if points.is_empty() {
        return [0.0; 3];
    }
    let n = points.len() as f64;
    let mut sum = [0.0; 3];
    for p in points {
        sum[0] += p[0];
        sum[1] += p[1];
        sum[2] += p[2];
    }
    [sum[0] / n, sum[1] / n, sum[2] / n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_of_opposite_corners() {
        assert_eq!(midpoint([1.0, 1.0, 1.0], [-1.0, -1.0, 3.0]), [0.0, 0.0, 2.0]);
    }

    #[test]
    fn centroid_of_square() {
        let pts = [
            [-1.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
            [1.0, -1.0, 0.0],
            [-1.0, -1.0, 0.0],
        ];
        assert_eq!(centroid(&pts), [0.0, 0.0, 0.0]);
        assert_eq!(centroid(&[]), [0.0, 0.0, 0.0]);
    }
}
