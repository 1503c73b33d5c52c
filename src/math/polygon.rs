use super::{Point3, Vector3, TOLERANCE};

/// Sum of fan cross products of a planar polygon.
///
/// Its direction is the polygon normal (right-hand rule on the vertex order)
/// and its length is twice the enclosed area.
fn cross_sum(points: &[Point3]) -> Vector3 {
    let mut sum = Vector3::zeros();
    let Some(o) = points.first() else {
        return sum;
    };
    for pair in points[1..].windows(2) {
        sum += (pair[0] - o).cross(&(pair[1] - o));
    }
    sum
}

/// Computes the area of a planar 3D polygon.
#[must_use]
pub fn polygon_area(points: &[Point3]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    0.5 * cross_sum(points).norm()
}

/// Returns the unit normal of a planar 3D polygon, or `None` if degenerate.
#[must_use]
pub fn polygon_normal(points: &[Point3]) -> Option<Vector3> {
    if points.len() < 3 {
        return None;
    }
    let sum = cross_sum(points);
    let len = sum.norm();
    (len > TOLERANCE).then(|| sum / len)
}
