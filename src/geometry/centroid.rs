use crate::model::GeoPoint;

/// Rings with an enclosed area below this are treated as degenerate and
/// anchored at the vertex mean instead of the area centroid.
pub const EPS_RING_AREA: f64 = 1e-12;

/// Geometric center of a closed polygon ring given as its vertex sequence
/// (closing edge implied). Area-weighted (shoelace) centroid; collinear or
/// otherwise zero-area rings fall back to the vertex mean so the result is
/// always finite for any ring with at least one vertex.
pub fn polygon_centroid(points: &[GeoPoint]) -> GeoPoint {
    let n = points.len();
    if n < 3 {
        return vertex_mean(points);
    }
    let mut area2 = 0.0f64;
    let mut cx = 0.0f64;
    let mut cy = 0.0f64;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let cross = a.lng * b.lat - b.lng * a.lat;
        area2 += cross;
        cx += (a.lng + b.lng) * cross;
        cy += (a.lat + b.lat) * cross;
    }
    if area2.abs() <= EPS_RING_AREA {
        return vertex_mean(points);
    }
    let inv = 1.0 / (3.0 * area2);
    GeoPoint::new(cy * inv, cx * inv)
}

fn vertex_mean(points: &[GeoPoint]) -> GeoPoint {
    if points.is_empty() {
        return GeoPoint::new(0.0, 0.0);
    }
    let mut lat = 0.0f64;
    let mut lng = 0.0f64;
    for p in points {
        lat += p.lat;
        lng += p.lng;
    }
    let inv = 1.0 / points.len() as f64;
    GeoPoint::new(lat * inv, lng * inv)
}
