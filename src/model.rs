use serde::{Deserialize, Serialize};

/// Identifier the core issues for every map layer it asks the adapter to
/// create. The adapter owns the mapping from key to the real map object;
/// keys are never reused within a session.
pub type LayerKey = u32;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// Rectangular bounds in the shape a fit-to-bounds map operation consumes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: GeoPoint,
    pub north_east: GeoPoint,
}

impl LatLngBounds {
    pub fn new(south_west: GeoPoint, north_east: GeoPoint) -> Self {
        LatLngBounds {
            south_west,
            north_east,
        }
    }

    /// The four corner points, counter-clockwise from the south-west.
    pub fn corners(&self) -> [GeoPoint; 4] {
        [
            self.south_west,
            GeoPoint::new(self.south_west.lat, self.north_east.lng),
            self.north_east,
            GeoPoint::new(self.north_east.lat, self.south_west.lng),
        ]
    }

    pub fn is_finite(&self) -> bool {
        self.corners().iter().all(|p| p.is_finite())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolygonStyle {
    pub color: Color,
    pub weight: f32,
}

/// A committed city block. The boundary is a snapshot of the sketch at
/// commit time and never changes afterwards; selection is the only
/// mutable state.
#[derive(Clone, Debug, Serialize)]
pub struct Block {
    pub number: u32,
    pub(crate) boundary: Vec<GeoPoint>,
    pub label_anchor: GeoPoint,
    pub(crate) selected: bool,
    pub polygon_key: LayerKey,
    pub label_key: LayerKey,
}

impl Block {
    pub fn boundary(&self) -> &[GeoPoint] {
        &self.boundary
    }
    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

/// Latest view of the map; replaced wholesale on every zoom/move event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewState {
    pub zoom: u8,
    pub bounds: Option<LatLngBounds>,
}

// Typed event payloads delivered at the adapter boundary. The core never
// receives untyped map events.

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragUpdate {
    pub index: usize,
    pub point: GeoPoint,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomChange {
    pub level: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_counter_clockwise_from_south_west() {
        let b = LatLngBounds::new(GeoPoint::new(0.0, 0.0), GeoPoint::new(2.0, 3.0));
        assert_eq!(
            b.corners(),
            [
                GeoPoint::new(0.0, 0.0),
                GeoPoint::new(0.0, 3.0),
                GeoPoint::new(2.0, 3.0),
                GeoPoint::new(2.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_finiteness_checked_through_all_corners() {
        let good = LatLngBounds::new(GeoPoint::new(-23.42, -51.95), GeoPoint::new(-23.40, -51.93));
        assert!(good.is_finite());
        // A NaN in either extreme poisons two corners of the box.
        let bad = LatLngBounds::new(GeoPoint::new(f64::NAN, -51.95), GeoPoint::new(-23.40, -51.93));
        assert!(!bad.is_finite());
        let bad = LatLngBounds::new(GeoPoint::new(-23.42, -51.95), GeoPoint::new(-23.40, f64::INFINITY));
        assert!(!bad.is_finite());
    }
}
