use crate::model::{LatLngBounds, ViewState};

/// Detail elements (vertex markers, block labels) are shown only when the
/// zoom level is strictly above this cutoff. A binary threshold is used
/// instead of proportional level-of-detail rendering; below it the map is
/// too far out for per-block detail to be readable.
pub const DETAIL_ZOOM_CUTOFF: u8 = 17;

/// Derives, from the current view, whether detail elements should be
/// shown. Owns the transient view state, which is replaced wholesale on
/// every zoom/move event. Bounds are kept only to support fitting the view
/// to a searched address; committed blocks are never filtered by viewport.
#[derive(Clone, Copy, Debug)]
pub struct VisibilityController {
    cutoff: u8,
    view: ViewState,
}

impl Default for VisibilityController {
    fn default() -> Self {
        VisibilityController::new(DETAIL_ZOOM_CUTOFF)
    }
}

impl VisibilityController {
    pub fn new(cutoff: u8) -> Self {
        VisibilityController {
            cutoff,
            view: ViewState::default(),
        }
    }

    /// Records the new zoom level and returns whether detail elements are
    /// now visible.
    pub fn on_zoom_changed(&mut self, level: u8) -> bool {
        self.view.zoom = level;
        self.detail_visible()
    }

    /// Replaces the stored view bounds.
    pub fn on_bounds_changed(&mut self, bounds: LatLngBounds) {
        self.view.bounds = Some(bounds);
    }

    pub fn detail_visible(&self) -> bool {
        self.view.zoom > self.cutoff
    }

    pub fn zoom(&self) -> u8 {
        self.view.zoom
    }

    pub fn bounds(&self) -> Option<LatLngBounds> {
        self.view.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GeoPoint;

    #[test]
    fn test_detail_hidden_below_cutoff() {
        let mut vis = VisibilityController::default();
        assert!(!vis.on_zoom_changed(15));
        assert!(!vis.detail_visible());
    }

    #[test]
    fn test_detail_shown_above_cutoff() {
        let mut vis = VisibilityController::default();
        assert!(vis.on_zoom_changed(18));
        assert!(vis.detail_visible());
    }

    #[test]
    fn test_cutoff_itself_is_hidden() {
        let mut vis = VisibilityController::default();
        assert!(!vis.on_zoom_changed(DETAIL_ZOOM_CUTOFF));
    }

    #[test]
    fn test_bounds_replaced_wholesale() {
        let mut vis = VisibilityController::default();
        assert!(vis.bounds().is_none());
        let b1 = LatLngBounds::new(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0));
        let b2 = LatLngBounds::new(GeoPoint::new(5.0, 5.0), GeoPoint::new(6.0, 6.0));
        vis.on_bounds_changed(b1);
        vis.on_bounds_changed(b2);
        assert_eq!(vis.bounds(), Some(b2));
    }
}
