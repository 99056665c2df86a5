use crate::model::{Color, GeoPoint, LatLngBounds, LayerKey, PolygonStyle};
use serde::Serialize;

/// Style of the in-progress preview polygon (red, as drawn while sketching).
pub const PREVIEW_STYLE: PolygonStyle = PolygonStyle {
    color: Color {
        r: 255,
        g: 0,
        b: 0,
        a: 255,
    },
    weight: 3.0,
};

/// Style of a committed block polygon.
pub const COMMITTED_STYLE: PolygonStyle = PolygonStyle {
    color: Color {
        r: 0,
        g: 90,
        b: 200,
        a: 255,
    },
    weight: 2.0,
};

/// Style applied to the selected block's polygon.
pub const SELECTED_STYLE: PolygonStyle = PolygonStyle {
    color: Color {
        r: 255,
        g: 140,
        b: 0,
        a: 255,
    },
    weight: 4.0,
};

/// Instruction for the map adapter. Every session event handler returns a
/// batch of these; the core never touches a map object directly.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum MapCommand {
    DrawPolygon {
        key: LayerKey,
        points: Vec<GeoPoint>,
        style: PolygonStyle,
    },
    RemoveLayer {
        key: LayerKey,
    },
    AddMarker {
        key: LayerKey,
        at: GeoPoint,
        draggable: bool,
        label: Option<String>,
        visible: bool,
    },
    SetLayerVisible {
        key: LayerKey,
        visible: bool,
    },
    SetPolygonStyle {
        key: LayerKey,
        style: PolygonStyle,
    },
    FitBounds {
        bounds: LatLngBounds,
    },
}
