use crate::model::{GeoPoint, LayerKey};
use std::fmt;

/// The sketch needs at least this many vertices before a closed polygon
/// can be previewed or committed.
pub const MIN_POLYGON_VERTICES: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SketchError {
    /// A drag arrived for a vertex index the sketch no longer holds. The
    /// adapter must never report a drag on a marker it was not given, so
    /// this is a contract violation, not an operator error.
    IndexOutOfRange { index: usize, len: usize },
}

impl SketchError {
    pub fn code(&self) -> &'static str {
        match self {
            SketchError::IndexOutOfRange { .. } => "invalid_index",
        }
    }
}

impl fmt::Display for SketchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SketchError::IndexOutOfRange { index, len } => {
                write!(f, "vertex index {} out of range (len {})", index, len)
            }
        }
    }
}

impl std::error::Error for SketchError {}

/// The polygon currently being drawn: an ordered vertex set plus the layer
/// keys of its draggable markers and of the preview polygon, if one is
/// shown. Vertices keep click order; duplicates are allowed and no
/// self-intersection check is made.
#[derive(Clone, Debug, Default)]
pub struct Sketch {
    vertices: Vec<GeoPoint>,
    marker_keys: Vec<LayerKey>,
    preview_key: Option<LayerKey>,
}

impl Sketch {
    pub fn new() -> Self {
        Sketch::default()
    }

    /// Appends a clicked vertex and remembers the marker key issued for it.
    pub fn add_vertex(&mut self, p: GeoPoint, marker_key: LayerKey) {
        self.vertices.push(p);
        self.marker_keys.push(marker_key);
    }

    /// Removes the last vertex. No-op on an empty sketch; returns the
    /// removed marker key otherwise.
    pub fn undo_last(&mut self) -> Option<LayerKey> {
        self.vertices.pop()?;
        self.marker_keys.pop()
    }

    /// Replaces the vertex at `index` after its marker was dragged.
    pub fn update_vertex(&mut self, index: usize, p: GeoPoint) -> Result<(), SketchError> {
        match self.vertices.get_mut(index) {
            Some(v) => {
                *v = p;
                Ok(())
            }
            None => Err(SketchError::IndexOutOfRange {
                index,
                len: self.vertices.len(),
            }),
        }
    }

    /// Clears all vertices and marker bookkeeping, returning the keys of
    /// every layer the adapter should remove (markers, then preview).
    pub fn reset(&mut self) -> Vec<LayerKey> {
        let mut keys = std::mem::take(&mut self.marker_keys);
        self.vertices.clear();
        if let Some(k) = self.preview_key.take() {
            keys.push(k);
        }
        keys
    }

    /// The closed polygon being previewed, absent below the vertex minimum.
    pub fn current_polygon(&self) -> Option<&[GeoPoint]> {
        if self.vertices.len() >= MIN_POLYGON_VERTICES {
            Some(&self.vertices)
        } else {
            None
        }
    }

    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn marker_keys(&self) -> &[LayerKey] {
        &self.marker_keys
    }

    pub fn preview_key(&self) -> Option<LayerKey> {
        self.preview_key
    }

    /// Swaps in a new preview layer key (or none), returning the old one so
    /// the caller can remove the stale layer. The preview is always redrawn
    /// from scratch rather than patched in place.
    pub fn replace_preview(&mut self, key: Option<LayerKey>) -> Option<LayerKey> {
        std::mem::replace(&mut self.preview_key, key)
    }
}
