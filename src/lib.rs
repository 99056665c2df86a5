pub mod commands;
pub mod geocode;
pub mod model;
pub mod registry;
pub mod sketch;
pub mod visibility;
pub mod geometry {
    pub mod centroid;
}
mod json;

use commands::{MapCommand, COMMITTED_STYLE, PREVIEW_STYLE, SELECTED_STYLE};
use geocode::{GeocodeAdapter, GeocodeError};
use model::{Block, DragUpdate, GeoPoint, LatLngBounds, LayerKey, ZoomChange};
use registry::{BlockRegistry, CommitError};
use sketch::{Sketch, SketchError};
use visibility::VisibilityController;

/// One operator session over one map: the sketch being drawn, the
/// committed block registry, the visibility state and the layer-key
/// allocator. Every map event is handled synchronously and returns the
/// full batch of commands the adapter must apply; the session never
/// touches the map directly, which keeps the state machine testable
/// without a live map.
pub struct Session {
    sketch: Sketch,
    registry: BlockRegistry,
    visibility: VisibilityController,
    next_key: LayerKey,
    ver: u64,
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Session {
            sketch: Sketch::new(),
            registry: BlockRegistry::new(),
            visibility: VisibilityController::default(),
            next_key: 1,
            ver: 1,
        }
    }

    pub fn version(&self) -> u64 {
        self.ver
    }

    fn bump(&mut self) {
        self.ver += 1;
    }

    // Layer keys are session-unique and never reused, also across failed
    // operations.
    fn alloc_key(&mut self) -> LayerKey {
        let key = self.next_key;
        self.next_key += 1;
        key
    }

    /// Map clicked: append a vertex, place its draggable marker and redraw
    /// the preview polygon.
    pub fn map_clicked(&mut self, point: GeoPoint) -> Vec<MapCommand> {
        let key = self.alloc_key();
        self.sketch.add_vertex(point, key);
        let mut cmds = vec![MapCommand::AddMarker {
            key,
            at: point,
            draggable: true,
            label: None,
            visible: self.visibility.detail_visible(),
        }];
        self.redraw_preview(&mut cmds);
        self.bump();
        cmds
    }

    /// A vertex marker finished dragging: move that vertex and redraw the
    /// preview. A stale index is a contract violation by the adapter and
    /// leaves the session untouched.
    pub fn marker_dragged(&mut self, drag: DragUpdate) -> Result<Vec<MapCommand>, SketchError> {
        self.sketch.update_vertex(drag.index, drag.point)?;
        let mut cmds = Vec::new();
        self.redraw_preview(&mut cmds);
        self.bump();
        Ok(cmds)
    }

    /// Removes the last vertex and its marker. No-op on an empty sketch.
    pub fn undo_last(&mut self) -> Vec<MapCommand> {
        let key = match self.sketch.undo_last() {
            Some(k) => k,
            None => return Vec::new(),
        };
        let mut cmds = vec![MapCommand::RemoveLayer { key }];
        self.redraw_preview(&mut cmds);
        self.bump();
        cmds
    }

    /// Discards the whole sketch: all vertex markers and the preview.
    pub fn reset_selection(&mut self) -> Vec<MapCommand> {
        let keys = self.sketch.reset();
        if keys.is_empty() {
            return Vec::new();
        }
        self.bump();
        keys.into_iter()
            .map(|key| MapCommand::RemoveLayer { key })
            .collect()
    }

    /// Commits the sketched polygon as a numbered block. On success the
    /// sketch is cleared and the committed polygon and its label marker are
    /// drawn; on failure nothing changes and the error is surfaced to the
    /// operator. Re-committing after undo/reset never resurrects prior
    /// vertices: the boundary is snapshotted from the live sketch.
    pub fn commit_block(&mut self, number: u32) -> Result<(usize, Vec<MapCommand>), CommitError> {
        let boundary = self.sketch.vertices().to_vec();
        let polygon_key = self.alloc_key();
        let label_key = self.alloc_key();
        let index = self
            .registry
            .commit(boundary, number, polygon_key, label_key)?;
        let mut cmds: Vec<MapCommand> = self
            .sketch
            .reset()
            .into_iter()
            .map(|key| MapCommand::RemoveLayer { key })
            .collect();
        let block = &self.registry.all()[index];
        cmds.push(MapCommand::DrawPolygon {
            key: polygon_key,
            points: block.boundary().to_vec(),
            style: COMMITTED_STYLE,
        });
        cmds.push(MapCommand::AddMarker {
            key: label_key,
            at: block.label_anchor,
            draggable: false,
            label: Some(block.number.to_string()),
            visible: self.visibility.detail_visible(),
        });
        self.bump();
        Ok((index, cmds))
    }

    /// Zoom ended: recompute detail visibility and emit one show/hide
    /// directive per vertex marker and per block label. Block polygons stay
    /// visible at every zoom.
    pub fn zoom_changed(&mut self, change: ZoomChange) -> Vec<MapCommand> {
        let visible = self.visibility.on_zoom_changed(change.level);
        let mut cmds = Vec::new();
        for &key in self.sketch.marker_keys() {
            cmds.push(MapCommand::SetLayerVisible { key, visible });
        }
        for block in self.registry.all() {
            cmds.push(MapCommand::SetLayerVisible {
                key: block.label_key,
                visible,
            });
        }
        self.bump();
        cmds
    }

    /// Map moved: replace the stored view bounds. All committed blocks are
    /// kept regardless of viewport; no spatial culling happens here.
    pub fn bounds_changed(&mut self, bounds: LatLngBounds) {
        self.visibility.on_bounds_changed(bounds);
        self.bump();
    }

    /// Selects the block at `index`, restyling it and un-highlighting the
    /// previous selection. Unknown indices are ignored.
    pub fn select_block(&mut self, index: usize) -> Vec<MapCommand> {
        let previous = match self.registry.select(index) {
            Some(p) => p,
            None => return Vec::new(),
        };
        let mut cmds = Vec::new();
        if let Some(prev) = previous {
            if prev != index {
                cmds.push(MapCommand::SetPolygonStyle {
                    key: self.registry.all()[prev].polygon_key,
                    style: COMMITTED_STYLE,
                });
            }
        }
        cmds.push(MapCommand::SetPolygonStyle {
            key: self.registry.all()[index].polygon_key,
            style: SELECTED_STYLE,
        });
        self.bump();
        cmds
    }

    /// Which block a clicked label marker belongs to.
    pub fn block_at_label(&self, label_key: LayerKey) -> Option<&Block> {
        self.registry.find_by_label(label_key)
    }

    /// Delivers the completion of an address lookup. On success the view
    /// bounds are replaced and the map is told to fit them; on failure the
    /// view state is untouched and the error is returned for the shell to
    /// surface as a warning. Completions are applied in arrival order with
    /// no sequencing, so a late response from an earlier search wins if it
    /// lands last.
    pub fn address_resolved(
        &mut self,
        result: Result<LatLngBounds, GeocodeError>,
    ) -> Result<Vec<MapCommand>, GeocodeError> {
        let bounds = result?;
        self.visibility.on_bounds_changed(bounds);
        self.bump();
        Ok(vec![MapCommand::FitBounds { bounds }])
    }

    /// Convenience for shells with a synchronous resolver: runs the lookup
    /// and feeds its result through `address_resolved`.
    pub fn search_address(
        &mut self,
        geocoder: &dyn GeocodeAdapter,
        text: &str,
    ) -> Result<Vec<MapCommand>, GeocodeError> {
        let result = geocoder.resolve_address(text);
        self.address_resolved(result)
    }

    // Reads

    pub fn current_polygon(&self) -> Option<&[GeoPoint]> {
        self.sketch.current_polygon()
    }

    pub fn vertex_count(&self) -> usize {
        self.sketch.vertex_count()
    }

    pub fn blocks(&self) -> &[Block] {
        self.registry.all()
    }

    pub fn selected_block(&self) -> Option<usize> {
        self.registry.selected()
    }

    pub fn detail_visible(&self) -> bool {
        self.visibility.detail_visible()
    }

    pub fn view_bounds(&self) -> Option<LatLngBounds> {
        self.visibility.bounds()
    }

    pub fn zoom(&self) -> u8 {
        self.visibility.zoom()
    }

    /// JSON snapshot of the committed blocks and the in-progress sketch,
    /// for the "list committed blocks" affordance. In-memory only.
    pub fn to_json_value(&self) -> serde_json::Value {
        json::to_json_impl(self)
    }

    // Removes the stale preview layer and draws a fresh one when enough
    // vertices exist. Always from scratch, never patched.
    fn redraw_preview(&mut self, cmds: &mut Vec<MapCommand>) {
        let next = if self.sketch.current_polygon().is_some() {
            Some(self.alloc_key())
        } else {
            None
        };
        if let Some(old) = self.sketch.replace_preview(next) {
            cmds.push(MapCommand::RemoveLayer { key: old });
        }
        if let (Some(key), Some(points)) = (next, self.sketch.current_polygon()) {
            cmds.push(MapCommand::DrawPolygon {
                key,
                points: points.to_vec(),
                style: PREVIEW_STYLE,
            });
        }
    }
}
