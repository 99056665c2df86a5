use crate::error;
use crate::interop::{commands_js, warn};
use crate::Session;
use quadra::geocode::GeocodeError;
use quadra::model::{DragUpdate, GeoPoint, LatLngBounds, ZoomChange};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
impl Session {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Session {
        Session::rs_new()
    }

    pub fn version(&self) -> u64 {
        self.inner.version()
    }

    // Sketch events
    pub fn map_clicked(&mut self, lat: f64, lng: f64) -> JsValue {
        commands_js(&self.inner.map_clicked(GeoPoint::new(lat, lng)))
    }
    pub fn map_clicked_res(&mut self, lat: f64, lng: f64) -> JsValue {
        if !lat.is_finite() {
            return error::non_finite("lat");
        }
        if !lng.is_finite() {
            return error::non_finite("lng");
        }
        error::ok(commands_js(&self.inner.map_clicked(GeoPoint::new(lat, lng))))
    }

    /// A marker drag ended. A stale index means the glue reported a drag on
    /// a marker it was never given; it is logged and ignored.
    pub fn marker_dragged(&mut self, index: u32, lat: f64, lng: f64) -> JsValue {
        let drag = DragUpdate {
            index: index as usize,
            point: GeoPoint::new(lat, lng),
        };
        match self.inner.marker_dragged(drag) {
            Ok(cmds) => commands_js(&cmds),
            Err(e) => {
                warn(&format!("drag ignored: {}", e));
                commands_js(&[])
            }
        }
    }
    pub fn marker_dragged_res(&mut self, index: u32, lat: f64, lng: f64) -> JsValue {
        if !lat.is_finite() {
            return error::non_finite("lat");
        }
        if !lng.is_finite() {
            return error::non_finite("lng");
        }
        let len = self.inner.vertex_count() as u32;
        let drag = DragUpdate {
            index: index as usize,
            point: GeoPoint::new(lat, lng),
        };
        match self.inner.marker_dragged(drag) {
            Ok(cmds) => error::ok(commands_js(&cmds)),
            Err(_) => error::invalid_index(index, len),
        }
    }

    pub fn undo_last(&mut self) -> JsValue {
        commands_js(&self.inner.undo_last())
    }
    pub fn reset_selection(&mut self) -> JsValue {
        commands_js(&self.inner.reset_selection())
    }

    // Commit
    pub fn commit_block(&mut self, number: u32) -> JsValue {
        match self.inner.commit_block(number) {
            Ok((_, cmds)) => commands_js(&cmds),
            Err(_) => JsValue::NULL,
        }
    }
    pub fn commit_block_res(&mut self, number: u32) -> JsValue {
        match self.inner.commit_block(number) {
            Ok((index, cmds)) => {
                let o = crate::interop::new_obj();
                crate::interop::set_kv(&o, "index", &JsValue::from_f64(index as f64));
                crate::interop::set_kv(&o, "commands", &commands_js(&cmds));
                error::ok(o.into())
            }
            Err(e) => error::validation(e.to_string()),
        }
    }

    // View events
    pub fn zoom_changed(&mut self, level: u8) -> JsValue {
        commands_js(&self.inner.zoom_changed(ZoomChange { level }))
    }
    pub fn bounds_changed(&mut self, sw_lat: f64, sw_lng: f64, ne_lat: f64, ne_lng: f64) {
        self.inner.bounds_changed(LatLngBounds::new(
            GeoPoint::new(sw_lat, sw_lng),
            GeoPoint::new(ne_lat, ne_lng),
        ));
    }
    pub fn detail_visible(&self) -> bool {
        self.inner.detail_visible()
    }

    // Registry
    pub fn select_block(&mut self, index: u32) -> JsValue {
        commands_js(&self.inner.select_block(index as usize))
    }
    pub fn block_at_label(&self, label_key: u32) -> JsValue {
        match self.inner.block_at_label(label_key) {
            Some(block) => serde_wasm_bindgen::to_value(block).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }
    pub fn block_count(&self) -> u32 {
        self.inner.blocks().len() as u32
    }
    pub fn vertex_count(&self) -> u32 {
        self.inner.vertex_count() as u32
    }

    // Geocode completions, delivered from the JS resolver whenever they
    // arrive; a late completion simply applies last.
    pub fn address_resolved(&mut self, sw_lat: f64, sw_lng: f64, ne_lat: f64, ne_lng: f64) -> JsValue {
        let bounds = LatLngBounds::new(
            GeoPoint::new(sw_lat, sw_lng),
            GeoPoint::new(ne_lat, ne_lng),
        );
        if !bounds.is_finite() {
            return error::non_finite("bounds");
        }
        match self.inner.address_resolved(Ok(bounds)) {
            Ok(cmds) => commands_js(&cmds),
            Err(_) => JsValue::NULL,
        }
    }
    pub fn address_failed(&mut self, not_found: bool, message: String) -> JsValue {
        let e = if not_found {
            GeocodeError::NotFound
        } else {
            GeocodeError::Transport(message)
        };
        warn(&format!("address search failed: {}", e));
        match self.inner.address_resolved(Err(e)) {
            Ok(_) => JsValue::NULL,
            Err(e) => error::geocode(e.code(), e.to_string()),
        }
    }

    // Listing
    pub fn to_json(&self) -> String {
        self.inner.to_json_value().to_string()
    }
}
