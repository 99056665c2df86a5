use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

/// Leaflet-facing wrapper around the core session. The JS glue feeds map
/// events in and executes the returned command batches against the map.
#[wasm_bindgen]
pub struct Session {
    pub(crate) inner: quadra::Session,
}

impl Session {
    pub fn rs_new() -> Session {
        Session {
            inner: quadra::Session::new(),
        }
    }
}
