use js_sys::{Object, Reflect};
use quadra::commands::MapCommand;
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object {
    Object::new()
}
pub fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}

/// Marshals a command batch for the JS glue to execute in order.
pub fn commands_js(cmds: &[MapCommand]) -> JsValue {
    serde_wasm_bindgen::to_value(cmds).unwrap_or(JsValue::NULL)
}

pub fn warn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}
