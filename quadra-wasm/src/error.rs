use crate::interop::{new_obj, set_kv};
use wasm_bindgen::JsValue;

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data {
        set_kv(&e, "data", &d);
    }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj();
    set_kv(&d, "param", &JsValue::from_str(param));
    err(
        "non_finite",
        format!("parameter '{}' must be finite", param),
        Some(d.into()),
    )
}

#[inline]
pub fn validation(message: impl Into<String>) -> JsValue {
    err("validation", message, None)
}

#[inline]
pub fn invalid_index(index: u32, len: u32) -> JsValue {
    let d = new_obj();
    set_kv(&d, "index", &JsValue::from_f64(index as f64));
    set_kv(&d, "len", &JsValue::from_f64(len as f64));
    err("invalid_index", "stale vertex index", Some(d.into()))
}

#[inline]
pub fn geocode(code: &'static str, message: impl Into<String>) -> JsValue {
    err(code, message, None)
}
