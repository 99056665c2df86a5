use crate::model::GeoPoint;
use crate::Session;
use serde::Serialize;
use serde_json::Value;

pub fn to_json_impl(s: &Session) -> Value {
    #[derive(Serialize)]
    struct BlockSer<'a> {
        number: u32,
        boundary: &'a [GeoPoint],
        label_anchor: GeoPoint,
        selected: bool,
    }
    #[derive(Serialize)]
    struct SessionSer<'a> {
        version: u64,
        blocks: Vec<BlockSer<'a>>,
        sketch: &'a [GeoPoint],
    }

    let blocks = s
        .blocks()
        .iter()
        .map(|b| BlockSer {
            number: b.number,
            boundary: b.boundary(),
            label_anchor: b.label_anchor,
            selected: b.is_selected(),
        })
        .collect();
    let ser = SessionSer {
        version: s.version(),
        blocks,
        sketch: s.sketch.vertices(),
    };
    serde_json::to_value(ser).unwrap_or(Value::Null)
}
