//! Generic records, raw identifiers and skipped fields expand cleanly.

use dbparam::{params, FieldValue, Record, Value};

#[derive(Record)]
pub struct Envelope<T: FieldValue> {
    #[param(db = "type", json = "kind")]
    pub r#type: String,
    #[param(db = "payload")]
    pub payload: T,
    #[param(skip)]
    pub scratch: Vec<String>,
}

fn main() {
    let envelope = Envelope {
        r#type: "event".to_string(),
        payload: 7u32,
        scratch: vec!["ignored".to_string()],
    };

    let (cols, vals) = params(&envelope).flat_vals().unwrap();
    assert_eq!(cols, vec!["type", "payload"]);
    assert_eq!(vals, vec![Value::from("event"), Value::UInt(7)]);
    assert_eq!(envelope.fields().unwrap()[0].name(), "type");
    assert_eq!(envelope.scratch.len(), 1);
}
