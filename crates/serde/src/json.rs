use crate::{Error, Result};
use serde_json::Value as JsonValue;
use vellum_core::{Value, ValueList, ValueMap, ValueVec};

/// Builds a [Value] graph from a parsed `serde_json` tree
///
/// Each JSON array and object produces a fresh list or map allocation, so the result is always a
/// tree; shared references and cycles can't be produced this way.
pub fn from_json(value: &JsonValue) -> Result<Value> {
    let result = match value {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(n64) => n64.into(),
            None => match n.as_f64() {
                Some(n64) => n64.into(),
                None => return Err(Error::NumberOutOfRange(n.clone())),
            },
        },
        JsonValue::String(s) => Value::from(s.as_str()),
        JsonValue::Array(a) => {
            let entries = a.iter().map(from_json).collect::<Result<ValueVec>>()?;
            ValueList::with_data(entries).into()
        }
        JsonValue::Object(o) => {
            let map = ValueMap::with_capacity(o.len());
            for (key, entry) in o.iter() {
                map.insert(key.as_str(), from_json(entry)?);
            }
            map.into()
        }
    };

    Ok(result)
}
