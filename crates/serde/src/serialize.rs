use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use vellum_core::Value;

/// A newtype for [`Value`] that implements [`serde::Serialize`]
///
/// Custom values serialize via their [Represent](vellum_core::Represent) hook, and opaque values
/// serialize as unit.
pub struct SerializableValue<'a>(pub &'a Value);

impl Serialize for SerializableValue<'_> {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Value::Null => s.serialize_unit(),
            Value::Bool(b) => s.serialize_bool(*b),
            Value::Number(n) => {
                if n.is_f64() {
                    s.serialize_f64(f64::from(n))
                } else {
                    s.serialize_i64(i64::from(n))
                }
            }
            Value::Str(string) => s.serialize_str(string),
            Value::List(l) => {
                let mut seq = s.serialize_seq(Some(l.len()))?;
                for element in l.data().iter() {
                    seq.serialize_element(&SerializableValue(element))?;
                }
                seq.end()
            }
            Value::Map(m) => {
                let mut map = s.serialize_map(Some(m.len()))?;
                for (key, value) in m.data().iter() {
                    map.serialize_entry(key.as_str(), &SerializableValue(value))?;
                }
                map.end()
            }
            Value::Custom(custom) => SerializableValue(&custom.to_value()).serialize(s),
            Value::Opaque(_) => s.serialize_unit(),
        }
    }
}
