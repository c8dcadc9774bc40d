use crate::{Error, Replacer, Result, StringifyOptions, context::EncodeContext};
use vellum_core::{Value, ValueList, ValueMap};

/// Encodes the given value as compact JSON-format text
///
/// `Ok(None)` is returned when the root resolves to an opaque value, which has no encoding.
/// Encoding fails with [Error::CircularReference] if the value graph contains a cycle.
pub fn stringify(value: &Value) -> Result<Option<String>> {
    stringify_with_options(value, &StringifyOptions::default())
}

/// Encodes the given value as JSON-format text, applying the provided options
///
/// `Ok(None)` is returned when the root resolves to an opaque value or is omitted by a
/// [transform replacer](crate::Replacer::Transform).
pub fn stringify_with_options(
    value: &Value,
    options: &StringifyOptions,
) -> Result<Option<String>> {
    let mut encoder = Encoder::new(options);

    // The root is treated as the member of an imaginary wrapper container, with an empty key and
    // no owner, giving a transform replacer the chance to replace or omit the whole value.
    match encoder.resolve("", value, None) {
        Resolved::Omit => Ok(None),
        Resolved::Value(resolved) => {
            encoder.encode_value(&resolved)?;
            Ok(Some(encoder.into_result()))
        }
    }
}

// The outcome of resolving an entry, before any of its output has been produced
//
// Omission has no on-wire token, and what it means depends on the entry's position: map members
// are dropped, list slots encode as `null`, and an omitted root produces no output at all.
enum Resolved {
    Value(Value),
    Omit,
}

struct Encoder<'a> {
    replacer: Option<&'a Replacer>,
    ctx: EncodeContext,
}

impl<'a> Encoder<'a> {
    fn new(options: &'a StringifyOptions) -> Self {
        Self {
            replacer: options.replacer.as_ref(),
            ctx: EncodeContext::new(options.indent_width),
        }
    }

    fn into_result(self) -> String {
        self.ctx.result()
    }

    // Applies the transform replacer and the custom-representation chain to an entry
    fn resolve(&self, key: &str, value: &Value, owner: Option<&Value>) -> Resolved {
        let mut resolved = match self.replacer {
            Some(Replacer::Transform(transform)) => match (**transform)(key, value, owner) {
                Some(value) => value,
                None => return Resolved::Omit,
            },
            _ => value.clone(),
        };

        // A custom representation can itself be a custom value, so keep resolving until a
        // fundamental value is reached
        while let Value::Custom(custom) = &resolved {
            let representation = custom.to_value();
            resolved = representation;
        }

        match resolved {
            Value::Opaque(_) => Resolved::Omit,
            other => Resolved::Value(other),
        }
    }

    // Encodes a resolved value
    fn encode_value(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Null => self.ctx.append("null"),
            Value::Bool(true) => self.ctx.append("true"),
            Value::Bool(false) => self.ctx.append("false"),
            Value::Number(n) => {
                // Non-finite numbers have no JSON encoding
                if n.is_finite() {
                    self.ctx.append(n.to_string());
                } else {
                    self.ctx.append("null");
                }
            }
            Value::Str(s) => self.encode_string(s),
            Value::List(list) => self.encode_list(value, list)?,
            Value::Map(map) => self.encode_map(value, map)?,
            Value::Custom(_) | Value::Opaque(_) => {
                unreachable!("custom and opaque values are stripped by resolve")
            }
        }

        Ok(())
    }

    fn encode_list(&mut self, owner: &Value, list: &ValueList) -> Result<()> {
        let id = list.address();
        if self.ctx.is_in_parents(id) {
            return Err(Error::CircularReference);
        }

        self.ctx.push_container(id);
        let result = self.encode_list_entries(owner, list);
        self.ctx.pop_container();
        result
    }

    fn encode_list_entries(&mut self, owner: &Value, list: &ValueList) -> Result<()> {
        self.ctx.append('[');

        let entries = list.data();
        for (index, entry) in entries.iter().enumerate() {
            if index > 0 {
                self.ctx.append(',');
            }
            self.ctx.newline_and_indent();

            // List slots never shift position, so an omitted entry encodes as null
            match self.resolve(&index.to_string(), entry, Some(owner)) {
                Resolved::Value(resolved) => self.encode_value(&resolved)?,
                Resolved::Omit => self.ctx.append("null"),
            }
        }

        if !entries.is_empty() {
            self.ctx.newline_and_indent_parent();
        }
        self.ctx.append(']');
        Ok(())
    }

    fn encode_map(&mut self, owner: &Value, map: &ValueMap) -> Result<()> {
        let id = map.address();
        if self.ctx.is_in_parents(id) {
            return Err(Error::CircularReference);
        }

        self.ctx.push_container(id);
        let result = self.encode_map_entries(owner, map);
        self.ctx.pop_container();
        result
    }

    fn encode_map_entries(&mut self, owner: &Value, map: &ValueMap) -> Result<()> {
        self.ctx.append('{');
        let mut emitted_entry = false;

        match self.replacer {
            // An explicit key list determines both which entries are kept and the order they're
            // emitted in
            Some(Replacer::Keys(keys)) => {
                for (index, key) in keys.iter().enumerate() {
                    if keys[..index].contains(key) {
                        continue;
                    }
                    let Some(entry) = map.get(key) else {
                        continue;
                    };
                    self.encode_map_entry(key, &entry, owner, &mut emitted_entry)?;
                }
            }
            _ => {
                let entries = map.data();
                for (key, entry) in entries.iter() {
                    self.encode_map_entry(key.as_str(), entry, owner, &mut emitted_entry)?;
                }
            }
        }

        if emitted_entry {
            self.ctx.newline_and_indent_parent();
        }
        self.ctx.append('}');
        Ok(())
    }

    fn encode_map_entry(
        &mut self,
        key: &str,
        entry: &Value,
        owner: &Value,
        emitted_entry: &mut bool,
    ) -> Result<()> {
        match self.resolve(key, entry, Some(owner)) {
            Resolved::Omit => Ok(()),
            Resolved::Value(resolved) => {
                if *emitted_entry {
                    self.ctx.append(',');
                }
                self.ctx.newline_and_indent();
                *emitted_entry = true;

                self.encode_string(key);
                self.ctx.append(':');
                if self.ctx.is_pretty() {
                    self.ctx.append(' ');
                }
                self.encode_value(&resolved)
            }
        }
    }

    fn encode_string(&mut self, string: &str) {
        self.ctx.append('"');
        for c in string.chars() {
            match c {
                '"' => self.ctx.append("\\\""),
                '\\' => self.ctx.append("\\\\"),
                '\n' => self.ctx.append("\\n"),
                '\r' => self.ctx.append("\\r"),
                '\t' => self.ctx.append("\\t"),
                '\u{8}' => self.ctx.append("\\b"),
                '\u{c}' => self.ctx.append("\\f"),
                c if (c as u32) < 0x20 => self.ctx.append(format!("\\u{:04x}", c as u32)),
                c => self.ctx.append(c),
            }
        }
        self.ctx.append('"');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    use vellum_core::{OpaqueKind, ValueList, ValueMap};

    fn stringify_value(value: impl Into<Value>) -> Option<String> {
        stringify(&value.into()).unwrap()
    }

    #[test_case(Value::Null, "null"; "null")]
    #[test_case(Value::from(true), "true"; "bool")]
    #[test_case(Value::from(1), "1"; "int")]
    #[test_case(Value::from(-1.5), "-1.5"; "float")]
    #[test_case(Value::from(2.0), "2.0"; "whole float")]
    #[test_case(Value::from("test"), "\"test\""; "string")]
    fn primitives(value: Value, expected: &str) {
        assert_eq!(stringify_value(value).as_deref(), Some(expected));
    }

    #[test_case("say \"hi\"", r#""say \"hi\"""#; "quotes")]
    #[test_case("a\\b", r#""a\\b""#; "backslash")]
    #[test_case("line 1\nline 2", r#""line 1\nline 2""#; "newline")]
    #[test_case("col\tumn", r#""col\tumn""#; "tab")]
    #[test_case("\r\u{8}\u{c}", r#""\r\b\f""#; "other escapes")]
    #[test_case("\u{1}", r#""\u0001""#; "control character")]
    #[test_case("héllø", "\"héllø\""; "unicode passes through")]
    fn string_escapes(input: &str, expected: &str) {
        assert_eq!(stringify_value(input).as_deref(), Some(expected));
    }

    #[test_case(f64::NAN; "nan")]
    #[test_case(f64::INFINITY; "positive infinity")]
    #[test_case(f64::NEG_INFINITY; "negative infinity")]
    fn non_finite_numbers_encode_as_null(n: f64) {
        assert_eq!(stringify_value(n).as_deref(), Some("null"));
    }

    #[test]
    fn lists() {
        let list = ValueList::from_slice(&[1.into(), "hello".into(), true.into()]);
        assert_eq!(
            stringify_value(list).as_deref(),
            Some(r#"[1,"hello",true]"#)
        );
    }

    #[test]
    fn empty_containers() {
        assert_eq!(stringify_value(ValueList::default()).as_deref(), Some("[]"));
        assert_eq!(stringify_value(ValueMap::new()).as_deref(), Some("{}"));
    }

    #[test]
    fn opaque_at_the_root_produces_no_output() {
        assert_eq!(stringify_value(OpaqueKind::Undefined), None);
        assert_eq!(stringify_value(OpaqueKind::Function), None);
    }

    #[test]
    fn opaque_map_members_are_dropped() {
        let map = ValueMap::new();
        map.insert("name", "Charlie");
        map.insert("sayHi", OpaqueKind::Function);
        map.insert("age", OpaqueKind::Undefined);
        map.insert("id", OpaqueKind::Symbol);

        assert_eq!(
            stringify_value(map).as_deref(),
            Some(r#"{"name":"Charlie"}"#)
        );
    }

    #[test]
    fn opaque_list_entries_encode_as_null() {
        let list =
            ValueList::from_slice(&[1.into(), OpaqueKind::Function.into(), 3.into()]);
        assert_eq!(stringify_value(list).as_deref(), Some("[1,null,3]"));
    }

    #[test]
    fn indented_output() {
        let contact = ValueMap::new();
        contact.insert("email", "bob@example.com");

        let user = ValueMap::new();
        user.insert("name", "Bob");
        user.insert("ids", ValueList::from_slice(&[1.into(), 2.into()]));
        user.insert("contact", contact);

        let options = StringifyOptions {
            indent_width: 2,
            ..Default::default()
        };
        let expected = "\
{
  \"name\": \"Bob\",
  \"ids\": [
    1,
    2
  ],
  \"contact\": {
    \"email\": \"bob@example.com\"
  }
}";
        assert_eq!(
            stringify_with_options(&user.into(), &options).unwrap().as_deref(),
            Some(expected)
        );
    }

    #[test]
    fn list_cycle_fails() {
        let list = ValueList::default();
        list.push(Value::List(list.clone()));

        assert_eq!(
            stringify(&list.into()),
            Err(Error::CircularReference)
        );
    }

    #[test]
    fn shared_sub_structure_is_not_a_cycle() {
        let shared = ValueList::from_slice(&[1.into()]);
        let outer =
            ValueList::from_slice(&[shared.clone().into(), shared.into()]);

        assert_eq!(stringify_value(outer).as_deref(), Some("[[1],[1]]"));
    }
}
