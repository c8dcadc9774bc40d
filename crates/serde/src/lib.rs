//! Serde serialization support for Vellum value types
//!
//! [SerializableValue] lets a [Value](vellum_core::Value) graph be serialized with any serde
//! serializer, and [from_json] builds a value graph from a parsed `serde_json` tree. Together
//! they provide the external parse-and-compare collaborator used by Vellum's round-trip tests.
//!
//! Note that serde serialization doesn't apply replacers or detect cycles; for those, use
//! `vellum_stringify`.

#![warn(missing_docs)]

mod error;
mod json;
mod serialize;

pub use crate::{
    error::{Error, Result},
    json::from_json,
    serialize::SerializableValue,
};
