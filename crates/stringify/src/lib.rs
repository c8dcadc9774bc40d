//! A replacer-driven, cycle-safe serializer for Vellum value graphs
//!
//! [stringify] walks a [Value](vellum_core::Value) graph depth-first and produces JSON-format
//! text. A [Replacer] can filter or transform entries along the way, and container identities are
//! tracked on the active path so that a cyclic graph fails with
//! [Error::CircularReference] while a shared non-cyclic sub-structure serializes normally.
//!
//! ## Example
//!
//! ```
//! use vellum_core::ValueMap;
//! use vellum_stringify::stringify;
//!
//! let user = ValueMap::new();
//! user.insert("name", "Alice");
//! user.insert("age", 30);
//! user.insert("isAdmin", true);
//!
//! let encoded = stringify(&user.into()).unwrap();
//! assert_eq!(
//!     encoded.as_deref(),
//!     Some(r#"{"name":"Alice","age":30,"isAdmin":true}"#)
//! );
//! ```

#![warn(missing_docs)]

mod context;
mod error;
mod options;
mod replacer;
mod stringify;

pub use crate::{
    error::{Error, Result},
    options::StringifyOptions,
    replacer::{Replacer, TransformFn},
    stringify::{stringify, stringify_with_options},
};
