//! # Vellum
//!
//! Pulls together the Vellum value model and serializer.
//!
//! Values are built with [ValueMap] and [ValueList], which share their contents by reference, and
//! encoded as JSON-format text with [stringify] or [stringify_with_options]. A [Replacer] filters
//! or transforms entries during encoding, and a graph whose encode path revisits one of its own
//! ancestors fails with [Error::CircularReference].
//!
//! ## Example
//!
//! ```
//! use vellum::prelude::*;
//!
//! let room = ValueMap::new();
//! room.insert("number", 23);
//!
//! let meetup = ValueMap::new();
//! meetup.insert("title", "Conference");
//! meetup.insert("place", room.clone());
//!
//! // The graph is still a tree, so encoding succeeds
//! let encoded = stringify(&meetup.clone().into()).unwrap();
//! assert_eq!(
//!     encoded.as_deref(),
//!     Some(r#"{"title":"Conference","place":{"number":23}}"#)
//! );
//!
//! // Adding a back-reference creates a cycle, which fails...
//! room.insert("occupiedBy", meetup.clone());
//! assert!(stringify(&meetup.clone().into()).is_err());
//!
//! // ...unless a replacer omits the cyclic entry
//! let options = StringifyOptions {
//!     replacer: Some(Replacer::transform(|key, value, _owner| {
//!         (key != "occupiedBy").then(|| value.clone())
//!     })),
//!     ..Default::default()
//! };
//! assert!(stringify_with_options(&meetup.into(), &options).is_ok());
//! ```

#![warn(missing_docs)]

pub mod prelude;

pub use vellum_core::{
    Address, Borrow, BorrowMut, CustomValue, MapData, Number, OpaqueKind, Ptr, PtrMut, Represent,
    VString, Value, ValueHasher, ValueKey, ValueList, ValueMap, ValueSend, ValueSync, ValueVec,
    make_ptr, make_ptr_mut,
};
pub use vellum_stringify::{
    Error, Replacer, Result, StringifyOptions, TransformFn, stringify, stringify_with_options,
};

#[cfg(feature = "serde")]
pub use vellum_serde as serde;
