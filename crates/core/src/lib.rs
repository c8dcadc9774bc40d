//! The value model used by the Vellum serializer
//!
//! Values form graphs rather than trees: lists and maps share their contents by reference, so a
//! sub-structure can be reachable via more than one path, and graphs can contain cycles. The
//! [stringify](https://docs.rs/vellum_stringify) operation distinguishes the two by comparing
//! container identities, available here via `ValueList::address` and `ValueMap::address`.

#![warn(missing_docs)]

pub mod prelude;
mod send_sync;
mod types;

pub use crate::{
    send_sync::{ValueSend, ValueSync},
    types::{
        CustomValue, MapData, Number, OpaqueKind, Represent, VString, Value, ValueHasher,
        ValueKey, ValueList, ValueMap, ValueVec,
    },
};
pub use vellum_memory::{Address, Borrow, BorrowMut, Ptr, PtrMut, VCell, make_ptr, make_ptr_mut};
