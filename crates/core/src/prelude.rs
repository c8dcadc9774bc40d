//! A collection of useful items to make it easier to work with `vellum_core`

#[doc(inline)]
pub use crate::{
    Borrow, BorrowMut, CustomValue, Number, OpaqueKind, Ptr, PtrMut, Represent, VString, Value,
    ValueKey, ValueList, ValueMap, ValueVec, make_ptr, make_ptr_mut,
};
