//! Shared-pointer types for Vellum
//!
//! Value graphs in Vellum share sub-structures by reference, so the pointer types here expose the
//! address of their allocation as an identity. The serializer relies on that identity to tell a
//! legal shared reference (a DAG) apart from a cycle.
//!
//! Two reference-counting strategies are available behind feature flags:
//! - `rc`: `Rc` + `RefCell`, for single-threaded use (the default)
//! - `arc`: `Arc` + `parking_lot::RwLock`, for use across threads

#![warn(missing_docs)]

#[cfg(all(feature = "arc", feature = "rc"))]
compile_error!("A single memory management feature can be enabled at a time");

#[cfg(not(any(feature = "arc", feature = "rc")))]
compile_error!("Either the 'arc' or 'rc' feature must be enabled");

mod address;
mod ptr;
mod ptr_impl;
mod ptr_mut;

pub use crate::{
    address::Address,
    ptr::Ptr,
    ptr_mut::{Borrow, BorrowMut, PtrMut, VCell},
};
