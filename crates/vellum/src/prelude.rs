//! A collection of useful items to make it easier to work with `vellum`

pub use crate::{
    CustomValue, Error, Number, OpaqueKind, Replacer, Represent, StringifyOptions, VString, Value,
    ValueKey, ValueList, ValueMap, ValueVec, stringify, stringify_with_options,
};
