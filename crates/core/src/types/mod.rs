mod custom;
mod list;
mod map;
mod number;
mod string;
mod value;
mod value_key;

pub use self::{
    custom::{CustomValue, Represent},
    list::{ValueList, ValueVec},
    map::{MapData, ValueHasher, ValueMap},
    number::Number,
    string::VString,
    value::{OpaqueKind, Value},
    value_key::ValueKey,
};
