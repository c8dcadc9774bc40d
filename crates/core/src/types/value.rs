//! The core value type used by Vellum

use crate::{CustomValue, Number, VString, ValueList, ValueMap};

/// The core value type for Vellum
///
/// Lists and maps share their contents by reference, so cloning a `Value` is always cheap and a
/// sub-structure can appear at several positions in a graph. Equality is structural for the
/// fundamental variants; custom values compare by identity.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The default type representing the absence of a value
    #[default]
    Null,

    /// A boolean, can be either true or false
    Bool(bool),

    /// A number, represented as either a signed 64 bit integer or float
    Number(Number),

    /// A string
    Str(VString),

    /// A list of values
    List(ValueList),

    /// An insertion-ordered map with string keys
    Map(ValueMap),

    /// A value that provides its own serializable representation
    ///
    /// See [Represent](crate::Represent).
    Custom(CustomValue),

    /// A value with no serializable representation
    Opaque(OpaqueKind),
}

/// The kinds of value that have no serializable representation
///
/// Opaque values degrade gracefully during serialization: they're dropped from maps, encoded as
/// `null` in lists, and produce no output at the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpaqueKind {
    /// The undefined-equivalent value
    Undefined,
    /// A function-like value
    Function,
    /// A symbol-like value
    Symbol,
}

impl Value {
    /// Returns the name of the value's type
    pub fn type_as_string(&self) -> &'static str {
        use Value::*;

        match self {
            Null => "null",
            Bool(_) => "bool",
            Number(_) => "number",
            Str(_) => "string",
            List(_) => "list",
            Map(_) => "map",
            Custom(_) => "custom",
            Opaque(OpaqueKind::Undefined) => "undefined",
            Opaque(OpaqueKind::Function) => "function",
            Opaque(OpaqueKind::Symbol) => "symbol",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::*;

        match (self, other) {
            (Null, Null) => true,
            (Bool(a), Bool(b)) => a == b,
            (Number(a), Number(b)) => a == b,
            (Str(a), Str(b)) => a == b,
            (List(a), List(b)) => *a.data() == *b.data(),
            (Map(a), Map(b)) => *a.data() == *b.data(),
            (Custom(a), Custom(b)) => a == b,
            (Opaque(a), Opaque(b)) => a == b,
            _ => false,
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<VString> for Value {
    fn from(value: VString) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value.into())
    }
}

impl From<ValueList> for Value {
    fn from(value: ValueList) -> Self {
        Self::List(value)
    }
}

impl From<ValueMap> for Value {
    fn from(value: ValueMap) -> Self {
        Self::Map(value)
    }
}

impl From<CustomValue> for Value {
    fn from(value: CustomValue) -> Self {
        Self::Custom(value)
    }
}

impl From<OpaqueKind> for Value {
    fn from(value: OpaqueKind) -> Self {
        Self::Opaque(value)
    }
}

macro_rules! value_from_number {
    ($type:ty) => {
        impl From<$type> for Value {
            fn from(value: $type) -> Self {
                Self::Number(value.into())
            }
        }
    };
}

value_from_number!(f32);
value_from_number!(f64);
value_from_number!(i8);
value_from_number!(i16);
value_from_number!(i32);
value_from_number!(i64);
value_from_number!(u8);
value_from_number!(u16);
value_from_number!(u32);
value_from_number!(usize);
