use crate::{Value, ValueSend, ValueSync};
use std::fmt;
use vellum_memory::{Address, Ptr, make_ptr};

/// A capability for values that declare their own serializable representation
///
/// A type implementing `Represent` can be placed in a value graph via [CustomValue]. When the
/// serializer reaches it, [to_value](Self::to_value) is called and the result is encoded in place
/// of the value's natural structure. The returned value is resolved in the same way, so a
/// representation can itself be another custom value.
///
/// ## Example
///
/// ```
/// use vellum_core::{CustomValue, Represent, Value, ValueMap};
///
/// struct Timestamp(i64);
///
/// impl Represent for Timestamp {
///     fn to_value(&self) -> Value {
///         format!("@{}", self.0).into()
///     }
///
///     fn type_name(&self) -> &str {
///         "timestamp"
///     }
/// }
///
/// let event = ValueMap::new();
/// event.insert("at", CustomValue::new(Timestamp(1234567890)));
/// ```
pub trait Represent: ValueSend + ValueSync {
    /// Returns the value that should be serialized in place of this one
    fn to_value(&self) -> Value;

    /// A name for the implementing type, used in diagnostics
    fn type_name(&self) -> &str {
        "custom"
    }
}

/// A value with a custom serializable representation
///
/// See [Represent].
#[derive(Clone)]
pub struct CustomValue(Ptr<dyn Represent>);

impl CustomValue {
    /// Wraps the provided [Represent] implementation
    pub fn new(value: impl Represent + 'static) -> Self {
        Self(make_ptr!(value))
    }

    /// Calls the wrapped value's [to_value](Represent::to_value)
    pub fn to_value(&self) -> Value {
        self.0.to_value()
    }

    /// Returns the wrapped value's type name
    pub fn type_name(&self) -> &str {
        self.0.type_name()
    }

    /// Returns the address of the wrapped value's allocation
    pub fn address(&self) -> Address {
        Ptr::address(&self.0)
    }
}

impl From<Ptr<dyn Represent>> for CustomValue {
    fn from(value: Ptr<dyn Represent>) -> Self {
        Self(value)
    }
}

impl PartialEq for CustomValue {
    fn eq(&self, other: &Self) -> bool {
        Ptr::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for CustomValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomValue({})", self.type_name())
    }
}
