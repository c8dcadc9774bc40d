use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// The identity of an allocation, used for comparing and hashing pointer addresses
///
/// Two values share an `Address` when they share an allocation, so addresses can be used to
/// detect when a container is revisited while walking a value graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Address(*const u8);

impl<T: ?Sized> From<*const T> for Address {
    fn from(pointer: *const T) -> Self {
        Self(pointer as *const u8)
    }
}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.0 as usize);
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
