use crate::VString;
use indexmap::Equivalent;
use std::fmt;

/// The key type used by [ValueMap](crate::ValueMap)
///
/// Keys are always strings; `Equivalent` is implemented for `str` so that maps can be indexed by
/// `&str` without allocating.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValueKey(VString);

impl ValueKey {
    /// Returns the key as a `&str`
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns a reference to the key's string
    pub fn string(&self) -> &VString {
        &self.0
    }
}

impl From<VString> for ValueKey {
    fn from(string: VString) -> Self {
        Self(string)
    }
}

impl From<&str> for ValueKey {
    fn from(string: &str) -> Self {
        Self(string.into())
    }
}

impl From<String> for ValueKey {
    fn from(string: String) -> Self {
        Self(string.into())
    }
}

impl Equivalent<ValueKey> for str {
    fn equivalent(&self, other: &ValueKey) -> bool {
        self == other.as_str()
    }
}

impl fmt::Display for ValueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
