use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
};
use vellum_memory::Ptr;

/// The string type used in Vellum value graphs
///
/// The underlying string data is shared between clones, making the type cheap to copy around a
/// value graph.
#[derive(Clone)]
pub struct VString(Ptr<str>);

impl VString {
    /// Returns the string's contents as a `&str`
    pub fn as_str(&self) -> &str {
        self
    }
}

impl Default for VString {
    fn default() -> Self {
        Self("".into())
    }
}

impl From<Ptr<str>> for VString {
    fn from(string: Ptr<str>) -> Self {
        Self(string)
    }
}

impl From<&str> for VString {
    fn from(string: &str) -> Self {
        Self(string.into())
    }
}

impl From<String> for VString {
    fn from(string: String) -> Self {
        Self(string.into())
    }
}

impl Deref for VString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VString {
    fn as_ref(&self) -> &str {
        self
    }
}

impl PartialEq for VString {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl PartialEq<&str> for VString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Eq for VString {}

impl Hash for VString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state)
    }
}

impl PartialOrd for VString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl fmt::Display for VString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl fmt::Debug for VString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}
