use vellum_core::{VString, Value};
use vellum_memory::{Ptr, make_ptr};

/// The function signature used by [Replacer::Transform]
///
/// The arguments are the entry's key, its value, and the container that owns the entry (`None`
/// for the root value, which is passed in with an empty key). Returning `None` omits the entry:
/// map members are dropped, list slots become `null`, and an omitted root produces no output.
#[cfg(not(feature = "arc"))]
pub type TransformFn = dyn Fn(&str, &Value, Option<&Value>) -> Option<Value>;

/// The function signature used by [Replacer::Transform]
///
/// The arguments are the entry's key, its value, and the container that owns the entry (`None`
/// for the root value, which is passed in with an empty key). Returning `None` omits the entry:
/// map members are dropped, list slots become `null`, and an omitted root produces no output.
#[cfg(feature = "arc")]
pub type TransformFn = dyn Fn(&str, &Value, Option<&Value>) -> Option<Value> + Send + Sync;

/// Controls which entries are included or transformed while stringifying
pub enum Replacer {
    /// An explicit set of allowed map keys
    ///
    /// The set applies at every nesting level, so a map that's only reachable through unlisted
    /// keys encodes as `{}`. Kept entries are emitted in the order the keys appear in the list,
    /// and names that appear more than once are applied once. Lists and primitive values are
    /// unaffected.
    Keys(Vec<VString>),

    /// A transform applied to every (key, value) pair, including the root
    ///
    /// See [TransformFn].
    Transform(Ptr<TransformFn>),
}

impl Replacer {
    /// Makes a key-list replacer from the provided names
    pub fn keys<T>(keys: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<VString>,
    {
        Self::Keys(keys.into_iter().map(Into::into).collect())
    }

    /// Makes a transform replacer from the provided function
    #[cfg(not(feature = "arc"))]
    pub fn transform(
        f: impl Fn(&str, &Value, Option<&Value>) -> Option<Value> + 'static,
    ) -> Self {
        Self::Transform(make_ptr!(f))
    }

    /// Makes a transform replacer from the provided function
    #[cfg(feature = "arc")]
    pub fn transform(
        f: impl Fn(&str, &Value, Option<&Value>) -> Option<Value> + Send + Sync + 'static,
    ) -> Self {
        Self::Transform(make_ptr!(f))
    }
}
