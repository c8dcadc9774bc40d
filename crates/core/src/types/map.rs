use crate::{Value, ValueKey};
use indexmap::IndexMap;
use rustc_hash::FxHasher;
use std::{fmt, hash::BuildHasherDefault};
use vellum_memory::{Address, Borrow, BorrowMut, Ptr, PtrMut};

/// The hasher used throughout Vellum
pub type ValueHasher = FxHasher;

/// The insertion-ordered (key -> value) map data used by [ValueMap]
pub type MapData = IndexMap<ValueKey, Value, BuildHasherDefault<ValueHasher>>;

/// The map type used in Vellum value graphs
///
/// The map's data is shared between clones, and iteration follows insertion order.
#[derive(Clone, Default)]
pub struct ValueMap(PtrMut<MapData>);

impl ValueMap {
    /// Creates an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self(MapData::with_capacity_and_hasher(capacity, Default::default()).into())
    }

    /// Creates a map initialized with the provided data
    pub fn with_data(data: MapData) -> Self {
        Self(data.into())
    }

    /// Returns the number of entries in the map
    pub fn len(&self) -> usize {
        self.data().len()
    }

    /// Returns true if there are no entries in the map
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts a value at the given key, replacing any existing entry
    ///
    /// A replaced entry keeps its original position in the iteration order.
    pub fn insert(&self, key: impl Into<ValueKey>, value: impl Into<Value>) {
        self.data_mut().insert(key.into(), value.into());
    }

    /// Returns a clone of the value corresponding to the given key
    pub fn get(&self, key: &str) -> Option<Value> {
        self.data().get(key).cloned()
    }

    /// Returns true if the map contains an entry with the given key
    pub fn contains_key(&self, key: &str) -> bool {
        self.data().contains_key(key)
    }

    /// Returns a reference to the map's data
    pub fn data(&self) -> Borrow<'_, MapData> {
        self.0.borrow()
    }

    /// Returns a mutable reference to the map's data
    pub fn data_mut(&self) -> BorrowMut<'_, MapData> {
        self.0.borrow_mut()
    }

    /// Returns the address of the map's allocation, used as the map's identity
    pub fn address(&self) -> Address {
        Ptr::address(&self.0)
    }
}

impl FromIterator<(ValueKey, Value)> for ValueMap {
    fn from_iter<T: IntoIterator<Item = (ValueKey, Value)>>(iter: T) -> Self {
        Self(MapData::from_iter(iter).into())
    }
}

impl fmt::Debug for ValueMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.data().iter().map(|(key, value)| (key.as_str().to_string(), value.clone())))
            .finish()
    }
}
