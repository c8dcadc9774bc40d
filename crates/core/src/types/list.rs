use crate::Value;
use std::fmt;
use vellum_memory::{Address, Borrow, BorrowMut, Ptr, PtrMut};

/// The underlying Vec type used by [ValueList]
pub type ValueVec = smallvec::SmallVec<[Value; 4]>;

/// The list type used in Vellum value graphs
///
/// The list's data is shared between clones, so the same list can appear at several positions in
/// a value graph.
#[derive(Clone, Default)]
pub struct ValueList(PtrMut<ValueVec>);

impl ValueList {
    /// Creates an empty list with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self(ValueVec::with_capacity(capacity).into())
    }

    /// Creates a list containing the provided data
    pub fn with_data(data: ValueVec) -> Self {
        Self(data.into())
    }

    /// Creates a list containing the provided slice of [Values](crate::Value)
    pub fn from_slice(data: &[Value]) -> Self {
        Self(data.iter().cloned().collect::<ValueVec>().into())
    }

    /// Returns the number of entries in the list
    pub fn len(&self) -> usize {
        self.data().len()
    }

    /// Returns true if there are no entries in the list
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a value to the end of the list
    pub fn push(&self, value: impl Into<Value>) {
        self.data_mut().push(value.into());
    }

    /// Returns a reference to the list's entries
    pub fn data(&self) -> Borrow<'_, ValueVec> {
        self.0.borrow()
    }

    /// Returns a mutable reference to the list's entries
    pub fn data_mut(&self) -> BorrowMut<'_, ValueVec> {
        self.0.borrow_mut()
    }

    /// Returns the address of the list's allocation, used as the list's identity
    pub fn address(&self) -> Address {
        Ptr::address(&self.0)
    }
}

impl From<Vec<Value>> for ValueList {
    fn from(data: Vec<Value>) -> Self {
        data.into_iter().collect()
    }
}

impl FromIterator<Value> for ValueList {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self(iter.into_iter().collect::<ValueVec>().into())
    }
}

impl fmt::Debug for ValueList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data().iter()).finish()
    }
}
