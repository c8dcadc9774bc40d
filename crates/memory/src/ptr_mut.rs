use std::{
    fmt,
    ops::{Deref, DerefMut},
};

use crate::{
    Ptr,
    ptr_impl::{BorrowImpl, BorrowMutImpl, CellImpl, borrow, borrow_mut, try_borrow,
        try_borrow_mut},
};

/// Makes a [PtrMut], with support for casting to trait objects
///
/// See [make_ptr](crate::make_ptr) for why this is a macro rather than a function.
#[macro_export]
macro_rules! make_ptr_mut {
    ($value:expr) => {
        $crate::make_ptr!($crate::VCell::from($value))
    };
}

/// A mutable pointer to a value in allocated memory
pub type PtrMut<T> = Ptr<VCell<T>>;

impl<T> From<T> for PtrMut<T> {
    fn from(value: T) -> Self {
        Ptr::from(VCell::from(value))
    }
}

/// A mutable value with borrowing checked at runtime
#[derive(Debug)]
pub struct VCell<T: ?Sized>(CellImpl<T>);

impl<T: Default> Default for VCell<T> {
    fn default() -> Self {
        Self(CellImpl::default())
    }
}

impl<T> From<T> for VCell<T> {
    fn from(value: T) -> Self {
        Self(CellImpl::from(value))
    }
}

impl<T: ?Sized> VCell<T> {
    /// Immutably borrows the wrapped value
    ///
    /// Multiple immutable borrows can be made at the same time.
    ///
    /// # Feature-specific behavior
    ///
    /// If the value is currently mutably borrowed then
    /// - with the "rc" feature, this will panic
    /// - with the "arc" feature, this will block
    ///
    /// See `try_borrow` for a non-panicking/non-blocking version.
    pub fn borrow(&self) -> Borrow<'_, T> {
        Borrow(borrow(&self.0))
    }

    /// Attempts to immutably borrow the wrapped value
    ///
    /// Returns `None` if the value is currently mutably borrowed.
    pub fn try_borrow(&self) -> Option<Borrow<'_, T>> {
        try_borrow(&self.0).map(Borrow)
    }

    /// Mutably borrows the wrapped value
    ///
    /// # Feature-specific behavior
    ///
    /// If the value is currently borrowed then
    /// - with the "rc" feature, this will panic
    /// - with the "arc" feature, this will block
    ///
    /// See `try_borrow_mut` for a non-panicking/non-blocking version.
    pub fn borrow_mut(&self) -> BorrowMut<'_, T> {
        BorrowMut(borrow_mut(&self.0))
    }

    /// Attempts to mutably borrow the wrapped value
    ///
    /// Returns `None` if the value is currently borrowed.
    pub fn try_borrow_mut(&self) -> Option<BorrowMut<'_, T>> {
        try_borrow_mut(&self.0).map(BorrowMut)
    }
}

/// An immutably borrowed reference to a value borrowed from a [PtrMut]
pub struct Borrow<'a, T: ?Sized>(BorrowImpl<'a, T>);

impl<T: ?Sized> Deref for Borrow<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.0.deref()
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for Borrow<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A mutably borrowed reference to a value borrowed from a [PtrMut]
pub struct BorrowMut<'a, T: ?Sized>(BorrowMutImpl<'a, T>);

impl<T: ?Sized> Deref for BorrowMut<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.0.deref()
    }
}

impl<T: ?Sized> DerefMut for BorrowMut<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        self.0.deref_mut()
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for BorrowMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
