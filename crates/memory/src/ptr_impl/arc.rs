pub(crate) use parking_lot::MappedRwLockReadGuard as BorrowImpl;
pub(crate) use parking_lot::MappedRwLockWriteGuard as BorrowMutImpl;
pub(crate) use parking_lot::RwLock as CellImpl;
pub(crate) use std::sync::Arc as PtrImpl;

#[doc(hidden)]
#[macro_export]
macro_rules! __make_ptr {
    ($value:expr) => {
        $crate::Ptr::from(::std::sync::Arc::new($value) as ::std::sync::Arc<_>)
    };
}

#[inline]
pub(crate) fn borrow<T: ?Sized>(cell: &CellImpl<T>) -> BorrowImpl<'_, T> {
    parking_lot::RwLockReadGuard::map(cell.read(), |x| x)
}

#[inline]
pub(crate) fn try_borrow<T: ?Sized>(cell: &CellImpl<T>) -> Option<BorrowImpl<'_, T>> {
    cell.try_read()
        .map(|guard| parking_lot::RwLockReadGuard::map(guard, |x| x))
}

#[inline]
pub(crate) fn borrow_mut<T: ?Sized>(cell: &CellImpl<T>) -> BorrowMutImpl<'_, T> {
    parking_lot::RwLockWriteGuard::map(cell.write(), |x| x)
}

#[inline]
pub(crate) fn try_borrow_mut<T: ?Sized>(cell: &CellImpl<T>) -> Option<BorrowMutImpl<'_, T>> {
    cell.try_write()
        .map(|guard| parking_lot::RwLockWriteGuard::map(guard, |x| x))
}
