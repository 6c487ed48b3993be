use parking_lot::{Mutex, RwLock};

/// A lock that can guard a value for [`SyncTreeMap`](super::SyncTreeMap).
///
/// Access is given through closures so that the guard never escapes the call. Implementations that
/// can't tell readers from writers (like [`Mutex`]) are free to treat reads as writes.
pub trait MapLock<T>: Sized {
    /// Wraps `value` in a new, unlocked lock.
    fn new(value: T) -> Self;

    /// Runs `f` with shared access to the value, blocking until it is available.
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R;

    /// Runs `f` with exclusive access to the value, blocking until it is available.
    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;

    /// Runs `f` with shared access to the value if that is possible without blocking.
    fn try_read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;

    /// Runs `f` with exclusive access to the value if that is possible without blocking.
    fn try_write<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;

    /// Returns a mutable reference to the value. No locking is needed, the borrow proves that there
    /// are no other users.
    fn get_mut(&mut self) -> &mut T;

    fn into_inner(self) -> T;
}

impl<T> MapLock<T> for Mutex<T> {
    fn new(value: T) -> Self {
        Mutex::new(value)
    }

    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.lock())
    }

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut *self.lock())
    }

    fn try_read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_lock().map(|guard| f(&*guard))
    }

    fn try_write<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_lock().map(|mut guard| f(&mut *guard))
    }

    fn get_mut(&mut self) -> &mut T {
        Mutex::get_mut(self)
    }

    fn into_inner(self) -> T {
        Mutex::into_inner(self)
    }
}

impl<T> MapLock<T> for RwLock<T> {
    fn new(value: T) -> Self {
        RwLock::new(value)
    }

    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*RwLock::read(self))
    }

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut *RwLock::write(self))
    }

    fn try_read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        RwLock::try_read(self).map(|guard| f(&*guard))
    }

    fn try_write<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        RwLock::try_write(self).map(|mut guard| f(&mut *guard))
    }

    fn get_mut(&mut self) -> &mut T {
        RwLock::get_mut(self)
    }

    fn into_inner(self) -> T {
        RwLock::into_inner(self)
    }
}
