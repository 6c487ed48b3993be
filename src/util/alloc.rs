#![cfg(test)]
//! Types for checking that collections drop their contents exactly once.

use std::cell::Cell;
use std::rc::Rc;

/// A shared count of how many [`Tracked`] values have been dropped.
#[derive(Debug, Default, Clone)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    /// Creates a counter with no drops recorded.
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    /// Creates a value which increments this counter when dropped.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        Tracked {
            value,
            counter: self.clone(),
        }
    }

    /// Returns the number of drops recorded so far.
    pub fn drops(&self) -> usize {
        self.0.get()
    }
}

/// A value reporting its own drop to a [`DropCounter`].
#[derive(Debug)]
pub struct Tracked<T> {
    /// The wrapped value.
    pub value: T,
    counter: DropCounter,
}

impl<T: Clone> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        self.counter.track(self.value.clone())
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.counter.0.set(self.counter.0.get() + 1);
    }
}
