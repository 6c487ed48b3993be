//! Thread-safe wrappers around the collection types.
//!
//! The collections themselves hold no locks. [`SyncTreeMap`] instead owns a
//! [`BinaryTreeMap`](crate::collections::binary_tree::BinaryTreeMap) behind a single lock and
//! forwards every call through it, taking a shared lock for anything that only reads the map
//! (including the methods that return a modified copy) and an exclusive lock for anything that
//! changes it in place. The lock itself is chosen through [`MapLock`], with [`MutexTreeMap`] and
//! [`RwLockTreeMap`] covering the two usual choices.
//!
//! Callbacks passed to these wrappers run while the lock is held, so they must not call back into
//! the same wrapper.

mod error;
mod lock;
mod sync_tree_map;
mod tests;

pub use error::*;
pub use lock::*;
pub use sync_tree_map::*;
