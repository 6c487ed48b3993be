use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;
use std::marker::PhantomData;

use parking_lot::{Mutex, RwLock};

use super::{LockContended, MapLock};
use crate::collections::binary_tree::BinaryTreeMap;

/// A [`BinaryTreeMap`] behind a lock, which can be shared between threads (usually via an
/// [`Arc`](std::sync::Arc)).
///
/// Every method acquires the lock once and holds it for the whole call. Methods that only read
/// the map take a shared lock; this includes [`updated`](SyncTreeMap::updated),
/// [`without`](SyncTreeMap::without) and [`filter`](SyncTreeMap::filter), which build their result
/// from a private copy. Methods that change the map in place take an exclusive lock.
///
/// Lookups can't hand out references into the map once the lock is released, so they return
/// clones of the keys and values instead.
pub struct SyncTreeMap<K, V, L = RwLock<BinaryTreeMap<K, V>>> {
    pub(crate) lock: L,
    // The map itself lives in L, this only ties the key and value types to the wrapper without
    // affecting its auto traits.
    pub(crate) _phantom: PhantomData<fn() -> (K, V)>,
}

/// A [`SyncTreeMap`] guarded by a mutex, where readers also exclude each other.
pub type MutexTreeMap<K, V> = SyncTreeMap<K, V, Mutex<BinaryTreeMap<K, V>>>;

/// A [`SyncTreeMap`] guarded by a reader/writer lock, allowing any number of concurrent readers.
pub type RwLockTreeMap<K, V> = SyncTreeMap<K, V, RwLock<BinaryTreeMap<K, V>>>;

impl<K, V, L: MapLock<BinaryTreeMap<K, V>>> SyncTreeMap<K, V, L> {
    /// Creates a new SyncTreeMap with no entries.
    pub fn new() -> SyncTreeMap<K, V, L> {
        Self::from_map(BinaryTreeMap::new())
    }

    /// Wraps an existing map.
    pub fn from_map(map: BinaryTreeMap<K, V>) -> SyncTreeMap<K, V, L> {
        SyncTreeMap {
            lock: L::new(map),
            _phantom: PhantomData,
        }
    }

    /// Runs `f` with shared access to the map.
    pub fn read<R>(&self, f: impl FnOnce(&BinaryTreeMap<K, V>) -> R) -> R {
        self.lock.read(f)
    }

    /// Runs `f` with exclusive access to the map.
    pub fn write<R>(&self, f: impl FnOnce(&mut BinaryTreeMap<K, V>) -> R) -> R {
        self.lock.write(f)
    }

    /// Runs `f` with shared access to the map, unless doing so would block.
    pub fn try_read<R>(
        &self,
        f: impl FnOnce(&BinaryTreeMap<K, V>) -> R,
    ) -> Result<R, LockContended> {
        self.lock.try_read(f).ok_or(LockContended)
    }

    /// Runs `f` with exclusive access to the map, unless doing so would block.
    pub fn try_write<R>(
        &self,
        f: impl FnOnce(&mut BinaryTreeMap<K, V>) -> R,
    ) -> Result<R, LockContended> {
        self.lock.try_write(f).ok_or(LockContended)
    }

    /// Returns a mutable reference to the map without locking, as the exclusive borrow already
    /// rules out other users.
    pub fn get_mut(&mut self) -> &mut BinaryTreeMap<K, V> {
        self.lock.get_mut()
    }

    /// Consumes the wrapper, returning the map.
    pub fn into_inner(self) -> BinaryTreeMap<K, V> {
        self.lock.into_inner()
    }

    pub fn len(&self) -> usize {
        self.read(|m| m.len())
    }

    pub fn is_empty(&self) -> bool {
        self.read(|m| m.is_empty())
    }

    pub fn depth(&self) -> usize {
        self.read(|m| m.depth())
    }

    pub fn clear(&self) {
        self.write(|m| m.clear())
    }

    /// Calls `f` with every entry in ascending key order, holding a shared lock throughout.
    pub fn for_each<F: FnMut(&K, &V)>(&self, f: F) {
        self.read(|m| m.for_each(f))
    }

    pub fn for_each_key<F: FnMut(&K)>(&self, f: F) {
        self.read(|m| m.for_each_key(f))
    }

    pub fn for_each_value<F: FnMut(&V)>(&self, f: F) {
        self.read(|m| m.for_each_value(f))
    }

    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.read(|m| m.contains_value(value))
    }

    /// Returns a copy of the map as it currently is.
    pub fn snapshot(&self) -> BinaryTreeMap<K, V>
    where
        K: Clone,
        V: Clone,
    {
        self.read(|m| m.clone())
    }

    /// Returns all keys in ascending order.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.read(|m| m.keys().cloned().collect())
    }

    /// Returns all values, ordered by their keys.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.read(|m| m.values().cloned().collect())
    }

    /// Returns all entries in ascending key order.
    pub fn items(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.read(|m| m.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }

    pub fn to_hash_map(&self) -> HashMap<K, V>
    where
        K: Hash + Eq + Clone,
        V: Clone,
    {
        self.read(|m| m.to_hash_map())
    }

    /// Returns the entry with the smallest key for which `predicate` returns true.
    pub fn find<F>(&self, predicate: F) -> Option<(K, V)>
    where
        K: Clone,
        V: Clone,
        F: FnMut(&K, &V) -> bool,
    {
        self.read(|m| m.find(predicate).map(|(k, v)| (k.clone(), v.clone())))
    }

    pub fn find_key<F>(&self, predicate: F) -> Option<(K, V)>
    where
        K: Clone,
        V: Clone,
        F: FnMut(&K) -> bool,
    {
        self.read(|m| m.find_key(predicate).map(|(k, v)| (k.clone(), v.clone())))
    }

    pub fn find_value<F>(&self, predicate: F) -> Option<(K, V)>
    where
        K: Clone,
        V: Clone,
        F: FnMut(&V) -> bool,
    {
        self.read(|m| m.find_value(predicate).map(|(k, v)| (k.clone(), v.clone())))
    }
}

impl<K: Ord, V, L: MapLock<BinaryTreeMap<K, V>>> SyncTreeMap<K, V, L> {
    /// Returns a clone of the value associated with `key`, if there is one.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        V: Clone,
    {
        self.read(|m| m.get(key).cloned())
    }

    /// Looks up `key`, returning a copy of its value and true, or `default` and false.
    pub fn get_or<Q>(&self, key: &Q, default: V) -> (V, bool)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        V: Clone,
    {
        self.read(|m| m.get_or(key, default))
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.read(|m| m.contains(key))
    }

    /// Inserts the provided pair, returning the value it replaced, if any.
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.write(|m| m.insert(key, value))
    }

    /// Inserts every pair in order under a single exclusive lock.
    pub fn insert_many<I: IntoIterator<Item = (K, V)>>(&self, pairs: I) {
        self.write(|m| m.insert_many(pairs))
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.write(|m| m.remove(key))
    }

    /// Removes every key provided under a single exclusive lock.
    pub fn remove_many<'q, Q, I>(&self, keys: I)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized + 'q,
        I: IntoIterator<Item = &'q Q>,
    {
        self.write(|m| m.remove_many(keys))
    }

    /// Keeps only the entries for which `predicate` returns true.
    pub fn retain<F>(&self, predicate: F)
    where
        K: Clone,
        F: FnMut(&K, &V) -> bool,
    {
        self.write(|m| m.retain(predicate))
    }
}

impl<K: Ord + Clone, V: Clone, L: MapLock<BinaryTreeMap<K, V>>> SyncTreeMap<K, V, L> {
    /// Returns a copy of the map with the provided pair inserted. Only a shared lock is taken, the
    /// wrapped map is left as is.
    pub fn updated(&self, key: K, value: V) -> BinaryTreeMap<K, V> {
        self.read(|m| m.updated(key, value))
    }

    pub fn updated_many<I: IntoIterator<Item = (K, V)>>(&self, pairs: I) -> BinaryTreeMap<K, V> {
        self.read(|m| m.updated_many(pairs))
    }

    /// Returns a copy of the map without the entry for `key`. Only a shared lock is taken, the
    /// wrapped map is left as is.
    pub fn without<Q>(&self, key: &Q) -> BinaryTreeMap<K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.read(|m| m.without(key))
    }

    pub fn without_many<'q, Q, I>(&self, keys: I) -> BinaryTreeMap<K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized + 'q,
        I: IntoIterator<Item = &'q Q>,
    {
        self.read(|m| m.without_many(keys))
    }

    /// Builds a new map from the entries for which `predicate` returns true.
    pub fn filter<F>(&self, predicate: F) -> BinaryTreeMap<K, V>
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.read(|m| m.filter(predicate))
    }
}

impl<K, V, L: MapLock<BinaryTreeMap<K, V>>> Default for SyncTreeMap<K, V, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, L: MapLock<BinaryTreeMap<K, V>>> From<BinaryTreeMap<K, V>> for SyncTreeMap<K, V, L> {
    fn from(value: BinaryTreeMap<K, V>) -> Self {
        Self::from_map(value)
    }
}

impl<K: Ord, V, L: MapLock<BinaryTreeMap<K, V>>> FromIterator<(K, V)> for SyncTreeMap<K, V, L> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_map(iter.into_iter().collect())
    }
}

impl<K: Debug, V: Debug, L: MapLock<BinaryTreeMap<K, V>>> Debug for SyncTreeMap<K, V, L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Formatting shouldn't deadlock if the current thread already holds the lock.
        let mut debug = f.debug_struct("SyncTreeMap");
        match self.lock.try_read(|m| debug.field("map", &format_args!("{m}")).finish()) {
            Some(result) => result,
            None => debug.field("map", &format_args!("<locked>")).finish(),
        }
    }
}
