use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;

use super::{Branch, IntoKeys, IntoValues, Iter, IterMut, Keys, Values, ValuesMut};

/// A map of keys to values, ordered by key and backed by an unbalanced binary search tree.
///
/// Every node's key is greater than all keys in its left subtree and less than all keys in its
/// right subtree, so all traversal (iterators, `for_each`, `find` and friends) visits entries in
/// ascending key order. The tree is never rebalanced: its shape is decided entirely by the order of
/// insertion, so inserting already sorted keys produces a tree as deep as it is long.
///
/// Methods come in two flavours. Most mutate the map in place (`insert`, `remove`, `retain`, ...),
/// while `updated`, `without` and `filter` (and their `_many` variants) leave the receiver
/// untouched and return a new map instead. The latter deep clone the whole tree, preserving its
/// shape, before applying the change.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the BinaryTreeMap.
/// - `d`: The depth of the tree, between `log2 n` and `n`.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `get` | `O(d)` |
/// | `insert` | `O(d)` |
/// | `remove` | `O(d)` |
/// | `first/last` | `O(d)` |
/// | `updated/without` | `O(n)` |
/// | `iter` (full) | `O(n)` |
/// | `contains_value` | `O(n)` |
/// | `clear` | `O(n)` |
pub struct BinaryTreeMap<K, V> {
    pub(crate) root: Branch<K, V>,
    pub(crate) len: usize,
}

impl<K, V> BinaryTreeMap<K, V> {
    /// Creates a new BinaryTreeMap with no entries.
    pub const fn new() -> BinaryTreeMap<K, V> {
        BinaryTreeMap {
            root: Branch::empty(),
            len: 0,
        }
    }

    /// Returns the number of entries in the BinaryTreeMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the BinaryTreeMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the depth of the underlying tree: 0 when empty, 1 for a single entry and up to
    /// `len` for a tree that has degraded into a list.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Removes all entries from the BinaryTreeMap. Calling this on an empty map does nothing.
    pub fn clear(&mut self) {
        self.root.dismantle();
        self.len = 0;
    }

    /// Returns the entry with the smallest key, if the map isn't empty.
    pub fn first_entry(&self) -> Option<(&K, &V)> {
        self.root.first_entry()
    }

    pub fn first(&self) -> Option<&V> {
        self.first_entry().map(|e| e.1)
    }

    /// Returns the entry with the largest key, if the map isn't empty.
    pub fn last_entry(&self) -> Option<(&K, &V)> {
        self.root.last_entry()
    }

    pub fn last(&self) -> Option<&V> {
        self.last_entry().map(|e| e.1)
    }

    /// Removes and returns the entry with the smallest key, if the map isn't empty.
    pub fn take_first_entry(&mut self) -> Option<(K, V)> {
        let entry = self.root.take_first_entry()?;
        self.len -= 1;
        Some(entry)
    }

    pub fn take_first(&mut self) -> Option<V> {
        self.take_first_entry().map(|e| e.1)
    }

    /// Removes and returns the entry with the largest key, if the map isn't empty.
    pub fn take_last_entry(&mut self) -> Option<(K, V)> {
        let entry = self.root.take_last_entry()?;
        self.len -= 1;
        Some(entry)
    }

    pub fn take_last(&mut self) -> Option<V> {
        self.take_last_entry().map(|e| e.1)
    }

    /// Returns an iterator over all entries in ascending key order, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all entries in ascending key order, with mutable references to the
    /// values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Consumes self and returns an iterator over all keys in ascending order.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Returns an iterator over all values, ordered by their keys.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.iter_mut())
    }

    /// Consumes self and returns an iterator over all values, ordered by their keys.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }

    /// Calls `f` with every entry, in ascending key order.
    pub fn for_each<F: FnMut(&K, &V)>(&self, mut f: F) {
        for (key, value) in self {
            f(key, value);
        }
    }

    /// Calls `f` with every key, in ascending order.
    pub fn for_each_key<F: FnMut(&K)>(&self, f: F) {
        self.keys().for_each(f)
    }

    /// Calls `f` with every value, ordered by their keys.
    pub fn for_each_value<F: FnMut(&V)>(&self, f: F) {
        self.values().for_each(f)
    }

    /// Returns the entry with the smallest key for which `predicate` returns true.
    pub fn find<F>(&self, mut predicate: F) -> Option<(&K, &V)>
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.iter().find(|(k, v)| predicate(*k, *v))
    }

    /// Returns the entry with the smallest key that satisfies `predicate`.
    pub fn find_key<F>(&self, mut predicate: F) -> Option<(&K, &V)>
    where
        F: FnMut(&K) -> bool,
    {
        self.iter().find(|(k, _)| predicate(*k))
    }

    /// Returns the entry with the smallest key whose value satisfies `predicate`.
    pub fn find_value<F>(&self, mut predicate: F) -> Option<(&K, &V)>
    where
        F: FnMut(&V) -> bool,
    {
        self.iter().find(|(_, v)| predicate(*v))
    }

    /// Returns true if any entry holds a value equal to `value`. This has to walk the tree, see
    /// [`find_value`](BinaryTreeMap::find_value) for values without [`PartialEq`].
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == value)
    }

    /// Copies all entries into a [`HashMap`], discarding the ordering.
    pub fn to_hash_map(&self) -> HashMap<K, V>
    where
        K: Hash + Eq + Clone,
        V: Clone,
    {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Moves all entries into a [`HashMap`], discarding the ordering.
    pub fn into_hash_map(self) -> HashMap<K, V>
    where
        K: Hash + Eq,
    {
        self.into_iter().collect()
    }
}

impl<K: Ord, V> BinaryTreeMap<K, V> {
    /// Inserts the provided `key`-`value` pair. If the key was already associated with a value, the
    /// value is replaced and the previous one returned, without changing the length.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.root.insert(key, value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Inserts every pair in order, so later duplicates overwrite earlier ones.
    pub fn insert_many<I: IntoIterator<Item = (K, V)>>(&mut self, pairs: I) {
        for (key, value) in pairs {
            self.insert(key, value);
        }
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.get_entry(key)
    }

    /// Returns a reference to the value associated with the provided `key` or None if the map
    /// contains no values for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_entry(key).map(|e| e.1)
    }

    /// Looks up `key`, returning a copy of its value and true, or `default` and false when there is
    /// no entry for it.
    pub fn get_or<Q>(&self, key: &Q, default: V) -> (V, bool)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        V: Clone,
    {
        match self.get(key) {
            Some(value) => (value.clone(), true),
            None => (default, false),
        }
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.get_mut(key)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_entry(key).is_some()
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    ///
    /// When the removed node has two children, the entry with the next largest key is moved up
    /// into its place, so no subtree is ever reattached elsewhere.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let entry = self.root.remove_entry(key)?;
        self.len -= 1;
        Some(entry)
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_entry(key).map(|e| e.1)
    }

    /// Removes every key provided, ignoring the ones that aren't present.
    pub fn remove_many<'q, Q, I>(&mut self, keys: I)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized + 'q,
        I: IntoIterator<Item = &'q Q>,
    {
        for key in keys {
            self.remove(key);
        }
    }

    /// Keeps only the entries for which `predicate` returns true.
    ///
    /// The tree can't be restructured while it is being walked, so the keys to drop are collected
    /// first and then removed one at a time.
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        K: Clone,
        F: FnMut(&K, &V) -> bool,
    {
        let rejected: Vec<K> = self
            .iter()
            .filter(|(k, v)| !predicate(*k, *v))
            .map(|(k, _)| k.clone())
            .collect();

        for key in &rejected {
            self.remove(key);
        }
    }
}

impl<K: Ord + Clone, V: Clone> BinaryTreeMap<K, V> {
    /// Returns a copy of this map with the provided pair inserted. `self` is left as is.
    pub fn updated(&self, key: K, value: V) -> BinaryTreeMap<K, V> {
        let mut map = self.clone();
        map.insert(key, value);
        map
    }

    /// Returns a copy of this map with every pair inserted in order. The map is only cloned once.
    pub fn updated_many<I: IntoIterator<Item = (K, V)>>(&self, pairs: I) -> BinaryTreeMap<K, V> {
        let mut map = self.clone();
        map.insert_many(pairs);
        map
    }

    /// Returns a copy of this map without the entry for `key`. `self` is left as is.
    pub fn without<Q>(&self, key: &Q) -> BinaryTreeMap<K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut map = self.clone();
        map.remove(key);
        map
    }

    /// Returns a copy of this map without any of the provided keys. The map is only cloned once.
    pub fn without_many<'q, Q, I>(&self, keys: I) -> BinaryTreeMap<K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized + 'q,
        I: IntoIterator<Item = &'q Q>,
    {
        let mut map = self.clone();
        map.remove_many(keys);
        map
    }

    /// Returns a copy of this map holding only the entries for which `predicate` returns true.
    /// The copy starts out shaped like `self`; inserting the kept entries in key order instead
    /// would turn it into a list.
    pub fn filter<F>(&self, predicate: F) -> BinaryTreeMap<K, V>
    where
        F: FnMut(&K, &V) -> bool,
    {
        let mut map = self.clone();
        map.retain(predicate);
        map
    }
}

impl<K, V> Drop for BinaryTreeMap<K, V> {
    fn drop(&mut self) {
        self.root.dismantle();
    }
}

impl<K: Clone, V: Clone> Clone for BinaryTreeMap<K, V> {
    fn clone(&self) -> Self {
        BinaryTreeMap {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<K, V> Default for BinaryTreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BinaryTreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = BinaryTreeMap::new();
        map.insert_many(iter);
        map
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for BinaryTreeMap<K, V> {
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

impl<K: Ord, V> Extend<(K, V)> for BinaryTreeMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.insert_many(iter);
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for BinaryTreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for BinaryTreeMap<K, V> {}

impl<K: Debug, V: Debug> Debug for BinaryTreeMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTreeMap")
            .field("nodes", &format_args!("\n{:?}\n", &self.root))
            .field("len", &self.len)
            .finish()
    }
}

impl<K: Debug, V: Debug> Display for BinaryTreeMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
