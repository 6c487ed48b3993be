#![cfg(test)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use super::*;
use crate::collections::binary_tree::BinaryTreeMap;

#[test]
fn test_forwarding() {
    let map = RwLockTreeMap::from_iter([("charlie", 3), ("alice", 1), ("bob", 2)]);

    assert_eq!(map.keys(), ["alice", "bob", "charlie"]);
    assert_eq!(map.values(), [1, 2, 3]);
    assert_eq!(map.items(), [("alice", 1), ("bob", 2), ("charlie", 3)]);
    assert_eq!(map.get("bob"), Some(2));
    assert_eq!(map.get_or("dave", -1), (-1, false));
    assert!(map.contains("alice"));
    assert!(map.contains_value(&3));

    assert_eq!(map.insert("dave", 4), None);
    assert_eq!(map.insert("dave", 40), Some(4));
    assert_eq!(map.len(), 4);

    assert_eq!(map.remove("alice"), Some(1));
    assert_eq!(map.remove("alice"), None);
    assert_eq!(map.find_value(|v| *v > 2), Some(("charlie", 3)));
    assert_eq!(map.find_key(|k| k.starts_with('d')), Some(("dave", 40)));
    assert_eq!(map.find(|_, v| *v == 2), Some(("bob", 2)));

    let mut sum = 0;
    map.for_each(|_, v| sum += v);
    assert_eq!(sum, 45);

    map.retain(|_, v| *v < 10);
    assert_eq!(map.keys(), ["bob", "charlie"]);

    map.insert_many([("x", 1), ("y", 2)]);
    map.remove_many(["bob", "x"]);
    assert_eq!(map.keys(), ["charlie", "y"]);

    map.clear();
    assert!(map.is_empty());
}

#[test]
fn test_partial_copies() {
    let map = MutexTreeMap::from_iter([(2, AtomicUsize::new(20)), (1, AtomicUsize::new(10))]);
    assert_eq!(map.keys(), [1, 2], "Keys should be available without cloning the values.");

    map.for_each_value(|v| {
        v.fetch_add(1, Ordering::Relaxed);
    });
    assert_eq!(map.read(|m| m.get(&2).map(|v| v.load(Ordering::Relaxed))), Some(21));

    #[derive(PartialEq, Eq, PartialOrd, Ord)]
    struct Id(u8);

    let map = RwLockTreeMap::from_iter([(Id(2), 'b'), (Id(1), 'a')]);
    assert_eq!(map.values(), ['a', 'b'], "Values should be available without cloning the keys.");
}

#[test]
fn test_value_semantics_leave_the_wrapped_map() {
    let map = MutexTreeMap::from(BinaryTreeMap::from([(1, "one"), (2, "two"), (3, "three")]));

    let removed = map.without(&2);
    assert_eq!(removed.keys().copied().collect::<Vec<_>>(), [1, 3]);

    let mut updated = map.updated(4, "four");
    updated.insert(1, "uno");
    assert_eq!(updated.len(), 4);

    let filtered = map.filter(|k, _| k % 2 == 1);
    assert_eq!(filtered.len(), 2);

    assert_eq!(map.updated_many([(0, "zero")]).len(), 4);
    assert_eq!(map.without_many(&[1, 2]).len(), 1);
    assert_eq!(
        map.snapshot(),
        BinaryTreeMap::from([(1, "one"), (2, "two"), (3, "three")]),
        "Methods returning a new map shouldn't change the wrapped one."
    );
}

#[test]
fn test_try_access() {
    let map = RwLockTreeMap::from_iter([(1, 'a')]);

    map.read(|inner| {
        assert_eq!(
            map.try_read(|m| m.len()),
            Ok(1),
            "Shared access should be possible alongside another reader."
        );
        assert_eq!(
            map.try_write(|m| m.clear()),
            Err(LockContended),
            "Exclusive access should be refused while a reader holds the lock."
        );
        assert_eq!(inner.get(&1), Some(&'a'));
    });

    let map = MutexTreeMap::from_iter([(1, 'a')]);
    map.write(|_| {
        assert_eq!(map.try_read(|m| m.len()), Err(LockContended));
        assert_eq!(format!("{map:?}"), "SyncTreeMap { map: <locked> }");
    });
    assert_eq!(map.try_write(|m| m.insert(2, 'b')), Ok(None));
    assert_eq!(format!("{map:?}"), "SyncTreeMap { map: {1: 'a', 2: 'b'} }");
    assert_eq!(
        LockContended.to_string(),
        "Lock is held elsewhere, unable to access the map without blocking!"
    );
}

#[test]
fn test_concurrent_writers() {
    let map = MutexTreeMap::new();

    thread::scope(|s| {
        for t in 0..4 {
            let map = &map;
            s.spawn(move || {
                for i in 0..250 {
                    map.insert(t * 250 + i, t);
                }
            });
        }
    });

    assert_eq!(map.len(), 1000, "No insertion should be lost between threads.");
    assert!(map.keys().is_sorted());
    assert_eq!(map.get(&999), Some(3));
}

#[test]
fn test_concurrent_readers_and_writers() {
    let map = RwLockTreeMap::from_iter((0..100).map(|i| (i, i)));

    thread::scope(|s| {
        s.spawn(|| {
            for i in 0..100 {
                map.write(|m| {
                    m.remove(&i);
                    m.insert(i + 100, i);
                });
            }
        });

        for _ in 0..3 {
            s.spawn(|| {
                for _ in 0..100 {
                    // Every call sees the map either before or after a whole write.
                    assert_eq!(map.len(), 100);
                    assert_eq!(map.keys().len(), 100);
                }
            });
        }
    });

    let mut map = map;
    assert_eq!(map.get_mut().first_entry(), Some((&100, &0)));
    assert_eq!(map.into_inner().len(), 100);
}
