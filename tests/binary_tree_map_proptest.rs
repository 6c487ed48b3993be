//! Property-based tests for BinaryTreeMap, checked against std's BTreeMap as a model.

use std::collections::BTreeMap;

use proptest::prelude::*;
use tree_collections::collections::binary_tree::BinaryTreeMap;

#[derive(Clone, Debug)]
enum MapOp {
    Insert(u8, u16),
    Remove(u8),
    Clear,
}

fn arbitrary_op() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        6 => (any::<u8>(), any::<u16>()).prop_map(|(k, v)| MapOp::Insert(k, v)),
        3 => any::<u8>().prop_map(MapOp::Remove),
        1 => Just(MapOp::Clear),
    ]
}

fn apply(map: &mut BinaryTreeMap<u8, u16>, model: &mut BTreeMap<u8, u16>, op: &MapOp) {
    match *op {
        MapOp::Insert(k, v) => {
            assert_eq!(map.insert(k, v), model.insert(k, v), "insert({k}) should match the model");
        },
        MapOp::Remove(k) => {
            let expected_len = model.len() - usize::from(model.contains_key(&k));
            assert_eq!(map.remove(&k), model.remove(&k), "remove({k}) should match the model");
            assert!(!map.contains(&k));
            assert_eq!(map.len(), expected_len);
        },
        MapOp::Clear => {
            map.clear();
            model.clear();
        },
    }
}

proptest! {
    #[test]
    fn keys_are_strictly_ascending(
        pairs in prop::collection::vec((any::<i32>(), any::<i32>()), 0..200),
    ) {
        let map: BinaryTreeMap<_, _> = pairs.into_iter().collect();
        let keys: Vec<_> = map.keys().copied().collect();

        prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(keys.len(), map.len());
    }

    #[test]
    fn operations_match_model(ops in prop::collection::vec(arbitrary_op(), 0..300)) {
        let mut map = BinaryTreeMap::new();
        let mut model = BTreeMap::new();

        for op in &ops {
            apply(&mut map, &mut model, op);
        }

        prop_assert_eq!(map.len(), model.len());
        prop_assert!(map.iter().eq(model.iter()));
        for (k, v) in &model {
            prop_assert_eq!(map.get_or(k, u16::MAX), (*v, true));
        }
    }

    #[test]
    fn derived_maps_are_independent(
        pairs in prop::collection::vec((0u8..64, any::<u16>()), 1..100),
        key in 0u8..64,
        value in any::<u16>(),
    ) {
        let original: BinaryTreeMap<_, _> = pairs.into_iter().collect();
        let before = original.clone();

        let mut updated = original.updated(key, value);
        updated.insert(key.wrapping_add(1), value);
        updated.remove(&key);

        let mut without = original.without(&key);
        without.insert(key, value);

        let mut filtered = original.filter(|k, _| k % 2 == 0);
        filtered.clear();

        prop_assert_eq!(&original, &before);
    }

    #[test]
    fn retain_matches_filter(
        pairs in prop::collection::vec((any::<u8>(), any::<u16>()), 0..150),
    ) {
        let map: BinaryTreeMap<_, _> = pairs.into_iter().collect();

        let filtered = map.filter(|_, v| v % 3 == 0);
        let mut retained = map.clone();
        retained.retain(|_, v| v % 3 == 0);

        prop_assert_eq!(&filtered, &retained);
        prop_assert!(filtered.values().all(|v| v % 3 == 0));
        prop_assert_eq!(filtered.len(), map.values().filter(|v| *v % 3 == 0).count());
    }
}
