use super::*;

use proptest::prelude::*;
use std::collections::{BTreeMap, HashSet};

fn validate_table(t: &HashTable) {
    let mut reachable = 0usize;
    for bucket in 0..t.capacity() {
        let mut seen = HashSet::new();
        for entry in t.chain(bucket) {
            assert!(
                seen.insert(entry.key),
                "duplicate key {} in bucket {bucket}",
                entry.key
            );
            assert_eq!(
                t.bucket_index(entry.key),
                bucket,
                "key {} stored in the wrong bucket",
                entry.key
            );
            reachable += 1;
        }
    }
    assert_eq!(
        reachable, t.count,
        "reachable entry count must match HashTable::len"
    );
    assert_eq!(t.iter().count(), t.count);
}

#[derive(Clone, Debug)]
enum Op {
    Put(Key, String),
    Remove(Key),
    Get(Key),
    Clear,
}

fn key_strategy() -> impl Strategy<Value = Key> + Clone {
    // A narrow range forces overwrites, removals of present keys and long chains.
    prop_oneof![
        8 => -64..64i32,
        1 => any::<i32>(),
    ]
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let key = key_strategy();
    let op = prop_oneof![
        50 => (key.clone(), "[a-z]{0,8}").prop_map(|(k, v)| Op::Put(k, v)),
        25 => key.clone().prop_map(Op::Remove),
        24 => key.clone().prop_map(Op::Get),
        1 => Just(Op::Clear),
    ];
    prop::collection::vec(op, 0..=1000)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 50_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(capacity in 1usize..=17, ops in ops_strategy()) {
        let mut t = HashTable::new(capacity).unwrap();
        let mut m: BTreeMap<Key, String> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Put(key, value) => {
                    let old_t = t.put(key, value.clone());
                    let old_m = m.insert(key, value);
                    prop_assert_eq!(old_t, old_m);
                }
                Op::Remove(key) => {
                    let old_t = t.remove(key);
                    let old_m = m.remove(&key);
                    prop_assert_eq!(old_t, old_m);
                    prop_assert!(!t.contains(key));
                }
                Op::Get(key) => {
                    prop_assert_eq!(t.get(key), m.get(&key).map(String::as_str));
                    prop_assert_eq!(t.contains(key), m.contains_key(&key));
                }
                Op::Clear => {
                    t.clear();
                    m.clear();
                }
            }

            prop_assert_eq!(t.len(), m.len());
        }

        validate_table(&t);
        let expected: Vec<Key> = m.keys().copied().collect();
        prop_assert_eq!(t.sorted_keys(), expected);
    }

    #[test]
    fn prop_ordering_queries(
        capacity in 1usize..=31,
        keys in prop::collection::btree_set(key_strategy(), 0..=100),
    ) {
        let mut t = HashTable::new(capacity).unwrap();
        for &key in &keys {
            t.put(key, key.to_string());
        }

        let sorted = t.sorted_keys();
        let expected: Vec<Key> = keys.iter().copied().collect();
        prop_assert_eq!(&sorted, &expected);
        prop_assert!(sorted.windows(2).all(|w| w[0] < w[1]));

        for (i, &key) in sorted.iter().enumerate() {
            prop_assert_eq!(t.next_key(key), sorted.get(i + 1).copied());
            prop_assert_eq!(t.prev_key(key), i.checked_sub(1).map(|p| sorted[p]));
        }

        for (i, &a) in sorted.iter().enumerate().step_by(7) {
            for (j, &b) in sorted.iter().enumerate().step_by(5) {
                let between = i.abs_diff(j).saturating_sub(1);
                prop_assert_eq!(t.range_count(a, b), Some(between));
                prop_assert_eq!(t.range_count(a, b), t.range_count(b, a));
            }
        }
    }

    #[test]
    fn prop_absent_keys_have_no_neighbors(
        keys in prop::collection::btree_set(-100..100i32, 0..=50),
        probe in -100..100i32,
    ) {
        let mut t = HashTable::new(8).unwrap();
        for &key in &keys {
            t.put(key, "");
        }
        if !keys.contains(&probe) {
            prop_assert_eq!(t.next_key(probe), None);
            prop_assert_eq!(t.prev_key(probe), None);
            if let Some(&present) = keys.iter().next() {
                prop_assert_eq!(t.range_count(probe, present), None);
                prop_assert_eq!(t.range_count(present, probe), None);
            }
        }
    }
}

fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
    fn rec<T: Clone>(items: &[T], used: &mut [bool], out: &mut Vec<T>, f: &mut impl FnMut(Vec<T>)) {
        if out.len() == items.len() {
            f(out.clone());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            out.push(items[i].clone());
            rec(items, used, out, f);
            out.pop();
            used[i] = false;
        }
    }

    let mut used = vec![false; items.len()];
    let mut out = Vec::with_capacity(items.len());
    rec(items, &mut used, &mut out, &mut f);
}

// Keys 1, 5, 9, 13 collide in a table of 4 buckets; 2 and -2 land elsewhere.
const SMALL_SET: [Key; 6] = [1, 5, 9, 13, 2, -2];

#[test]
fn exhaustive_insert_order_small_set() {
    for_each_permutation(&SMALL_SET, |perm| {
        let mut t = HashTable::new(4).unwrap();
        for &k in &perm {
            assert_eq!(t.put(k, k.to_string()), None);
        }

        validate_table(&t);
        // Chains keep insertion order.
        let chain: Vec<Key> = t.chain(1).map(|entry| entry.key).collect();
        let expected_chain: Vec<Key> = perm.iter().copied().filter(|k| k % 4 == 1).collect();
        assert_eq!(chain, expected_chain);
        assert_eq!(t.sorted_keys(), vec![-2, 1, 2, 5, 9, 13]);
    });
}

#[test]
fn exhaustive_remove_order_small_set() {
    // Insert in a fixed order, then remove in all permutations.
    let mut base = HashTable::new(4).unwrap();
    for &k in &SMALL_SET {
        base.put(k, format!("v{k}"));
    }

    for_each_permutation(&SMALL_SET, |perm| {
        let mut t = base.clone();

        for k in perm {
            assert_eq!(t.remove(k), Some(format!("v{k}")));
            assert!(!t.contains(k));
            validate_table(&t);
        }
        assert_eq!(t.len(), 0);
        assert!(t.buckets.iter().all(Option::is_none));
    });
}
