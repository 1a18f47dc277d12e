//! Property-based tests for BoundedOrdSet.

use std::collections::BTreeSet;

use bounded_ord_set::{BoundedOrdSet, CapacityPolicy, OrdSetError};
use proptest::prelude::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Values drawn from a small range so duplicates are common.
fn small_values(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-20i32 .. 20, 0 .. max_len)
}

fn distinct_count(values: &[i32]) -> usize {
    values.iter().collect::<BTreeSet<_>>().len()
}

proptest! {
    #[test]
    fn prop_storage_is_strictly_increasing(values in small_values(30)) {
        init_logger();
        let mut set = BoundedOrdSet::new(0);
        for x in &values {
            let _ = set.insert(*x);
            let slice = set.as_slice();
            prop_assert!(slice.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn prop_bounds_hold(values in small_values(30)) {
        let mut set = BoundedOrdSet::new(0);
        for x in &values {
            let _ = set.insert(*x);
            prop_assert!(set.len() <= 9);
            prop_assert!(set.len() <= set.capacity());
            prop_assert!(set.resize_count() <= 2);
            prop_assert_eq!(set.capacity() % 3, 0);
        }
    }

    #[test]
    fn prop_insert_twice_keeps_length(values in small_values(8), x in -20i32 .. 20) {
        let mut set = BoundedOrdSet::from_values(&values).unwrap();
        if set.insert(x).is_ok() {
            let len = set.len();
            prop_assert_eq!(set.insert(x), Ok(false));
            prop_assert_eq!(set.len(), len);
        }
    }

    #[test]
    fn prop_remove_undoes_insert(values in small_values(8), x in -20i32 .. 20) {
        let before = BoundedOrdSet::from_values(&values).unwrap();
        prop_assume!(!before.contains(x));
        let mut set = before.clone();
        if set.insert(x).is_ok() {
            prop_assert_eq!(set.remove(x), Ok(true));
            prop_assert_eq!(set, before);
        }
    }

    #[test]
    fn prop_from_values_matches_distinct_sorted(values in small_values(20)) {
        let expected: Vec<i32> = values.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect();
        match BoundedOrdSet::from_values(&values) {
            Ok(set) => prop_assert_eq!(set.collect(), expected),
            Err(err) => {
                prop_assert_eq!(err, OrdSetError::Overflow);
                prop_assert!(expected.len() > 9);
            }
        }
    }

    #[test]
    fn prop_round_to_capacity_is_idempotent(n in 0usize .. 1000) {
        let policy = CapacityPolicy::default();
        let once = policy.round_to_capacity(n);
        prop_assert_eq!(policy.round_to_capacity(once), once);
    }

    #[test]
    fn prop_union_is_distinct_union(a in small_values(9), b in small_values(9)) {
        prop_assume!(distinct_count(&a) <= 9 && distinct_count(&b) <= 9);
        let mut all = a.clone();
        all.extend_from_slice(&b);
        prop_assume!(distinct_count(&all) <= 9);

        let set_a = BoundedOrdSet::from_values(&a).unwrap();
        let set_b = BoundedOrdSet::from_values(&b).unwrap();
        let merged = set_a.union(&set_b).unwrap();

        let expected: Vec<i32> = all.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect();
        prop_assert_eq!(merged.collect(), expected);
        prop_assert!(merged.contains_subset(&set_a));
        prop_assert!(merged.contains_subset(&set_b));
    }

    #[test]
    fn prop_union_partial_is_prefix(a in small_values(9), b in small_values(9)) {
        prop_assume!(distinct_count(&a) <= 9 && distinct_count(&b) <= 9);
        let set_a = BoundedOrdSet::from_values(&a).unwrap();
        let set_b = BoundedOrdSet::from_values(&b).unwrap();

        let mut all = a.clone();
        all.extend_from_slice(&b);
        let expected: Vec<i32> = all.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect();

        match set_a.union(&set_b) {
            Ok(merged) => prop_assert_eq!(merged.collect(), expected),
            Err(partial_union) => {
                let partial = partial_union.into_partial();
                prop_assert!(expected.len() > 9);
                prop_assert_eq!(partial.len(), 9);
                prop_assert!(partial.is_overflow());
                prop_assert_eq!(partial.as_slice(), &expected[.. 9]);
            }
        }
    }
}
