//! Property-based tests for construction and equality laws

use delete_result::DeleteResult;
use proptest::collection::{btree_set, vec};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

fn hash_of(result: &DeleteResult) -> u64 {
    let mut hasher = DefaultHasher::new();
    result.hash(&mut hasher);
    hasher.finish()
}

fn name() -> impl Strategy<Value = String> {
    "[a-z_]{1,12}"
}

/// Valid inputs always construct and read back unchanged
#[test]
fn test_valid_inputs_round_trip_through_accessors() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(any::<u64>(), btree_set(name(), 0..6), btree_set(name(), 0..6)),
            |(rows, tables, tags)| {
                let result = DeleteResult::new(rows, tables.clone(), tags.clone()).unwrap();
                prop_assert_eq!(result.rows_deleted(), rows);
                prop_assert_eq!(result.affected_tables(), &tables);
                prop_assert_eq!(result.affected_tags(), &tags);
                Ok(())
            },
        )
        .unwrap();
}

/// Any empty name in either set is rejected
#[test]
fn test_empty_names_always_rejected() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(vec(name(), 0..5), vec(name(), 0..5), any::<bool>()),
            |(mut tables, mut tags, poison_tables)| {
                if poison_tables {
                    tables.push(String::new());
                } else {
                    tags.push(String::new());
                }
                prop_assert!(DeleteResult::new(1, tables, tags).is_err());
                Ok(())
            },
        )
        .unwrap();
}

/// Input order and duplicates do not affect equality or hash
#[test]
fn test_equality_ignores_order_and_duplicates() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(any::<u64>(), vec(name(), 1..6), vec(name(), 0..6)),
            |(rows, tables, tags)| {
                let mut shuffled_tables = tables.clone();
                shuffled_tables.reverse();
                shuffled_tables.push(tables[0].clone());

                let a = DeleteResult::new(rows, tables.clone(), tags.clone()).unwrap();
                let b = DeleteResult::new(rows, shuffled_tables, tags.iter().rev().cloned().collect::<Vec<_>>())
                    .unwrap();
                prop_assert_eq!(&a, &b);
                prop_assert_eq!(hash_of(&a), hash_of(&b));

                let other = DeleteResult::new(rows.wrapping_add(1), tables, tags).unwrap();
                prop_assert_ne!(&a, &other);
                Ok(())
            },
        )
        .unwrap();
}

/// A different tag set makes results unequal
#[test]
fn test_tag_sets_distinguish_results() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(btree_set(name(), 1..4), btree_set(name(), 0..4), name()),
            |(tables, tags, extra)| {
                prop_assume!(!tags.contains(&extra));
                let mut more_tags: BTreeSet<String> = tags.clone();
                more_tags.insert(extra);

                let a = DeleteResult::new(1, tables.clone(), tags).unwrap();
                let b = DeleteResult::new(1, tables, more_tags).unwrap();
                prop_assert_ne!(a, b);
                Ok(())
            },
        )
        .unwrap();
}
