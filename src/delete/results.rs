//! Results of deleting several keyed objects in one operation.

use super::result::DeleteResult;
use crate::changes::Changes;
use std::collections::{BTreeMap, BTreeSet};

/// Per-object delete results, keyed by whatever identifies the deleted object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeleteResults<K: Ord> {
    results: BTreeMap<K, DeleteResult>,
}

impl<K: Ord> DeleteResults<K> {
    pub fn new<I>(results: I) -> Self
    where
        I: IntoIterator<Item = (K, DeleteResult)>,
    {
        DeleteResults {
            results: results.into_iter().collect(),
        }
    }

    pub fn results(&self) -> &BTreeMap<K, DeleteResult> {
        &self.results
    }

    pub fn get(&self, key: &K) -> Option<&DeleteResult> {
        self.results.get(key)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// True when the object has a result and at least one row went away.
    pub fn was_deleted(&self, key: &K) -> bool {
        self.results
            .get(key)
            .map(DeleteResult::has_deleted_rows)
            .unwrap_or(false)
    }

    pub fn was_not_deleted(&self, key: &K) -> bool {
        !self.was_deleted(key)
    }

    pub fn total_rows_deleted(&self) -> u64 {
        self.results
            .values()
            .fold(0u64, |total, result| total.saturating_add(result.rows_deleted()))
    }

    pub fn affected_tables(&self) -> BTreeSet<String> {
        self.results
            .values()
            .flat_map(|result| result.affected_tables().iter().cloned())
            .collect()
    }

    pub fn affected_tags(&self) -> BTreeSet<String> {
        self.results
            .values()
            .flat_map(|result| result.affected_tags().iter().cloned())
            .collect()
    }

    /// One merged notification payload for every object that lost rows.
    pub fn changes(&self) -> Option<Changes> {
        self.results
            .values()
            .filter_map(DeleteResult::changes)
            .reduce(|merged, next| merged.union(&next))
    }
}
