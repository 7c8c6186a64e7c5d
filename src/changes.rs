//! Change notification payload
//!
//! A `Changes` value names the tables and tags a write touched. It is what the
//! notification side consumes to decide which observers to wake up; several
//! results can be coalesced into one payload with [`Changes::union`].

use crate::contract::check_names;
use crate::delete::DeleteResult;
use crate::error::ContractError;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Changes {
    affected_tables: BTreeSet<String>,
    affected_tags: BTreeSet<String>,
}

impl Changes {
    pub fn new<T, G>(affected_tables: T, affected_tags: G) -> Result<Self, ContractError>
    where
        T: IntoIterator,
        T::Item: Into<String>,
        G: IntoIterator,
        G::Item: Into<String>,
    {
        let affected_tables: BTreeSet<String> = affected_tables.into_iter().map(Into::into).collect();
        check_names(&affected_tables, "affected table", "affected tables")?;
        let affected_tags: BTreeSet<String> = affected_tags.into_iter().map(Into::into).collect();
        check_names(&affected_tags, "affected tag", "affected tags")?;

        Ok(Changes {
            affected_tables,
            affected_tags,
        })
    }

    pub fn affected_tables(&self) -> &BTreeSet<String> {
        &self.affected_tables
    }

    pub fn affected_tags(&self) -> &BTreeSet<String> {
        &self.affected_tags
    }

    pub fn affects_table(&self, table: &str) -> bool {
        self.affected_tables.contains(table)
    }

    pub fn affects_tag(&self, tag: &str) -> bool {
        self.affected_tags.contains(tag)
    }

    pub fn is_empty(&self) -> bool {
        self.affected_tables.is_empty() && self.affected_tags.is_empty()
    }

    /// Merge two payloads, dropping duplicate names.
    pub fn union(&self, other: &Changes) -> Changes {
        Changes {
            affected_tables: self.affected_tables.union(&other.affected_tables).cloned().collect(),
            affected_tags: self.affected_tags.union(&other.affected_tags).cloned().collect(),
        }
    }
}

impl From<&DeleteResult> for Changes {
    fn from(result: &DeleteResult) -> Self {
        // Names were already checked when the result was built.
        Changes {
            affected_tables: result.affected_tables().clone(),
            affected_tags: result.affected_tags().clone(),
        }
    }
}
