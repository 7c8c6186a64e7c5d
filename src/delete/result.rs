//! Immutable result of a delete operation.

use crate::changes::Changes;
use crate::contract::{check_names, check_present};
use crate::error::ContractError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, trace};

/// Outcome of a delete that already happened.
///
/// Holds the number of deleted rows, the tables the delete touched and the
/// notification tags that must be signaled. Both sets are owned copies of the
/// caller's input; every name in them is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DeleteResultRecord")]
pub struct DeleteResult {
    rows_deleted: u64,
    affected_tables: BTreeSet<String>,
    affected_tags: BTreeSet<String>,
}

impl DeleteResult {
    /// Create a result from a row count, affected tables and affected tags.
    pub fn new<T, G>(rows_deleted: u64, affected_tables: T, affected_tags: G) -> Result<Self, ContractError>
    where
        T: IntoIterator,
        T::Item: Into<String>,
        G: IntoIterator,
        G::Item: Into<String>,
    {
        Self::validated(
            rows_deleted,
            Some(collect_names(affected_tables)),
            Some(collect_names(affected_tags)),
        )
    }

    /// Create a result with no affected tags.
    pub fn with_tables<T>(rows_deleted: u64, affected_tables: T) -> Result<Self, ContractError>
    where
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self::validated(rows_deleted, Some(collect_names(affected_tables)), None)
    }

    /// Create a result for a delete against one table, optionally tagged.
    pub fn for_table_with_tag(
        rows_deleted: u64,
        affected_table: &str,
        affected_tag: Option<&str>,
    ) -> Result<Self, ContractError> {
        Self::validated(
            rows_deleted,
            Some(BTreeSet::from([affected_table.to_string()])),
            affected_tag.map(|tag| BTreeSet::from([tag.to_string()])),
        )
    }

    /// Create a result for a delete against one table.
    pub fn for_table(rows_deleted: u64, affected_table: &str) -> Result<Self, ContractError> {
        Self::for_table_with_tag(rows_deleted, affected_table, None)
    }

    /// Create a result from a backend that reports signed row counts.
    ///
    /// A negative count is rejected rather than clamped.
    pub fn from_signed_count<T, G>(
        rows_deleted: i64,
        affected_tables: T,
        affected_tags: G,
    ) -> Result<Self, ContractError>
    where
        T: IntoIterator,
        T::Item: Into<String>,
        G: IntoIterator,
        G::Item: Into<String>,
    {
        let rows_deleted = u64::try_from(rows_deleted).map_err(|_| {
            ContractError::InvalidArgument(format!(
                "number of rows deleted must not be negative, got {}",
                rows_deleted
            ))
        })?;
        Self::new(rows_deleted, affected_tables, affected_tags)
    }

    pub fn builder() -> DeleteResultBuilder {
        DeleteResultBuilder::default()
    }

    /// The single validating constructor every other form delegates to.
    fn validated(
        rows_deleted: u64,
        affected_tables: Option<BTreeSet<String>>,
        affected_tags: Option<BTreeSet<String>>,
    ) -> Result<Self, ContractError> {
        let outcome = Self::checked(rows_deleted, affected_tables, affected_tags);
        match &outcome {
            Ok(result) => trace!(
                rows_deleted,
                tables = result.affected_tables.len(),
                tags = result.affected_tags.len(),
                "Delete result recorded"
            ),
            Err(err) => debug!(rows_deleted, error = %err, "Rejected delete result"),
        }
        outcome
    }

    fn checked(
        rows_deleted: u64,
        affected_tables: Option<BTreeSet<String>>,
        affected_tags: Option<BTreeSet<String>>,
    ) -> Result<Self, ContractError> {
        let affected_tables = check_present(affected_tables, "affected tables must be specified")?;
        check_names(&affected_tables, "affected table", "affected tables")?;

        let affected_tags = affected_tags.unwrap_or_default();
        check_names(&affected_tags, "affected tag", "affected tags")?;

        Ok(DeleteResult {
            rows_deleted,
            affected_tables,
            affected_tags,
        })
    }

    /// Number of rows the delete removed.
    pub fn rows_deleted(&self) -> u64 {
        self.rows_deleted
    }

    /// Names of the tables the delete touched.
    pub fn affected_tables(&self) -> &BTreeSet<String> {
        &self.affected_tables
    }

    /// Notification tags the delete touched; empty when none were given.
    pub fn affected_tags(&self) -> &BTreeSet<String> {
        &self.affected_tags
    }

    pub fn has_deleted_rows(&self) -> bool {
        self.rows_deleted > 0
    }

    /// Changes observers must be notified about.
    ///
    /// `None` when nothing was deleted.
    pub fn changes(&self) -> Option<Changes> {
        self.has_deleted_rows().then(|| Changes::from(self))
    }
}

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DeleteResult {{ rows_deleted: {}, affected_tables: {:?}, affected_tags: {:?} }}",
            self.rows_deleted, self.affected_tables, self.affected_tags
        )
    }
}

/// Incremental construction where tables or tags may be left out.
///
/// Tags default to the empty set; tables must be given (possibly as an empty
/// set) or `build` fails.
#[derive(Debug, Clone, Default)]
pub struct DeleteResultBuilder {
    rows_deleted: u64,
    affected_tables: Option<BTreeSet<String>>,
    affected_tags: Option<BTreeSet<String>>,
}

impl DeleteResultBuilder {
    pub fn rows_deleted(mut self, rows_deleted: u64) -> Self {
        self.rows_deleted = rows_deleted;
        self
    }

    pub fn affected_table(self, table: impl Into<String>) -> Self {
        self.affected_tables([table])
    }

    pub fn affected_tables<T>(mut self, tables: T) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
    {
        self.affected_tables
            .get_or_insert_with(BTreeSet::new)
            .extend(tables.into_iter().map(Into::into));
        self
    }

    pub fn affected_tag(self, tag: impl Into<String>) -> Self {
        self.affected_tags([tag])
    }

    pub fn affected_tags<G>(mut self, tags: G) -> Self
    where
        G: IntoIterator,
        G::Item: Into<String>,
    {
        self.affected_tags
            .get_or_insert_with(BTreeSet::new)
            .extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Result<DeleteResult, ContractError> {
        DeleteResult::validated(self.rows_deleted, self.affected_tables, self.affected_tags)
    }
}

/// Serialized form; re-validated on the way in.
#[derive(Deserialize)]
struct DeleteResultRecord {
    rows_deleted: u64,
    #[serde(default)]
    affected_tables: Option<BTreeSet<String>>,
    #[serde(default)]
    affected_tags: Option<BTreeSet<String>>,
}

impl TryFrom<DeleteResultRecord> for DeleteResult {
    type Error = ContractError;

    fn try_from(record: DeleteResultRecord) -> Result<Self, Self::Error> {
        DeleteResult::validated(record.rows_deleted, record.affected_tables, record.affected_tags)
    }
}

fn collect_names<I>(names: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    names.into_iter().map(Into::into).collect()
}
