//! Delete Result: validated outcomes of bulk delete operations
//!
//! Models what a delete against a structured storage backend did: how many rows
//! went away, which tables were touched, and which notification tags observers
//! must be told about.

pub mod changes;
pub mod config;
pub mod contract;
pub mod delete;
pub mod error;
pub mod logging;

pub use changes::Changes;
pub use delete::{DeleteResult, DeleteResultBuilder, DeleteResults};
pub use error::{ApiError, ContractError};
