//! Delete domain: results of single and multi-object delete operations.

pub mod result;
pub mod results;

pub use result::{DeleteResult, DeleteResultBuilder};
pub use results::DeleteResults;
