//! Argument checks shared by every validating constructor.

use crate::error::ContractError;

/// Fail with `InvalidArgument` when `value` is empty.
pub fn check_not_empty(value: &str, message: impl FnOnce() -> String) -> Result<(), ContractError> {
    if value.is_empty() {
        return Err(ContractError::InvalidArgument(message()));
    }
    Ok(())
}

/// Unwrap a required argument or fail with `InvalidArgument`.
pub fn check_present<T>(value: Option<T>, message: &str) -> Result<T, ContractError> {
    value.ok_or_else(|| ContractError::InvalidArgument(message.to_string()))
}

/// Check that every name in `names` is non-empty.
///
/// The error message carries the whole set so the offending call site can be
/// diagnosed from logs alone.
pub fn check_names<'a, I>(names: I, label: &str, set_label: &str) -> Result<(), ContractError>
where
    I: IntoIterator<Item = &'a String> + Copy + std::fmt::Debug,
{
    for name in names {
        check_not_empty(name, || {
            format!("{} must not be empty, {} = {:?}", label, set_label, names)
        })?;
    }
    Ok(())
}
