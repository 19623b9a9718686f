//! The outcome envelope every mutation returns.
//!
//! Expected, domain-level failures are data: they travel in
//! [`MutationOutcome::user_errors`] next to an absent entity. Callers check
//! the list before trusting the entity.

use serde::Serialize;

use crate::error::CoreError;

/// A user-facing error attached to a mutation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserError {
    pub message: String,
    /// Path to the input field which caused the error, when a single field
    /// is to blame.
    pub field: Option<Vec<String>>,
}

impl UserError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }
}

/// `(user_errors, entity)` pair returned by mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MutationOutcome<T> {
    pub user_errors: Vec<UserError>,
    pub entity: Option<T>,
}

impl<T> MutationOutcome<T> {
    /// A successful mutation that produced `entity`.
    pub fn ok(entity: T) -> Self {
        Self {
            user_errors: Vec::new(),
            entity: Some(entity),
        }
    }

    /// A successful mutation with nothing to return (e.g. a delete).
    pub fn empty() -> Self {
        Self {
            user_errors: Vec::new(),
            entity: None,
        }
    }

    /// A mutation that was refused; no entity is returned.
    pub fn rejected(user_errors: Vec<UserError>) -> Self {
        Self {
            user_errors,
            entity: None,
        }
    }

    /// Fold a fallible write into an outcome.
    ///
    /// Soft errors become user errors; [`CoreError::Internal`] is handed
    /// back so the caller can propagate it as a hard failure.
    pub fn from_result(result: Result<T, CoreError>) -> Result<Self, CoreError> {
        match result {
            Ok(entity) => Ok(Self::ok(entity)),
            Err(err) => match err.to_user_error() {
                Some(user_error) => Ok(Self::rejected(vec![user_error])),
                None => Err(err),
            },
        }
    }
}
