use crate::mutation::UserError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with key {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Conflict: {entity} with key {key} already exists")]
    Conflict { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Convert a soft, user-facing error into a [`UserError`].
    ///
    /// Returns `None` for [`CoreError::Internal`], which must propagate as a
    /// hard failure instead of being reported in a mutation payload.
    pub fn to_user_error(&self) -> Option<UserError> {
        match self {
            CoreError::NotFound { entity, key } => {
                Some(UserError::new(format!("{entity} {key} does not exist")))
            }
            CoreError::Conflict { entity, key } => {
                Some(UserError::new(format!("{entity} {key} already exists")))
            }
            CoreError::Validation(msg) => Some(UserError::new(msg.clone())),
            CoreError::Internal(_) => None,
        }
    }
}
