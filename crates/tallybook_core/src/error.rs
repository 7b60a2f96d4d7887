//! Error type shared by stores, forms and routing.

use thiserror::Error;

use crate::form::ValidationErrors;
use crate::models::EntityKind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: String },

    #[error("{kind} {id} already exists")]
    DuplicateId { kind: EntityKind, id: String },

    #[error("invalid id: {0}")]
    InvalidId(String),

    #[error("{0}")]
    Validation(ValidationErrors),

    #[error("{0}")]
    Submit(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
