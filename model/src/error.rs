//! Model construction error types.

use thiserror::Error;

/// Errors that can occur during model construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Duplicate natural type name: {0}")]
    DuplicateNaturalType(String),

    #[error("Duplicate compartment name: {0}")]
    DuplicateCompartment(String),

    #[error("Duplicate role type '{role}' in compartment '{compartment}'")]
    DuplicateRoleType { compartment: String, role: String },

    #[error("Duplicate relationship type '{relationship}' in compartment '{compartment}'")]
    DuplicateRelationship {
        compartment: String,
        relationship: String,
    },

    #[error("Relationship type '{0}' declares no participating sides")]
    NoSides(String),
}

/// Result type for model construction.
pub type ModelResult<T> = Result<T, ModelError>;
