//! Generation and dispatch error types.

use crom_core::CardinalityError;
use thiserror::Error;

/// Errors that can occur during generation. Each aborts generation for the
/// current model only; no partial text is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The model has no entities to render.
    #[error("The model is empty: nothing to generate")]
    EmptyModel,

    /// A role group references a role that is not declared in scope.
    #[error("Unresolved role reference '{role}' in compartment '{compartment}'")]
    UnresolvedReference { role: String, compartment: String },

    /// A cardinality violated its grammar or bound ordering.
    #[error("Malformed cardinality: {0}")]
    MalformedCardinality(#[from] CardinalityError),
}

impl GenerateError {
    pub fn unresolved(role: impl Into<String>, compartment: impl Into<String>) -> Self {
        Self::UnresolvedReference {
            role: role.into(),
            compartment: compartment.into(),
        }
    }
}

/// Result type for generation.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Errors that can occur during generator dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// No generator is registered for the requested extension.
    #[error("No generator for extension '{requested}'; known extensions: {}", .known.join(", "))]
    UnknownExtension {
        requested: String,
        known: Vec<&'static str>,
    },
}
