//! The generator contract and the validation pass shared by all dialects.

use crate::{GenerateError, GenerateResult};
use crom_model::Model;

/// A dialect-specific model-to-text transformation.
///
/// Implementations are stateless and reusable across calls. `generate` is
/// total and deterministic for a well-formed model: same model, same text,
/// byte for byte. It performs no file or console I/O; writing the result to
/// `<base_name>.<extension>` is the caller's job.
pub trait Generator: std::fmt::Debug {
    /// The stable extension tag used for dispatch (e.g. `owl`).
    fn extension(&self) -> &'static str;

    /// Render the model as one text artifact.
    fn generate(&self, base_name: &str, model: &Model) -> GenerateResult<String>;
}

/// Validate a model before emission.
///
/// Every dialect runs this first so that generation is all-or-nothing:
/// a model that fails here produces no text in any dialect.
pub(crate) fn validate(model: &Model) -> GenerateResult<()> {
    if model.is_empty() {
        return Err(GenerateError::EmptyModel);
    }
    for compartment in model.compartments() {
        for relationship in &compartment.relationships {
            for side in &relationship.sides {
                for role in side.group.roles() {
                    if !compartment.declares_role(role) {
                        return Err(GenerateError::unresolved(role, &compartment.name));
                    }
                }
            }
        }
    }
    Ok(())
}
