//! Common error types for CROM core values.

use thiserror::Error;

/// Errors that can occur when constructing or parsing a cardinality.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardinalityError {
    /// The string does not match the `<lower>..<upper|*>` grammar.
    #[error("Malformed cardinality '{0}': expected '<lower>..<upper>' or '<lower>..*'")]
    Malformed(String),

    /// Bounds parsed but are inverted.
    #[error("Invalid cardinality bounds: lower {lower} exceeds upper {upper}")]
    InvalidBounds { lower: u32, upper: u32 },
}

/// Result type for cardinality construction.
pub type CardinalityResult<T> = Result<T, CardinalityError>;
