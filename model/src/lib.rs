//! CROM Model
//!
//! The in-memory CROM model graph consumed by the generators:
//! - NaturalType, RoleType, Compartment, RelationshipType definitions
//! - Model: immutable, declaration-ordered lookup over the definitions
//! - ModelBuilder: fluent construction with name and shape validation
//!
//! A model is fully constructed before any generator runs and is read-only
//! afterwards.

mod builder;
mod error;
mod types;

pub use builder::*;
pub use error::*;
pub use types::*;
