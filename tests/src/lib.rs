//! Integration test support for the CROM workspace.
//!
//! Reusable model fixtures live here; the scenario tests under `tests/`
//! build on them.

pub mod fixtures;

pub mod prelude {
    pub use crate::fixtures::*;
    pub use crom_core::{Cardinality, Element, RoleGroup};
    pub use crom_generator::{
        DispatchError, GenerateError, Generator, GeneratorSet,
    };
    pub use crom_model::{Model, ModelBuilder, RelationshipSide};
}
