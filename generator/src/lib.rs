//! CROM Generators
//!
//! Transform a loaded CROM model into one of several formal textual
//! representations.
//!
//! Responsibilities:
//! - The `Generator` contract: extension tag plus a total, deterministic,
//!   I/O-free `generate` function
//! - Shared model validation (empty models, unresolved role references)
//! - Four concrete dialects: ontology (`owl`), mathematical CROM notation
//!   (`formal`), relational DDL fragment (`rsql`), role-oriented code
//!   skeleton (`scroll`)
//! - Extension-keyed dispatch via `GeneratorSet`

mod error;
mod formal;
mod generator;
mod ontology;
mod registry;
mod rsql;
mod scroll;

pub use error::{DispatchError, GenerateError, GenerateResult};
pub use formal::FormalCromGenerator;
pub use generator::Generator;
pub use ontology::OntologyGenerator;
pub use registry::GeneratorSet;
pub use rsql::RsqlGenerator;
pub use scroll::ScrollCodeGenerator;
