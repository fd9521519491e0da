//! CROM Core Types
//!
//! This crate provides the foundational value types used throughout the CROM
//! tooling:
//! - Cardinality (lower/upper participation bounds with text round-trip)
//! - RoleGroup (recursively nestable, cardinality-constrained role grouping)
//! - Element (leaf role reference or nested group)
//! - Common error types

mod cardinality;
mod error;
mod role_group;

pub use cardinality::*;
pub use error::*;
pub use role_group::*;
