//! Model definition types.

use crom_core::{Cardinality, RoleGroup};
use std::collections::HashMap;

/// A domain type that exists independent of any relationship context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaturalType {
    /// Type name.
    pub name: String,
}

impl NaturalType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A type that only exists while a player fills it inside a relationship
/// context. Owned by the compartment that gives it meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleType {
    /// Role name.
    pub name: String,
    /// Behavioral feature names, rendered as stubs by the code generator.
    pub features: Vec<String>,
}

impl RoleType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            features: Vec::new(),
        }
    }

    pub fn with_features<I, S>(name: impl Into<String>, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            features: features.into_iter().map(Into::into).collect(),
        }
    }
}

/// One participating side of a relationship type: which roles fill it
/// (possibly a nested grouping) and how many players it admits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipSide {
    /// The roles participating on this side.
    pub group: RoleGroup,
    /// How many players of this side may/must fill the relationship at once.
    pub cardinality: Cardinality,
}

impl RelationshipSide {
    pub fn new(group: RoleGroup, cardinality: Cardinality) -> Self {
        Self { group, cardinality }
    }
}

/// A relationship type connecting one or more role-group sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipType {
    /// Relationship name.
    pub name: String,
    /// Participating sides, in declaration order. Never empty.
    pub sides: Vec<RelationshipSide>,
}

impl RelationshipType {
    /// Get the arity (number of participating sides).
    pub fn arity(&self) -> usize {
        self.sides.len()
    }
}

/// A bounded context scoping role types and the relationship types that
/// use them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compartment {
    /// Compartment name.
    pub name: String,
    /// Role types declared in this compartment, in declaration order.
    pub role_types: Vec<RoleType>,
    /// Relationship types declared in this compartment, in declaration order.
    pub relationships: Vec<RelationshipType>,
}

impl Compartment {
    /// Whether a role of the given name is declared in this compartment.
    pub fn declares_role(&self, name: &str) -> bool {
        self.role_types.iter().any(|r| r.name == name)
    }

    /// Get a role type declared in this compartment, by name.
    pub fn role_type(&self, name: &str) -> Option<&RoleType> {
        self.role_types.iter().find(|r| r.name == name)
    }
}

/// The complete CROM model: natural types and compartments.
///
/// Immutable after construction (use `ModelBuilder`). Entities keep their
/// declaration order so that generation from an unchanged model is
/// byte-identical; name indexes exist only for lookup.
#[derive(Debug)]
pub struct Model {
    /// Natural types, in declaration order.
    naturals: Vec<NaturalType>,
    /// Natural type index by name.
    natural_names: HashMap<String, usize>,

    /// Compartments, in declaration order.
    compartments: Vec<Compartment>,
    /// Compartment index by name.
    compartment_names: HashMap<String, usize>,
}

impl Model {
    pub(crate) fn new(
        naturals: Vec<NaturalType>,
        natural_names: HashMap<String, usize>,
        compartments: Vec<Compartment>,
        compartment_names: HashMap<String, usize>,
    ) -> Self {
        Self {
            naturals,
            natural_names,
            compartments,
            compartment_names,
        }
    }

    /// Whether the model has no entities at all.
    pub fn is_empty(&self) -> bool {
        self.naturals.is_empty() && self.compartments.is_empty()
    }

    /// Natural types, in declaration order.
    pub fn natural_types(&self) -> impl Iterator<Item = &NaturalType> {
        self.naturals.iter()
    }

    /// Get a natural type by name.
    pub fn natural_type(&self, name: &str) -> Option<&NaturalType> {
        self.natural_names.get(name).map(|&i| &self.naturals[i])
    }

    /// Compartments, in declaration order.
    pub fn compartments(&self) -> impl Iterator<Item = &Compartment> {
        self.compartments.iter()
    }

    /// Get a compartment by name.
    pub fn compartment(&self, name: &str) -> Option<&Compartment> {
        self.compartment_names
            .get(name)
            .map(|&i| &self.compartments[i])
    }

    /// Get the number of natural types.
    pub fn natural_count(&self) -> usize {
        self.naturals.len()
    }

    /// Get the number of compartments.
    pub fn compartment_count(&self) -> usize {
        self.compartments.len()
    }
}
