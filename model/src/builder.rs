//! ModelBuilder for constructing an immutable Model.

use crate::{
    Compartment, Model, ModelError, ModelResult, NaturalType, RelationshipSide, RelationshipType,
    RoleType,
};
use crom_core::{Cardinality, RoleGroup};
use std::collections::{HashMap, HashSet};

/// Builder for constructing an immutable Model.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    /// Natural types being built, in declaration order.
    naturals: Vec<NaturalType>,
    /// Natural name to index mapping.
    natural_names: HashMap<String, usize>,

    /// Compartments being built, in declaration order.
    compartments: Vec<Compartment>,
    /// Compartment name to index mapping.
    compartment_names: HashMap<String, usize>,
}

impl ModelBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a natural type.
    pub fn natural_type(&mut self, name: impl Into<String>) -> ModelResult<&mut Self> {
        let name = name.into();
        if self.natural_names.contains_key(&name) {
            return Err(ModelError::DuplicateNaturalType(name));
        }
        self.natural_names.insert(name.clone(), self.naturals.len());
        self.naturals.push(NaturalType::new(name));
        Ok(self)
    }

    /// Start a compartment definition.
    pub fn compartment(&mut self, name: impl Into<String>) -> CompartmentBuilder<'_> {
        CompartmentBuilder {
            builder: self,
            name: name.into(),
            role_types: Vec::new(),
            relationships: Vec::new(),
        }
    }

    /// Build the immutable Model.
    pub fn build(self) -> ModelResult<Model> {
        Ok(Model::new(
            self.naturals,
            self.natural_names,
            self.compartments,
            self.compartment_names,
        ))
    }
}

/// Builder for a compartment definition.
pub struct CompartmentBuilder<'a> {
    builder: &'a mut ModelBuilder,
    name: String,
    role_types: Vec<RoleType>,
    relationships: Vec<RelationshipType>,
}

impl<'a> CompartmentBuilder<'a> {
    /// Declare a role type in this compartment.
    pub fn role_type(mut self, name: impl Into<String>) -> Self {
        self.role_types.push(RoleType::new(name));
        self
    }

    /// Declare a role type with behavioral features.
    pub fn role_type_with_features<I, S>(mut self, name: impl Into<String>, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.role_types.push(RoleType::with_features(name, features));
        self
    }

    /// Declare a relationship type with its participating sides.
    pub fn relationship(
        mut self,
        name: impl Into<String>,
        sides: Vec<RelationshipSide>,
    ) -> Self {
        self.relationships.push(RelationshipType {
            name: name.into(),
            sides,
        });
        self
    }

    /// Declare a two-sided relationship of single-role sides, by convenience.
    pub fn binary_relationship(
        self,
        name: impl Into<String>,
        left: (&str, Cardinality),
        right: (&str, Cardinality),
    ) -> Self {
        let side = |(role, card): (&str, Cardinality)| {
            RelationshipSide::new(RoleGroup::of_roles(Cardinality::exactly(1), [role]), card)
        };
        self.relationship(name, vec![side(left), side(right)])
    }

    /// Finish building this compartment.
    pub fn done(self) -> ModelResult<()> {
        if self.builder.compartment_names.contains_key(&self.name) {
            return Err(ModelError::DuplicateCompartment(self.name));
        }

        let mut seen_roles = HashSet::new();
        for role in &self.role_types {
            if !seen_roles.insert(role.name.as_str()) {
                return Err(ModelError::DuplicateRoleType {
                    compartment: self.name.clone(),
                    role: role.name.clone(),
                });
            }
        }

        let mut seen_rels = HashSet::new();
        for rel in &self.relationships {
            if rel.sides.is_empty() {
                return Err(ModelError::NoSides(rel.name.clone()));
            }
            if !seen_rels.insert(rel.name.as_str()) {
                return Err(ModelError::DuplicateRelationship {
                    compartment: self.name.clone(),
                    relationship: rel.name.clone(),
                });
            }
        }

        let compartment = Compartment {
            name: self.name.clone(),
            role_types: self.role_types,
            relationships: self.relationships,
        };

        self.builder
            .compartment_names
            .insert(self.name, self.builder.compartments.len());
        self.builder.compartments.push(compartment);

        Ok(())
    }
}
