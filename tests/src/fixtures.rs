//! Shared model fixtures.

use crom_core::{Cardinality, RoleGroup};
use crom_model::{Model, ModelBuilder, RelationshipSide};

/// One compartment `Marriage` with role types `Husband` and `Wife` and a
/// single `married` relationship, both sides `1..1`.
pub fn marriage_model() -> Model {
    let mut builder = ModelBuilder::new();
    builder
        .compartment("Marriage")
        .role_type("Husband")
        .role_type("Wife")
        .binary_relationship(
            "married",
            ("Husband", Cardinality::exactly(1)),
            ("Wife", Cardinality::exactly(1)),
        )
        .done()
        .expect("marriage fixture is well-formed");
    builder.build().expect("marriage fixture builds")
}

/// Natural types plus a compartment whose `advises` relationship uses a
/// nested role group (`1..2` of Clerk/Teller inside a `0..*` outer group).
pub fn banking_model() -> Model {
    let mut builder = ModelBuilder::new();
    builder.natural_type("Person").expect("fresh name");
    builder.natural_type("Company").expect("fresh name");
    let staff = RoleGroup::of_roles(
        Cardinality::new(1, Some(2)).expect("valid bounds"),
        ["Clerk", "Teller"],
    );
    builder
        .compartment("Bank")
        .role_type("Customer")
        .role_type_with_features("Clerk", ["serve"])
        .role_type("Teller")
        .relationship(
            "advises",
            vec![
                RelationshipSide::new(
                    RoleGroup::new(Cardinality::any(), vec![staff.into()]),
                    Cardinality::unbounded(1),
                ),
                RelationshipSide::new(
                    RoleGroup::of_roles(Cardinality::exactly(1), ["Customer"]),
                    Cardinality::any(),
                ),
            ],
        )
        .done()
        .expect("banking fixture is well-formed");
    builder.build().expect("banking fixture builds")
}

/// A model with no entities at all.
pub fn empty_model() -> Model {
    ModelBuilder::new().build().expect("empty model builds")
}

/// A model whose relationship references a role type never declared in the
/// compartment.
pub fn dangling_model() -> Model {
    let mut builder = ModelBuilder::new();
    builder
        .compartment("Marriage")
        .role_type("Husband")
        .binary_relationship(
            "married",
            ("Husband", Cardinality::exactly(1)),
            ("Stranger", Cardinality::exactly(1)),
        )
        .done()
        .expect("dangling fixture builds; the bad reference is caught at generation time");
    builder.build().expect("dangling fixture builds")
}
