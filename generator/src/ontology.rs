//! Description-logic ontology dialect (`owl`), OWL 2 functional-style syntax.
//!
//! Structural facts emitted: every natural type, role type and compartment as
//! a class (under the `NaturalType`/`RoleType`/`CompartmentType` markers),
//! one object property per relationship, and the per-side cardinalities as
//! qualified min/max cardinality axioms. Nested role groups flatten to
//! `ObjectUnionOf` over their member role classes.

use crate::{generator::validate, GenerateResult, Generator};
use crom_core::RoleGroup;
use crom_model::{Model, RelationshipType};

/// Renders a model as an OWL ontology.
#[derive(Debug)]
pub struct OntologyGenerator;

impl Generator for OntologyGenerator {
    fn extension(&self) -> &'static str {
        "owl"
    }

    fn generate(&self, base_name: &str, model: &Model) -> GenerateResult<String> {
        validate(model)?;

        let mut out = String::new();
        out.push_str(&format!(
            "Prefix(:=<http://crom.formal/{}#>)\n",
            base_name
        ));
        out.push_str("Prefix(owl:=<http://www.w3.org/2002/07/owl#>)\n");
        out.push_str(&format!("Ontology(<http://crom.formal/{}>\n\n", base_name));

        out.push_str("Declaration(Class(:NaturalType))\n");
        out.push_str("Declaration(Class(:RoleType))\n");
        out.push_str("Declaration(Class(:CompartmentType))\n");

        if model.natural_count() > 0 {
            out.push('\n');
        }
        for natural in model.natural_types() {
            out.push_str(&format!("Declaration(Class(:{}))\n", natural.name));
            out.push_str(&format!("SubClassOf(:{} :NaturalType)\n", natural.name));
        }

        for compartment in model.compartments() {
            out.push_str(&format!("\n# compartment {}\n", compartment.name));
            out.push_str(&format!("Declaration(Class(:{}))\n", compartment.name));
            out.push_str(&format!(
                "SubClassOf(:{} :CompartmentType)\n",
                compartment.name
            ));
            for role in &compartment.role_types {
                out.push_str(&format!("Declaration(Class(:{}))\n", role.name));
                out.push_str(&format!("SubClassOf(:{} :RoleType)\n", role.name));
            }
            for rel in &compartment.relationships {
                emit_relationship(&mut out, rel);
            }
        }

        out.push_str(")\n");
        Ok(out)
    }
}

fn emit_relationship(out: &mut String, rel: &RelationshipType) {
    out.push_str(&format!("Declaration(ObjectProperty(:{}))\n", rel.name));

    let exprs: Vec<String> = rel.sides.iter().map(|s| class_expr(&s.group)).collect();
    let domain = &exprs[0];
    out.push_str(&format!("ObjectPropertyDomain(:{} {})\n", rel.name, domain));

    // One range/cardinality block per non-domain side; the domain side's own
    // cardinality constrains the inverse direction.
    for (side, expr) in rel.sides.iter().zip(&exprs).skip(1) {
        out.push_str(&format!("ObjectPropertyRange(:{} {})\n", rel.name, expr));
        let card = side.cardinality;
        if card.lower() > 0 {
            out.push_str(&format!(
                "SubClassOf({} ObjectMinCardinality({} :{} {}))\n",
                domain,
                card.lower(),
                rel.name,
                expr
            ));
        }
        if let Some(upper) = card.upper() {
            out.push_str(&format!(
                "SubClassOf({} ObjectMaxCardinality({} :{} {}))\n",
                domain, upper, rel.name, expr
            ));
        }
        let inverse = rel.sides[0].cardinality;
        if inverse.lower() > 0 {
            out.push_str(&format!(
                "SubClassOf({} ObjectMinCardinality({} ObjectInverseOf(:{}) {}))\n",
                expr,
                inverse.lower(),
                rel.name,
                domain
            ));
        }
        if let Some(upper) = inverse.upper() {
            out.push_str(&format!(
                "SubClassOf({} ObjectMaxCardinality({} ObjectInverseOf(:{}) {}))\n",
                expr, upper, rel.name, domain
            ));
        }
    }
}

/// The class expression for a side: a single role class, or a union over the
/// flattened roles of the group tree.
fn class_expr(group: &RoleGroup) -> String {
    let roles: Vec<&str> = group.roles().collect();
    match roles.as_slice() {
        [single] => format!(":{}", single),
        many => format!(
            "ObjectUnionOf({})",
            many.iter()
                .map(|r| format!(":{}", r))
                .collect::<Vec<_>>()
                .join(" ")
        ),
    }
}
