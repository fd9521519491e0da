//! Relational/graph query-language fragment (`rsql` dialect).
//!
//! Structural facts emitted: one `CREATE NATURALTYPE` statement per natural
//! type, one `CREATE COMPARTMENTTYPE` block per compartment holding its
//! `CREATE ROLETYPE` statements and one `CREATE RELATIONSHIPTYPE` per
//! relationship with a `WITH CARDINALITY` clause per side. Nested role
//! groups stay nested as parenthesized `GROUP(l..u) OF (...)` terms.

use crate::{generator::validate, GenerateResult, Generator};
use crom_core::{Cardinality, Element, RoleGroup};
use crom_model::Model;

/// Renders a model as an RSQL schema fragment.
#[derive(Debug)]
pub struct RsqlGenerator;

impl Generator for RsqlGenerator {
    fn extension(&self) -> &'static str {
        "rsql"
    }

    fn generate(&self, base_name: &str, model: &Model) -> GenerateResult<String> {
        validate(model)?;

        let mut out = String::new();
        out.push_str(&format!("-- RSQL schema generated from '{}'\n", base_name));

        for natural in model.natural_types() {
            out.push_str(&format!("CREATE NATURALTYPE {};\n", natural.name));
        }

        for compartment in model.compartments() {
            out.push_str(&format!(
                "\nCREATE COMPARTMENTTYPE {} {{\n",
                compartment.name
            ));
            for role in &compartment.role_types {
                out.push_str(&format!("    CREATE ROLETYPE {};\n", role.name));
            }
            for rel in &compartment.relationships {
                out.push_str(&format!("    CREATE RELATIONSHIPTYPE {} (\n", rel.name));
                for (i, side) in rel.sides.iter().enumerate() {
                    let separator = if i + 1 < rel.sides.len() { "," } else { "" };
                    out.push_str(&format!(
                        "        {} WITH CARDINALITY ({}){}\n",
                        side_term(&side.group),
                        side.cardinality,
                        separator
                    ));
                }
                out.push_str("    );\n");
            }
            out.push_str("};\n");
        }

        Ok(out)
    }
}

/// Render a role-group side. A single role with the trivial `1..1` group
/// cardinality collapses to its bare name; everything else keeps the nested
/// `GROUP(l..u) OF (...)` shape.
fn side_term(group: &RoleGroup) -> String {
    if let [Element::Role(name)] = group.elements() {
        if group.cardinality() == Cardinality::exactly(1) {
            return name.clone();
        }
    }
    let terms: Vec<String> = group
        .elements()
        .iter()
        .map(|e| match e {
            Element::Role(name) => name.clone(),
            Element::Group(nested) => side_term(nested),
        })
        .collect();
    format!(
        "GROUP({}) OF ({})",
        group.cardinality(),
        terms.join(", ")
    )
}
