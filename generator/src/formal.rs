//! Mathematical CROM notation (`formal` dialect).
//!
//! Structural facts emitted: the NT/RT/CT/RST entity sets, one `rel` axiom
//! per relationship listing each side as the canonical
//! `RoleGroup([...],lower,upper)` rendering, and one `card` axiom with the
//! per-side cardinality tuples.

use crate::{generator::validate, GenerateResult, Generator};
use crom_model::Model;

/// Renders a model as a formal CROM specification.
#[derive(Debug)]
pub struct FormalCromGenerator;

impl Generator for FormalCromGenerator {
    fn extension(&self) -> &'static str {
        "formal"
    }

    fn generate(&self, base_name: &str, model: &Model) -> GenerateResult<String> {
        validate(model)?;

        let mut out = String::new();
        out.push_str(&format!("# Formal CROM specification of '{}'\n\n", base_name));

        let naturals: Vec<&str> = model.natural_types().map(|n| n.name.as_str()).collect();
        let roles: Vec<&str> = model
            .compartments()
            .flat_map(|c| c.role_types.iter().map(|r| r.name.as_str()))
            .collect();
        let compartments: Vec<&str> = model.compartments().map(|c| c.name.as_str()).collect();
        let relationships: Vec<&str> = model
            .compartments()
            .flat_map(|c| c.relationships.iter().map(|r| r.name.as_str()))
            .collect();

        out.push_str(&format!("NT  = {}\n", set(&naturals)));
        out.push_str(&format!("RT  = {}\n", set(&roles)));
        out.push_str(&format!("CT  = {}\n", set(&compartments)));
        out.push_str(&format!("RST = {}\n", set(&relationships)));

        for compartment in model.compartments() {
            if compartment.relationships.is_empty() {
                continue;
            }
            out.push_str(&format!("\n# compartment {}\n", compartment.name));
            for rel in &compartment.relationships {
                let groups: Vec<String> =
                    rel.sides.iter().map(|s| s.group.to_string()).collect();
                let cards: Vec<String> =
                    rel.sides.iter().map(|s| s.cardinality.formal()).collect();
                out.push_str(&format!(
                    "rel({}, {}) = ({})\n",
                    rel.name,
                    compartment.name,
                    groups.join(", ")
                ));
                out.push_str(&format!(
                    "card({}, {}) = ({})\n",
                    rel.name,
                    compartment.name,
                    cards.join(", ")
                ));
            }
        }

        Ok(out)
    }
}

/// Render a set in declaration order: `{a, b, c}` or `{}`.
fn set(items: &[&str]) -> String {
    format!("{{{}}}", items.join(", "))
}
