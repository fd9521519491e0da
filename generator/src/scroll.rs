//! Role-oriented program skeleton (`scroll` dialect), Scala-like syntax.
//!
//! Structural facts emitted: a case class per natural type, a compartment
//! class per compartment containing one inner class per role type (with a
//! stub method per declared behavioral feature), and one comment line per
//! relationship documenting its sides and cardinalities.

use crate::{generator::validate, GenerateResult, Generator};
use crom_model::Model;

/// Renders a model as a SCROLL code skeleton.
#[derive(Debug)]
pub struct ScrollCodeGenerator;

impl Generator for ScrollCodeGenerator {
    fn extension(&self) -> &'static str {
        "scroll"
    }

    fn generate(&self, base_name: &str, model: &Model) -> GenerateResult<String> {
        validate(model)?;

        let mut out = String::new();
        out.push_str(&format!("// SCROLL skeleton generated from '{}'\n", base_name));
        out.push_str("import scroll.internal.Compartment\n");

        if model.natural_count() > 0 {
            out.push('\n');
        }
        for natural in model.natural_types() {
            out.push_str(&format!("case class {}()\n", natural.name));
        }

        for compartment in model.compartments() {
            out.push_str(&format!(
                "\nclass {} extends Compartment {{\n",
                compartment.name
            ));
            for role in &compartment.role_types {
                if role.features.is_empty() {
                    out.push_str(&format!("  class {}()\n", role.name));
                } else {
                    out.push_str(&format!("  class {}() {{\n", role.name));
                    for feature in &role.features {
                        out.push_str(&format!("    def {}(): Unit = ???\n", feature));
                    }
                    out.push_str("  }\n");
                }
            }
            for rel in &compartment.relationships {
                let sides: Vec<String> = rel
                    .sides
                    .iter()
                    .map(|s| format!("{} ({})", s.group, s.cardinality))
                    .collect();
                out.push_str(&format!(
                    "  // relationship {}: {}\n",
                    rel.name,
                    sides.join(" -- ")
                ));
            }
            out.push_str("}\n");
        }

        Ok(out)
    }
}
