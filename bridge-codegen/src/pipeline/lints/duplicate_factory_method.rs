//! Lint for declarations that derive the same factory method.

use std::collections::HashMap;

use viewbridge_ir::{KotlinType, ViewDeclaration};

use super::super::Lint;
use crate::{naming, pipeline::Diagnostic};

/// Warns when two declarations derive the same generated names.
///
/// Within one factory group, identical data-parameter types make the
/// `create<Decl>` methods clash in the factory interface; differing
/// parameters still collide on the delegate and observable names. Across
/// groups the factory methods are independent, but delegates and
/// observables share one package, so the names collide all the same.
pub struct DuplicateFactoryMethodLint;

impl Lint for DuplicateFactoryMethodLint {
    fn name(&self) -> &'static str {
        "duplicate-factory-method"
    }

    fn description(&self) -> &'static str {
        "Detect declarations whose derived factory method or delegate names collide"
    }

    fn check(&self, declarations: &[ViewDeclaration], diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<&str, Vec<&ViewDeclaration>> = HashMap::new();

        for decl in declarations {
            let earlier = seen.entry(decl.name.as_str()).or_default();

            if let Some(first) = earlier.first() {
                let method = naming::factory_method_name(&decl.name);
                let delegate = naming::delegate_name(&decl.name);
                let same_group: Vec<_> = earlier
                    .iter()
                    .filter(|other| other.factory_group == decl.factory_group)
                    .collect();

                let message = match same_group.first() {
                    Some(group_first)
                        if same_group.iter().any(|other| data_types(other) == data_types(decl)) =>
                    {
                        format!(
                            "{}: factory method '{}' in group '{}' is declared twice with identical parameter types (first in {})",
                            decl.name, method, decl.factory_group, group_first.file.path
                        )
                    }
                    Some(group_first) => format!(
                        "{}: overload of '{}' in group '{}' shares the delegate name '{}' (first in {})",
                        decl.name, method, decl.factory_group, delegate, group_first.file.path
                    ),
                    None => format!(
                        "{}: declared in groups '{}' and '{}', which share the delegate name '{}' (first in {})",
                        decl.name, first.factory_group, decl.factory_group, delegate, first.file.path
                    ),
                };
                diagnostics.push(
                    Diagnostic::warning("lint", message)
                        .with_code(self.name())
                        .at(decl.file.path.clone()),
                );
            }

            earlier.push(decl);
        }
    }
}

fn data_types(decl: &ViewDeclaration) -> Vec<&KotlinType> {
    decl.data_parameters().map(|p| &p.ty).collect()
}
