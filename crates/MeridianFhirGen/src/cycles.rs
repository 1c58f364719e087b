//! Detection of by-value struct cycles.
//!
//! A struct that holds another struct by value, which in turn holds the first
//! by value, has infinite size. `Vec` fields already break such cycles; only
//! single-valued fields and choice variants form edges.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::ir::{PropertyKind, TypeRegistry};

/// Finds direct cycles between two structs (`A → B → A`) and self cycles
/// (`A → A`).
///
/// Each cycle is returned as the `(from, to)` edge to box: the one leaving
/// the alphabetically first type of the pair.
///
/// # Example
///
/// `Identifier.assigner` is a `Reference` and `Reference.identifier` is an
/// `Identifier`, so the result contains `("Identifier", "Reference")`.
pub fn detect_struct_cycles(registry: &TypeRegistry) -> BTreeSet<(String, String)> {
    let resolve = |rust_type: &str| -> Option<String> {
        if registry.types.contains_key(rust_type) {
            return Some(rust_type.to_string());
        }
        registry
            .aliases
            .get(rust_type)
            .map(|alias| alias.base.clone())
    };

    let mut graph: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();
    for definition in registry.types.values() {
        for property in definition.properties.iter().filter(|p| !p.repeating) {
            for type_ref in property.type_refs() {
                if let Some(target) = resolve(&type_ref.rust_type) {
                    graph.entry(definition.name.as_str()).or_default().insert(target);
                }
            }
        }
    }

    let mut cycles = BTreeSet::new();
    for (from, targets) in &graph {
        for to in targets {
            let closes = to.as_str() == *from
                || graph
                    .get(to.as_str())
                    .is_some_and(|back| back.contains(*from));
            if closes && *from <= to.as_str() {
                cycles.insert((from.to_string(), to.clone()));
            }
        }
    }
    cycles
}

/// Boxes every field and variant on a detected cycle edge.
pub fn box_cycles(registry: &mut TypeRegistry) {
    let cycles = detect_struct_cycles(registry);
    let aliases: BTreeMap<String, String> = registry
        .aliases
        .values()
        .map(|alias| (alias.name.clone(), alias.base.clone()))
        .collect();

    for definition in registry.types.values_mut() {
        for property in definition.properties.iter_mut().filter(|p| !p.repeating) {
            let type_refs = match &mut property.kind {
                PropertyKind::Single(type_ref) => vec![type_ref],
                PropertyKind::Choice(group) => {
                    group.variants.iter_mut().map(|v| &mut v.target).collect()
                }
            };
            for type_ref in type_refs {
                let target = aliases
                    .get(&type_ref.rust_type)
                    .unwrap_or(&type_ref.rust_type);
                if cycles.contains(&(definition.name.clone(), target.clone())) {
                    debug!(from = %definition.name, to = %target, field = %property.name, "boxing cycle edge");
                    type_ref.boxed = true;
                }
            }
        }
    }
}
