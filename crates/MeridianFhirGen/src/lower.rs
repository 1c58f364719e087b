//! Lowering of StructureDefinitions, ValueSets and CodeSystems into the
//! [`TypeRegistry`].

use std::collections::{BTreeMap, BTreeSet, HashMap};

use heck::ToUpperCamelCase;
use tracing::{debug, warn};

use crate::bootstrap::{CodeSystemConcept, ElementDefinition, StructureDefinition};
use crate::error::{GeneratorError, Result};
use crate::format_helpers::{
    capitalize_first_letter, code_variant_name, extract_content_reference_id,
    generate_type_name, is_identifier,
};
use crate::ir::{
    AliasDefinition, ChoiceGroup, ChoiceVariant, CodeDefinition, CodeSystemDefinition,
    PrimitiveDefinition, Property, PropertyKind, TypeDefinition, TypeKind, TypeRef,
    TypeRegistry,
};
use crate::loader::DefinitionSet;

const FHIRPATH_SYSTEM_PREFIX: &str = "http://hl7.org/fhirpath/System.";
const CORE_PREFIX: &str = "http://hl7.org/fhir/StructureDefinition/";

/// Base types whose elements are inlined into every struct via the snapshot.
const ENVELOPE_TYPES: &[&str] = &["Element", "BackboneElement"];

/// Determines whether a StructureDefinition becomes a generated struct.
///
/// Concrete complex types and resources that specialize their base qualify;
/// abstract bases, logical models and profiles do not.
pub fn is_valid_structure_definition(def: &StructureDefinition) -> bool {
    (def.kind == "complex-type" || def.kind == "resource")
        && def.derivation.as_deref() == Some("specialization")
        && !def.r#abstract
        && !ENVELOPE_TYPES.contains(&def.r#type.as_str())
}

pub fn is_primitive_type(def: &StructureDefinition) -> bool {
    def.kind == "primitive-type" && def.derivation.as_deref() == Some("specialization")
}

/// Core datatype constraints such as `Age` or `SimpleQuantity`.
pub fn is_constrained_datatype(def: &StructureDefinition) -> bool {
    def.kind == "complex-type"
        && def.derivation.as_deref() == Some("constraint")
        && def.url.starts_with(CORE_PREFIX)
        && def.name != def.r#type
        && is_identifier(&def.name)
}

/// The Rust type a FHIR primitive code is represented by.
fn primitive_rust_type(code: &str) -> &'static str {
    match code {
        "boolean" => "bool",
        "integer" => "i32",
        "positiveInt" | "unsignedInt" => "u32",
        "decimal" => "PreciseDecimal",
        "date" => "PrecisionDate",
        "dateTime" => "PrecisionDateTime",
        "instant" => "PrecisionInstant",
        "time" => "PrecisionTime",
        _ => "String",
    }
}

/// The Rust type name used for a FHIR type code in a field position.
fn type_name_for_code(code: &str) -> String {
    if let Some(system_type) = code.strip_prefix(FHIRPATH_SYSTEM_PREFIX) {
        return system_type.to_string();
    }
    match code {
        "string" => "String".to_string(),
        primitive if primitive.starts_with(|c: char| c.is_ascii_lowercase()) => {
            capitalize_first_letter(primitive)
        }
        complex => complex.to_string(),
    }
}

/// Builds the registry from loaded definitions.
pub fn build_registry(definitions: &DefinitionSet) -> Result<TypeRegistry> {
    let mut lowering = Lowering {
        definitions,
        registry: TypeRegistry::default(),
        bindings: HashMap::new(),
    };

    for sd in &definitions.structure_definitions {
        if is_primitive_type(sd) {
            lowering.add_primitive(sd);
        } else if is_constrained_datatype(sd) {
            lowering.add_alias(sd);
        } else if is_valid_structure_definition(sd) {
            lowering.add_structure_definition(sd)?;
        } else {
            debug!(name = %sd.name, kind = %sd.kind, "skipping StructureDefinition");
        }
    }
    Ok(lowering.registry)
}

struct Lowering<'a> {
    definitions: &'a DefinitionSet,
    registry: TypeRegistry,
    /// Resolved required bindings by value set URL; `None` means the binding
    /// stays a plain `Code`.
    bindings: HashMap<String, Option<String>>,
}

impl Lowering<'_> {
    fn add_primitive(&mut self, sd: &StructureDefinition) {
        // `string` maps straight to `String` and gets no alias.
        if sd.r#type == "string" {
            return;
        }
        self.registry.primitives.insert(
            sd.r#type.clone(),
            PrimitiveDefinition {
                code: sd.r#type.clone(),
                name: capitalize_first_letter(&sd.r#type),
                rust_type: primitive_rust_type(&sd.r#type).to_string(),
                description: sd.description.clone(),
            },
        );
    }

    fn add_alias(&mut self, sd: &StructureDefinition) {
        self.registry.aliases.insert(
            sd.name.clone(),
            AliasDefinition {
                name: sd.name.clone(),
                base: sd.r#type.clone(),
                description: sd.description.clone(),
            },
        );
    }

    fn add_structure_definition(&mut self, sd: &StructureDefinition) -> Result<()> {
        let elements = sd.elements();
        let root = elements
            .first()
            .filter(|element| element.path == sd.r#type)
            .ok_or_else(|| GeneratorError::MissingElement {
                type_name: sd.name.clone(),
                path: sd.r#type.clone(),
            })?;

        // Children grouped by parent path, snapshot order preserved.
        let mut children: BTreeMap<&str, Vec<&ElementDefinition>> = BTreeMap::new();
        for element in &elements[1..] {
            if element.is_prohibited() {
                continue;
            }
            if let Some((parent, _)) = element.path.rsplit_once('.') {
                children.entry(parent).or_default().push(element);
            }
        }

        let kind = if sd.kind == "resource" {
            TypeKind::Resource
        } else {
            TypeKind::ComplexType
        };

        for (path, members) in &children {
            let owner = elements
                .iter()
                .find(|element| element.path == *path)
                .ok_or_else(|| GeneratorError::MissingElement {
                    type_name: sd.name.clone(),
                    path: path.to_string(),
                })?;
            let name = generate_type_name(path);
            let is_root = owner.path == root.path;
            let mut properties = Vec::with_capacity(members.len());
            for element in members {
                if let Some(property) = self.lower_element(&name, element, &children)? {
                    properties.push(property);
                }
            }
            self.registry.insert_type(TypeDefinition {
                name,
                path: path.to_string(),
                root: sd.r#type.clone(),
                kind: if is_root { kind } else { TypeKind::Backbone },
                short: owner.short.clone(),
                definition: if is_root { owner.definition.clone() } else { None },
                properties,
            });
        }
        Ok(())
    }

    fn lower_element(
        &mut self,
        owner: &str,
        element: &ElementDefinition,
        children: &BTreeMap<&str, Vec<&ElementDefinition>>,
    ) -> Result<Option<Property>> {
        let name = element.name().to_string();
        let kind = if element.is_choice() {
            let variants = element
                .type_codes()
                .map(|code| {
                    let variant = capitalize_first_letter(&type_name_for_code(code));
                    ChoiceVariant {
                        wire_key: format!("{name}{variant}"),
                        target: TypeRef::new(code, type_name_for_code(code)),
                        name: variant,
                    }
                })
                .collect();
            PropertyKind::Choice(ChoiceGroup {
                enum_name: format!("{owner}{}", capitalize_first_letter(&name)),
                variants,
            })
        } else if children.contains_key(element.path.as_str()) {
            let backbone = generate_type_name(&element.path);
            PropertyKind::Single(TypeRef::new(backbone.clone(), backbone))
        } else if let Some(content_reference) = &element.content_reference {
            let target = generate_type_name(extract_content_reference_id(content_reference));
            PropertyKind::Single(TypeRef::new(target.clone(), target))
        } else {
            let Some(code) = element.type_codes().next() else {
                warn!(path = %element.path, "element has no type; skipping");
                return Ok(None);
            };
            let rust_type = match self.required_binding(element, code) {
                Some(enum_name) => enum_name,
                None => type_name_for_code(code),
            };
            PropertyKind::Single(TypeRef::new(code, rust_type))
        };

        Ok(Some(Property {
            name,
            short: element.short.clone(),
            min: element.min.unwrap_or(0),
            repeating: element.is_repeating(),
            kind,
        }))
    }

    /// The enum name for a `code` element with a required binding, if its
    /// value set can be rendered as one.
    fn required_binding(&mut self, element: &ElementDefinition, code: &str) -> Option<String> {
        let binding = element.binding.as_ref()?;
        if code != "code" || binding.strength != "required" {
            return None;
        }
        let url = binding.value_set.as_deref()?;
        let url = url.split_once('|').map_or(url, |(url, _)| url);
        if let Some(resolved) = self.bindings.get(url) {
            return resolved.clone();
        }
        let resolved = self.resolve_value_set(url);
        if resolved.is_none() {
            debug!(path = %element.path, value_set = url, "required binding stays a plain code");
        }
        self.bindings.insert(url.to_string(), resolved.clone());
        resolved
    }

    /// Registers a code system enum for a value set drawn from exactly one
    /// code system, returning its name.
    fn resolve_value_set(&mut self, url: &str) -> Option<String> {
        let value_set = self.definitions.value_sets.get(url)?;
        let [include] = value_set.compose.as_ref()?.include.as_slice() else {
            return None;
        };
        if !include.value_set.is_empty() || !include.filter.is_empty() {
            return None;
        }
        let system = include.system.as_deref()?;
        let code_system = self.definitions.code_systems.get(system);

        let mut defined = Vec::new();
        if let Some(code_system) = code_system {
            flatten_concepts(&code_system.concept, &mut defined);
        }
        let concepts: Vec<(&str, Option<&str>, Option<&str>)> = if include.concept.is_empty() {
            defined
                .iter()
                .map(|c| (c.code.as_str(), c.display.as_deref(), c.definition.as_deref()))
                .collect()
        } else {
            include
                .concept
                .iter()
                .map(|c| {
                    let known = defined.iter().find(|d| d.code == c.code);
                    (
                        c.code.as_str(),
                        c.display
                            .as_deref()
                            .or_else(|| known.and_then(|d| d.display.as_deref())),
                        known.and_then(|d| d.definition.as_deref()),
                    )
                })
                .collect()
        };
        if concepts.is_empty() {
            return None;
        }

        let name = value_set.name.as_deref()?.to_upper_camel_case();
        if !is_identifier(&name) || self.registry.types.contains_key(&name) {
            return None;
        }
        if let Some(existing) = self.registry.code_systems.get(&name) {
            if existing.system != system {
                warn!(name = %name, value_set = url, "code system enum name already taken");
                return None;
            }
            return Some(name);
        }

        let mut seen = BTreeSet::new();
        let mut codes = Vec::with_capacity(concepts.len());
        for (code, display, definition) in concepts {
            let variant = code_variant_name(code, display)?;
            if !seen.insert(variant.clone()) {
                return None;
            }
            codes.push(CodeDefinition {
                variant,
                code: code.to_string(),
                display: display.unwrap_or(code).to_string(),
                definition: definition.map(str::to_string),
            });
        }

        self.registry.code_systems.insert(
            name.clone(),
            CodeSystemDefinition {
                name: name.clone(),
                system: system.to_string(),
                description: value_set.description.clone(),
                codes,
            },
        );
        Some(name)
    }
}

/// Depth-first flattening of hierarchical code systems.
fn flatten_concepts<'a>(concepts: &'a [CodeSystemConcept], out: &mut Vec<&'a CodeSystemConcept>) {
    for concept in concepts {
        out.push(concept);
        flatten_concepts(&concept.concept, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_type_codes_to_rust_names() {
        assert_eq!(type_name_for_code("string"), "String");
        assert_eq!(type_name_for_code("dateTime"), "DateTime");
        assert_eq!(type_name_for_code("base64Binary"), "Base64Binary");
        assert_eq!(type_name_for_code("http://hl7.org/fhirpath/System.String"), "String");
        assert_eq!(type_name_for_code("CodeableConcept"), "CodeableConcept");
    }

    #[test]
    fn primitives_use_precision_types() {
        assert_eq!(primitive_rust_type("decimal"), "PreciseDecimal");
        assert_eq!(primitive_rust_type("instant"), "PrecisionInstant");
        assert_eq!(primitive_rust_type("positiveInt"), "u32");
        assert_eq!(primitive_rust_type("uri"), "String");
    }
}
