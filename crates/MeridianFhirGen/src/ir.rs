//! Intermediate representation between the definitions and the rendered
//! Rust source.
//!
//! Every map is a `BTreeMap` so that rendering walks types in name order and
//! output is stable across runs.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use tracing::debug;

use crate::error::{GeneratorError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Resource,
    ComplexType,
    /// A nested element group, rendered as its own struct.
    Backbone,
}

/// One generated struct.
#[derive(Debug, Clone)]
pub struct TypeDefinition {
    pub name: String,
    /// Element path, e.g. `CarePlan.activity.detail`.
    pub path: String,
    /// The top-level type whose file this struct is written to.
    pub root: String,
    pub kind: TypeKind,
    pub short: Option<String>,
    pub definition: Option<String>,
    pub properties: Vec<Property>,
}

impl TypeDefinition {
    pub fn is_root(&self) -> bool {
        self.name == self.root
    }

    /// Structs with no required property also derive `Default`.
    pub fn has_required_property(&self) -> bool {
        self.properties.iter().any(|property| property.min > 0)
    }
}

/// One element of a type.
#[derive(Debug, Clone)]
pub struct Property {
    /// Wire name, or the base name of a choice group (`value` for `value[x]`).
    pub name: String,
    pub short: Option<String>,
    pub min: u32,
    pub repeating: bool,
    pub kind: PropertyKind,
}

#[derive(Debug, Clone)]
pub enum PropertyKind {
    Single(TypeRef),
    Choice(ChoiceGroup),
}

impl Property {
    /// Every type this property can hold.
    pub fn type_refs(&self) -> Vec<&TypeRef> {
        match &self.kind {
            PropertyKind::Single(type_ref) => vec![type_ref],
            PropertyKind::Choice(group) => group.variants.iter().map(|v| &v.target).collect(),
        }
    }
}

/// The type of a property or choice variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// FHIR type code (`dateTime`, `Reference`) or backbone type name.
    pub code: String,
    pub rust_type: String,
    /// Set by cycle detection on the edge that closes a struct cycle.
    pub boxed: bool,
}

impl TypeRef {
    pub fn new(code: impl Into<String>, rust_type: impl Into<String>) -> Self {
        TypeRef {
            code: code.into(),
            rust_type: rust_type.into(),
            boxed: false,
        }
    }

    /// Primitive codes, FHIRPath system types and bound code enums.
    pub fn is_primitive(&self) -> bool {
        self.code.starts_with(|c: char| c.is_ascii_lowercase())
    }

    /// The payload type with boxing applied.
    pub fn rendered(&self) -> String {
        if self.boxed {
            format!("Box<{}>", self.rust_type)
        } else {
            self.rust_type.clone()
        }
    }
}

/// A `[x]` element: exactly one of several typed keys may be present.
#[derive(Debug, Clone)]
pub struct ChoiceGroup {
    pub enum_name: String,
    pub variants: Vec<ChoiceVariant>,
}

#[derive(Debug, Clone)]
pub struct ChoiceVariant {
    /// Variant ident, the capitalized type code (`DateTime`).
    pub name: String,
    /// Flattened key on the wire (`onsetDateTime`).
    pub wire_key: String,
    pub target: TypeRef,
}

/// A constrained datatype such as `Age`, rendered as a type alias of its
/// base struct.
#[derive(Debug, Clone)]
pub struct AliasDefinition {
    pub name: String,
    pub base: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PrimitiveDefinition {
    /// FHIR code, e.g. `dateTime`.
    pub code: String,
    /// Alias name, e.g. `DateTime`.
    pub name: String,
    pub rust_type: String,
    pub description: Option<String>,
}

/// A required binding rendered as a `code_system!` enum.
#[derive(Debug, Clone)]
pub struct CodeSystemDefinition {
    pub name: String,
    pub system: String,
    pub description: Option<String>,
    pub codes: Vec<CodeDefinition>,
}

#[derive(Debug, Clone)]
pub struct CodeDefinition {
    pub variant: String,
    pub code: String,
    pub display: String,
    pub definition: Option<String>,
}

/// Everything that will be rendered for one FHIR release.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    pub types: BTreeMap<String, TypeDefinition>,
    pub aliases: BTreeMap<String, AliasDefinition>,
    /// Keyed by FHIR code.
    pub primitives: BTreeMap<String, PrimitiveDefinition>,
    pub code_systems: BTreeMap<String, CodeSystemDefinition>,
}

impl TypeRegistry {
    pub fn insert_type(&mut self, definition: TypeDefinition) {
        self.types.insert(definition.name.clone(), definition);
    }

    /// Root type names of the given kind, sorted.
    pub fn roots(&self, kind: TypeKind) -> Vec<&str> {
        self.types
            .values()
            .filter(|definition| definition.kind == kind && definition.is_root())
            .map(|definition| definition.name.as_str())
            .collect()
    }

    /// The structs written to one root type's file, ordered by element path.
    pub fn types_of_root(&self, root: &str) -> Vec<&TypeDefinition> {
        let mut types: Vec<&TypeDefinition> = self
            .types
            .values()
            .filter(|definition| definition.root == root)
            .collect();
        types.sort_by(|a, b| a.path.cmp(&b.path));
        types
    }

    pub fn aliases_of(&self, base: &str) -> Vec<&AliasDefinition> {
        self.aliases
            .values()
            .filter(|alias| alias.base == base)
            .collect()
    }

    /// The root struct a non-primitive type name resolves to, looking
    /// through aliases.
    fn root_of(&self, rust_type: &str) -> Option<&str> {
        if let Some(definition) = self.types.get(rust_type) {
            return Some(definition.root.as_str());
        }
        self.aliases
            .get(rust_type)
            .and_then(|alias| self.types.get(&alias.base))
            .map(|definition| definition.root.as_str())
    }

    /// Keeps only the named root types and the types they reach through
    /// non-choice elements.
    ///
    /// Choice variants are not followed: a variant whose type is not kept is
    /// dropped from its group instead, which stops open-typed choices such as
    /// `Extension.value[x]` from pulling in every datatype.
    pub fn retain_reachable(&mut self, only: &[String]) -> Result<()> {
        let mut keep = BTreeSet::new();
        let mut queue = VecDeque::new();
        for name in only {
            let root = self
                .types
                .get(name)
                .filter(|definition| definition.is_root())
                .ok_or_else(|| GeneratorError::UnknownType(name.clone()))?;
            queue.push_back(root.name.clone());
        }

        while let Some(root) = queue.pop_front() {
            if !keep.insert(root.clone()) {
                continue;
            }
            for definition in self.types_of_root(&root) {
                for property in &definition.properties {
                    let PropertyKind::Single(type_ref) = &property.kind else {
                        continue;
                    };
                    if let Some(target) = self.root_of(&type_ref.rust_type) {
                        if !keep.contains(target) {
                            queue.push_back(target.to_string());
                        }
                    }
                }
            }
        }

        self.types.retain(|_, definition| keep.contains(&definition.root));
        self.aliases.retain(|_, alias| keep.contains(&alias.base));
        debug!(kept = ?keep, "filtered type registry");
        Ok(())
    }

    /// Removes choice variants whose type is not generated, then code
    /// systems no property binds to.
    pub fn prune(&mut self) {
        let available: BTreeSet<String> = self
            .types
            .keys()
            .chain(self.aliases.keys())
            .cloned()
            .collect();
        for definition in self.types.values_mut() {
            for property in &mut definition.properties {
                let PropertyKind::Choice(group) = &mut property.kind else {
                    continue;
                };
                group.variants.retain(|variant| {
                    let target = &variant.target;
                    let keep = target.is_primitive()
                        || target.rust_type == "Resource"
                        || available.contains(&target.rust_type);
                    if !keep {
                        debug!(choice = %group.enum_name, variant = %variant.name, "dropping choice variant for type that is not generated");
                    }
                    keep
                });
            }
        }

        let bound: BTreeSet<&str> = self
            .types
            .values()
            .flat_map(|definition| &definition.properties)
            .flat_map(Property::type_refs)
            .map(|type_ref| type_ref.rust_type.as_str())
            .collect();
        let unused: Vec<String> = self
            .code_systems
            .keys()
            .filter(|name| !bound.contains(name.as_str()))
            .cloned()
            .collect();
        for name in unused {
            self.code_systems.remove(&name);
        }
    }
}
