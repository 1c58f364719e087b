//! Rendering of the [`TypeRegistry`] into Rust source files.

use std::collections::BTreeSet;
use std::fmt::Write;
use std::path::PathBuf;

use meridian_fhir_lib::FhirVersion;

use crate::format_helpers::{doc_comment, make_rust_safe, module_file_stem};
use crate::ir::{
    AliasDefinition, ChoiceGroup, CodeSystemDefinition, Property, PropertyKind, TypeDefinition,
    TypeKind, TypeRegistry,
};

/// A generated file, relative to the release module directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub contents: String,
}

impl RenderedFile {
    fn new(path: impl Into<PathBuf>, contents: String) -> Self {
        RenderedFile {
            path: path.into(),
            contents,
        }
    }
}

fn header(version: FhirVersion) -> String {
    format!(
        "// Generated by meridian-fhir-gen from FHIR {} definitions. Do not edit by hand.\n",
        version.release()
    )
}

/// Renders every file of one release module.
///
/// The hand-written `mod.rs` of the release module is not produced; the
/// generated directories each get their own `mod.rs`.
pub fn render_model(registry: &TypeRegistry, version: FhirVersion) -> Vec<RenderedFile> {
    let mut files = Vec::new();
    for (directory, kind) in [
        ("complex_types", TypeKind::ComplexType),
        ("resources", TypeKind::Resource),
    ] {
        let roots = registry.roots(kind);
        let mut stems = Vec::with_capacity(roots.len());
        for root in roots {
            let stem = module_file_stem(root);
            files.push(RenderedFile::new(
                format!("{directory}/{stem}.rs"),
                render_type_file(registry, root, version),
            ));
            stems.push(stem);
        }
        files.push(RenderedFile::new(
            format!("{directory}/mod.rs"),
            render_mod_index(&stems, version),
        ));
    }
    files.push(RenderedFile::new(
        "primitives.rs",
        render_primitives(registry, version),
    ));
    files.push(RenderedFile::new(
        "code_systems.rs",
        render_code_systems(registry, version),
    ));
    files.push(RenderedFile::new(
        "resource.rs",
        render_resource_enum(&registry.roots(TypeKind::Resource), version),
    ));
    files
}

/// A module index: `pub mod` declarations followed by glob re-exports.
pub fn render_mod_index(stems: &[String], version: FhirVersion) -> String {
    let mut out = header(version);
    out.push('\n');
    for stem in stems {
        let _ = writeln!(out, "pub mod {stem};");
    }
    out.push('\n');
    for stem in stems {
        let _ = writeln!(out, "pub use {stem}::*;");
    }
    out
}

/// One root type's file: for each struct in path order its choice enums and
/// then the struct, followed by aliases of the root type.
pub fn render_type_file(registry: &TypeRegistry, root: &str, version: FhirVersion) -> String {
    let mut items = Vec::new();
    for definition in registry.types_of_root(root) {
        for property in &definition.properties {
            if let PropertyKind::Choice(group) = &property.kind {
                items.push(render_choice_enum(definition, property, group));
            }
        }
        items.push(render_struct(definition));
    }
    items.extend(registry.aliases_of(root).into_iter().map(render_alias));

    format!(
        "{}\nuse meridian_macros::{{FhirNew, FhirSerde}};\n\nuse crate::{}::*;\n\n{}\n",
        header(version),
        version.module_name(),
        items.join("\n\n")
    )
}

fn render_choice_enum(owner: &TypeDefinition, property: &Property, group: &ChoiceGroup) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "/// Choice of types for the {}\\[x\\] field in {}",
        property.name, owner.name
    );
    out.push_str("#[derive(Debug, Clone, PartialEq, FhirSerde)]\n");
    let _ = writeln!(out, "#[fhir_choice_element(base_name = \"{}\")]", property.name);
    let _ = writeln!(out, "pub enum {} {{", group.enum_name);
    for variant in &group.variants {
        let _ = writeln!(out, "    /// Variant accepting the {} type.", variant.name);
        let _ = writeln!(out, "    #[fhir_serde(rename = \"{}\")]", variant.wire_key);
        let _ = writeln!(out, "    {}({}),", variant.name, variant.target.rendered());
    }
    out.push('}');
    out
}

/// The declared Rust type of a property, from its cardinality.
pub fn field_type(property: &Property) -> String {
    let inner = match &property.kind {
        PropertyKind::Single(type_ref) => type_ref.rendered(),
        PropertyKind::Choice(group) => group.enum_name.clone(),
    };
    match (property.repeating, property.min > 0) {
        (true, true) => format!("Vec<{inner}>"),
        (true, false) => format!("Option<Vec<{inner}>>"),
        (false, true) => inner,
        (false, false) => format!("Option<{inner}>"),
    }
}

fn render_struct(definition: &TypeDefinition) -> String {
    let mut out = String::new();
    if let Some(short) = &definition.short {
        out.push_str(&doc_comment(short, ""));
    }
    if let Some(text) = &definition.definition {
        out.push_str("///\n");
        out.push_str(&doc_comment(text, ""));
    }
    let default = if definition.has_required_property() {
        ""
    } else {
        "Default, "
    };
    let _ = writeln!(
        out,
        "#[derive(Debug, Clone, PartialEq, {default}FhirSerde, FhirNew)]"
    );
    if definition.kind == TypeKind::Resource {
        let _ = writeln!(
            out,
            "#[fhir_resource(resource_type = \"{}\")]",
            definition.name
        );
    }
    let _ = writeln!(out, "pub struct {} {{", definition.name);
    for property in &definition.properties {
        if let Some(short) = &property.short {
            out.push_str(&doc_comment(short, "    "));
        }
        let ident = make_rust_safe(&property.name);
        if matches!(property.kind, PropertyKind::Choice(_)) {
            out.push_str("    #[fhir_serde(flatten)]\n");
        } else if ident != property.name {
            let _ = writeln!(out, "    #[fhir_serde(rename = \"{}\")]", property.name);
        }
        let _ = writeln!(out, "    pub {ident}: {},", field_type(property));
    }
    out.push('}');
    out
}

fn render_alias(alias: &AliasDefinition) -> String {
    let mut out = String::new();
    if let Some(description) = &alias.description {
        out.push_str(&doc_comment(description, ""));
    }
    let _ = write!(out, "pub type {} = {};", alias.name, alias.base);
    out
}

/// Type aliases for every primitive, importing the crate's precision types
/// they resolve to.
pub fn render_primitives(registry: &TypeRegistry, version: FhirVersion) -> String {
    let mut out = header(version);
    let imports: BTreeSet<&str> = registry
        .primitives
        .values()
        .map(|primitive| primitive.rust_type.as_str())
        .filter(|rust_type| rust_type.starts_with("Precis"))
        .collect();
    if !imports.is_empty() {
        let imports: Vec<&str> = imports.into_iter().collect();
        let _ = writeln!(out, "\nuse crate::{{{}}};", imports.join(", "));
    }
    for primitive in registry.primitives.values() {
        out.push('\n');
        if let Some(description) = &primitive.description {
            out.push_str(&doc_comment(description, ""));
        }
        let _ = writeln!(out, "pub type {} = {};", primitive.name, primitive.rust_type);
    }
    out
}

pub fn render_code_systems(registry: &TypeRegistry, version: FhirVersion) -> String {
    let mut out = header(version);
    out.push_str("\nuse crate::macros::code_system;\n");
    for code_system in registry.code_systems.values() {
        out.push('\n');
        out.push_str(&render_code_system(code_system));
    }
    out
}

fn render_code_system(code_system: &CodeSystemDefinition) -> String {
    let mut out = String::from("code_system! {\n");
    if let Some(description) = &code_system.description {
        out.push_str(&doc_comment(description, "    "));
    }
    let _ = writeln!(
        out,
        "    {}, system = \"{}\" {{",
        code_system.name, code_system.system
    );
    for code in &code_system.codes {
        if let Some(definition) = &code.definition {
            out.push_str(&doc_comment(definition, "        "));
        }
        let _ = writeln!(
            out,
            "        {} => ({:?}, {:?}),",
            code.variant, code.code, code.display
        );
    }
    out.push_str("    }\n}\n");
    out
}

pub fn render_resource_enum(resources: &[&str], version: FhirVersion) -> String {
    let mut out = header(version);
    let _ = writeln!(
        out,
        "\nuse crate::macros::resource_enum;\nuse crate::{}::*;\n",
        version.module_name()
    );
    out.push_str("resource_enum! {\n");
    for resource in resources {
        let _ = writeln!(out, "    {resource},");
    }
    out.push_str("}\n");
    out
}
