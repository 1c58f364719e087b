use std::fs;
use std::path::PathBuf;

use meridian_fhir_generator::ir::{PropertyKind, TypeKind, TypeRegistry};
use meridian_fhir_generator::loader::load_definitions;
use meridian_fhir_generator::render::{render_code_systems, render_primitives, render_type_file};
use meridian_fhir_generator::{GeneratorConfig, GeneratorError, build_model, generate};
use meridian_fhir_lib::FhirVersion;

fn definitions_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/definitions")
}

fn model(only: &[&str]) -> TypeRegistry {
    let definitions = load_definitions(&definitions_dir()).unwrap();
    let only: Vec<String> = only.iter().map(|name| name.to_string()).collect();
    build_model(&definitions, &only).unwrap()
}

fn choice_variants(registry: &TypeRegistry, type_name: &str, field: &str) -> Vec<String> {
    let property = registry.types[type_name]
        .properties
        .iter()
        .find(|property| property.name == field)
        .unwrap();
    match &property.kind {
        PropertyKind::Choice(group) => group.variants.iter().map(|v| v.name.clone()).collect(),
        PropertyKind::Single(_) => panic!("{type_name}.{field} is not a choice"),
    }
}

#[test]
fn lowers_types_backbones_and_aliases() {
    let registry = model(&[]);

    let names: Vec<&str> = registry.types.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        ["Extension", "Identifier", "Period", "Quantity", "Reference", "Widget", "WidgetPart"]
    );
    assert_eq!(registry.types["Widget"].kind, TypeKind::Resource);
    assert_eq!(registry.types["WidgetPart"].kind, TypeKind::Backbone);
    assert_eq!(registry.types["WidgetPart"].root, "Widget");
    assert_eq!(registry.aliases["Age"].base, "Quantity");
    assert!(!registry.primitives.contains_key("string"));
}

#[test]
fn renders_resource_struct_with_renames_and_choice() {
    let registry = model(&[]);
    let source = render_type_file(&registry, "Widget", FhirVersion::R4);

    assert!(source.starts_with(
        "// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.\n\n\
         use meridian_macros::{FhirNew, FhirSerde};\n\nuse crate::r4::*;\n\n"
    ));
    assert!(source.contains(
        "/// Choice of types for the onset\\[x\\] field in Widget\n\
         #[derive(Debug, Clone, PartialEq, FhirSerde)]\n\
         #[fhir_choice_element(base_name = \"onset\")]\n\
         pub enum WidgetOnset {\n\
         \x20   /// Variant accepting the DateTime type.\n\
         \x20   #[fhir_serde(rename = \"onsetDateTime\")]\n\
         \x20   DateTime(DateTime),\n"
    ));
    assert!(source.contains(
        "/// A widget\n///\n/// A thing used for testing the generator.\n\
         #[derive(Debug, Clone, PartialEq, FhirSerde, FhirNew)]\n\
         #[fhir_resource(resource_type = \"Widget\")]\n\
         pub struct Widget {\n"
    ));
    assert!(source.contains("    pub status: WidgetStatus,\n"));
    assert!(source.contains("    pub category: Option<Code>,\n"));
    assert!(source.contains("    #[fhir_serde(rename = \"type\")]\n    pub r#type: Option<String>,\n"));
    assert!(source.contains(
        "    #[fhir_serde(rename = \"abstract\")]\n    pub r#abstract: Option<Boolean>,\n"
    ));
    assert!(source.contains(
        "    /// When the widget\\[x\\] started\n    #[fhir_serde(flatten)]\n    pub onset: WidgetOnset,\n"
    ));
    assert!(source.contains("    pub identifier: Option<Vec<Identifier>>,\n"));
    assert!(source.contains("    pub part: Option<Vec<WidgetPart>>,\n"));
    assert!(source.ends_with("}\n"));
}

#[test]
fn renders_backbone_and_content_reference() {
    let registry = model(&[]);
    let source = render_type_file(&registry, "Widget", FhirVersion::R4);

    assert!(source.contains(
        "/// Parts of the widget\n#[derive(Debug, Clone, PartialEq, FhirSerde, FhirNew)]\npub struct WidgetPart {\n"
    ));
    assert!(source.contains("    pub label: String,\n"));
    assert!(source.contains("    pub subpart: Option<Vec<WidgetPart>>,\n"));
    assert!(!source.contains("retired"));
    // The enum comes before the struct that uses it, backbones after the root.
    let onset = source.find("pub enum WidgetOnset").unwrap();
    let widget = source.find("pub struct Widget {").unwrap();
    let part = source.find("pub struct WidgetPart").unwrap();
    assert!(onset < widget && widget < part);
}

#[test]
fn optional_only_structs_derive_default() {
    let registry = model(&[]);
    let period = render_type_file(&registry, "Period", FhirVersion::R4);
    assert!(period.contains("#[derive(Debug, Clone, PartialEq, Default, FhirSerde, FhirNew)]\npub struct Period {"));

    let extension = render_type_file(&registry, "Extension", FhirVersion::R4);
    assert!(extension.contains("#[derive(Debug, Clone, PartialEq, FhirSerde, FhirNew)]\npub struct Extension {"));
    assert!(extension.contains("    pub url: String,\n"));
}

#[test]
fn boxes_the_identifier_reference_cycle_once() {
    let registry = model(&[]);

    let identifier = render_type_file(&registry, "Identifier", FhirVersion::R4);
    assert!(identifier.contains("    pub assigner: Option<Box<Reference>>,\n"));
    assert!(identifier.contains("    #[fhir_serde(rename = \"use\")]\n    pub r#use: Option<IdentifierUse>,\n"));

    let reference = render_type_file(&registry, "Reference", FhirVersion::R4);
    assert!(reference.contains("    pub identifier: Option<Identifier>,\n"));
}

#[test]
fn aliases_follow_their_base_struct() {
    let registry = model(&[]);
    let quantity = render_type_file(&registry, "Quantity", FhirVersion::R4);
    assert!(quantity.ends_with(
        "}\n\n/// A duration of time during which an organism (or a process) has existed\npub type Age = Quantity;\n"
    ));
}

#[test]
fn drops_choice_variants_for_types_not_generated() {
    let registry = model(&[]);
    assert_eq!(
        choice_variants(&registry, "Extension", "value"),
        ["Boolean", "String", "Identifier"]
    );
    assert_eq!(
        choice_variants(&registry, "Widget", "onset"),
        ["DateTime", "Age", "Period"]
    );
}

#[test]
fn only_keeps_reachable_types() {
    let registry = model(&["Widget"]);

    let names: Vec<&str> = registry.types.keys().map(String::as_str).collect();
    assert_eq!(names, ["Extension", "Identifier", "Period", "Reference", "Widget", "WidgetPart"]);
    assert!(registry.aliases.is_empty());
    // Age is only reachable through the choice, so its variant goes.
    assert_eq!(choice_variants(&registry, "Widget", "onset"), ["DateTime", "Period"]);
}

#[test]
fn only_rejects_unknown_and_backbone_names() {
    let definitions = load_definitions(&definitions_dir()).unwrap();
    for name in ["Gadget", "WidgetPart"] {
        let error = build_model(&definitions, &[name.to_string()]).unwrap_err();
        assert!(matches!(error, GeneratorError::UnknownType(ref n) if n == name));
    }
}

#[test]
fn renders_required_bindings_as_code_systems() {
    let registry = model(&[]);
    let names: Vec<&str> = registry.code_systems.keys().map(String::as_str).collect();
    assert_eq!(names, ["IdentifierUse", "WidgetStatus"]);

    let source = render_code_systems(&registry, FhirVersion::R4);
    assert!(source.contains(
        "code_system! {\n\
         \x20   /// Identifies the purpose for this identifier, if known .\n\
         \x20   IdentifierUse, system = \"http://hl7.org/fhir/identifier-use\" {\n\
         \x20       /// The identifier recommended for display and use in real-world interactions.\n\
         \x20       Usual => (\"usual\", \"Usual\"),\n"
    ));
    // Nested concepts are flattened in order.
    assert!(source.contains("        Old => (\"old\", \"Old\"),\n    }\n}\n"));
    assert!(source.contains("        EnteredInError => (\"entered-in-error\", \"Entered in Error\"),\n"));
}

#[test]
fn renders_primitive_aliases() {
    let registry = model(&[]);
    let source = render_primitives(&registry, FhirVersion::R4);
    assert!(source.contains("\nuse crate::{PreciseDecimal, PrecisionDateTime};\n"));
    assert!(source.contains("\n/// Value of \"true\" or \"false\"\npub type Boolean = bool;\n"));
    assert!(source.contains("pub type DateTime = PrecisionDateTime;\n"));
    assert!(source.contains("pub type Uri = String;\n"));
    assert!(!source.contains("pub type String"));
}

#[test]
fn generate_writes_module_tree_and_is_idempotent() {
    let output = tempfile::tempdir().unwrap();
    let config = GeneratorConfig {
        definitions: definitions_dir(),
        output: output.path().to_path_buf(),
        fhir_version: FhirVersion::R4,
        only: Vec::new(),
    };

    let summary = generate(&config).unwrap();
    assert_eq!(summary.resources, 1);
    assert_eq!(summary.complex_types, 5);
    assert_eq!(summary.code_systems, 2);

    let module = output.path().join("r4");
    for file in [
        "complex_types/mod.rs",
        "complex_types/identifier.rs",
        "resources/mod.rs",
        "resources/widget.rs",
        "code_systems.rs",
        "primitives.rs",
        "resource.rs",
    ] {
        assert!(module.join(file).is_file(), "missing {file}");
    }
    assert_eq!(summary.written.len(), 11);

    let resources_mod = fs::read_to_string(module.join("resources/mod.rs")).unwrap();
    assert!(resources_mod.ends_with("\npub mod widget;\n\npub use widget::*;\n"));
    let resource_enum = fs::read_to_string(module.join("resource.rs")).unwrap();
    assert!(resource_enum.ends_with(
        "use crate::macros::resource_enum;\nuse crate::r4::*;\n\nresource_enum! {\n    Widget,\n}\n"
    ));

    let again = generate(&config).unwrap();
    assert!(again.written.is_empty());
}

#[test]
fn missing_definitions_directory_is_a_config_error() {
    let output = tempfile::tempdir().unwrap();
    let config = GeneratorConfig {
        definitions: output.path().join("nope"),
        output: output.path().to_path_buf(),
        fhir_version: FhirVersion::R4,
        only: Vec::new(),
    };
    assert!(matches!(generate(&config), Err(GeneratorError::Config(_))));
}
