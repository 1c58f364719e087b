use meridian_fhir_lib::r4::{
    CodeableConcept, Coverage, CoverageClass, FinancialResourceStatusCodes, Identifier,
    IdentifierUse, PublicationStatus, Reference, StructureDefinition, StructureDefinitionKind,
};
use serde_json::json;

fn coverage() -> Coverage {
    let mut coverage = Coverage::new(
        FinancialResourceStatusCodes::Active,
        Reference::to("Patient/4"),
        vec![Reference::to("Organization/2")],
    );
    coverage.class = Some(vec![CoverageClass::new(
        CodeableConcept::from_text("group"),
        "CB135".to_string(),
    )]);
    coverage
}

fn structure_definition() -> StructureDefinition {
    let mut definition = StructureDefinition::new(
        "http://example.org/StructureDefinition/x".to_string(),
        "X".to_string(),
        PublicationStatus::Draft,
        StructureDefinitionKind::Resource,
        true,
        "DomainResource".to_string(),
    );
    definition.fhir_version = Some("4.0.1".to_string());
    definition
}

#[test]
fn test_coverage_class_wire_key() {
    let value = serde_json::to_value(coverage()).expect("Failed to encode");
    assert_eq!(value["class"][0]["value"], "CB135");
    assert!(value.get("clazz").is_none());

    let decoded: Coverage = serde_json::from_value(value).expect("Failed to decode");
    assert_eq!(decoded, coverage());
}

#[test]
fn test_structure_definition_reserved_word_keys() {
    let value = serde_json::to_value(structure_definition()).expect("Failed to encode");
    assert_eq!(value["fhirVersion"], "4.0.1");
    assert_eq!(value["abstract"], true);
    assert_eq!(value["type"], "DomainResource");
    for key in ["fhirVer", "fhir_version", "abstrakt", "r#abstract"] {
        assert!(value.get(key).is_none(), "unexpected key {key}");
    }

    let decoded: StructureDefinition = serde_json::from_value(value).expect("Failed to decode");
    assert_eq!(decoded, structure_definition());
}

#[test]
fn test_reserved_words_decode_from_wire_keys() {
    let definition: StructureDefinition = serde_json::from_value(json!({
        "resourceType": "StructureDefinition",
        "url": "http://example.org/StructureDefinition/y",
        "name": "Y",
        "status": "active",
        "kind": "complex-type",
        "abstract": false,
        "type": "Y",
        "fhirVersion": "4.0.1"
    }))
    .expect("Failed to decode");
    assert!(!definition.r#abstract);
    assert_eq!(definition.fhir_version.as_deref(), Some("4.0.1"));
    assert_eq!(definition.r#type, "Y");
}

#[test]
fn test_camel_case_wire_keys() {
    let mut identifier = Identifier {
        r#use: Some(IdentifierUse::Official),
        value: Some("123".to_string()),
        ..Identifier::default()
    };
    identifier.assigner = Some(Box::new(Reference::to("Organization/1")));

    let value = serde_json::to_value(&identifier).expect("Failed to encode");
    assert_eq!(
        value,
        json!({
            "use": "official",
            "value": "123",
            "assigner": { "reference": "Organization/1" }
        })
    );

    let mut coverage = coverage();
    coverage.subscriber_id = Some("A-1".to_string());
    let value = serde_json::to_value(&coverage).expect("Failed to encode");
    assert_eq!(value["subscriberId"], "A-1");
    assert!(value.get("subscriber_id").is_none());
}

#[test]
fn test_absent_fields_are_omitted() {
    let value = serde_json::to_value(Reference::default()).expect("Failed to encode");
    assert_eq!(value, json!({}));

    let mut coverage = coverage();
    coverage.contract = Some(Vec::new());
    let text = serde_json::to_string(&coverage).expect("Failed to encode");
    assert!(!text.contains("null"));
    assert!(!text.contains("contract"));
}
