mod common;

use common::assert_round_trip;
use meridian_fhir_lib::r4::{
    Bundle, CarePlan, Condition, Coverage, MedicationRequest, Observation, ObservationValue,
    Organization, Patient, Practitioner, StructureDefinition,
};

#[test]
fn test_care_plan_round_trip() {
    let plan: CarePlan = assert_round_trip("careplan-example.json");
    assert_eq!(plan.id.as_deref(), Some("example"));
    assert_eq!(plan.contained.as_ref().map(Vec::len), Some(1));
}

#[test]
fn test_condition_round_trip() {
    assert_round_trip::<Condition>("condition-example.json");
}

#[test]
fn test_observation_round_trip() {
    let observation: Observation = assert_round_trip("observation-example.json");
    assert_eq!(observation.component.as_ref().map(Vec::len), Some(2));
    let Some(ObservationValue::Quantity(quantity)) = &observation.value else {
        panic!("expected valueQuantity");
    };
    let weight = quantity.value.as_ref().expect("value is set");
    assert_eq!(weight.original_string(), "185.00");
}

#[test]
fn test_patient_round_trip() {
    let patient: Patient = assert_round_trip("patient-example.json");
    let names = patient.name.expect("Patient has names");
    assert_eq!(names[0].given.as_deref(), Some(&["Peter".to_string(), "James".to_string()][..]));
}

#[test]
fn test_practitioner_round_trip() {
    assert_round_trip::<Practitioner>("practitioner-example.json");
}

#[test]
fn test_organization_round_trip() {
    assert_round_trip::<Organization>("organization-example.json");
}

#[test]
fn test_medication_request_round_trip() {
    assert_round_trip::<MedicationRequest>("medicationrequest-example.json");
}

#[test]
fn test_coverage_round_trip() {
    let coverage: Coverage = assert_round_trip("coverage-example.json");
    assert_eq!(coverage.payor.len(), 1);
}

#[test]
fn test_structure_definition_round_trip() {
    assert_round_trip::<StructureDefinition>("structuredefinition-example.json");
}

#[test]
fn test_bundle_round_trip() {
    assert_round_trip::<Bundle>("bundle-example.json");
}

/// List order survives a round trip even when entries repeat.
#[test]
fn test_list_order_and_duplicates_preserved() {
    let json = r#"{"resourceType":"Organization","alias":["b","a","b"]}"#;
    let organization: Organization = serde_json::from_str(json).expect("Failed to decode");
    assert_eq!(
        organization.alias.as_deref(),
        Some(&["b".to_string(), "a".to_string(), "b".to_string()][..])
    );
    assert_eq!(serde_json::to_string(&organization).expect("Failed to encode"), json);
}

/// Lexical forms of decimals and partial dates are written back unchanged.
#[test]
fn test_lexical_forms_preserved() {
    let json = r#"{"value":1.50,"unit":"mg"}"#;
    let quantity: meridian_fhir_lib::r4::Quantity =
        serde_json::from_str(json).expect("Failed to decode");
    assert_eq!(serde_json::to_string(&quantity).expect("Failed to encode"), json);

    let json = r#"{"start":"2012","end":"2013-06"}"#;
    let period: meridian_fhir_lib::r4::Period =
        serde_json::from_str(json).expect("Failed to decode");
    assert_eq!(serde_json::to_string(&period).expect("Failed to encode"), json);
}

/// Decimals nested in a polymorphic resource keep their text.
#[test]
fn test_resource_decimals_keep_trailing_zeros() {
    let json = r#"{"resourceType":"Observation","status":"final","code":{"text":"heart rate"},"valueQuantity":{"value":72.00,"unit":"/min"}}"#;
    let resource = meridian_fhir_lib::r4::parse_resource(json).expect("Failed to decode");
    assert_eq!(serde_json::to_string(&resource).expect("Failed to encode"), json);
}
