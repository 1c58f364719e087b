use meridian_fhir_lib::r4::{
    Bundle, CarePlan, Coverage, MedicationRequest, Narrative, Observation, Patient,
    StructureDefinition,
};
use serde_json::{Value, json};

/// Removes `key` from a valid document and returns the decode error message.
fn decode_without<T>(mut document: Value, key: &str) -> String
where
    T: serde::de::DeserializeOwned + std::fmt::Debug,
{
    document
        .as_object_mut()
        .expect("Document is an object")
        .remove(key);
    serde_json::from_value::<T>(document)
        .expect_err("Decoding should fail without a required element")
        .to_string()
}

fn care_plan() -> Value {
    json!({
        "resourceType": "CarePlan",
        "status": "active",
        "intent": "plan",
        "subject": { "reference": "Patient/123" }
    })
}

#[test]
fn test_care_plan_with_required_fields_decodes() {
    let plan: CarePlan = serde_json::from_value(care_plan()).expect("Failed to decode");
    assert_eq!(plan.subject.reference.as_deref(), Some("Patient/123"));
}

#[test]
fn test_care_plan_requires_each_required_field() {
    for key in ["status", "intent", "subject"] {
        let message = decode_without::<CarePlan>(care_plan(), key);
        assert!(
            message.contains(&format!("missing field `{key}`")),
            "unexpected error for {key}: {message}"
        );
    }
}

#[test]
fn test_null_required_field_is_rejected() {
    let mut document = care_plan();
    document["subject"] = Value::Null;
    assert!(serde_json::from_value::<CarePlan>(document).is_err());
}

#[test]
fn test_null_optional_field_is_absent() {
    let mut document = care_plan();
    document["title"] = Value::Null;
    let plan: CarePlan = serde_json::from_value(document).expect("Failed to decode");
    assert_eq!(plan.title, None);
}

#[test]
fn test_observation_requires_status_and_code() {
    let observation = json!({
        "resourceType": "Observation",
        "status": "final",
        "code": { "text": "Body weight" }
    });
    serde_json::from_value::<Observation>(observation.clone()).expect("Failed to decode");
    for key in ["status", "code"] {
        let message = decode_without::<Observation>(observation.clone(), key);
        assert!(message.contains(&format!("missing field `{key}`")), "{message}");
    }
}

#[test]
fn test_required_list_must_be_present() {
    let coverage = json!({
        "resourceType": "Coverage",
        "status": "active",
        "beneficiary": { "reference": "Patient/4" },
        "payor": [{ "reference": "Organization/2" }]
    });
    serde_json::from_value::<Coverage>(coverage.clone()).expect("Failed to decode");
    let message = decode_without::<Coverage>(coverage, "payor");
    assert!(message.contains("missing field `payor`"), "{message}");
}

#[test]
fn test_required_choice_group_must_be_present() {
    let request = json!({
        "resourceType": "MedicationRequest",
        "status": "active",
        "intent": "order",
        "subject": { "reference": "Patient/1" },
        "medicationReference": { "reference": "Medication/1" }
    });
    serde_json::from_value::<MedicationRequest>(request.clone()).expect("Failed to decode");
    let message = decode_without::<MedicationRequest>(request, "medicationReference");
    assert!(message.contains("missing field `medication[x]`"), "{message}");
}

#[test]
fn test_structure_definition_required_fields() {
    let definition = json!({
        "resourceType": "StructureDefinition",
        "url": "http://example.org/StructureDefinition/x",
        "name": "X",
        "status": "draft",
        "kind": "logical",
        "abstract": false,
        "type": "http://example.org/StructureDefinition/x"
    });
    serde_json::from_value::<StructureDefinition>(definition.clone()).expect("Failed to decode");
    for key in ["url", "name", "status", "kind", "abstract", "type"] {
        let message = decode_without::<StructureDefinition>(definition.clone(), key);
        assert!(message.contains(&format!("missing field `{key}`")), "{message}");
    }
}

#[test]
fn test_backbone_and_datatype_required_fields() {
    let patient = json!({
        "resourceType": "Patient",
        "link": [{ "type": "refer" }]
    });
    let message = serde_json::from_value::<Patient>(patient)
        .expect_err("Patient.link.other is required")
        .to_string();
    assert!(message.contains("missing field `other`"), "{message}");

    let message = serde_json::from_value::<Narrative>(json!({ "status": "generated" }))
        .expect_err("Narrative.div is required")
        .to_string();
    assert!(message.contains("missing field `div`"), "{message}");

    let message = serde_json::from_value::<Bundle>(json!({ "resourceType": "Bundle" }))
        .expect_err("Bundle.type is required")
        .to_string();
    assert!(message.contains("missing field `type`"), "{message}");
}

#[test]
fn test_wrong_value_type_is_rejected() {
    let mut document = care_plan();
    document["subject"] = json!("Patient/123");
    assert!(serde_json::from_value::<CarePlan>(document).is_err());

    let mut document = care_plan();
    document["status"] = json!("finished");
    let message = serde_json::from_value::<CarePlan>(document)
        .expect_err("Unknown status code")
        .to_string();
    assert!(message.contains("unknown variant `finished`"), "{message}");
}

#[test]
fn test_duplicate_key_is_rejected() {
    let json = r#"{"resourceType":"CarePlan","status":"active","status":"draft","intent":"plan","subject":{}}"#;
    let message = serde_json::from_str::<CarePlan>(json)
        .expect_err("Duplicate key")
        .to_string();
    assert!(message.contains("duplicate field `status`"), "{message}");
}

#[test]
fn test_duplicate_key_after_null_is_rejected() {
    let json = r#"{"resourceType":"Patient","gender":null,"gender":"male"}"#;
    let message = serde_json::from_str::<Patient>(json)
        .expect_err("Duplicate key after null")
        .to_string();
    assert!(message.contains("duplicate field `gender`"), "{message}");

    let json = r#"{"resourceType":"Patient","active":true,"active":null}"#;
    let message = serde_json::from_str::<Patient>(json)
        .expect_err("Duplicate key ending in null")
        .to_string();
    assert!(message.contains("duplicate field `active`"), "{message}");
}
