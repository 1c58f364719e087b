use meridian_fhir_lib::r4::{
    Condition, ConditionOnset, Extension, ExtensionValue, MedicationRequest,
    MedicationRequestMedication, Observation, ObservationValue, Quantity, Reference,
};
use meridian_fhir_lib::{FhirChoice, PrecisionDateTime};
use serde_json::json;

fn condition_with_onset(onset: ConditionOnset) -> Condition {
    let mut condition = Condition::new(Reference::to("Patient/1"));
    condition.onset = Some(onset);
    condition
}

#[test]
fn test_choice_encodes_as_single_typed_key() {
    let onset: PrecisionDateTime = "2012-05-24".parse().expect("Valid dateTime");
    let value = serde_json::to_value(condition_with_onset(ConditionOnset::DateTime(onset)))
        .expect("Failed to encode");
    assert_eq!(value["onsetDateTime"], "2012-05-24");
    assert!(value.get("onset").is_none());
    for key in ["onsetAge", "onsetPeriod", "onsetRange", "onsetString"] {
        assert!(value.get(key).is_none(), "unexpected {key}");
    }
}

#[test]
fn test_choice_decodes_variant_from_key() {
    let condition: Condition = serde_json::from_value(json!({
        "resourceType": "Condition",
        "subject": { "reference": "Patient/1" },
        "onsetString": "in childhood"
    }))
    .expect("Failed to decode");
    assert_eq!(
        condition.onset,
        Some(ConditionOnset::String("in childhood".to_string()))
    );
    assert_eq!(condition.abatement, None);
}

#[test]
fn test_each_variant_round_trips_under_its_key() {
    let cases = [
        (json!({ "valueBoolean": true }), "valueBoolean"),
        (json!({ "valueInteger": 7 }), "valueInteger"),
        (json!({ "valueString": "high" }), "valueString"),
        (json!({ "valueTime": "08:30:00" }), "valueTime"),
        (json!({ "valueQuantity": { "value": 72, "unit": "kg" } }), "valueQuantity"),
        (json!({ "valueCodeableConcept": { "text": "positive" } }), "valueCodeableConcept"),
        (json!({ "valuePeriod": { "start": "2020-01-01" } }), "valuePeriod"),
    ];
    for (entry, key) in cases {
        let mut document = json!({
            "resourceType": "Observation",
            "status": "final",
            "code": { "text": "test" }
        });
        document[key] = entry[key].clone();
        let observation: Observation =
            serde_json::from_value(document.clone()).expect("Failed to decode");
        let value = observation.value.as_ref().expect("value[x] is set");
        assert_eq!(value.wire_key(), key);
        assert_eq!(serde_json::to_value(&observation).expect("Failed to encode"), document);
    }
}

#[test]
fn test_two_keys_of_one_choice_group_are_rejected() {
    let message = serde_json::from_value::<Condition>(json!({
        "resourceType": "Condition",
        "subject": { "reference": "Patient/1" },
        "onsetDateTime": "2012-05-24",
        "onsetString": "in childhood"
    }))
    .expect_err("Two onset[x] values")
    .to_string();
    assert!(
        message.contains("multiple values for choice element onset[x]"),
        "{message}"
    );
}

#[test]
fn test_distinct_choice_groups_coexist() {
    let condition: Condition = serde_json::from_value(json!({
        "resourceType": "Condition",
        "subject": { "reference": "Patient/1" },
        "onsetDateTime": "2012-05-24",
        "abatementString": "resolved in spring"
    }))
    .expect("Failed to decode");
    assert!(condition.onset.is_some());
    assert!(condition.abatement.is_some());
}

#[test]
fn test_required_choice_group() {
    let request = MedicationRequest::new(
        meridian_fhir_lib::r4::MedicationRequestStatus::Active,
        meridian_fhir_lib::r4::MedicationRequestIntent::Order,
        MedicationRequestMedication::Reference(Reference::to("Medication/1")),
        Reference::to("Patient/1"),
    );
    let value = serde_json::to_value(&request).expect("Failed to encode");
    assert_eq!(value["medicationReference"]["reference"], "Medication/1");
}

#[test]
fn test_choice_metadata() {
    assert_eq!(ConditionOnset::BASE_NAME, "onset");
    assert_eq!(ConditionOnset::ELEMENT_NAME, "onset[x]");
    assert_eq!(
        ConditionOnset::KEYS,
        &["onsetDateTime", "onsetAge", "onsetPeriod", "onsetRange", "onsetString"]
    );
    assert!(ObservationValue::KEYS.contains(&"valueSampledData"));
}

#[test]
fn test_extension_value() {
    let extension: Extension = serde_json::from_value(json!({
        "url": "http://example.org/fhir/StructureDefinition/weight",
        "valueQuantity": { "value": 3.2, "unit": "kg" }
    }))
    .expect("Failed to decode");
    match &extension.value {
        Some(ExtensionValue::Quantity(Quantity { unit, .. })) => {
            assert_eq!(unit.as_deref(), Some("kg"))
        }
        other => panic!("unexpected value: {other:?}"),
    }
}

#[test]
fn test_standalone_choice_value() {
    let onset: ConditionOnset =
        serde_json::from_value(json!({ "onsetString": "at birth" })).expect("Failed to decode");
    assert_eq!(onset, ConditionOnset::String("at birth".to_string()));
    assert_eq!(
        serde_json::to_value(&onset).expect("Failed to encode"),
        json!({ "onsetString": "at birth" })
    );

    let message = serde_json::from_value::<ConditionOnset>(json!({}))
        .expect_err("No onset[x] key")
        .to_string();
    assert!(message.contains("missing field `onset[x]`"), "{message}");
}

#[test]
fn test_unsupported_choice_type_is_skipped() {
    let extension: Extension = serde_json::from_value(json!({
        "url": "http://example.org/fhir/StructureDefinition/rule",
        "valueExpression": { "language": "text/fhirpath", "expression": "true" }
    }))
    .expect("Failed to decode");
    assert_eq!(extension.value, None);
    assert_eq!(
        serde_json::to_value(&extension).expect("Failed to encode"),
        json!({ "url": "http://example.org/fhir/StructureDefinition/rule" })
    );
}
