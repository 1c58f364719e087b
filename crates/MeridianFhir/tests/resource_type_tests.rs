use meridian_fhir_lib::FhirResource;
use meridian_fhir_lib::r4::{
    Bundle, BundleType, CarePlan, CarePlanIntent, Condition, Organization, Patient, Reference,
    RequestStatus,
};
use serde_json::json;

#[test]
fn test_resource_type_is_constant_per_type() {
    assert_eq!(CarePlan::RESOURCE_TYPE, "CarePlan");
    assert_eq!(Condition::RESOURCE_TYPE, "Condition");
    assert_eq!(Bundle::RESOURCE_TYPE, "Bundle");

    let empty = Patient::default();
    let populated = Patient {
        id: Some("p1".to_string()),
        active: Some(true),
        ..Patient::default()
    };
    assert_eq!(empty.resource_type(), "Patient");
    assert_eq!(populated.resource_type(), "Patient");
    assert_eq!(populated.id(), Some("p1"));
    assert_eq!(empty.id(), None);
}

#[test]
fn test_resource_type_written_first() {
    let plan = CarePlan::new(
        RequestStatus::Active,
        CarePlanIntent::Plan,
        Reference::to("Patient/123"),
    );
    let text = serde_json::to_string(&plan).expect("Failed to encode");
    assert!(text.starts_with(r#"{"resourceType":"CarePlan""#), "{text}");

    let bundle = Bundle::new(BundleType::Collection);
    let text = serde_json::to_string(&bundle).expect("Failed to encode");
    assert_eq!(text, r#"{"resourceType":"Bundle","type":"collection"}"#);
}

#[test]
fn test_resource_type_may_be_absent_for_concrete_target() {
    let organization: Organization =
        serde_json::from_value(json!({ "name": "Acme" })).expect("Failed to decode");
    assert_eq!(organization.name.as_deref(), Some("Acme"));
    assert_eq!(organization.resource_type(), "Organization");
}

#[test]
fn test_conflicting_resource_type_is_rejected() {
    let message = serde_json::from_value::<Organization>(json!({
        "resourceType": "Patient",
        "name": "Acme"
    }))
    .expect_err("Conflicting resourceType")
    .to_string();
    assert!(message.contains("Patient"), "{message}");
    assert!(message.contains("Organization"), "{message}");
}

#[test]
fn test_datatypes_have_no_resource_type() {
    let value = serde_json::to_value(Reference::to("Patient/1")).expect("Failed to encode");
    assert!(value.get("resourceType").is_none());
}
