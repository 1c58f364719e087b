mod common;

use common::load_fixture;
use meridian_fhir_lib::r4::{
    Bundle, BundleEntry, BundleType, CarePlan, Condition, Organization, Patient, Resource,
    parse_resource,
};
use serde_json::json;

#[test]
fn test_parse_resource_dispatches_on_resource_type() {
    let resource = parse_resource(&load_fixture("patient-example.json")).expect("Failed to parse");
    assert_eq!(resource.resource_type(), "Patient");
    assert_eq!(resource.id(), Some("example"));
    assert!(matches!(resource, Resource::Patient(_)));

    let resource = parse_resource(&load_fixture("careplan-example.json")).expect("Failed to parse");
    let plan = CarePlan::try_from(resource).expect("Expected a CarePlan");
    assert_eq!(plan.title.as_deref(), Some("Weight management"));
}

#[test]
fn test_missing_resource_type_is_rejected() {
    let message = parse_resource(r#"{"id":"x"}"#)
        .expect_err("No resourceType")
        .to_string();
    assert!(message.contains("missing field `resourceType`"), "{message}");
}

#[test]
fn test_unmodeled_resource_type_is_rejected() {
    let message = parse_resource(r#"{"resourceType":"Encounter","id":"x"}"#)
        .expect_err("Encounter is not modeled")
        .to_string();
    assert!(message.contains("unknown variant `Encounter`"), "{message}");
}

#[test]
fn test_resource_encodes_like_inner_record() {
    let organization = Organization {
        name: Some("Acme".to_string()),
        ..Organization::default()
    };
    let resource = Resource::from(organization.clone());
    assert_eq!(
        serde_json::to_value(&resource).expect("Failed to encode"),
        serde_json::to_value(&organization).expect("Failed to encode")
    );
    assert_eq!(
        Organization::try_from(resource).expect("Expected an Organization"),
        organization
    );
}

#[test]
fn test_try_from_wrong_variant_returns_resource() {
    let resource = Resource::from(Patient::default());
    let back = Organization::try_from(resource).expect_err("Not an Organization");
    assert_eq!(back.resource_type(), "Patient");
}

#[test]
fn test_contained_resources_are_polymorphic() {
    let plan: CarePlan =
        serde_json::from_str(&load_fixture("careplan-example.json")).expect("Failed to decode");
    let contained = plan.contained.expect("CarePlan has contained resources");
    match &contained[0] {
        Resource::Condition(Condition { id, code, .. }) => {
            assert_eq!(id.as_deref(), Some("p1"));
            assert_eq!(code.as_ref().and_then(|c| c.text.as_deref()), Some("Obesity"));
        }
        other => panic!("unexpected contained resource: {other:?}"),
    }
}

#[test]
fn test_bundle_entries() {
    let bundle: Bundle =
        serde_json::from_str(&load_fixture("bundle-example.json")).expect("Failed to decode");
    assert_eq!(bundle.r#type, BundleType::Searchset);
    assert_eq!(bundle.total, Some(2));

    let types: Vec<&str> = bundle
        .entry
        .iter()
        .flatten()
        .filter_map(|entry| entry.resource.as_ref())
        .map(Resource::resource_type)
        .collect();
    assert_eq!(types, ["Patient", "Organization"]);
}

#[test]
fn test_build_collection_bundle() {
    let mut bundle = Bundle::new(BundleType::Collection);
    bundle.entry = Some(vec![BundleEntry {
        full_url: Some("urn:uuid:1".to_string()),
        resource: Some(Patient::default().into()),
        ..BundleEntry::default()
    }]);
    assert_eq!(
        serde_json::to_value(&bundle).expect("Failed to encode"),
        json!({
            "resourceType": "Bundle",
            "type": "collection",
            "entry": [
                { "fullUrl": "urn:uuid:1", "resource": { "resourceType": "Patient" } }
            ]
        })
    );
}

#[test]
fn test_resource_type_list() {
    assert_eq!(Resource::RESOURCE_TYPES.len(), 10);
    assert!(Resource::RESOURCE_TYPES.contains(&"StructureDefinition"));
}
