use std::str::FromStr;

use meridian_fhir_lib::r4::{
    CarePlanIntent, HttpVerb, ObservationStatus, QuantityComparator, RequestStatus, ToCoding,
};
use meridian_fhir_lib::{FhirCode, FhirError};

#[test]
fn test_codes_serialize_as_fhir_codes() {
    assert_eq!(
        serde_json::to_string(&RequestStatus::EnteredInError).expect("Failed to encode"),
        r#""entered-in-error""#
    );
    assert_eq!(
        serde_json::to_string(&QuantityComparator::LessOrEqualTo).expect("Failed to encode"),
        r#""<=""#
    );
    assert_eq!(
        serde_json::from_str::<HttpVerb>(r#""POST""#).expect("Failed to decode"),
        HttpVerb::Post
    );
}

#[test]
fn test_unknown_code_is_rejected() {
    assert!(serde_json::from_str::<ObservationStatus>(r#""done""#).is_err());
    assert!(serde_json::from_str::<RequestStatus>(r#""Active""#).is_err());

    match RequestStatus::from_str("finished") {
        Err(FhirError::UnknownCode { system, code }) => {
            assert_eq!(system, "http://hl7.org/fhir/request-status");
            assert_eq!(code, "finished");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_code_metadata() {
    assert_eq!(CarePlanIntent::Plan.as_code(), "plan");
    assert_eq!(CarePlanIntent::Plan.display(), "Plan");
    assert_eq!(CarePlanIntent::SYSTEM, "http://hl7.org/fhir/request-intent");
    assert_eq!(RequestStatus::from_code("on-hold"), Some(RequestStatus::OnHold));
    assert_eq!(RequestStatus::OnHold.to_string(), "on-hold");
}

#[test]
fn test_code_to_coding() {
    let coding = ObservationStatus::Final.to_coding();
    assert_eq!(coding.system.as_deref(), Some("http://hl7.org/fhir/observation-status"));
    assert_eq!(coding.code.as_deref(), Some("final"));
    assert_eq!(coding.display.as_deref(), Some("Final"));

    let concept = ObservationStatus::Final.to_codeable_concept();
    assert_eq!(concept.coding, Some(vec![coding]));
    assert_eq!(
        concept.coding_for("http://hl7.org/fhir/observation-status").and_then(|c| c.code.as_deref()),
        Some("final")
    );
}
