use meridian_fhir_lib::r4::{
    CarePlan, CarePlanActivity, CarePlanActivityDetail, CarePlanActivityDetailScheduled,
    CarePlanActivityStatus, CarePlanIntent, Period, Reference, RequestStatus,
};
use meridian_fhir_lib::FhirResource;
use meridian_fhir_lib::json as fhir_json;
use serde_json::json;

fn minimal() -> CarePlan {
    CarePlan::new(
        RequestStatus::Active,
        CarePlanIntent::Plan,
        Reference::to("Patient/123"),
    )
}

#[test]
fn test_minimal_care_plan_encoding() {
    let value = fhir_json::to_value(&minimal()).expect("Failed to encode");
    assert_eq!(
        value,
        json!({
            "resourceType": "CarePlan",
            "status": "active",
            "intent": "plan",
            "subject": { "reference": "Patient/123" }
        })
    );
    assert_eq!(
        value.as_object().map(|object| object.len()),
        Some(4),
        "no other keys are written"
    );
}

#[test]
fn test_minimal_care_plan_decoding() {
    let plan: CarePlan = fhir_json::from_str(
        r#"{"resourceType":"CarePlan","status":"active","intent":"plan","subject":{"reference":"Patient/123"}}"#,
    )
    .expect("Failed to decode");
    assert_eq!(plan, minimal());
    assert_eq!(plan.resource_type(), "CarePlan");
    assert_eq!(plan.subject.target(), Some(("Patient", "123")));
    assert!(plan.activity.is_none());
}

#[test]
fn test_care_plan_with_activity() {
    let mut detail = CarePlanActivityDetail::new(CarePlanActivityStatus::Scheduled);
    detail.scheduled = Some(CarePlanActivityDetailScheduled::Period(Period {
        start: Some("2024-01-01".parse().expect("Valid dateTime")),
        ..Period::default()
    }));
    let activity = CarePlanActivity {
        detail: Some(detail),
        ..CarePlanActivity::default()
    };
    let mut plan = minimal();
    plan.activity = Some(vec![activity]);

    let value = fhir_json::to_value(&plan).expect("Failed to encode");
    assert_eq!(
        value["activity"],
        json!([{
            "detail": {
                "status": "scheduled",
                "scheduledPeriod": { "start": "2024-01-01" }
            }
        }])
    );
    let decoded: CarePlan = fhir_json::from_value(value).expect("Failed to decode");
    assert_eq!(decoded, plan);
}

#[test]
fn test_references_stay_opaque() {
    let reference: Reference =
        fhir_json::from_str(r##"{"reference":"#p1","display":"obesity"}"##).expect("Failed to decode");
    assert_eq!(reference.target(), None);
    let absolute = Reference::to("http://example.org/fhir/Patient/1");
    assert_eq!(absolute.target(), None);
    assert_eq!(Reference::default().target(), None);
}
