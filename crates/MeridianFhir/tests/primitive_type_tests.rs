use meridian_fhir_lib::r4::{Observation, Patient, Period, Quantity, Timing};
use meridian_fhir_lib::{
    DatePrecision, DateTimePrecision, FhirError, PreciseDecimal, PrecisionDate, PrecisionInstant,
};
use rust_decimal_macros::dec;
use serde_json::json;

#[test]
fn test_partial_dates_keep_precision() {
    let patient: Patient =
        serde_json::from_value(json!({ "birthDate": "1974-12" })).expect("Failed to decode");
    let birth_date = patient.birth_date.expect("birthDate is set");
    assert_eq!(birth_date.precision(), DatePrecision::YearMonth);
    assert_eq!(birth_date.year(), 1974);
    assert_eq!(birth_date.month(), Some(12));
    assert_eq!(birth_date.day(), None);
    assert_eq!(birth_date.to_string(), "1974-12");
}

#[test]
fn test_invalid_dates_are_rejected() {
    for bad in ["1974-13", "1974-02-30", "74-12-25", "1974/12/25"] {
        let result = serde_json::from_value::<Patient>(json!({ "birthDate": bad }));
        assert!(result.is_err(), "{bad} should be rejected");
    }
    let error = "2024-1-01"
        .parse::<PrecisionDate>()
        .expect_err("Single digit month");
    assert_eq!(
        error.to_string(),
        "invalid FHIR date `2024-1-01`: expected a two digit month"
    );
    let error: FhirError = error.into();
    assert!(matches!(error, FhirError::DateTime(_)));
}

#[test]
fn test_date_time_requires_zone_with_time() {
    assert!(
        serde_json::from_value::<Period>(json!({ "start": "2015-02-07T13:28:17" })).is_err()
    );
    let period: Period = serde_json::from_value(json!({ "start": "2015-02-07T13:28:17-05:00" }))
        .expect("Failed to decode");
    let start = period.start.expect("start is set");
    assert_eq!(start.precision(), DateTimePrecision::Second);
    assert_eq!(start.offset_seconds(), Some(-5 * 3600));
}

#[test]
fn test_instant_requires_full_timestamp() {
    assert!("2016-03-28".parse::<PrecisionInstant>().is_err());
    let observation: Observation = serde_json::from_value(json!({
        "status": "final",
        "code": { "text": "weight" },
        "issued": "2016-03-28T10:20:00.123Z"
    }))
    .expect("Failed to decode");
    let issued = observation.issued.expect("issued is set");
    assert_eq!(issued.to_string(), "2016-03-28T10:20:00.123Z");
}

#[test]
fn test_decimals_keep_value_and_text() {
    let quantity: Quantity =
        serde_json::from_str(r#"{"value":0.10,"unit":"mg"}"#).expect("Failed to decode");
    let value = quantity.value.expect("value is set");
    assert_eq!(value.value(), dec!(0.1));
    assert_eq!(value.original_string(), "0.10");
    assert_eq!(value, PreciseDecimal::from(dec!(0.1)));
}

#[test]
fn test_decimals_keep_digits_beyond_double() {
    let json = r#"{"value":0.123456789012345678901}"#;
    let quantity: Quantity = serde_json::from_str(json).expect("Failed to decode");
    let value = quantity.value.as_ref().expect("value is set");
    assert_eq!(value.value(), dec!(0.123456789012345678901));
    assert_eq!(serde_json::to_string(&quantity).expect("Failed to encode"), json);
}

#[test]
fn test_integer_ranges() {
    assert!(serde_json::from_value::<Timing>(json!({ "repeat": { "count": -1 } })).is_err());
    let timing: Timing =
        serde_json::from_value(json!({ "repeat": { "count": 3 } })).expect("Failed to decode");
    assert_eq!(timing.repeat.and_then(|repeat| repeat.count), Some(3));
}
