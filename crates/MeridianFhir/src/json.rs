//! JSON entry points that report failures as [`FhirError`].
//!
//! These are thin wrappers over `serde_json`; any model type can equally be
//! used with `serde_json` directly.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Decodes a model type from JSON text.
///
/// ```
/// # #[cfg(feature = "R4")]
/// # {
/// use meridian_fhir_lib::r4::Reference;
///
/// let reference: Reference = meridian_fhir_lib::json::from_str(r#"{"reference":"Patient/123"}"#).unwrap();
/// assert_eq!(reference.reference.as_deref(), Some("Patient/123"));
/// # }
/// ```
pub fn from_str<T: DeserializeOwned>(json: &str) -> Result<T> {
    let value = serde_json::from_str(json)?;
    tracing::debug!(target_type = std::any::type_name::<T>(), "decoded FHIR JSON");
    Ok(value)
}

pub fn from_slice<T: DeserializeOwned>(json: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(json)?)
}

pub fn from_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}

pub fn to_string<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

pub fn to_string_pretty<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn to_value<T: Serialize>(value: &T) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(value)?)
}
