//! FHIR R4 (4.0.1) model.
//!
//! The submodules are produced by `meridian-fhir-gen` from the published R4
//! StructureDefinitions and are re-exported flat, so every type is reachable
//! as `meridian_fhir_lib::r4::Name`. The helpers in this file are written by
//! hand.

pub mod code_systems;
pub mod complex_types;
pub mod primitives;
pub mod resource;
pub mod resources;

pub use code_systems::*;
pub use complex_types::*;
pub use primitives::*;
pub use resource::*;
pub use resources::*;

use crate::FhirCode;

impl Reference {
    /// A literal reference such as `"Patient/123"`.
    pub fn to(reference: impl Into<String>) -> Self {
        Reference {
            reference: Some(reference.into()),
            ..Reference::default()
        }
    }

    /// Splits a relative literal reference into its type and id.
    ///
    /// Returns `None` for absolute URLs, fragment references (`#id`) and
    /// references without a literal part.
    pub fn target(&self) -> Option<(&str, &str)> {
        let reference = self.reference.as_deref()?;
        if reference.starts_with('#') || reference.contains("://") {
            return None;
        }
        let mut parts = reference.split('/');
        let resource_type = parts.next().filter(|part| !part.is_empty())?;
        let id = parts.next().filter(|part| !part.is_empty())?;
        Some((resource_type, id))
    }
}

impl CodeableConcept {
    /// A concept carrying only free text.
    pub fn from_text(text: impl Into<String>) -> Self {
        CodeableConcept {
            text: Some(text.into()),
            ..CodeableConcept::default()
        }
    }

    /// The first coding whose system matches, if any.
    pub fn coding_for(&self, system: &str) -> Option<&Coding> {
        self.coding
            .iter()
            .flatten()
            .find(|coding| coding.system.as_deref() == Some(system))
    }
}

/// Converts a required-binding code into the generic coded forms used by
/// elements with weaker bindings.
pub trait ToCoding {
    fn to_coding(&self) -> Coding;

    fn to_codeable_concept(&self) -> CodeableConcept {
        CodeableConcept {
            coding: Some(vec![self.to_coding()]),
            ..CodeableConcept::default()
        }
    }
}

impl<T: FhirCode> ToCoding for T {
    fn to_coding(&self) -> Coding {
        Coding {
            system: Some(self.system().to_string()),
            code: Some(self.as_code().to_string()),
            display: Some(self.display().to_string()),
            ..Coding::default()
        }
    }
}

/// Decodes any R4 resource from JSON, dispatching on `resourceType`.
pub fn parse_resource(json: &str) -> crate::Result<Resource> {
    let resource: Resource = serde_json::from_str(json)?;
    tracing::debug!(
        resource_type = resource.resource_type(),
        id = resource.id(),
        "parsed R4 resource"
    );
    Ok(resource)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_resource_dispatches_on_resource_type() {
        let resource =
            parse_resource(r#"{"resourceType":"Patient","id":"p1","active":true}"#).unwrap();
        assert_eq!(resource.resource_type(), "Patient");
        assert_eq!(resource.id(), Some("p1"));
    }

    #[test]
    fn parse_resource_reports_decode_errors() {
        let error = parse_resource(r#"{"resourceType":"Patient","active":"yes"}"#).unwrap_err();
        assert!(matches!(error, crate::FhirError::Json(_)));
    }

    #[test]
    fn reference_target_splits_relative_references() {
        assert_eq!(Reference::to("Patient/123").target(), Some(("Patient", "123")));
        assert_eq!(Reference::to("#contained").target(), None);
        assert_eq!(Reference::to("http://example.org/Patient/1").target(), None);
    }
}
