// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

use meridian_macros::{FhirNew, FhirSerde};

use crate::r4::*;

/// Contact information
///
/// Specifies contact information for a person or organization.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde, FhirNew)]
pub struct ContactDetail {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Name of an individual to contact
    pub name: Option<String>,
    /// Contact details for individual or organization
    pub telecom: Option<Vec<ContactPoint>>,
}
