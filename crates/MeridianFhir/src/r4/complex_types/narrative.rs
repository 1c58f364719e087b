// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

use meridian_macros::{FhirNew, FhirSerde};

use crate::r4::*;

/// Human-readable summary of the resource (essential clinical and business information)
///
/// A human-readable summary of the resource conveying the essential clinical and business information for the resource.
#[derive(Debug, Clone, PartialEq, FhirSerde, FhirNew)]
pub struct Narrative {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// generated | extensions | additional | empty
    pub status: NarrativeStatus,
    /// Limited xhtml content
    pub div: Xhtml,
}
