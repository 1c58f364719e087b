// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

use meridian_macros::{FhirNew, FhirSerde};

use crate::r4::*;

/// Concept - reference to a terminology or just  text
///
/// A concept that may be defined by a formal reference to a terminology or ontology or may be provided by text.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde, FhirNew)]
pub struct CodeableConcept {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Code defined by a terminology system
    pub coding: Option<Vec<Coding>>,
    /// Plain text representation of the concept
    pub text: Option<String>,
}
