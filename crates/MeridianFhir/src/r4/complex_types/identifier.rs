// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

use meridian_macros::{FhirNew, FhirSerde};

use crate::r4::*;

/// An identifier intended for computation
///
/// An identifier - identifies some entity uniquely and unambiguously. Typically this is used for business identifiers.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde, FhirNew)]
pub struct Identifier {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// usual | official | temp | secondary | old (If known)
    #[fhir_serde(rename = "use")]
    pub r#use: Option<IdentifierUse>,
    /// Description of identifier
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// The namespace for the identifier value
    pub system: Option<Uri>,
    /// The value that is unique
    pub value: Option<String>,
    /// Time period when id is/was valid for use
    pub period: Option<Period>,
    /// Organization that issued id (may be just text)
    pub assigner: Option<Box<Reference>>,
}
