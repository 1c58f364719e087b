// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

use meridian_macros::{FhirNew, FhirSerde};

use crate::r4::*;

/// Name of a human - parts and usage
///
/// A human's name with the ability to identify parts and usage.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde, FhirNew)]
pub struct HumanName {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// usual | official | temp | nickname | anonymous | old | maiden
    #[fhir_serde(rename = "use")]
    pub r#use: Option<NameUse>,
    /// Text representation of the full name
    pub text: Option<String>,
    /// Family name (often called 'Surname')
    pub family: Option<String>,
    /// Given names (not always 'first'). Includes middle names
    pub given: Option<Vec<String>>,
    /// Parts that come before the name
    pub prefix: Option<Vec<String>>,
    /// Parts that come after the name
    pub suffix: Option<Vec<String>>,
    /// Time period when name was/is in use
    pub period: Option<Period>,
}
