// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

use meridian_macros::{FhirNew, FhirSerde};

use crate::r4::*;

/// Details of a Technology mediated contact point (phone, fax, email, etc.)
///
/// Details for all kinds of technology mediated contact points for a person or organization, including telephone, email, etc.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde, FhirNew)]
pub struct ContactPoint {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// phone | fax | email | pager | url | sms | other
    pub system: Option<ContactPointSystem>,
    /// The actual contact point details
    pub value: Option<String>,
    /// home | work | temp | old | mobile - purpose of this contact point
    #[fhir_serde(rename = "use")]
    pub r#use: Option<ContactPointUse>,
    /// Specify preferred order of use (1 = highest)
    pub rank: Option<PositiveInt>,
    /// Time period when the contact point was/is in use
    pub period: Option<Period>,
}
