// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

use meridian_macros::{FhirNew, FhirSerde};

use crate::r4::*;

/// A Signature - XML DigSig, JWS, Graphical image of signature, etc.
///
/// A signature along with supporting context. The signature may be a digital signature that is cryptographic in nature, or some other signature acceptable to the domain.
#[derive(Debug, Clone, PartialEq, FhirSerde, FhirNew)]
pub struct Signature {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Indication of the reason the entity signed the object(s)
    #[fhir_serde(rename = "type")]
    pub r#type: Vec<Coding>,
    /// When the signature was created
    pub when: Instant,
    /// Who signed
    pub who: Reference,
    /// The party represented
    #[fhir_serde(rename = "onBehalfOf")]
    pub on_behalf_of: Option<Reference>,
    /// The technical format of the signed resources
    #[fhir_serde(rename = "targetFormat")]
    pub target_format: Option<Code>,
    /// The technical format of the signature
    #[fhir_serde(rename = "sigFormat")]
    pub sig_format: Option<Code>,
    /// The actual signature content (XML DigSig. JWS, picture, etc.)
    pub data: Option<Base64Binary>,
}
