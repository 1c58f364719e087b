// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

use meridian_macros::{FhirNew, FhirSerde};

use crate::r4::*;

/// Content in a format defined elsewhere
///
/// For referring to data content defined in other formats.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde, FhirNew)]
pub struct Attachment {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Mime type of the content, with charset etc.
    #[fhir_serde(rename = "contentType")]
    pub content_type: Option<Code>,
    /// Human language of the content (BCP-47)
    pub language: Option<Code>,
    /// Data inline, base64ed
    pub data: Option<Base64Binary>,
    /// Uri where the data can be found
    pub url: Option<Url>,
    /// Number of bytes of content (if url provided)
    pub size: Option<UnsignedInt>,
    /// Hash of the data (sha-1, base64ed)
    pub hash: Option<Base64Binary>,
    /// Label to display in place of the data
    pub title: Option<String>,
    /// Date attachment was first created
    pub creation: Option<DateTime>,
}
