// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

use meridian_macros::{FhirNew, FhirSerde};

use crate::r4::*;

/// Metadata about a resource
///
/// The metadata about a resource. This is content in the resource that is maintained by the infrastructure. Changes to the content might not always be associated with version changes to the resource.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde, FhirNew)]
pub struct Meta {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Version specific identifier
    #[fhir_serde(rename = "versionId")]
    pub version_id: Option<Id>,
    /// When the resource version last changed
    #[fhir_serde(rename = "lastUpdated")]
    pub last_updated: Option<Instant>,
    /// Identifies where the resource comes from
    pub source: Option<Uri>,
    /// Profiles this resource claims to conform to
    pub profile: Option<Vec<Canonical>>,
    /// Security Labels applied to this resource
    pub security: Option<Vec<Coding>>,
    /// Tags applied to this resource
    pub tag: Option<Vec<Coding>>,
}
