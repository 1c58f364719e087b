// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

use meridian_macros::{FhirNew, FhirSerde};

use crate::r4::*;

/// A reference from one resource to another
///
/// A reference from one resource to another.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde, FhirNew)]
pub struct Reference {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Literal reference, Relative, internal or absolute URL
    pub reference: Option<String>,
    /// Type the reference refers to (e.g. "Patient")
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Uri>,
    /// Logical reference, when literal reference is not known
    pub identifier: Option<Identifier>,
    /// Text alternative for the resource
    pub display: Option<String>,
}
