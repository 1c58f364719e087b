// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

use meridian_macros::{FhirNew, FhirSerde};

use crate::r4::*;

/// A reference to a code defined by a terminology system
///
/// A reference to a code defined by a terminology system.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde, FhirNew)]
pub struct Coding {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Identity of the terminology system
    pub system: Option<Uri>,
    /// Version of the system - if relevant
    pub version: Option<String>,
    /// Symbol in syntax defined by the system
    pub code: Option<Code>,
    /// Representation defined by the system
    pub display: Option<String>,
    /// If this coding was chosen directly by the user
    #[fhir_serde(rename = "userSelected")]
    pub user_selected: Option<Boolean>,
}
