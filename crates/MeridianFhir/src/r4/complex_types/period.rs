// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

use meridian_macros::{FhirNew, FhirSerde};

use crate::r4::*;

/// Time range defined by start and end date/time
///
/// A time period defined by a start and end date and optionally time.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde, FhirNew)]
pub struct Period {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Starting time with inclusive boundary
    pub start: Option<DateTime>,
    /// End time with inclusive boundary, if not ongoing
    pub end: Option<DateTime>,
}
