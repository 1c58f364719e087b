// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

use meridian_macros::{FhirNew, FhirSerde};

use crate::r4::*;

/// Set of values bounded by low and high
///
/// A set of ordered Quantities defined by a low and high limit.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde, FhirNew)]
pub struct Range {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Low limit
    pub low: Option<Quantity>,
    /// High limit
    pub high: Option<Quantity>,
}
