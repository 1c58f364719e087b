// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

use meridian_macros::{FhirNew, FhirSerde};

use crate::r4::*;

/// A ratio of two Quantity values - a numerator and a denominator
///
/// A relationship of two Quantity values - expressed as a numerator and a denominator.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde, FhirNew)]
pub struct Ratio {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Numerator value
    pub numerator: Option<Quantity>,
    /// Denominator value
    pub denominator: Option<Quantity>,
}
