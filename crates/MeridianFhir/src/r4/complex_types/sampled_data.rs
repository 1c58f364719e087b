// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

use meridian_macros::{FhirNew, FhirSerde};

use crate::r4::*;

/// A series of measurements taken by a device
///
/// A series of measurements taken by a device, with upper and lower limits. There may be more than one dimension in the data.
#[derive(Debug, Clone, PartialEq, FhirSerde, FhirNew)]
pub struct SampledData {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Zero value and units
    pub origin: Quantity,
    /// Number of milliseconds between samples
    pub period: Decimal,
    /// Multiply data by this before adding to origin
    pub factor: Option<Decimal>,
    /// Lower limit of detection
    #[fhir_serde(rename = "lowerLimit")]
    pub lower_limit: Option<Decimal>,
    /// Upper limit of detection
    #[fhir_serde(rename = "upperLimit")]
    pub upper_limit: Option<Decimal>,
    /// Number of sample points at each time point
    pub dimensions: PositiveInt,
    /// Decimal values with spaces, or "E" | "U" | "L"
    pub data: Option<String>,
}
