// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

use meridian_macros::{FhirNew, FhirSerde};

use crate::r4::*;

/// An amount of economic utility in some recognized currency
///
/// An amount of economic utility in some recognized currency.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde, FhirNew)]
pub struct Money {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Numerical value (with implicit precision)
    pub value: Option<Decimal>,
    /// ISO 4217 Currency Code
    pub currency: Option<Code>,
}
