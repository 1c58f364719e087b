// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

use meridian_macros::{FhirNew, FhirSerde};

use crate::r4::*;

/// Choice of types for the value\[x\] field in UsageContext
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum UsageContextValue {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "valueQuantity")]
    Quantity(Quantity),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "valueRange")]
    Range(Range),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "valueReference")]
    Reference(Reference),
}

/// Describes the context of use for a conformance or knowledge resource
///
/// Specifies clinical/business/etc. metadata that can be used to retrieve, index and/or categorize an artifact.
#[derive(Debug, Clone, PartialEq, FhirSerde, FhirNew)]
pub struct UsageContext {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Type of context being specified
    pub code: Coding,
    /// Value that defines the context
    #[fhir_serde(flatten)]
    pub value: UsageContextValue,
}
