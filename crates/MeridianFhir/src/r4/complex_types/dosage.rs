// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

use meridian_macros::{FhirNew, FhirSerde};

use crate::r4::*;

/// Choice of types for the asNeeded\[x\] field in Dosage
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "asNeeded")]
pub enum DosageAsNeeded {
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "asNeededBoolean")]
    Boolean(Boolean),
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "asNeededCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

/// How the medication is/was taken or should be taken
///
/// Indicates how the medication is/was taken or should be taken by the patient.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde, FhirNew)]
pub struct Dosage {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The order of the dosage instructions
    pub sequence: Option<Integer>,
    /// Free text dosage instructions e.g. SIG
    pub text: Option<String>,
    /// Supplemental instruction or warnings to the patient - e.g. "with meals", "may cause drowsiness"
    #[fhir_serde(rename = "additionalInstruction")]
    pub additional_instruction: Option<Vec<CodeableConcept>>,
    /// Patient or consumer oriented instructions
    #[fhir_serde(rename = "patientInstruction")]
    pub patient_instruction: Option<String>,
    /// When medication should be administered
    pub timing: Option<Timing>,
    /// Take "as needed" (for x)
    #[fhir_serde(flatten)]
    pub as_needed: Option<DosageAsNeeded>,
    /// Body site to administer to
    pub site: Option<CodeableConcept>,
    /// How drug should enter body
    pub route: Option<CodeableConcept>,
    /// Technique for administering medication
    pub method: Option<CodeableConcept>,
    /// Amount of medication administered
    #[fhir_serde(rename = "doseAndRate")]
    pub dose_and_rate: Option<Vec<DosageDoseAndRate>>,
    /// Upper limit on medication per unit of time
    #[fhir_serde(rename = "maxDosePerPeriod")]
    pub max_dose_per_period: Option<Ratio>,
    /// Upper limit on medication per administration
    #[fhir_serde(rename = "maxDosePerAdministration")]
    pub max_dose_per_administration: Option<Quantity>,
    /// Upper limit on medication per lifetime of the patient
    #[fhir_serde(rename = "maxDosePerLifetime")]
    pub max_dose_per_lifetime: Option<Quantity>,
}

/// Choice of types for the dose\[x\] field in DosageDoseAndRate
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "dose")]
pub enum DosageDoseAndRateDose {
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "doseRange")]
    Range(Range),
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "doseQuantity")]
    Quantity(Quantity),
}

/// Choice of types for the rate\[x\] field in DosageDoseAndRate
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "rate")]
pub enum DosageDoseAndRateRate {
    /// Variant accepting the Ratio type.
    #[fhir_serde(rename = "rateRatio")]
    Ratio(Ratio),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "rateRange")]
    Range(Range),
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "rateQuantity")]
    Quantity(Quantity),
}

/// Amount of medication administered
#[derive(Debug, Clone, PartialEq, Default, FhirSerde, FhirNew)]
pub struct DosageDoseAndRate {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// The kind of dose or rate specified
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Amount of medication per dose
    #[fhir_serde(flatten)]
    pub dose: Option<DosageDoseAndRateDose>,
    /// Amount of medication per unit of time
    #[fhir_serde(flatten)]
    pub rate: Option<DosageDoseAndRateRate>,
}
