// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

use meridian_macros::{FhirNew, FhirSerde};

use crate::r4::*;

/// Healthcare plan for patient or group
///
/// Describes the intention of how one or more practitioners intend to deliver care for a particular patient, group or community for a period of time, possibly limited to care for a specific condition or set of conditions.
#[derive(Debug, Clone, PartialEq, FhirSerde, FhirNew)]
#[fhir_resource(resource_type = "CarePlan")]
pub struct CarePlan {
    /// Logical id of this artifact
    pub id: Option<String>,
    /// Metadata about the resource
    pub meta: Option<Meta>,
    /// A set of rules under which this content was created
    #[fhir_serde(rename = "implicitRules")]
    pub implicit_rules: Option<Uri>,
    /// Language of the resource content
    pub language: Option<Code>,
    /// Text summary of the resource, for human interpretation
    pub text: Option<Narrative>,
    /// Contained, inline Resources
    pub contained: Option<Vec<Resource>>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// External Ids for this plan
    pub identifier: Option<Vec<Identifier>>,
    /// Instantiates FHIR protocol or definition
    #[fhir_serde(rename = "instantiatesCanonical")]
    pub instantiates_canonical: Option<Vec<Canonical>>,
    /// Instantiates external protocol or definition
    #[fhir_serde(rename = "instantiatesUri")]
    pub instantiates_uri: Option<Vec<Uri>>,
    /// Fulfills CarePlan
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Option<Vec<Reference>>,
    /// CarePlan replaced by this CarePlan
    pub replaces: Option<Vec<Reference>>,
    /// Part of referenced CarePlan
    #[fhir_serde(rename = "partOf")]
    pub part_of: Option<Vec<Reference>>,
    /// draft | active | on-hold | revoked | completed | entered-in-error | unknown
    pub status: RequestStatus,
    /// proposal | plan | order | option
    pub intent: CarePlanIntent,
    /// Type of plan
    pub category: Option<Vec<CodeableConcept>>,
    /// Human-friendly name for the care plan
    pub title: Option<String>,
    /// Summary of nature of plan
    pub description: Option<String>,
    /// Who the care plan is for
    pub subject: Reference,
    /// Encounter created as part of
    pub encounter: Option<Reference>,
    /// Time period plan covers
    pub period: Option<Period>,
    /// Date record was first recorded
    pub created: Option<DateTime>,
    /// Who is the designated responsible party
    pub author: Option<Reference>,
    /// Who provided the content of the care plan
    pub contributor: Option<Vec<Reference>>,
    /// Who's involved in plan?
    #[fhir_serde(rename = "careTeam")]
    pub care_team: Option<Vec<Reference>>,
    /// Health issues this plan addresses
    pub addresses: Option<Vec<Reference>>,
    /// Information considered as part of plan
    #[fhir_serde(rename = "supportingInfo")]
    pub supporting_info: Option<Vec<Reference>>,
    /// Desired outcome of plan
    pub goal: Option<Vec<Reference>>,
    /// Action to occur as part of plan
    pub activity: Option<Vec<CarePlanActivity>>,
    /// Comments about the plan
    pub note: Option<Vec<Annotation>>,
}

/// Action to occur as part of plan
#[derive(Debug, Clone, PartialEq, Default, FhirSerde, FhirNew)]
pub struct CarePlanActivity {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Results of the activity
    #[fhir_serde(rename = "outcomeCodeableConcept")]
    pub outcome_codeable_concept: Option<Vec<CodeableConcept>>,
    /// Appointment, Encounter, Procedure, etc.
    #[fhir_serde(rename = "outcomeReference")]
    pub outcome_reference: Option<Vec<Reference>>,
    /// Comments about the activity status/progress
    pub progress: Option<Vec<Annotation>>,
    /// Activity details defined in specific resource
    pub reference: Option<Reference>,
    /// In-line definition of activity
    pub detail: Option<CarePlanActivityDetail>,
}

/// Choice of types for the scheduled\[x\] field in CarePlanActivityDetail
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "scheduled")]
pub enum CarePlanActivityDetailScheduled {
    /// Variant accepting the Timing type.
    #[fhir_serde(rename = "scheduledTiming")]
    Timing(Timing),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "scheduledPeriod")]
    Period(Period),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "scheduledString")]
    String(String),
}

/// Choice of types for the product\[x\] field in CarePlanActivityDetail
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "product")]
pub enum CarePlanActivityDetailProduct {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "productCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "productReference")]
    Reference(Reference),
}

/// In-line definition of activity
#[derive(Debug, Clone, PartialEq, FhirSerde, FhirNew)]
pub struct CarePlanActivityDetail {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Appointment | CommunicationRequest | DeviceRequest | MedicationRequest | NutritionOrder | Task | ServiceRequest | VisionPrescription
    pub kind: Option<CarePlanActivityKind>,
    /// Instantiates FHIR protocol or definition
    #[fhir_serde(rename = "instantiatesCanonical")]
    pub instantiates_canonical: Option<Vec<Canonical>>,
    /// Instantiates external protocol or definition
    #[fhir_serde(rename = "instantiatesUri")]
    pub instantiates_uri: Option<Vec<Uri>>,
    /// Detail type of activity
    pub code: Option<CodeableConcept>,
    /// Why activity should be done or why activity was prohibited
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    /// Why activity is needed
    #[fhir_serde(rename = "reasonReference")]
    pub reason_reference: Option<Vec<Reference>>,
    /// Goals this activity relates to
    pub goal: Option<Vec<Reference>>,
    /// not-started | scheduled | in-progress | on-hold | completed | cancelled | stopped | unknown | entered-in-error
    pub status: CarePlanActivityStatus,
    /// Reason for current status
    #[fhir_serde(rename = "statusReason")]
    pub status_reason: Option<CodeableConcept>,
    /// If true, activity is prohibiting action
    #[fhir_serde(rename = "doNotPerform")]
    pub do_not_perform: Option<Boolean>,
    /// When activity is to occur
    #[fhir_serde(flatten)]
    pub scheduled: Option<CarePlanActivityDetailScheduled>,
    /// Where it should happen
    pub location: Option<Reference>,
    /// Who will be responsible?
    pub performer: Option<Vec<Reference>>,
    /// What is to be administered/supplied
    #[fhir_serde(flatten)]
    pub product: Option<CarePlanActivityDetailProduct>,
    /// How to consume/day?
    #[fhir_serde(rename = "dailyAmount")]
    pub daily_amount: Option<Quantity>,
    /// How much to administer/supply/consume
    pub quantity: Option<Quantity>,
    /// Extra info describing activity to perform
    pub description: Option<String>,
}
