// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

use meridian_macros::{FhirNew, FhirSerde};

use crate::r4::*;

/// A grouping of people or organizations with a common purpose
///
/// A formally or informally recognized grouping of people or organizations formed for the purpose of achieving some form of collective action.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde, FhirNew)]
#[fhir_resource(resource_type = "Organization")]
pub struct Organization {
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
    /// Identifies this organization  across multiple systems
    pub identifier: Option<Vec<Identifier>>,
    /// Whether the organization's record is still in active use
    pub active: Option<Boolean>,
    /// Kind of organization
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Vec<CodeableConcept>>,
    /// Name used for the organization
    pub name: Option<String>,
    /// A list of alternate names that the organization is known as, or was known as in the past
    pub alias: Option<Vec<String>>,
    /// A contact detail for the organization
    pub telecom: Option<Vec<ContactPoint>>,
    /// An address for the organization
    pub address: Option<Vec<Address>>,
    /// The organization of which this organization forms a part
    #[fhir_serde(rename = "partOf")]
    pub part_of: Option<Reference>,
    /// Contact for the organization for a certain purpose
    pub contact: Option<Vec<OrganizationContact>>,
    /// Technical endpoints providing access to services operated for the organization
    pub endpoint: Option<Vec<Reference>>,
}

/// Contact for the organization for a certain purpose
#[derive(Debug, Clone, PartialEq, Default, FhirSerde, FhirNew)]
pub struct OrganizationContact {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The type of contact
    pub purpose: Option<CodeableConcept>,
    /// A name associated with the contact
    pub name: Option<HumanName>,
    /// Contact details (telephone, email, etc.)  for a contact
    pub telecom: Option<Vec<ContactPoint>>,
    /// Visiting or postal addresses for the contact
    pub address: Option<Address>,
}
