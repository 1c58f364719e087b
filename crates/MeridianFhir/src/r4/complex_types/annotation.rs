// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

use meridian_macros::{FhirNew, FhirSerde};

use crate::r4::*;

/// Choice of types for the author\[x\] field in Annotation
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "author")]
pub enum AnnotationAuthor {
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "authorReference")]
    Reference(Reference),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "authorString")]
    String(String),
}

/// Text node with attribution
///
/// A  text note which also  contains information about who made the statement and when.
#[derive(Debug, Clone, PartialEq, FhirSerde, FhirNew)]
pub struct Annotation {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Individual responsible for the annotation
    #[fhir_serde(flatten)]
    pub author: Option<AnnotationAuthor>,
    /// When the annotation was made
    pub time: Option<DateTime>,
    /// The annotation  - text content (as markdown)
    pub text: Markdown,
}
