// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

pub mod bundle;
pub mod care_plan;
pub mod condition;
pub mod coverage;
pub mod medication_request;
pub mod observation;
pub mod organization;
pub mod patient;
pub mod practitioner;
pub mod structure_definition;

pub use bundle::*;
pub use care_plan::*;
pub use condition::*;
pub use coverage::*;
pub use medication_request::*;
pub use observation::*;
pub use organization::*;
pub use patient::*;
pub use practitioner::*;
pub use structure_definition::*;
