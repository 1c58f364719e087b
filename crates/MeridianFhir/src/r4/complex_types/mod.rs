// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

pub mod address;
pub mod annotation;
pub mod attachment;
pub mod codeable_concept;
pub mod coding;
pub mod contact_detail;
pub mod contact_point;
pub mod dosage;
pub mod element_definition;
pub mod extension;
pub mod human_name;
pub mod identifier;
pub mod meta;
pub mod money;
pub mod narrative;
pub mod period;
pub mod quantity;
pub mod range;
pub mod ratio;
pub mod reference;
pub mod sampled_data;
pub mod signature;
pub mod timing;
pub mod usage_context;

pub use address::*;
pub use annotation::*;
pub use attachment::*;
pub use codeable_concept::*;
pub use coding::*;
pub use contact_detail::*;
pub use contact_point::*;
pub use dosage::*;
pub use element_definition::*;
pub use extension::*;
pub use human_name::*;
pub use identifier::*;
pub use meta::*;
pub use money::*;
pub use narrative::*;
pub use period::*;
pub use quantity::*;
pub use range::*;
pub use ratio::*;
pub use reference::*;
pub use sampled_data::*;
pub use signature::*;
pub use timing::*;
pub use usage_context::*;
