//! # Meridian FHIR
//!
//! A typed data model for HL7 FHIR resources.
//!
//! Every FHIR resource, datatype and backbone element is a plain Rust struct
//! whose JSON form follows the FHIR JSON rules: camelCase keys, absent
//! elements omitted, a `resourceType` discriminator on resources, and choice
//! elements (`value[x]`) held in enums but written as a single
//! `<base><Type>` key. Links between resources are always [`r4::Reference`]
//! values, never embedded object graphs.
//!
//! Each FHIR release lives in its own feature-gated module; `R4` is on by
//! default.
//!
//! ```
//! # #[cfg(feature = "R4")]
//! # {
//! use meridian_fhir_lib::FhirResource;
//! use meridian_fhir_lib::r4::{CarePlan, CarePlanIntent, Reference, RequestStatus};
//!
//! let plan = CarePlan::new(
//!     RequestStatus::Active,
//!     CarePlanIntent::Plan,
//!     Reference::to("Patient/123"),
//! );
//! let json = serde_json::to_value(&plan).unwrap();
//! assert_eq!(json["resourceType"], "CarePlan");
//! assert_eq!(plan.resource_type(), "CarePlan");
//! # }
//! ```

pub mod date_time;
pub mod error;
pub mod fhir_version;
pub mod json;
mod macros;
pub mod precise_decimal;
#[cfg(feature = "R4")]
pub mod r4;
mod traits;

pub use date_time::{
    DatePrecision, DateTimePrecision, PrecisionDate, PrecisionDateTime, PrecisionInstant,
    PrecisionTime, TimePrecision,
};
pub use error::{DateTimeParseError, FhirError, Result};
pub use fhir_version::FhirVersion;
pub use precise_decimal::PreciseDecimal;
pub use traits::{FhirChoice, FhirCode, FhirResource};
