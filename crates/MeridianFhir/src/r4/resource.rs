// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

use crate::macros::resource_enum;
use crate::r4::*;

resource_enum! {
    Bundle,
    CarePlan,
    Condition,
    Coverage,
    MedicationRequest,
    Observation,
    Organization,
    Patient,
    Practitioner,
    StructureDefinition,
}
