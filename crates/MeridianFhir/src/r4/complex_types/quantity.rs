// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

use meridian_macros::{FhirNew, FhirSerde};

use crate::r4::*;

/// A measured or measurable amount
///
/// A measured amount (or an amount that can potentially be measured). Note that measured amounts include amounts that are not precisely quantified, including amounts involving arbitrary units and floating currencies.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde, FhirNew)]
pub struct Quantity {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Numerical value (with implicit precision)
    pub value: Option<Decimal>,
    /// < | <= | >= | > - how to understand the value
    pub comparator: Option<QuantityComparator>,
    /// Unit representation
    pub unit: Option<String>,
    /// System that defines coded unit form
    pub system: Option<Uri>,
    /// Coded form of the unit
    pub code: Option<Code>,
}

/// A duration of time during which an organism (or a process) has existed
pub type Age = Quantity;

/// A measured amount (or an amount that can potentially be measured)
pub type Count = Quantity;

/// A length - a value with a unit that is a physical distance
pub type Distance = Quantity;

/// A length of time
pub type Duration = Quantity;

/// An amount of money. With regard to precision, see Decimal Precision
pub type MoneyQuantity = Quantity;

/// A fixed quantity (no comparator)
pub type SimpleQuantity = Quantity;
