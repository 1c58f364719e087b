// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

use crate::{PreciseDecimal, PrecisionDate, PrecisionDateTime, PrecisionInstant, PrecisionTime};

/// A stream of bytes
pub type Base64Binary = String;

/// Value of "true" or "false"
pub type Boolean = bool;

/// A URI that is a reference to a canonical URL on a FHIR resource
pub type Canonical = String;

/// A string which has at least one character and no leading or trailing whitespace and where there is no whitespace other than single spaces in the contents
pub type Code = String;

/// A date or partial date (e.g. just year or year + month). There is no time zone. The format is a union of the schema types gYear, gYearMonth and date.  Dates SHALL be valid dates.
pub type Date = PrecisionDate;

/// A date, date-time or partial date (e.g. just year or year + month).  If hours and minutes are specified, a time zone SHALL be populated.
pub type DateTime = PrecisionDateTime;

/// A rational number with implicit precision
pub type Decimal = PreciseDecimal;

/// Any combination of letters, numerals, "-" and ".", with a length limit of 64 characters.
pub type Id = String;

/// An instant in time - known at least to the second
pub type Instant = PrecisionInstant;

/// A whole number
pub type Integer = i32;

/// A string that may contain Github Flavored Markdown syntax for optional processing by a mark down presentation engine
pub type Markdown = String;

/// An OID represented as a URI
pub type Oid = String;

/// An integer with a value that is positive (e.g. >0)
pub type PositiveInt = u32;

/// A time during the day, with no date specified
pub type Time = PrecisionTime;

/// An integer with a value that is not negative (e.g. >= 0)
pub type UnsignedInt = u32;

/// String of characters used to identify a name or a resource
pub type Uri = String;

/// A URI that is a literal reference
pub type Url = String;

/// A UUID, represented as a URI
pub type Uuid = String;

/// Limited xhtml content
pub type Xhtml = String;
