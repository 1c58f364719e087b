use serde::de::MapAccess;
use serde::ser::SerializeMap;

/// A concrete FHIR resource type.
///
/// The resource type is a property of the Rust type, not of the instance: it
/// is written as the `resourceType` discriminator on encode and checked on
/// decode, but never stored.
pub trait FhirResource {
    /// The FHIR type name, e.g. `"Patient"`.
    const RESOURCE_TYPE: &'static str;

    fn resource_type(&self) -> &'static str {
        Self::RESOURCE_TYPE
    }

    /// The logical id of this resource, if it has one.
    fn id(&self) -> Option<&str>;
}

/// A choice element (`value[x]`) modeled as an enum with one variant per
/// allowed type.
///
/// On the wire the selected variant is a single `<base><TypeName>` entry in
/// the owning object, so the owning record writes and reads the entry
/// through this trait instead of nesting it.
pub trait FhirChoice: Sized {
    /// The element name without suffix, e.g. `"onset"`.
    const BASE_NAME: &'static str;
    /// The element name as FHIR writes it, e.g. `"onset[x]"`.
    const ELEMENT_NAME: &'static str;
    /// Every wire key of this choice, e.g. `["onsetDateTime", "onsetAge", ...]`.
    const KEYS: &'static [&'static str];

    /// The wire key of the selected variant.
    fn wire_key(&self) -> &'static str;

    /// Writes `"<wire key>": value` into an enclosing map.
    fn serialize_into<M>(&self, map: &mut M) -> Result<(), M::Error>
    where
        M: SerializeMap;

    /// Reads the value for `key`, which must be one of [`Self::KEYS`].
    fn deserialize_from<'de, A>(key: &str, map: &mut A) -> Result<Self, A::Error>
    where
        A: MapAccess<'de>;
}

/// A code from a FHIR code system with a required binding.
pub trait FhirCode: Sized + Copy + 'static {
    /// Canonical URL of the code system.
    const SYSTEM: &'static str;

    /// The code exactly as written on the wire.
    fn as_code(&self) -> &'static str;

    /// Human readable display text.
    fn display(&self) -> &'static str;

    fn from_code(code: &str) -> Option<Self>;

    fn system(&self) -> &'static str {
        Self::SYSTEM
    }
}
