// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

use meridian_macros::{FhirNew, FhirSerde};

use crate::r4::*;

/// Choice of types for the defaultValue\[x\] field in ElementDefinition
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "defaultValue")]
pub enum ElementDefinitionDefaultValue {
    /// Variant accepting the Base64Binary type.
    #[fhir_serde(rename = "defaultValueBase64Binary")]
    Base64Binary(Base64Binary),
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "defaultValueBoolean")]
    Boolean(Boolean),
    /// Variant accepting the Canonical type.
    #[fhir_serde(rename = "defaultValueCanonical")]
    Canonical(Canonical),
    /// Variant accepting the Code type.
    #[fhir_serde(rename = "defaultValueCode")]
    Code(Code),
    /// Variant accepting the Date type.
    #[fhir_serde(rename = "defaultValueDate")]
    Date(Date),
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "defaultValueDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Decimal type.
    #[fhir_serde(rename = "defaultValueDecimal")]
    Decimal(Decimal),
    /// Variant accepting the Id type.
    #[fhir_serde(rename = "defaultValueId")]
    Id(Id),
    /// Variant accepting the Instant type.
    #[fhir_serde(rename = "defaultValueInstant")]
    Instant(Instant),
    /// Variant accepting the Integer type.
    #[fhir_serde(rename = "defaultValueInteger")]
    Integer(Integer),
    /// Variant accepting the Markdown type.
    #[fhir_serde(rename = "defaultValueMarkdown")]
    Markdown(Markdown),
    /// Variant accepting the Oid type.
    #[fhir_serde(rename = "defaultValueOid")]
    Oid(Oid),
    /// Variant accepting the PositiveInt type.
    #[fhir_serde(rename = "defaultValuePositiveInt")]
    PositiveInt(PositiveInt),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "defaultValueString")]
    String(String),
    /// Variant accepting the Time type.
    #[fhir_serde(rename = "defaultValueTime")]
    Time(Time),
    /// Variant accepting the UnsignedInt type.
    #[fhir_serde(rename = "defaultValueUnsignedInt")]
    UnsignedInt(UnsignedInt),
    /// Variant accepting the Uri type.
    #[fhir_serde(rename = "defaultValueUri")]
    Uri(Uri),
    /// Variant accepting the Url type.
    #[fhir_serde(rename = "defaultValueUrl")]
    Url(Url),
    /// Variant accepting the Uuid type.
    #[fhir_serde(rename = "defaultValueUuid")]
    Uuid(Uuid),
    /// Variant accepting the Address type.
    #[fhir_serde(rename = "defaultValueAddress")]
    Address(Address),
    /// Variant accepting the Age type.
    #[fhir_serde(rename = "defaultValueAge")]
    Age(Age),
    /// Variant accepting the Annotation type.
    #[fhir_serde(rename = "defaultValueAnnotation")]
    Annotation(Annotation),
    /// Variant accepting the Attachment type.
    #[fhir_serde(rename = "defaultValueAttachment")]
    Attachment(Attachment),
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "defaultValueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Coding type.
    #[fhir_serde(rename = "defaultValueCoding")]
    Coding(Coding),
    /// Variant accepting the ContactPoint type.
    #[fhir_serde(rename = "defaultValueContactPoint")]
    ContactPoint(ContactPoint),
    /// Variant accepting the Count type.
    #[fhir_serde(rename = "defaultValueCount")]
    Count(Count),
    /// Variant accepting the Distance type.
    #[fhir_serde(rename = "defaultValueDistance")]
    Distance(Distance),
    /// Variant accepting the Duration type.
    #[fhir_serde(rename = "defaultValueDuration")]
    Duration(Duration),
    /// Variant accepting the HumanName type.
    #[fhir_serde(rename = "defaultValueHumanName")]
    HumanName(HumanName),
    /// Variant accepting the Identifier type.
    #[fhir_serde(rename = "defaultValueIdentifier")]
    Identifier(Identifier),
    /// Variant accepting the Money type.
    #[fhir_serde(rename = "defaultValueMoney")]
    Money(Money),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "defaultValuePeriod")]
    Period(Period),
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "defaultValueQuantity")]
    Quantity(Quantity),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "defaultValueRange")]
    Range(Range),
    /// Variant accepting the Ratio type.
    #[fhir_serde(rename = "defaultValueRatio")]
    Ratio(Ratio),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "defaultValueReference")]
    Reference(Reference),
    /// Variant accepting the SampledData type.
    #[fhir_serde(rename = "defaultValueSampledData")]
    SampledData(SampledData),
    /// Variant accepting the Signature type.
    #[fhir_serde(rename = "defaultValueSignature")]
    Signature(Signature),
    /// Variant accepting the Timing type.
    #[fhir_serde(rename = "defaultValueTiming")]
    Timing(Timing),
    /// Variant accepting the ContactDetail type.
    #[fhir_serde(rename = "defaultValueContactDetail")]
    ContactDetail(ContactDetail),
    /// Variant accepting the UsageContext type.
    #[fhir_serde(rename = "defaultValueUsageContext")]
    UsageContext(UsageContext),
    /// Variant accepting the Dosage type.
    #[fhir_serde(rename = "defaultValueDosage")]
    Dosage(Dosage),
    /// Variant accepting the Meta type.
    #[fhir_serde(rename = "defaultValueMeta")]
    Meta(Meta),
}

/// Choice of types for the fixed\[x\] field in ElementDefinition
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "fixed")]
pub enum ElementDefinitionFixed {
    /// Variant accepting the Base64Binary type.
    #[fhir_serde(rename = "fixedBase64Binary")]
    Base64Binary(Base64Binary),
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "fixedBoolean")]
    Boolean(Boolean),
    /// Variant accepting the Canonical type.
    #[fhir_serde(rename = "fixedCanonical")]
    Canonical(Canonical),
    /// Variant accepting the Code type.
    #[fhir_serde(rename = "fixedCode")]
    Code(Code),
    /// Variant accepting the Date type.
    #[fhir_serde(rename = "fixedDate")]
    Date(Date),
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "fixedDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Decimal type.
    #[fhir_serde(rename = "fixedDecimal")]
    Decimal(Decimal),
    /// Variant accepting the Id type.
    #[fhir_serde(rename = "fixedId")]
    Id(Id),
    /// Variant accepting the Instant type.
    #[fhir_serde(rename = "fixedInstant")]
    Instant(Instant),
    /// Variant accepting the Integer type.
    #[fhir_serde(rename = "fixedInteger")]
    Integer(Integer),
    /// Variant accepting the Markdown type.
    #[fhir_serde(rename = "fixedMarkdown")]
    Markdown(Markdown),
    /// Variant accepting the Oid type.
    #[fhir_serde(rename = "fixedOid")]
    Oid(Oid),
    /// Variant accepting the PositiveInt type.
    #[fhir_serde(rename = "fixedPositiveInt")]
    PositiveInt(PositiveInt),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "fixedString")]
    String(String),
    /// Variant accepting the Time type.
    #[fhir_serde(rename = "fixedTime")]
    Time(Time),
    /// Variant accepting the UnsignedInt type.
    #[fhir_serde(rename = "fixedUnsignedInt")]
    UnsignedInt(UnsignedInt),
    /// Variant accepting the Uri type.
    #[fhir_serde(rename = "fixedUri")]
    Uri(Uri),
    /// Variant accepting the Url type.
    #[fhir_serde(rename = "fixedUrl")]
    Url(Url),
    /// Variant accepting the Uuid type.
    #[fhir_serde(rename = "fixedUuid")]
    Uuid(Uuid),
    /// Variant accepting the Address type.
    #[fhir_serde(rename = "fixedAddress")]
    Address(Address),
    /// Variant accepting the Age type.
    #[fhir_serde(rename = "fixedAge")]
    Age(Age),
    /// Variant accepting the Annotation type.
    #[fhir_serde(rename = "fixedAnnotation")]
    Annotation(Annotation),
    /// Variant accepting the Attachment type.
    #[fhir_serde(rename = "fixedAttachment")]
    Attachment(Attachment),
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "fixedCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Coding type.
    #[fhir_serde(rename = "fixedCoding")]
    Coding(Coding),
    /// Variant accepting the ContactPoint type.
    #[fhir_serde(rename = "fixedContactPoint")]
    ContactPoint(ContactPoint),
    /// Variant accepting the Count type.
    #[fhir_serde(rename = "fixedCount")]
    Count(Count),
    /// Variant accepting the Distance type.
    #[fhir_serde(rename = "fixedDistance")]
    Distance(Distance),
    /// Variant accepting the Duration type.
    #[fhir_serde(rename = "fixedDuration")]
    Duration(Duration),
    /// Variant accepting the HumanName type.
    #[fhir_serde(rename = "fixedHumanName")]
    HumanName(HumanName),
    /// Variant accepting the Identifier type.
    #[fhir_serde(rename = "fixedIdentifier")]
    Identifier(Identifier),
    /// Variant accepting the Money type.
    #[fhir_serde(rename = "fixedMoney")]
    Money(Money),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "fixedPeriod")]
    Period(Period),
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "fixedQuantity")]
    Quantity(Quantity),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "fixedRange")]
    Range(Range),
    /// Variant accepting the Ratio type.
    #[fhir_serde(rename = "fixedRatio")]
    Ratio(Ratio),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "fixedReference")]
    Reference(Reference),
    /// Variant accepting the SampledData type.
    #[fhir_serde(rename = "fixedSampledData")]
    SampledData(SampledData),
    /// Variant accepting the Signature type.
    #[fhir_serde(rename = "fixedSignature")]
    Signature(Signature),
    /// Variant accepting the Timing type.
    #[fhir_serde(rename = "fixedTiming")]
    Timing(Timing),
    /// Variant accepting the ContactDetail type.
    #[fhir_serde(rename = "fixedContactDetail")]
    ContactDetail(ContactDetail),
    /// Variant accepting the UsageContext type.
    #[fhir_serde(rename = "fixedUsageContext")]
    UsageContext(UsageContext),
    /// Variant accepting the Dosage type.
    #[fhir_serde(rename = "fixedDosage")]
    Dosage(Dosage),
    /// Variant accepting the Meta type.
    #[fhir_serde(rename = "fixedMeta")]
    Meta(Meta),
}

/// Choice of types for the pattern\[x\] field in ElementDefinition
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "pattern")]
pub enum ElementDefinitionPattern {
    /// Variant accepting the Base64Binary type.
    #[fhir_serde(rename = "patternBase64Binary")]
    Base64Binary(Base64Binary),
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "patternBoolean")]
    Boolean(Boolean),
    /// Variant accepting the Canonical type.
    #[fhir_serde(rename = "patternCanonical")]
    Canonical(Canonical),
    /// Variant accepting the Code type.
    #[fhir_serde(rename = "patternCode")]
    Code(Code),
    /// Variant accepting the Date type.
    #[fhir_serde(rename = "patternDate")]
    Date(Date),
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "patternDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Decimal type.
    #[fhir_serde(rename = "patternDecimal")]
    Decimal(Decimal),
    /// Variant accepting the Id type.
    #[fhir_serde(rename = "patternId")]
    Id(Id),
    /// Variant accepting the Instant type.
    #[fhir_serde(rename = "patternInstant")]
    Instant(Instant),
    /// Variant accepting the Integer type.
    #[fhir_serde(rename = "patternInteger")]
    Integer(Integer),
    /// Variant accepting the Markdown type.
    #[fhir_serde(rename = "patternMarkdown")]
    Markdown(Markdown),
    /// Variant accepting the Oid type.
    #[fhir_serde(rename = "patternOid")]
    Oid(Oid),
    /// Variant accepting the PositiveInt type.
    #[fhir_serde(rename = "patternPositiveInt")]
    PositiveInt(PositiveInt),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "patternString")]
    String(String),
    /// Variant accepting the Time type.
    #[fhir_serde(rename = "patternTime")]
    Time(Time),
    /// Variant accepting the UnsignedInt type.
    #[fhir_serde(rename = "patternUnsignedInt")]
    UnsignedInt(UnsignedInt),
    /// Variant accepting the Uri type.
    #[fhir_serde(rename = "patternUri")]
    Uri(Uri),
    /// Variant accepting the Url type.
    #[fhir_serde(rename = "patternUrl")]
    Url(Url),
    /// Variant accepting the Uuid type.
    #[fhir_serde(rename = "patternUuid")]
    Uuid(Uuid),
    /// Variant accepting the Address type.
    #[fhir_serde(rename = "patternAddress")]
    Address(Address),
    /// Variant accepting the Age type.
    #[fhir_serde(rename = "patternAge")]
    Age(Age),
    /// Variant accepting the Annotation type.
    #[fhir_serde(rename = "patternAnnotation")]
    Annotation(Annotation),
    /// Variant accepting the Attachment type.
    #[fhir_serde(rename = "patternAttachment")]
    Attachment(Attachment),
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "patternCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Coding type.
    #[fhir_serde(rename = "patternCoding")]
    Coding(Coding),
    /// Variant accepting the ContactPoint type.
    #[fhir_serde(rename = "patternContactPoint")]
    ContactPoint(ContactPoint),
    /// Variant accepting the Count type.
    #[fhir_serde(rename = "patternCount")]
    Count(Count),
    /// Variant accepting the Distance type.
    #[fhir_serde(rename = "patternDistance")]
    Distance(Distance),
    /// Variant accepting the Duration type.
    #[fhir_serde(rename = "patternDuration")]
    Duration(Duration),
    /// Variant accepting the HumanName type.
    #[fhir_serde(rename = "patternHumanName")]
    HumanName(HumanName),
    /// Variant accepting the Identifier type.
    #[fhir_serde(rename = "patternIdentifier")]
    Identifier(Identifier),
    /// Variant accepting the Money type.
    #[fhir_serde(rename = "patternMoney")]
    Money(Money),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "patternPeriod")]
    Period(Period),
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "patternQuantity")]
    Quantity(Quantity),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "patternRange")]
    Range(Range),
    /// Variant accepting the Ratio type.
    #[fhir_serde(rename = "patternRatio")]
    Ratio(Ratio),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "patternReference")]
    Reference(Reference),
    /// Variant accepting the SampledData type.
    #[fhir_serde(rename = "patternSampledData")]
    SampledData(SampledData),
    /// Variant accepting the Signature type.
    #[fhir_serde(rename = "patternSignature")]
    Signature(Signature),
    /// Variant accepting the Timing type.
    #[fhir_serde(rename = "patternTiming")]
    Timing(Timing),
    /// Variant accepting the ContactDetail type.
    #[fhir_serde(rename = "patternContactDetail")]
    ContactDetail(ContactDetail),
    /// Variant accepting the UsageContext type.
    #[fhir_serde(rename = "patternUsageContext")]
    UsageContext(UsageContext),
    /// Variant accepting the Dosage type.
    #[fhir_serde(rename = "patternDosage")]
    Dosage(Dosage),
    /// Variant accepting the Meta type.
    #[fhir_serde(rename = "patternMeta")]
    Meta(Meta),
}

/// Choice of types for the minValue\[x\] field in ElementDefinition
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "minValue")]
pub enum ElementDefinitionMinValue {
    /// Variant accepting the Date type.
    #[fhir_serde(rename = "minValueDate")]
    Date(Date),
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "minValueDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Instant type.
    #[fhir_serde(rename = "minValueInstant")]
    Instant(Instant),
    /// Variant accepting the Time type.
    #[fhir_serde(rename = "minValueTime")]
    Time(Time),
    /// Variant accepting the Decimal type.
    #[fhir_serde(rename = "minValueDecimal")]
    Decimal(Decimal),
    /// Variant accepting the Integer type.
    #[fhir_serde(rename = "minValueInteger")]
    Integer(Integer),
    /// Variant accepting the PositiveInt type.
    #[fhir_serde(rename = "minValuePositiveInt")]
    PositiveInt(PositiveInt),
    /// Variant accepting the UnsignedInt type.
    #[fhir_serde(rename = "minValueUnsignedInt")]
    UnsignedInt(UnsignedInt),
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "minValueQuantity")]
    Quantity(Quantity),
}

/// Choice of types for the maxValue\[x\] field in ElementDefinition
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "maxValue")]
pub enum ElementDefinitionMaxValue {
    /// Variant accepting the Date type.
    #[fhir_serde(rename = "maxValueDate")]
    Date(Date),
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "maxValueDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Instant type.
    #[fhir_serde(rename = "maxValueInstant")]
    Instant(Instant),
    /// Variant accepting the Time type.
    #[fhir_serde(rename = "maxValueTime")]
    Time(Time),
    /// Variant accepting the Decimal type.
    #[fhir_serde(rename = "maxValueDecimal")]
    Decimal(Decimal),
    /// Variant accepting the Integer type.
    #[fhir_serde(rename = "maxValueInteger")]
    Integer(Integer),
    /// Variant accepting the PositiveInt type.
    #[fhir_serde(rename = "maxValuePositiveInt")]
    PositiveInt(PositiveInt),
    /// Variant accepting the UnsignedInt type.
    #[fhir_serde(rename = "maxValueUnsignedInt")]
    UnsignedInt(UnsignedInt),
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "maxValueQuantity")]
    Quantity(Quantity),
}

/// Definition of an element in a resource or extension
///
/// Captures constraints on each element within the resource, profile, or extension.
#[derive(Debug, Clone, PartialEq, FhirSerde, FhirNew)]
pub struct ElementDefinition {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Path of the element in the hierarchy of elements
    pub path: String,
    /// xmlAttr | xmlText | typeAttr | cdaText | xhtml
    pub representation: Option<Vec<PropertyRepresentation>>,
    /// Name for this particular element (in a set of slices)
    #[fhir_serde(rename = "sliceName")]
    pub slice_name: Option<String>,
    /// If this slice definition constrains an inherited slice definition (or not)
    #[fhir_serde(rename = "sliceIsConstraining")]
    pub slice_is_constraining: Option<Boolean>,
    /// Name for element to display with or as prompt
    pub label: Option<String>,
    /// Corresponding codes in terminologies
    pub code: Option<Vec<Coding>>,
    /// This element is sliced - slices follow
    pub slicing: Option<ElementDefinitionSlicing>,
    /// Concise definition for space-constrained presentation
    pub short: Option<String>,
    /// Full formal definition as narrative text
    pub definition: Option<Markdown>,
    /// Comments about the use of this element
    pub comment: Option<Markdown>,
    /// Why this resource has been created
    pub requirements: Option<Markdown>,
    /// Other names
    pub alias: Option<Vec<String>>,
    /// Minimum Cardinality
    pub min: Option<UnsignedInt>,
    /// Maximum Cardinality (a number or *)
    pub max: Option<String>,
    /// Base definition information for tools
    pub base: Option<ElementDefinitionBase>,
    /// Reference to definition of content for the element
    #[fhir_serde(rename = "contentReference")]
    pub content_reference: Option<Uri>,
    /// Data type and Profile for this element
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Vec<ElementDefinitionType>>,
    /// Specified value if missing from instance
    #[fhir_serde(flatten)]
    pub default_value: Option<ElementDefinitionDefaultValue>,
    /// Implicit meaning when this element is missing
    #[fhir_serde(rename = "meaningWhenMissing")]
    pub meaning_when_missing: Option<Markdown>,
    /// What the order of the elements means
    #[fhir_serde(rename = "orderMeaning")]
    pub order_meaning: Option<String>,
    /// Value must be exactly this
    #[fhir_serde(flatten)]
    pub fixed: Option<ElementDefinitionFixed>,
    /// Value must have at least these property values
    #[fhir_serde(flatten)]
    pub pattern: Option<ElementDefinitionPattern>,
    /// Example value (as defined for type)
    pub example: Option<Vec<ElementDefinitionExample>>,
    /// Minimum Allowed Value (for some types)
    #[fhir_serde(flatten)]
    pub min_value: Option<ElementDefinitionMinValue>,
    /// Maximum Allowed Value (for some types)
    #[fhir_serde(flatten)]
    pub max_value: Option<ElementDefinitionMaxValue>,
    /// Max length for strings
    #[fhir_serde(rename = "maxLength")]
    pub max_length: Option<Integer>,
    /// Reference to invariant about presence
    pub condition: Option<Vec<Id>>,
    /// Condition that must evaluate to true
    pub constraint: Option<Vec<ElementDefinitionConstraint>>,
    /// If the element must be supported
    #[fhir_serde(rename = "mustSupport")]
    pub must_support: Option<Boolean>,
    /// If this modifies the meaning of other elements
    #[fhir_serde(rename = "isModifier")]
    pub is_modifier: Option<Boolean>,
    /// Reason that this element is a modifier
    #[fhir_serde(rename = "isModifierReason")]
    pub is_modifier_reason: Option<String>,
    /// Include when _summary = true?
    #[fhir_serde(rename = "isSummary")]
    pub is_summary: Option<Boolean>,
    /// ValueSet details if this is coded
    pub binding: Option<ElementDefinitionBinding>,
    /// Map element to another set of definitions
    pub mapping: Option<Vec<ElementDefinitionMapping>>,
}

/// Base definition information for tools
#[derive(Debug, Clone, PartialEq, FhirSerde, FhirNew)]
pub struct ElementDefinitionBase {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Path that identifies the base element
    pub path: String,
    /// Min cardinality of the base element
    pub min: UnsignedInt,
    /// Max cardinality of the base element
    pub max: String,
}

/// ValueSet details if this is coded
#[derive(Debug, Clone, PartialEq, FhirSerde, FhirNew)]
pub struct ElementDefinitionBinding {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// required | extensible | preferred | example
    pub strength: BindingStrength,
    /// Human explanation of the value set
    pub description: Option<String>,
    /// Source of value set
    #[fhir_serde(rename = "valueSet")]
    pub value_set: Option<Canonical>,
}

/// Condition that must evaluate to true
#[derive(Debug, Clone, PartialEq, FhirSerde, FhirNew)]
pub struct ElementDefinitionConstraint {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Target of 'condition' reference above
    pub key: Id,
    /// Why this constraint is necessary or appropriate
    pub requirements: Option<String>,
    /// error | warning
    pub severity: ConstraintSeverity,
    /// Human description of constraint
    pub human: String,
    /// FHIRPath expression of constraint
    pub expression: Option<String>,
    /// XPath expression of constraint
    pub xpath: Option<String>,
    /// Reference to original source of constraint
    pub source: Option<Canonical>,
}

/// Choice of types for the value\[x\] field in ElementDefinitionExample
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum ElementDefinitionExampleValue {
    /// Variant accepting the Base64Binary type.
    #[fhir_serde(rename = "valueBase64Binary")]
    Base64Binary(Base64Binary),
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "valueBoolean")]
    Boolean(Boolean),
    /// Variant accepting the Canonical type.
    #[fhir_serde(rename = "valueCanonical")]
    Canonical(Canonical),
    /// Variant accepting the Code type.
    #[fhir_serde(rename = "valueCode")]
    Code(Code),
    /// Variant accepting the Date type.
    #[fhir_serde(rename = "valueDate")]
    Date(Date),
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "valueDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Decimal type.
    #[fhir_serde(rename = "valueDecimal")]
    Decimal(Decimal),
    /// Variant accepting the Id type.
    #[fhir_serde(rename = "valueId")]
    Id(Id),
    /// Variant accepting the Instant type.
    #[fhir_serde(rename = "valueInstant")]
    Instant(Instant),
    /// Variant accepting the Integer type.
    #[fhir_serde(rename = "valueInteger")]
    Integer(Integer),
    /// Variant accepting the Markdown type.
    #[fhir_serde(rename = "valueMarkdown")]
    Markdown(Markdown),
    /// Variant accepting the Oid type.
    #[fhir_serde(rename = "valueOid")]
    Oid(Oid),
    /// Variant accepting the PositiveInt type.
    #[fhir_serde(rename = "valuePositiveInt")]
    PositiveInt(PositiveInt),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "valueString")]
    String(String),
    /// Variant accepting the Time type.
    #[fhir_serde(rename = "valueTime")]
    Time(Time),
    /// Variant accepting the UnsignedInt type.
    #[fhir_serde(rename = "valueUnsignedInt")]
    UnsignedInt(UnsignedInt),
    /// Variant accepting the Uri type.
    #[fhir_serde(rename = "valueUri")]
    Uri(Uri),
    /// Variant accepting the Url type.
    #[fhir_serde(rename = "valueUrl")]
    Url(Url),
    /// Variant accepting the Uuid type.
    #[fhir_serde(rename = "valueUuid")]
    Uuid(Uuid),
    /// Variant accepting the Address type.
    #[fhir_serde(rename = "valueAddress")]
    Address(Address),
    /// Variant accepting the Age type.
    #[fhir_serde(rename = "valueAge")]
    Age(Age),
    /// Variant accepting the Annotation type.
    #[fhir_serde(rename = "valueAnnotation")]
    Annotation(Annotation),
    /// Variant accepting the Attachment type.
    #[fhir_serde(rename = "valueAttachment")]
    Attachment(Attachment),
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Coding type.
    #[fhir_serde(rename = "valueCoding")]
    Coding(Coding),
    /// Variant accepting the ContactPoint type.
    #[fhir_serde(rename = "valueContactPoint")]
    ContactPoint(ContactPoint),
    /// Variant accepting the Count type.
    #[fhir_serde(rename = "valueCount")]
    Count(Count),
    /// Variant accepting the Distance type.
    #[fhir_serde(rename = "valueDistance")]
    Distance(Distance),
    /// Variant accepting the Duration type.
    #[fhir_serde(rename = "valueDuration")]
    Duration(Duration),
    /// Variant accepting the HumanName type.
    #[fhir_serde(rename = "valueHumanName")]
    HumanName(HumanName),
    /// Variant accepting the Identifier type.
    #[fhir_serde(rename = "valueIdentifier")]
    Identifier(Identifier),
    /// Variant accepting the Money type.
    #[fhir_serde(rename = "valueMoney")]
    Money(Money),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "valuePeriod")]
    Period(Period),
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "valueQuantity")]
    Quantity(Quantity),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "valueRange")]
    Range(Range),
    /// Variant accepting the Ratio type.
    #[fhir_serde(rename = "valueRatio")]
    Ratio(Ratio),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "valueReference")]
    Reference(Reference),
    /// Variant accepting the SampledData type.
    #[fhir_serde(rename = "valueSampledData")]
    SampledData(SampledData),
    /// Variant accepting the Signature type.
    #[fhir_serde(rename = "valueSignature")]
    Signature(Signature),
    /// Variant accepting the Timing type.
    #[fhir_serde(rename = "valueTiming")]
    Timing(Timing),
    /// Variant accepting the ContactDetail type.
    #[fhir_serde(rename = "valueContactDetail")]
    ContactDetail(ContactDetail),
    /// Variant accepting the UsageContext type.
    #[fhir_serde(rename = "valueUsageContext")]
    UsageContext(UsageContext),
    /// Variant accepting the Dosage type.
    #[fhir_serde(rename = "valueDosage")]
    Dosage(Dosage),
    /// Variant accepting the Meta type.
    #[fhir_serde(rename = "valueMeta")]
    Meta(Meta),
}

/// Example value (as defined for type)
#[derive(Debug, Clone, PartialEq, FhirSerde, FhirNew)]
pub struct ElementDefinitionExample {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Describes the purpose of this example
    pub label: String,
    /// Value of Example (one of allowed types)
    #[fhir_serde(flatten)]
    pub value: ElementDefinitionExampleValue,
}

/// Map element to another set of definitions
#[derive(Debug, Clone, PartialEq, FhirSerde, FhirNew)]
pub struct ElementDefinitionMapping {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Reference to mapping declaration
    pub identity: Id,
    /// Computable language of mapping
    pub language: Option<Code>,
    /// Details of the mapping
    pub map: String,
    /// Comments about the mapping or its use
    pub comment: Option<String>,
}

/// This element is sliced - slices follow
#[derive(Debug, Clone, PartialEq, FhirSerde, FhirNew)]
pub struct ElementDefinitionSlicing {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Element values that are used to distinguish the slices
    pub discriminator: Option<Vec<ElementDefinitionSlicingDiscriminator>>,
    /// Text description of how slicing works (or not)
    pub description: Option<String>,
    /// If elements must be in same order as slices
    pub ordered: Option<Boolean>,
    /// closed | open | openAtEnd
    pub rules: SlicingRules,
}

/// Element values that are used to distinguish the slices
#[derive(Debug, Clone, PartialEq, FhirSerde, FhirNew)]
pub struct ElementDefinitionSlicingDiscriminator {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// value | exists | pattern | type | profile
    #[fhir_serde(rename = "type")]
    pub r#type: DiscriminatorType,
    /// Path to element value
    pub path: String,
}

/// Data type and Profile for this element
#[derive(Debug, Clone, PartialEq, FhirSerde, FhirNew)]
pub struct ElementDefinitionType {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Data type or Resource (reference to definition)
    pub code: Uri,
    /// Profiles (StructureDefinition or IG) - one must apply
    pub profile: Option<Vec<Canonical>>,
    /// Profile (StructureDefinition or IG) on the Reference/canonical target - one must apply
    #[fhir_serde(rename = "targetProfile")]
    pub target_profile: Option<Vec<Canonical>>,
    /// contained | referenced | bundled - how aggregated
    pub aggregation: Option<Vec<AggregationMode>>,
    /// either | independent | specific
    pub versioning: Option<ReferenceVersionRules>,
}
