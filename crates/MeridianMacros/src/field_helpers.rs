use heck::ToLowerCamelCase;
use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::{token, Attribute, Lit, Meta};

/// Collects the comma separated metas of every `#[<attr_name>(...)]` attribute.
fn attribute_metas(attrs: &[Attribute], attr_name: &str) -> Vec<Meta> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident(attr_name))
        .filter_map(|attr| {
            attr.parse_args_with(Punctuated::<Meta, token::Comma>::parse_terminated)
                .ok()
        })
        .flatten()
        .collect()
}

/// Finds `key = "value"` inside `#[<attr_name>(...)]`.
fn find_string_value(attrs: &[Attribute], attr_name: &str, key: &str) -> Option<String> {
    for meta in attribute_metas(attrs, attr_name) {
        if let Meta::NameValue(nv) = meta
            && nv.path.is_ident(key)
            && let syn::Expr::Lit(expr_lit) = nv.value
            && let Lit::Str(lit_str) = expr_lit.lit
        {
            return Some(lit_str.value());
        }
    }
    None
}

/// Determines the JSON key a struct field is written under.
///
/// `#[fhir_serde(rename = "...")]` wins. Otherwise the Rust identifier is
/// unwrapped (`r#type` becomes `type`) and converted to lower camel case, so
/// `implicit_rules` maps to `implicitRules`.
///
/// ```rust,ignore
/// // pub r#abstract: bool          -> "abstract"
/// // pub modifier_extension: ...   -> "modifierExtension"
/// // #[fhir_serde(rename = "fhirVersion")]
/// // pub fhir_version: Option<Code> -> "fhirVersion"
/// ```
pub(crate) fn get_effective_field_name(field: &syn::Field) -> String {
    if let Some(name) = find_string_value(&field.attrs, "fhir_serde", "rename") {
        return name;
    }
    field
        .ident
        .as_ref()
        .map(|ident| ident.unraw().to_string().to_lower_camel_case())
        .unwrap_or_default()
}

/// The wire key of one choice variant, taken from `#[fhir_serde(rename = "...")]`.
pub(crate) fn get_variant_wire_key(variant: &syn::Variant) -> Option<String> {
    find_string_value(&variant.attrs, "fhir_serde", "rename")
}

/// True when the field carries `#[fhir_serde(flatten)]`, i.e. it holds a
/// choice enum whose single entry is written into the parent object.
pub(crate) fn is_flattened(field: &syn::Field) -> bool {
    attribute_metas(&field.attrs, "fhir_serde")
        .iter()
        .any(|meta| matches!(meta, Meta::Path(path) if path.is_ident("flatten")))
}

/// Reads `#[fhir_choice_element(base_name = "value")]` from an enum.
pub(crate) fn get_choice_base_name(attrs: &[Attribute]) -> Option<String> {
    find_string_value(attrs, "fhir_choice_element", "base_name")
}

/// Reads `#[fhir_resource(resource_type = "Patient")]` from a struct.
pub(crate) fn get_resource_type(attrs: &[Attribute]) -> Option<String> {
    find_string_value(attrs, "fhir_resource", "resource_type")
}
