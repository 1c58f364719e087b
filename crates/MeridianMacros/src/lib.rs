//! # Meridian Macros
//!
//! Derive macros that give the generated FHIR model its JSON shape.
//!
//! - **`#[derive(FhirSerde)]`** implements `serde::Serialize` and
//!   `serde::Deserialize` following FHIR's JSON conventions: camelCase keys,
//!   omitted absent elements, `resourceType` discriminators and flattened
//!   choice (`[x]`) elements.
//! - **`#[derive(FhirNew)]`** implements a `new` constructor that takes only the
//!   required elements.
//!
//! The generated code refers to `crate::FhirChoice` and `crate::FhirResource`,
//! so these derives are meant to be used inside `meridian-fhir-lib`.
//!
//! ## Usage
//!
//! ```ignore
//! #[derive(Debug, Clone, PartialEq, FhirSerde, FhirNew)]
//! #[fhir_resource(resource_type = "Condition")]
//! pub struct Condition {
//!     pub id: Option<String>,
//!     #[fhir_serde(rename = "implicitRules")]
//!     pub implicit_rules: Option<Uri>,
//!     #[fhir_serde(flatten)]
//!     pub onset: Option<ConditionOnset>,
//!     pub subject: Reference,
//! }
//!
//! #[derive(Debug, Clone, PartialEq, FhirSerde)]
//! #[fhir_choice_element(base_name = "onset")]
//! pub enum ConditionOnset {
//!     #[fhir_serde(rename = "onsetDateTime")]
//!     DateTime(DateTime),
//!     #[fhir_serde(rename = "onsetString")]
//!     String(String),
//! }
//! ```

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

use crate::choice_impl::generate_choice_impl;
use crate::constructor_impl::generate_constructor;
use crate::deserialize_impl::generate_struct_deserialize;
use crate::field_helpers::{get_choice_base_name, get_resource_type};
use crate::serialize_impl::generate_struct_serialize;

pub(crate) mod choice_impl;
pub(crate) mod constructor_impl;
pub(crate) mod deserialize_impl;
pub(crate) mod field_helpers;
pub(crate) mod serialize_impl;
pub(crate) mod type_helpers;

/// Derives FHIR JSON serialization.
///
/// # Supported Attributes
///
/// - `#[fhir_serde(rename = "name")]` on a field: explicit wire key, needed
///   wherever the key is not the camelCase of the field (`fhirVersion` for
///   `fhir_version` is derived, `class` for a reserved word is written out)
/// - `#[fhir_serde(flatten)]` on a field: the field holds a choice enum
/// - `#[fhir_resource(resource_type = "Patient")]` on a struct: writes and
///   checks the `resourceType` discriminator and implements `FhirResource`
/// - `#[fhir_choice_element(base_name = "value")]` on an enum: marks a choice
///   enum; each variant needs `#[fhir_serde(rename = "valueQuantity")]`
///
/// # Decoding
///
/// Required (non-`Option`) fields must be present. `null` is accepted as
/// absent for optional fields. Unknown keys are skipped. At most one key of
/// each choice group may appear.
#[proc_macro_derive(FhirSerde, attributes(fhir_serde, fhir_resource, fhir_choice_element))]
pub fn fhir_serde_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_fhir_serde(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_fhir_serde(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "FhirSerde does not support generic types",
        ));
    }

    match &input.data {
        Data::Struct(data) => {
            let Fields::Named(fields) = &data.fields else {
                return Err(syn::Error::new_spanned(
                    name,
                    "FhirSerde structs need named fields",
                ));
            };
            let resource_type = get_resource_type(&input.attrs);
            let serialize = generate_struct_serialize(name, fields, resource_type.as_deref());
            let deserialize = generate_struct_deserialize(name, fields, resource_type.as_deref());
            let resource_impl = resource_type.map(|resource_type| {
                quote! {
                    impl crate::FhirResource for #name {
                        const RESOURCE_TYPE: &'static str = #resource_type;

                        fn id(&self) -> Option<&str> {
                            self.id.as_deref()
                        }
                    }
                }
            });
            Ok(quote! {
                #serialize
                #deserialize
                #resource_impl
            })
        }
        Data::Enum(data) => {
            let Some(base_name) = get_choice_base_name(&input.attrs) else {
                return Err(syn::Error::new_spanned(
                    name,
                    "FhirSerde enums need #[fhir_choice_element(base_name = \"...\")]",
                ));
            };
            generate_choice_impl(name, data, &base_name)
        }
        Data::Union(_) => Err(syn::Error::new_spanned(
            name,
            "FhirSerde does not support unions",
        )),
    }
}

/// Derives `pub fn new(..)` taking the required (non-`Option`) fields in
/// declaration order.
///
/// ```rust,ignore
/// #[derive(FhirNew)]
/// pub struct Reference {
///     pub reference: Option<String>,
///     pub display: Option<String>,
/// }
///
/// #[derive(FhirNew)]
/// pub struct CarePlan {
///     pub status: RequestStatus,
///     pub intent: RequestIntent,
///     pub subject: Reference,
///     pub title: Option<String>,
/// }
///
/// let plan = CarePlan::new(RequestStatus::Active, RequestIntent::Plan, subject);
/// ```
#[proc_macro_derive(FhirNew, attributes(fhir_serde))]
pub fn fhir_new_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let expanded = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => generate_constructor(name, fields),
            _ => syn::Error::new_spanned(name, "FhirNew structs need named fields")
                .into_compile_error(),
        },
        _ => syn::Error::new_spanned(name, "FhirNew only supports structs").into_compile_error(),
    };
    TokenStream::from(expanded)
}
