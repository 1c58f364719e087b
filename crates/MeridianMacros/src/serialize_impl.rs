use proc_macro2::TokenStream;
use quote::quote;
use syn::{FieldsNamed, Ident};

use crate::field_helpers::{get_effective_field_name, is_flattened};
use crate::type_helpers::{get_option_inner_type, get_vec_inner_type};

/// Builds `impl Serialize` for a record struct.
///
/// The record is written as a JSON object. A resource writes its
/// `resourceType` first. `None` fields and empty optional lists are skipped,
/// and flattened choice fields write their single `<base><Type>` entry
/// straight into this object.
pub(crate) fn generate_struct_serialize(
    name: &Ident,
    fields: &FieldsNamed,
    resource_type: Option<&str>,
) -> TokenStream {
    let resource_entry = resource_type.map(|resource_type| {
        quote! {
            state.serialize_entry("resourceType", #resource_type)?;
        }
    });

    let entries = fields.named.iter().map(|field| {
        let ident = &field.ident;
        let key = get_effective_field_name(field);
        let option_inner = get_option_inner_type(&field.ty);

        if is_flattened(field) {
            return if option_inner.is_some() {
                quote! {
                    if let Some(choice) = &self.#ident {
                        crate::FhirChoice::serialize_into(choice, &mut state)?;
                    }
                }
            } else {
                quote! {
                    crate::FhirChoice::serialize_into(&self.#ident, &mut state)?;
                }
            };
        }

        match option_inner {
            Some(inner) if get_vec_inner_type(inner).is_some() => quote! {
                if let Some(values) = &self.#ident {
                    if !values.is_empty() {
                        state.serialize_entry(#key, values)?;
                    }
                }
            },
            Some(_) => quote! {
                if let Some(value) = &self.#ident {
                    state.serialize_entry(#key, value)?;
                }
            },
            None => quote! {
                state.serialize_entry(#key, &self.#ident)?;
            },
        }
    });

    quote! {
        impl serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                use serde::ser::SerializeMap;

                let mut state = serializer.serialize_map(None)?;
                #resource_entry
                #(#entries)*
                state.end()
            }
        }
    }
}
