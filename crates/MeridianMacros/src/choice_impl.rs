use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataEnum, Fields, Ident};

use crate::field_helpers::get_variant_wire_key;

/// Builds `FhirChoice`, `Serialize` and `Deserialize` for a choice enum.
///
/// Every variant must be a one-field tuple variant carrying
/// `#[fhir_serde(rename = "<base><Type>")]`.
pub(crate) fn generate_choice_impl(
    name: &Ident,
    data: &DataEnum,
    base_name: &str,
) -> syn::Result<TokenStream> {
    let mut variants = Vec::new();
    let mut keys = Vec::new();

    for variant in &data.variants {
        match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {}
            _ => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "choice variants must hold exactly one value",
                ));
            }
        }
        let Some(key) = get_variant_wire_key(variant) else {
            return Err(syn::Error::new_spanned(
                variant,
                "choice variants need #[fhir_serde(rename = \"<wire key>\")]",
            ));
        };
        variants.push(&variant.ident);
        keys.push(key);
    }

    let element_name = format!("{base_name}[x]");
    let expecting = format!("a single {element_name} entry");

    Ok(quote! {
        impl crate::FhirChoice for #name {
            const BASE_NAME: &'static str = #base_name;
            const ELEMENT_NAME: &'static str = #element_name;
            const KEYS: &'static [&'static str] = &[#(#keys),*];

            fn wire_key(&self) -> &'static str {
                match self {
                    #(Self::#variants(_) => #keys,)*
                }
            }

            fn serialize_into<M>(&self, map: &mut M) -> ::core::result::Result<(), M::Error>
            where
                M: serde::ser::SerializeMap,
            {
                match self {
                    #(Self::#variants(value) => map.serialize_entry(#keys, value),)*
                }
            }

            fn deserialize_from<'de, A>(key: &str, map: &mut A) -> ::core::result::Result<Self, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                match key {
                    #(#keys => map.next_value().map(Self::#variants),)*
                    other => Err(serde::de::Error::unknown_field(other, Self::KEYS)),
                }
            }
        }

        impl serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                use serde::ser::SerializeMap;

                let mut state = serializer.serialize_map(Some(1))?;
                crate::FhirChoice::serialize_into(self, &mut state)?;
                state.end()
            }
        }

        impl<'de> serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct ChoiceVisitor;

                impl<'de> serde::de::Visitor<'de> for ChoiceVisitor {
                    type Value = #name;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                        formatter.write_str(#expecting)
                    }

                    fn visit_map<A>(self, mut map: A) -> ::core::result::Result<Self::Value, A::Error>
                    where
                        A: serde::de::MapAccess<'de>,
                    {
                        let mut found: Option<#name> = None;
                        while let Some(key) = map.next_key::<String>()? {
                            if !<#name as crate::FhirChoice>::KEYS.contains(&key.as_str()) {
                                map.next_value::<serde::de::IgnoredAny>()?;
                                continue;
                            }
                            if found.is_some() {
                                return Err(serde::de::Error::custom(concat!(
                                    "multiple values for choice element ",
                                    #element_name
                                )));
                            }
                            found = Some(<#name as crate::FhirChoice>::deserialize_from(&key, &mut map)?);
                        }
                        found.ok_or_else(|| serde::de::Error::missing_field(#element_name))
                    }
                }

                deserializer.deserialize_map(ChoiceVisitor)
            }
        }
    })
}
