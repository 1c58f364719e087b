use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{FieldsNamed, Ident};

use crate::field_helpers::{get_effective_field_name, is_flattened};
use crate::type_helpers::get_option_inner_type;

/// Builds `impl Deserialize` for a record struct.
///
/// Decoding walks the JSON object once. Each key either fills a field slot,
/// selects a variant of a flattened choice group, checks the
/// `resourceType` discriminator, or is skipped. After the walk every
/// required slot must be filled.
///
/// Failure cases:
/// - a required field or required choice group is absent
/// - a key occurs twice (an explicit `null` counts), or two keys of one
///   choice group occur
/// - `resourceType` names a different resource
pub(crate) fn generate_struct_deserialize(
    name: &Ident,
    fields: &FieldsNamed,
    resource_type: Option<&str>,
) -> TokenStream {
    let name_str = name.to_string();
    let expecting = format!("a FHIR {name_str} object");

    let mut slot_decls = Vec::new();
    let mut key_arms = Vec::new();
    let mut choice_branches = Vec::new();
    let mut choice_types = Vec::new();
    let mut required_checks = Vec::new();
    let mut field_inits = Vec::new();

    for field in &fields.named {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let slot = format_ident!("slot_{}", ident.unraw());
        let ty = &field.ty;
        let option_inner = get_option_inner_type(ty);

        if is_flattened(field) {
            let choice_ty = option_inner.unwrap_or(ty);
            choice_types.push(choice_ty);
            slot_decls.push(quote! { let mut #slot: Option<#choice_ty> = None; });
            choice_branches.push(quote! {
                if <#choice_ty as crate::FhirChoice>::KEYS.contains(&other) {
                    if #slot.is_some() {
                        return Err(serde::de::Error::custom(format!(
                            "multiple values for choice element {}",
                            <#choice_ty as crate::FhirChoice>::ELEMENT_NAME
                        )));
                    }
                    #slot = Some(<#choice_ty as crate::FhirChoice>::deserialize_from(other, &mut map)?);
                    continue;
                }
            });
            if option_inner.is_none() {
                required_checks.push(quote! {
                    let #slot = #slot.ok_or_else(|| {
                        serde::de::Error::missing_field(<#choice_ty as crate::FhirChoice>::ELEMENT_NAME)
                    })?;
                });
            }
            field_inits.push(quote! { #ident: #slot });
            continue;
        }

        let key = get_effective_field_name(field);
        match option_inner {
            Some(_) => {
                // an explicit null leaves the slot empty but still counts
                let seen = format_ident!("seen_{}", ident.unraw());
                slot_decls.push(quote! {
                    let mut #slot: #ty = None;
                    let mut #seen = false;
                });
                key_arms.push(quote! {
                    #key => {
                        if #seen {
                            return Err(serde::de::Error::duplicate_field(#key));
                        }
                        #seen = true;
                        #slot = map.next_value::<#ty>()?;
                    }
                });
            }
            None => {
                slot_decls.push(quote! { let mut #slot: Option<#ty> = None; });
                key_arms.push(quote! {
                    #key => {
                        if #slot.is_some() {
                            return Err(serde::de::Error::duplicate_field(#key));
                        }
                        #slot = Some(map.next_value::<#ty>()?);
                    }
                });
                required_checks.push(quote! {
                    let #slot = #slot.ok_or_else(|| serde::de::Error::missing_field(#key))?;
                });
            }
        }
        field_inits.push(quote! { #ident: #slot });
    }

    // A key shaped like `<base><Type>` for a known choice base is a type
    // this model does not carry; dropping it is data loss worth surfacing.
    let skip_unknown = if choice_types.is_empty() {
        quote! {
            tracing::trace!(element = other, record = #name_str, "skipping unknown element");
        }
    } else {
        quote! {
            const CHOICE_ELEMENTS: &[(&str, &str)] = &[
                #((
                    <#choice_types as crate::FhirChoice>::BASE_NAME,
                    <#choice_types as crate::FhirChoice>::ELEMENT_NAME,
                )),*
            ];
            let stray_choice = CHOICE_ELEMENTS.iter().find(|&&(base, _)| {
                other
                    .strip_prefix(base)
                    .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_uppercase()))
            });
            match stray_choice {
                Some(&(_, element)) => tracing::warn!(
                    element = other,
                    choice = element,
                    record = #name_str,
                    "skipping unsupported type for choice element"
                ),
                None => tracing::trace!(
                    element = other,
                    record = #name_str,
                    "skipping unknown element"
                ),
            }
        }
    };

    let resource_arm = resource_type.map(|resource_type| {
        quote! {
            "resourceType" => {
                let found = map.next_value::<String>()?;
                if found != #resource_type {
                    return Err(serde::de::Error::invalid_value(
                        serde::de::Unexpected::Str(&found),
                        &#resource_type,
                    ));
                }
            }
        }
    });

    quote! {
        impl<'de> serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct RecordVisitor;

                impl<'de> serde::de::Visitor<'de> for RecordVisitor {
                    type Value = #name;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                        formatter.write_str(#expecting)
                    }

                    fn visit_map<A>(self, mut map: A) -> ::core::result::Result<Self::Value, A::Error>
                    where
                        A: serde::de::MapAccess<'de>,
                    {
                        #(#slot_decls)*

                        while let Some(key) = map.next_key::<String>()? {
                            match key.as_str() {
                                #resource_arm
                                #(#key_arms)*
                                other => {
                                    #(#choice_branches)*
                                    #skip_unknown
                                    map.next_value::<serde::de::IgnoredAny>()?;
                                }
                            }
                        }

                        #(#required_checks)*

                        Ok(#name {
                            #(#field_inits),*
                        })
                    }
                }

                deserializer.deserialize_map(RecordVisitor)
            }
        }
    }
}
