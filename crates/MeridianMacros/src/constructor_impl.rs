use proc_macro2::TokenStream;
use quote::quote;
use syn::{FieldsNamed, Ident};

use crate::type_helpers::get_option_inner_type;

/// Builds `pub fn new(..)` taking every non-`Option` field in declaration
/// order. `Option` fields start as `None`.
pub(crate) fn generate_constructor(name: &Ident, fields: &FieldsNamed) -> TokenStream {
    let mut params = Vec::new();
    let mut inits = Vec::new();

    for field in &fields.named {
        let ident = &field.ident;
        let ty = &field.ty;
        if get_option_inner_type(ty).is_some() {
            inits.push(quote! { #ident: None });
        } else {
            params.push(quote! { #ident: #ty });
            inits.push(quote! { #ident });
        }
    }

    let doc = format!(
        "Creates a `{name}` from its required elements. Every optional element starts absent."
    );

    quote! {
        impl #name {
            #[doc = #doc]
            #[allow(clippy::too_many_arguments)]
            pub fn new(#(#params),*) -> Self {
                Self {
                    #(#inits),*
                }
            }
        }
    }
}
