//! Enum-specific `Params` derivation.
//!
//! Each variant is matched separately: struct-like variants become records of
//! their fields, tuple variants become sequences, and unit variants render as
//! their name (or `#[param(rename = "...")]`).

use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{DataEnum, LitStr, Result, ext::IdentExt};

use crate::{
    DeriveOutput,
    attrs::parse_variant_rename,
    fields::{FieldContext, derive_fields},
};

pub(crate) fn derive_enum(
    data: &DataEnum,
    generics: &syn::Generics,
    crate_root: &TokenStream,
) -> Result<DeriveOutput> {
    let mut used_generics: Vec<Ident> = Vec::new();
    let mut arms = Vec::new();

    for variant in &data.variants {
        let rename = parse_variant_rename(&variant.attrs)?;
        let variant_ident = &variant.ident;
        let mut ctx = FieldContext {
            generics,
            crate_root,
            used_generics: &mut used_generics,
        };

        let arm = match derive_fields(&mut ctx, &variant.fields)? {
            Some(output) => {
                if let Some(rename) = rename {
                    return Err(syn::Error::new(
                        rename.span(),
                        "`rename` on a variant only applies to unit variants",
                    ));
                }
                let pattern = output.pattern;
                let shape = output.shape;
                quote! { Self::#variant_ident #pattern => { #shape } }
            }
            None => {
                let name = rename.unwrap_or_else(|| {
                    LitStr::new(&variant_ident.unraw().to_string(), variant_ident.span())
                });
                quote! { Self::#variant_ident => #crate_root::Shape::text(#name) }
            }
        };
        arms.push(arm);
    }

    let shape_body = if arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#arms,)*
            }
        }
    };

    Ok(DeriveOutput {
        shape_body,
        used_generics,
    })
}
