//! Struct-specific `Params` derivation.
//!
//! Named-field structs become records, tuple structs become sequences, and
//! unit structs render as `null`.

use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{DataStruct, Result};

use crate::{
    DeriveOutput,
    fields::{FieldContext, derive_fields},
};

pub(crate) fn derive_struct(
    data: &DataStruct,
    generics: &syn::Generics,
    crate_root: &TokenStream,
) -> Result<DeriveOutput> {
    let mut used_generics: Vec<Ident> = Vec::new();
    let mut ctx = FieldContext {
        generics,
        crate_root,
        used_generics: &mut used_generics,
    };

    let shape_body = match derive_fields(&mut ctx, &data.fields)? {
        Some(output) => {
            let pattern = output.pattern;
            let shape = output.shape;
            quote! {
                let Self #pattern = self;
                #shape
            }
        }
        None => quote! { #crate_root::Shape::null() },
    };

    Ok(DeriveOutput {
        shape_body,
        used_generics,
    })
}
