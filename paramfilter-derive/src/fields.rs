//! Shared field handling for struct and enum derivation.
//!
//! Produces the destructuring pattern for a set of fields together with the
//! `Shape` expression built from the bindings.
//!
//! ## Field Shape Rules
//!
//! | Fields    | Pattern              | Shape                                   |
//! |-----------|----------------------|-----------------------------------------|
//! | Named     | `{ a, b, .. }`       | `Shape::Record` keyed by declared names |
//! | Unnamed   | `(field_0, _, ..)`   | `Shape::Sequence`                       |
//! | Unit      | *(none)*             | supplied by the caller                  |

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote, quote_spanned};
use syn::{Fields, LitStr, Result, ext::IdentExt, spanned::Spanned};

use crate::{attrs::parse_field_options, generics::collect_generics_from_type};

pub(crate) struct FieldsOutput {
    pub(crate) pattern: TokenStream,
    pub(crate) shape: TokenStream,
}

pub(crate) struct FieldContext<'a> {
    pub(crate) generics: &'a syn::Generics,
    pub(crate) crate_root: &'a TokenStream,
    pub(crate) used_generics: &'a mut Vec<Ident>,
}

/// Returns `None` for unit fields; the caller decides how those render.
pub(crate) fn derive_fields(
    ctx: &mut FieldContext<'_>,
    fields: &Fields,
) -> Result<Option<FieldsOutput>> {
    match fields {
        Fields::Named(named) => derive_named(ctx, named).map(Some),
        Fields::Unnamed(unnamed) => derive_unnamed(ctx, unnamed).map(Some),
        Fields::Unit => Ok(None),
    }
}

fn derive_named(ctx: &mut FieldContext<'_>, fields: &syn::FieldsNamed) -> Result<FieldsOutput> {
    let crate_root = ctx.crate_root;
    let mut bindings = Vec::new();
    let mut entries = Vec::new();
    let mut skipped_any = false;

    for field in &fields.named {
        let options = parse_field_options(&field.attrs)?;
        if options.skip {
            skipped_any = true;
            continue;
        }
        let span = field.span();
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new(span, "named field without an identifier"))?;
        let name = options
            .rename
            .unwrap_or_else(|| LitStr::new(&ident.unraw().to_string(), ident.span()));
        collect_generics_from_type(&field.ty, ctx.generics, ctx.used_generics);

        entries.push(quote_spanned! { span =>
            (#name, #ident as &dyn #crate_root::Params)
        });
        bindings.push(ident);
    }

    let rest = skipped_any.then(|| quote! { .. });
    Ok(FieldsOutput {
        pattern: quote! { { #(#bindings,)* #rest } },
        shape: quote! {
            #crate_root::Shape::Record(::std::vec![#(#entries),*])
        },
    })
}

fn derive_unnamed(
    ctx: &mut FieldContext<'_>,
    fields: &syn::FieldsUnnamed,
) -> Result<FieldsOutput> {
    let crate_root = ctx.crate_root;
    let mut patterns = Vec::new();
    let mut items = Vec::new();

    for (index, field) in fields.unnamed.iter().enumerate() {
        let options = parse_field_options(&field.attrs)?;
        if let Some(rename) = &options.rename {
            return Err(syn::Error::new(
                rename.span(),
                "`rename` only applies to named fields",
            ));
        }
        if options.skip {
            patterns.push(quote! { _ });
            continue;
        }
        let span = field.span();
        let binding = format_ident!("field_{index}");
        collect_generics_from_type(&field.ty, ctx.generics, ctx.used_generics);

        items.push(quote_spanned! { span =>
            #binding as &dyn #crate_root::Params
        });
        patterns.push(quote! { #binding });
    }

    Ok(FieldsOutput {
        pattern: quote! { ( #(#patterns),* ) },
        shape: quote! {
            #crate_root::Shape::Sequence(::std::vec![#(#items),*])
        },
    })
}
