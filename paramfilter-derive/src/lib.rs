//! Derive macros for `paramfilter`.
//!
//! This crate generates the traversal code behind `#[derive(Record)]`. It:
//! - reads `#[param(...)]` field and variant attributes
//! - emits a `paramfilter::Params` implementation that reports each declared
//!   field under its exact spelling
//!
//! It does **not** decide which fields are sensitive. That is configured at
//! runtime through the filter's rules.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Result, parse_macro_input};

mod attrs;
mod derive_enum;
mod derive_struct;
mod fields;
mod generics;
use attrs::reject_container_attrs;
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::add_params_bounds;

/// Derives `paramfilter::Params` for structs and enums.
///
/// # Shapes
///
/// - Structs with named fields are reported as records. Each field is listed under
///   its declared spelling (`password`, `PASSWORD`, and `Password` stay distinct in
///   the output even though they all match the same rule). Raw identifiers drop
///   the `r#` prefix.
/// - Tuple structs are reported as sequences of their fields.
/// - Unit structs render as `null`.
/// - Enums are matched per variant: struct-like variants are records, tuple
///   variants are sequences, and unit variants render as their name.
///
/// # Field Attributes
///
/// - **No annotation**: the field is walked (its type must implement `Params`).
/// - `#[param(rename = "Name")]`: the field is reported under `Name`.
/// - `#[param(skip)]`: the field is left out of the output. Use this for foreign
///   types that do not implement `Params`.
///
/// # Variant Attributes
///
/// - `#[param(rename = "NAME")]`: a unit variant renders as `"NAME"`.
///
/// Unions are rejected at compile time.
#[proc_macro_derive(Record, attributes(param))]
pub fn derive_record(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the paramfilter crate root.
///
/// Handles crate renaming (e.g., `pf = { package = "paramfilter", ... }`)
/// and internal usage (when the derive is used inside paramfilter itself).
fn crate_root() -> TokenStream {
    match crate_name("paramfilter") {
        Ok(FoundCrate::Itself) => quote! { crate },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::paramfilter },
    }
}

struct DeriveOutput {
    shape_body: TokenStream,
    used_generics: Vec<Ident>,
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    reject_container_attrs(&attrs)?;

    let crate_root = crate_root();

    let output = match &data {
        Data::Struct(data) => derive_struct(data, &generics, &crate_root)?,
        Data::Enum(data) => derive_enum(data, &generics, &crate_root)?,
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span,
                "`Record` cannot be derived for unions",
            ));
        }
    };

    let bounded = add_params_bounds(generics, &output.used_generics, &crate_root);
    let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();
    let shape_body = output.shape_body;

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics #crate_root::Params for #ident #ty_generics #where_clause {
            fn shape(&self) -> #crate_root::Shape<'_> {
                #shape_body
            }
        }
    })
}
