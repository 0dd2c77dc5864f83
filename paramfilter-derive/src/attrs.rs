//! Parsing of `#[param(...)]` attributes.
//!
//! Fields accept `#[param(skip)]` and `#[param(rename = "...")]`. Enum variants
//! accept `#[param(rename = "...")]`, which changes how a unit variant renders.
//! Containers accept nothing.

use syn::{Attribute, LitStr, Meta, Result, spanned::Spanned};

/// Options collected from a field's `#[param(...)]` attributes.
///
/// | Attribute                   | Effect                                     |
/// |-----------------------------|--------------------------------------------|
/// | None                        | Field is walked under its declared name    |
/// | `#[param(rename = "Name")]` | Field is walked under `Name`               |
/// | `#[param(skip)]`            | Field is left out of the filtered output   |
#[derive(Clone, Debug, Default)]
pub(crate) struct FieldOptions {
    pub(crate) rename: Option<LitStr>,
    pub(crate) skip: bool,
}

fn param_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("param"))
}

fn require_list(attr: &Attribute) -> Result<()> {
    match &attr.meta {
        Meta::List(_) => Ok(()),
        _ => Err(syn::Error::new(
            attr.span(),
            "expected #[param(skip)] or #[param(rename = \"...\")]",
        )),
    }
}

fn parse_rename(meta: &syn::meta::ParseNestedMeta<'_>, target: &mut Option<LitStr>) -> Result<()> {
    if target.is_some() {
        return Err(meta.error("duplicate `rename`"));
    }
    let lit: LitStr = meta.value()?.parse()?;
    if lit.value().is_empty() {
        return Err(syn::Error::new(lit.span(), "`rename` must not be empty"));
    }
    *target = Some(lit);
    Ok(())
}

pub(crate) fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut options = FieldOptions::default();
    for attr in param_attrs(attrs) {
        require_list(attr)?;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                if options.skip {
                    return Err(meta.error("duplicate `skip`"));
                }
                options.skip = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                parse_rename(&meta, &mut options.rename)
            } else {
                Err(meta.error("unsupported #[param] option; expected `skip` or `rename`"))
            }
        })?;
    }
    if options.skip && options.rename.is_some() {
        return Err(syn::Error::new(
            attrs
                .iter()
                .find(|attr| attr.path().is_ident("param"))
                .map_or_else(proc_macro2::Span::call_site, Spanned::span),
            "`skip` and `rename` cannot be combined",
        ));
    }
    Ok(options)
}

pub(crate) fn parse_variant_rename(attrs: &[Attribute]) -> Result<Option<LitStr>> {
    let mut rename = None;
    for attr in param_attrs(attrs) {
        require_list(attr)?;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                parse_rename(&meta, &mut rename)
            } else {
                Err(meta.error("unsupported #[param] option on a variant; expected `rename`"))
            }
        })?;
    }
    Ok(rename)
}

pub(crate) fn reject_container_attrs(attrs: &[Attribute]) -> Result<()> {
    match param_attrs(attrs).next() {
        Some(attr) => Err(syn::Error::new(
            attr.span(),
            "#[param] is only supported on fields and enum variants",
        )),
        None => Ok(()),
    }
}
