//! Generic type parameter handling and trait bound management.
//!
//! A `Params` bound is added only for generics that appear in walked fields.
//! Skipped fields contribute nothing.
//!
//! ## PhantomData Handling
//!
//! `PhantomData<T>` is skipped when collecting generics. It always renders as
//! `null`, so `T` never needs to implement `Params`:
//!
//! ```ignore
//! struct TypedId<T> {
//!     id: String,
//!     _marker: PhantomData<T>,  // T should NOT require Params
//! }
//! ```

use proc_macro2::TokenStream;
use syn::{GenericArgument, Ident, PathArguments, Type, parse_quote};

/// Records which of a container's type parameters a field type mentions.
///
/// Walked fields are values the filter borrows as `&dyn Params`, so only
/// paths, references, slices, arrays, and tuples need to be followed.
/// Anything else (function pointers, trait objects, macros) is left alone;
/// such a field fails to compile with the `Params` diagnostic instead.
struct Usage<'a> {
    params: &'a syn::Generics,
    found: &'a mut Vec<Ident>,
}

impl Usage<'_> {
    fn note(&mut self, ident: &Ident) {
        let declared = self.params.type_params().any(|param| param.ident == *ident);
        if declared && !self.found.contains(ident) {
            self.found.push(ident.clone());
        }
    }

    fn ty(&mut self, ty: &Type) {
        match ty {
            Type::Path(path) => {
                if let Some(qself) = &path.qself {
                    self.ty(&qself.ty);
                }
                self.path(&path.path);
            }
            Type::Reference(reference) => self.ty(&reference.elem),
            Type::Slice(slice) => self.ty(&slice.elem),
            Type::Array(array) => self.ty(&array.elem),
            Type::Tuple(tuple) => tuple.elems.iter().for_each(|elem| self.ty(elem)),
            _ => {}
        }
    }

    fn path(&mut self, path: &syn::Path) {
        // `PhantomData<T>` renders as `null` whatever `T` is.
        if path.segments.last().is_some_and(|last| last.ident == "PhantomData") {
            return;
        }
        for segment in &path.segments {
            self.note(&segment.ident);
            if let PathArguments::AngleBracketed(args) = &segment.arguments {
                for arg in &args.args {
                    if let GenericArgument::Type(inner) = arg {
                        self.ty(inner);
                    }
                }
            }
        }
    }
}

pub(crate) fn collect_generics_from_type(
    ty: &Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    Usage {
        params: generics,
        found: result,
    }
    .ty(ty);
}

/// Adds `Params` bounds to generic parameters used in walked fields.
pub(crate) fn add_params_bounds(
    mut generics: syn::Generics,
    used_generics: &[Ident],
    crate_root: &TokenStream,
) -> syn::Generics {
    for param in generics.type_params_mut() {
        if used_generics.iter().any(|g| g == &param.ident) {
            param.bounds.push(parse_quote!(#crate_root::Params));
        }
    }
    generics
}
