//! The traversal contract for parameter trees.
//!
//! The filter never inspects concrete types. Instead, every value it walks
//! reports one of four shapes through [`Params::shape`]:
//!
//! - **Mapping**: open key/value pairs (`HashMap`, `BTreeMap`, JSON objects)
//! - **Sequence**: ordered elements (`Vec`, slices, sets, tuples, JSON arrays)
//! - **Record**: a fixed set of declared fields (`#[derive(Record)]` structs)
//! - **Scalar**: an opaque leaf, already rendered as a JSON value
//!
//! Implementations are provided for common std types, `serde_json::Value`, and
//! (behind feature flags) `chrono`, `time`, and `uuid` types.
//!
//! ## Map keys are never filtered
//!
//! Keys are reported as-is and copied to the output verbatim. Only values at
//! sensitive keys are replaced.

use std::borrow::Cow;

use serde_json::Value as JsonValue;

mod json;
mod maps;
mod passthrough;
mod sequences;
mod wrappers;

#[cfg(test)]
mod tests;

/// The shape a value exposes to the filter.
pub enum Shape<'a> {
    /// Key/value pairs. Keys are matched case-insensitively.
    Mapping(Vec<(Cow<'a, str>, &'a dyn Params)>),
    /// Ordered elements. No matching happens at this level.
    Sequence(Vec<&'a dyn Params>),
    /// Declared fields of a record type, spelled exactly as declared.
    Record(Vec<(&'static str, &'a dyn Params)>),
    /// Opaque leaf, returned unchanged.
    Scalar(JsonValue),
}

impl Shape<'_> {
    /// A `null` leaf.
    pub fn null() -> Self {
        Shape::Scalar(JsonValue::Null)
    }

    /// A string leaf.
    pub fn text(value: impl Into<String>) -> Self {
        Shape::Scalar(JsonValue::String(value.into()))
    }

    /// Returns `true` for mappings, sequences, and records.
    pub fn is_container(&self) -> bool {
        !matches!(self, Shape::Scalar(_))
    }
}

impl std::fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shape::Mapping(entries) => f
                .debug_tuple("Mapping")
                .field(&entries.iter().map(|(key, _)| key).collect::<Vec<_>>())
                .finish(),
            Shape::Sequence(items) => f.debug_tuple("Sequence").field(&items.len()).finish(),
            Shape::Record(fields) => f
                .debug_tuple("Record")
                .field(&fields.iter().map(|(name, _)| name).collect::<Vec<_>>())
                .finish(),
            Shape::Scalar(value) => f.debug_tuple("Scalar").field(value).finish(),
        }
    }
}

/// A value the filter can walk.
///
/// Implement this for types that hold parameters. Most types either derive it
/// with `#[derive(Record)]` or delegate to a field:
///
/// ```rust
/// use paramfilter::{Params, Shape};
///
/// struct Opaque(u32);
///
/// impl Params for Opaque {
///     fn shape(&self) -> Shape<'_> {
///         Shape::text(format!("opaque#{}", self.0))
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Params`",
    label = "this type cannot be walked by the parameter filter",
    note = "use `#[derive(Record)]` on the type definition",
    note = "or implement `Params` returning `Shape::Scalar` for opaque values"
)]
pub trait Params {
    /// Reports how this value should be traversed.
    fn shape(&self) -> Shape<'_>;
}

// =============================================================================
// Scalar implementation helper
// =============================================================================

macro_rules! impl_params_scalar {
    ($($ty:ty => |$value:ident| $to_json:expr),* $(,)?) => {
        $(
            impl crate::traverse::Params for $ty {
                fn shape(&self) -> crate::traverse::Shape<'_> {
                    let $value = self;
                    crate::traverse::Shape::Scalar($to_json)
                }
            }
        )*
    };
}

pub(crate) use impl_params_scalar;
