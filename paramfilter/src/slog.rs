//! Adapters for emitting filtered parameters through `slog`.
//!
//! [`FilteredParams`] implements `slog::Value` by handing the filtered JSON tree
//! to `slog`'s nested-value support, so structured drains receive the tree
//! itself rather than a flattened string.
//!
//! It does not configure `slog` or decide which scope applies; callers pick the
//! scope when filtering.

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{filter::ParamFilter, output::FilteredParams, traverse::Params};

impl SlogValue for FilteredParams {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value().clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Extension trait for logging filtered parameters with `slog`.
///
/// ```ignore
/// use paramfilter::slog::SlogFilteredExt;
///
/// info!(logger, "calling service"; "params" => filter.slog("Peccy Service", &params));
/// ```
pub trait SlogFilteredExt {
    /// Filters `data` for `scope` and returns a structured `slog::Value`.
    fn slog<T: Params + ?Sized>(&self, scope: &str, data: &T) -> FilteredParams;
}

impl SlogFilteredExt for ParamFilter {
    fn slog<T: Params + ?Sized>(&self, scope: &str, data: &T) -> FilteredParams {
        self.filtered(scope, data)
    }
}
