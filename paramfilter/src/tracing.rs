//! Adapters for emitting filtered parameters through `tracing`.
//!
//! The filtered tree is recorded as a display value (compact JSON). Only the
//! filtered copy ever reaches the subscriber.
//!
//! # Example
//!
//! ```rust
//! use paramfilter::{ParamFilter, tracing::TracingFilteredExt};
//! use serde_json::json;
//!
//! let filter = ParamFilter::new(["password"]).unwrap();
//! let params = json!({"user": "peccy", "password": "p@ssw0rd"});
//!
//! tracing::info!(params = filter.traced("Peccy Service", &params), "calling service");
//! ```

use tracing::field::{DisplayValue, display};

use crate::{filter::ParamFilter, output::FilteredParams, traverse::Params};

/// Extension trait for recording filtered parameters as `tracing` fields.
pub trait TracingFilteredExt {
    /// Filters `data` for `scope` and wraps it as a display value.
    fn traced<T: Params + ?Sized>(&self, scope: &str, data: &T) -> DisplayValue<FilteredParams>;
}

impl TracingFilteredExt for ParamFilter {
    fn traced<T: Params + ?Sized>(&self, scope: &str, data: &T) -> DisplayValue<FilteredParams> {
        display(self.filtered(scope, data))
    }
}
