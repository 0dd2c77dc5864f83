//! Output type for logging boundaries.

use std::fmt;

use serde::Serialize;
use serde_json::Value as JsonValue;

/// A filtered parameter tree, ready to hand to a log sink.
///
/// Displays as compact JSON and serializes transparently as the inner value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilteredParams(JsonValue);

impl FilteredParams {
    pub(crate) fn new(value: JsonValue) -> Self {
        Self(value)
    }

    /// Borrows the filtered tree.
    pub fn value(&self) -> &JsonValue {
        &self.0
    }

    /// Unwraps the filtered tree.
    pub fn into_inner(self) -> JsonValue {
        self.0
    }
}

impl fmt::Display for FilteredParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<FilteredParams> for JsonValue {
    fn from(params: FilteredParams) -> Self {
        params.0
    }
}

impl PartialEq<JsonValue> for FilteredParams {
    fn eq(&self, other: &JsonValue) -> bool {
        &self.0 == other
    }
}
