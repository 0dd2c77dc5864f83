//! The parameter filter and its builder.
//!
//! [`ParamFilter::filter`] is a pure structural recursion over [`Shape`]s:
//!
//! - mapping and record entries whose key matches are replaced by [`FILTERED`]
//! - everything else is filtered recursively, so nested data under
//!   non-sensitive keys is still scanned
//! - leaves are returned unchanged
//!
//! The input is only borrowed. The output is always a freshly built
//! `serde_json::Value`, so nothing the caller does to it can reach the input.

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::{
    error::FilterError,
    output::FilteredParams,
    rules::{FilterRuleSet, FilterSpec, Matchers, WILDCARD_SCOPE},
    traverse::{Params, Shape},
};

/// Replacement text for sensitive values.
pub const FILTERED: &str = "[FILTERED]";

/// Replacement text for values that could not be serialized by
/// [`ParamFilter::filter_serialized`].
pub const UNSERIALIZABLE: &str = "[FILTERED: unserializable value]";

/// Container nesting depth past which subtrees are replaced wholesale.
pub const DEFAULT_MAX_DEPTH: usize = 128;

// =============================================================================
// ParamFilter
// =============================================================================

/// Redacts sensitive parameters by field name, per scope.
///
/// A filter is immutable once built and can be shared freely between threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamFilter {
    rules: FilterRuleSet,
    max_depth: usize,
}

impl ParamFilter {
    /// Builds a filter from a rule specification.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    ///
    /// use paramfilter::ParamFilter;
    ///
    /// let scoped = ParamFilter::new(BTreeMap::from([("Peccy Service", vec!["password"])])).unwrap();
    /// let legacy = ParamFilter::new(["peccy_name"]).unwrap();
    ///
    /// assert!(scoped.rules().is_sensitive("Peccy Service", "PASSWORD"));
    /// assert!(legacy.rules().is_sensitive("anything", "Peccy_Name"));
    /// ```
    pub fn new(spec: impl Into<FilterSpec>) -> Result<Self, FilterError> {
        let rules = FilterRuleSet::from_spec(spec.into())?;
        Ok(Self::from_rules(rules, DEFAULT_MAX_DEPTH))
    }

    /// Builds a filter from an untyped JSON rule specification.
    pub fn from_value(spec: &JsonValue) -> Result<Self, FilterError> {
        Self::new(FilterSpec::try_from(spec)?)
    }

    /// Starts a builder with no rules.
    pub fn builder() -> FilterBuilder {
        FilterBuilder::default()
    }

    fn from_rules(rules: FilterRuleSet, max_depth: usize) -> Self {
        if rules.is_empty() {
            ::tracing::warn!("parameter filter built without any sensitive field names");
        } else {
            ::tracing::debug!(
                scopes = rules.scopes().count(),
                matchers = rules.matcher_count(),
                global = rules.wildcard().is_some(),
                max_depth,
                "parameter filter built"
            );
        }
        Self { rules, max_depth }
    }

    /// The normalized rule table.
    pub fn rules(&self) -> &FilterRuleSet {
        &self.rules
    }

    /// Container nesting depth past which subtrees are replaced wholesale.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns a filtered deep copy of `data` for `scope`.
    ///
    /// Never fails and never mutates `data`.
    pub fn filter<T: Params + ?Sized>(&self, scope: &str, data: &T) -> JsonValue {
        let matchers = self.rules.resolve(scope);
        self.filter_shape(&matchers, data.shape(), 0)
    }

    /// Serializes `data` to JSON and filters the result.
    ///
    /// Serialization failures yield [`UNSERIALIZABLE`] instead of an error, so a
    /// bad value can never break the logging call that wanted it.
    pub fn filter_serialized<T: Serialize + ?Sized>(&self, scope: &str, data: &T) -> JsonValue {
        match serde_json::to_value(data) {
            Ok(json) => self.filter(scope, &json),
            Err(_) => JsonValue::String(UNSERIALIZABLE.to_owned()),
        }
    }

    /// Filters `data` and wraps the result for a logging boundary.
    pub fn filtered<T: Params + ?Sized>(&self, scope: &str, data: &T) -> FilteredParams {
        FilteredParams::new(self.filter(scope, data))
    }

    fn filter_shape(&self, matchers: &Matchers<'_>, shape: Shape<'_>, depth: usize) -> JsonValue {
        if shape.is_container() && depth >= self.max_depth {
            return JsonValue::String(FILTERED.to_owned());
        }
        match shape {
            Shape::Mapping(entries) => {
                let mut out = Map::with_capacity(entries.len());
                for (key, value) in entries {
                    let filtered = self.filter_entry(matchers, &key, value, depth);
                    out.insert(key.into_owned(), filtered);
                }
                JsonValue::Object(out)
            }
            Shape::Record(fields) => {
                let mut out = Map::with_capacity(fields.len());
                for (name, value) in fields {
                    let filtered = self.filter_entry(matchers, name, value, depth);
                    out.insert(name.to_owned(), filtered);
                }
                JsonValue::Object(out)
            }
            Shape::Sequence(items) => JsonValue::Array(
                items
                    .into_iter()
                    .map(|item| self.filter_shape(matchers, item.shape(), depth + 1))
                    .collect(),
            ),
            Shape::Scalar(value) => value,
        }
    }

    fn filter_entry(
        &self,
        matchers: &Matchers<'_>,
        key: &str,
        value: &dyn Params,
        depth: usize,
    ) -> JsonValue {
        if matchers.contains(key) {
            JsonValue::String(FILTERED.to_owned())
        } else {
            self.filter_shape(matchers, value.shape(), depth + 1)
        }
    }
}

// =============================================================================
// FilterBuilder
// =============================================================================

/// Incremental construction of a [`ParamFilter`].
///
/// Repeated calls for the same scope merge their field names.
#[derive(Clone, Debug)]
pub struct FilterBuilder {
    entries: Vec<(String, Vec<String>)>,
    max_depth: usize,
}

impl Default for FilterBuilder {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl FilterBuilder {
    /// Marks `fields` as sensitive under `scope`.
    #[must_use]
    pub fn scope<I, S>(mut self, scope: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .push((scope.into(), fields.into_iter().map(Into::into).collect()));
        self
    }

    /// Marks `fields` as sensitive under every scope.
    #[must_use]
    pub fn global<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope(WILDCARD_SCOPE, fields)
    }

    /// Merges every scope of a declarative spec.
    #[must_use]
    pub fn spec(self, spec: impl Into<FilterSpec>) -> Self {
        match spec.into() {
            FilterSpec::Scoped(scopes) => scopes
                .into_iter()
                .fold(self, |builder, (scope, fields)| builder.scope(scope, fields)),
            FilterSpec::Fields(fields) => self.global(fields),
        }
    }

    /// Sets the container nesting depth past which subtrees are replaced.
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Validates the collected rules and builds the filter.
    pub fn build(self) -> Result<ParamFilter, FilterError> {
        let mut rules = FilterRuleSet::default();
        for (scope, fields) in self.entries {
            rules.insert(scope, fields)?;
        }
        Ok(ParamFilter::from_rules(rules, self.max_depth))
    }
}
