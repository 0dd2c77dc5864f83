//! Filter rule specifications and their normalized form.
//!
//! A rule specification arrives in one of two shapes:
//!
//! - a map from scope (usually a service name) to the field names that are
//!   sensitive under that scope, or
//! - a bare list of field names that are sensitive under every scope.
//!
//! Both shapes are normalized once, at construction, into a [`FilterRuleSet`].
//! The bare list is stored under [`WILDCARD_SCOPE`], which is consulted for every
//! scope in addition to the scope's own entry. Nothing downstream ever branches on
//! the original shape again.

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap},
    hash::BuildHasher,
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value as JsonValue;

use crate::error::FilterError;

/// Scope key whose field names apply regardless of the scope passed to `filter`.
pub const WILDCARD_SCOPE: &str = "*";

/// Lowercases a field name for matching, borrowing when it is already lowercase.
///
/// Non-ASCII names go through full Unicode lowercasing, which also folds
/// titlecase letters such as `ǅ`.
pub fn normalize_field_name(name: &str) -> Cow<'_, str> {
    if name.is_ascii() {
        if name.bytes().any(|b| b.is_ascii_uppercase()) {
            return Cow::Owned(name.to_ascii_lowercase());
        }
        return Cow::Borrowed(name);
    }
    let lower = name.to_lowercase();
    if lower == name {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(lower)
    }
}

// =============================================================================
// FilterSpec - Declarative input
// =============================================================================

/// Declarative description of which fields are sensitive.
///
/// `FilterSpec` deserializes from either a map or a list, so it can be embedded
/// directly in any serde-backed configuration:
///
/// ```rust
/// use paramfilter::FilterSpec;
///
/// let scoped: FilterSpec = r#"{"Peccy Service": ["password"]}"#.parse().unwrap();
/// let legacy: FilterSpec = r#"["peccy_name"]"#.parse().unwrap();
///
/// assert!(matches!(scoped, FilterSpec::Scoped(_)));
/// assert!(matches!(legacy, FilterSpec::Fields(_)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FilterSpec {
    /// Field names keyed by scope.
    Scoped(BTreeMap<String, Vec<String>>),
    /// Field names that apply under every scope.
    Fields(Vec<String>),
}

impl FilterSpec {
    /// Parses a JSON document into a spec, reporting shape errors as
    /// [`FilterError::InvalidFilterSpec`].
    pub fn from_json_str(input: &str) -> Result<Self, FilterError> {
        let value: JsonValue = serde_json::from_str(input)
            .map_err(|err| FilterError::invalid_spec(format!("malformed JSON: {err}")))?;
        Self::try_from(value)
    }
}

impl FromStr for FilterSpec {
    type Err = FilterError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::from_json_str(input)
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "a list",
        JsonValue::Object(_) => "a map",
    }
}

fn field_names_from_json(
    items: Vec<JsonValue>,
    scope: Option<&str>,
) -> Result<Vec<String>, FilterError> {
    items
        .into_iter()
        .map(|item| match item {
            JsonValue::String(name) => Ok(name),
            other => Err(FilterError::invalid_spec(match scope {
                Some(scope) => format!(
                    "field names under scope `{scope}` must be strings, got {}",
                    json_kind(&other)
                ),
                None => format!("field names must be strings, got {}", json_kind(&other)),
            })),
        })
        .collect()
}

impl TryFrom<JsonValue> for FilterSpec {
    type Error = FilterError;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        match value {
            JsonValue::Object(map) => {
                let mut scopes = BTreeMap::new();
                for (scope, fields) in map {
                    let JsonValue::Array(items) = fields else {
                        return Err(FilterError::invalid_spec(format!(
                            "scope `{scope}` must map to a list of field names, got {}",
                            json_kind(&fields)
                        )));
                    };
                    let names = field_names_from_json(items, Some(&scope))?;
                    scopes.insert(scope, names);
                }
                Ok(Self::Scoped(scopes))
            }
            JsonValue::Array(items) => Ok(Self::Fields(field_names_from_json(items, None)?)),
            other => Err(FilterError::invalid_spec(format!(
                "expected a map of scopes or a list of field names, got {}",
                json_kind(&other)
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for FilterSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = JsonValue::deserialize(deserializer)?;
        Self::try_from(value).map_err(D::Error::custom)
    }
}

impl TryFrom<&JsonValue> for FilterSpec {
    type Error = FilterError;

    fn try_from(value: &JsonValue) -> Result<Self, Self::Error> {
        Self::try_from(value.clone())
    }
}

impl<V: Into<String>> From<Vec<V>> for FilterSpec {
    fn from(fields: Vec<V>) -> Self {
        Self::Fields(fields.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<String>, const N: usize> From<[V; N]> for FilterSpec {
    fn from(fields: [V; N]) -> Self {
        Self::Fields(fields.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<String> + Clone> From<&[V]> for FilterSpec {
    fn from(fields: &[V]) -> Self {
        Self::Fields(fields.iter().cloned().map(Into::into).collect())
    }
}

impl<K, V> From<BTreeMap<K, Vec<V>>> for FilterSpec
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(scopes: BTreeMap<K, Vec<V>>) -> Self {
        Self::Scoped(
            scopes
                .into_iter()
                .map(|(scope, fields)| (scope.into(), fields.into_iter().map(Into::into).collect()))
                .collect(),
        )
    }
}

impl<K, V, S> From<HashMap<K, Vec<V>, S>> for FilterSpec
where
    K: Into<String>,
    V: Into<String>,
    S: BuildHasher,
{
    fn from(scopes: HashMap<K, Vec<V>, S>) -> Self {
        Self::Scoped(
            scopes
                .into_iter()
                .map(|(scope, fields)| (scope.into(), fields.into_iter().map(Into::into).collect()))
                .collect(),
        )
    }
}

// =============================================================================
// FilterRuleSet - Normalized, immutable rule table
// =============================================================================

/// Normalized rule table: scope key to lowercase field-name matchers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterRuleSet {
    scopes: BTreeMap<String, BTreeSet<String>>,
}

impl FilterRuleSet {
    /// Normalizes a spec into a rule set.
    pub fn from_spec(spec: FilterSpec) -> Result<Self, FilterError> {
        let mut rules = Self::default();
        match spec {
            FilterSpec::Scoped(scopes) => {
                for (scope, fields) in scopes {
                    rules.insert(scope, fields)?;
                }
            }
            FilterSpec::Fields(fields) => rules.insert(WILDCARD_SCOPE.to_owned(), fields)?,
        }
        Ok(rules)
    }

    /// Merges `fields` into the matcher set for `scope`.
    pub(crate) fn insert<I, S>(&mut self, scope: String, fields: I) -> Result<(), FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let matchers = self.scopes.entry(scope).or_default();
        for field in fields {
            let field = field.as_ref();
            if field.is_empty() {
                return Err(FilterError::invalid_spec("field names must not be empty"));
            }
            matchers.insert(normalize_field_name(field).into_owned());
        }
        Ok(())
    }

    /// Iterates over every scope key, including [`WILDCARD_SCOPE`] when present.
    pub fn scopes(&self) -> impl Iterator<Item = &str> {
        self.scopes.keys().map(String::as_str)
    }

    /// Returns the matchers registered for exactly `scope`, without the wildcard.
    pub fn scope(&self, scope: &str) -> Option<&BTreeSet<String>> {
        self.scopes.get(scope)
    }

    /// Returns the matchers that apply under every scope.
    pub fn wildcard(&self) -> Option<&BTreeSet<String>> {
        self.scopes.get(WILDCARD_SCOPE)
    }

    /// Resolves the matchers in effect for `scope`: its own set plus the wildcard.
    pub fn resolve(&self, scope: &str) -> Matchers<'_> {
        Matchers {
            scoped: self.scope(scope),
            wildcard: self.wildcard(),
        }
    }

    /// Returns whether `field` is sensitive under `scope`.
    pub fn is_sensitive(&self, scope: &str, field: &str) -> bool {
        self.resolve(scope).contains(field)
    }

    /// Total number of matchers across all scopes.
    pub fn matcher_count(&self) -> usize {
        self.scopes.values().map(BTreeSet::len).sum()
    }

    /// Returns `true` when no scope carries any matcher.
    pub fn is_empty(&self) -> bool {
        self.matcher_count() == 0
    }
}

impl TryFrom<FilterSpec> for FilterRuleSet {
    type Error = FilterError;

    fn try_from(spec: FilterSpec) -> Result<Self, Self::Error> {
        Self::from_spec(spec)
    }
}

/// Matchers in effect for a single scope.
///
/// This is the union of the scope's own set and the wildcard set, resolved once
/// per `filter` call.
#[derive(Clone, Copy, Debug, Default)]
pub struct Matchers<'a> {
    scoped: Option<&'a BTreeSet<String>>,
    wildcard: Option<&'a BTreeSet<String>>,
}

impl Matchers<'_> {
    /// Returns whether `field` (in any case) matches.
    pub fn contains(&self, field: &str) -> bool {
        if self.is_empty() {
            return false;
        }
        let field = normalize_field_name(field);
        let field = field.as_ref();
        self.scoped.is_some_and(|set| set.contains(field))
            || self.wildcard.is_some_and(|set| set.contains(field))
    }

    /// Returns `true` when nothing can match.
    pub fn is_empty(&self) -> bool {
        self.scoped.is_none_or(BTreeSet::is_empty) && self.wildcard.is_none_or(BTreeSet::is_empty)
    }

    /// Iterates over the resolved matchers, deduplicated and sorted.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let merged: BTreeSet<&str> = self
            .scoped
            .into_iter()
            .chain(self.wildcard)
            .flatten()
            .map(String::as_str)
            .collect();
        merged.into_iter()
    }
}
