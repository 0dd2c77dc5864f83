//! Construction-time errors.
//!
//! Filtering itself never fails; the only error surface is building a
//! [`crate::ParamFilter`] from a rule specification that has the wrong shape.

use thiserror::Error;

/// Errors raised while building a filter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// The rule specification is neither a map of scopes to field names nor a
    /// bare list of field names, or it contains an unusable field name.
    #[error("invalid filter spec: {reason}")]
    InvalidFilterSpec {
        /// Human-readable description of what was wrong.
        reason: String,
    },
}

impl FilterError {
    pub(crate) fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidFilterSpec {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FilterError;

    #[test]
    fn invalid_spec_display_includes_reason() {
        let err = FilterError::invalid_spec("expected a list of field names, got a number");
        assert_eq!(
            err.to_string(),
            "invalid filter spec: expected a list of field names, got a number"
        );
    }
}
