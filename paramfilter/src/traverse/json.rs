//! `serde_json` support for traversal.
//!
//! Objects are mappings, arrays are sequences, and everything else is a leaf.
//! This is what lets the filter run over payloads that were already serialized.

use std::borrow::Cow;

use serde_json::{Map, Value as JsonValue};

use super::{Params, Shape};

impl Params for Map<String, JsonValue> {
    fn shape(&self) -> Shape<'_> {
        Shape::Mapping(
            self.iter()
                .map(|(key, value)| (Cow::Borrowed(key.as_str()), value as &dyn Params))
                .collect(),
        )
    }
}

impl Params for JsonValue {
    fn shape(&self) -> Shape<'_> {
        match self {
            JsonValue::Object(map) => map.shape(),
            JsonValue::Array(items) => items.shape(),
            leaf => Shape::Scalar(leaf.clone()),
        }
    }
}
