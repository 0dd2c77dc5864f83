//! Traversal for map containers (keys reported verbatim).

use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

use super::{Params, Shape};

impl<K, V, S> Params for HashMap<K, V, S>
where
    K: AsRef<str>,
    V: Params,
    S: BuildHasher,
{
    fn shape(&self) -> Shape<'_> {
        Shape::Mapping(
            self.iter()
                .map(|(key, value)| (Cow::Borrowed(key.as_ref()), value as &dyn Params))
                .collect(),
        )
    }
}

impl<K, V> Params for BTreeMap<K, V>
where
    K: AsRef<str>,
    V: Params,
{
    fn shape(&self) -> Shape<'_> {
        Shape::Mapping(
            self.iter()
                .map(|(key, value)| (Cow::Borrowed(key.as_ref()), value as &dyn Params))
                .collect(),
        )
    }
}
