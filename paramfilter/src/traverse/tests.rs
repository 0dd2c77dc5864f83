//! Tests for the shapes reported by std and serde_json types.

use std::{
    collections::{BTreeMap, HashMap, VecDeque},
    num::NonZeroU32,
    rc::Rc,
    sync::Arc,
    time::Duration,
};

use serde_json::{Value as JsonValue, json};

use super::{Params, Shape};

fn scalar_of<T: Params + ?Sized>(value: &T) -> JsonValue {
    match value.shape() {
        Shape::Scalar(json) => json,
        other => panic!("expected scalar, got {other:?}"),
    }
}

#[test]
fn primitives_are_scalars() {
    assert_eq!(scalar_of(&42i32), json!(42));
    assert_eq!(scalar_of(&7u64), json!(7));
    assert_eq!(scalar_of(&true), json!(true));
    assert_eq!(scalar_of(&'x'), json!("x"));
    assert_eq!(scalar_of(&()), JsonValue::Null);
    assert_eq!(scalar_of("plain"), json!("plain"));
    assert_eq!(scalar_of(&String::from("owned")), json!("owned"));
}

#[test]
fn wide_integers_fall_back_to_strings() {
    assert_eq!(scalar_of(&5i128), json!(5));
    assert_eq!(scalar_of(&u128::MAX), json!(u128::MAX.to_string()));
}

#[test]
fn non_finite_floats_are_null() {
    assert_eq!(scalar_of(&f64::NAN), JsonValue::Null);
    assert_eq!(scalar_of(&1.5f64), json!(1.5));
}

#[test]
fn nonzero_and_duration_render_as_numbers() {
    assert_eq!(scalar_of(&NonZeroU32::new(3).unwrap()), json!(3));
    assert_eq!(scalar_of(&Duration::from_millis(1500)), json!(1.5));
}

#[test]
fn option_none_is_null_and_some_is_transparent() {
    assert_eq!(scalar_of(&None::<String>), JsonValue::Null);
    assert_eq!(scalar_of(&Some(9u8)), json!(9));
}

#[test]
fn smart_pointers_are_transparent() {
    assert_eq!(scalar_of(&Box::new(1u8)), json!(1));
    assert_eq!(scalar_of(&Rc::new("rc")), json!("rc"));
    assert_eq!(scalar_of(&Arc::new(false)), json!(false));
}

#[test]
fn maps_report_keys_verbatim() {
    let map = BTreeMap::from([("Password", 1u8), ("user", 2u8)]);
    match map.shape() {
        Shape::Mapping(entries) => {
            let keys: Vec<_> = entries.iter().map(|(key, _)| key.as_ref()).collect();
            assert_eq!(keys, vec!["Password", "user"]);
        }
        other => panic!("expected mapping, got {other:?}"),
    }
}

#[test]
fn hash_map_is_a_mapping() {
    let map: HashMap<String, String> = HashMap::from([("k".into(), "v".into())]);
    assert!(matches!(map.shape(), Shape::Mapping(entries) if entries.len() == 1));
}

#[test]
fn sequences_keep_length_and_order() {
    let items = VecDeque::from(vec![3u8, 1, 2]);
    match items.shape() {
        Shape::Sequence(elements) => {
            let rendered: Vec<_> = elements.iter().map(|item| scalar_of(*item)).collect();
            assert_eq!(rendered, vec![json!(3), json!(1), json!(2)]);
        }
        other => panic!("expected sequence, got {other:?}"),
    }
}

#[test]
fn tuples_are_heterogeneous_sequences() {
    let tuple = ("a", 1u8, Some(true));
    assert!(matches!(tuple.shape(), Shape::Sequence(items) if items.len() == 3));
}

#[test]
fn json_values_dispatch_by_variant() {
    assert!(matches!(json!({"a": 1}).shape(), Shape::Mapping(_)));
    assert!(matches!(json!([1, 2]).shape(), Shape::Sequence(_)));
    assert_eq!(scalar_of(&json!("leaf")), json!("leaf"));
}

#[test]
fn is_container_distinguishes_leaves() {
    assert!(vec![1u8].shape().is_container());
    assert!(!1u8.shape().is_container());
}
