//! Edge-case coverage for scope resolution and tree shape.
//!
//! These tests focus on inputs that should come back untouched (unknown scopes,
//! empty containers, scalars), on the union of scoped and global rules, and on
//! structural guarantees such as key preservation and the depth limit.

use std::{collections::BTreeMap, sync::Arc, thread};

use paramfilter::{FILTERED, FilterSpec, ParamFilter, WILDCARD_SCOPE};
use serde_json::{Value as JsonValue, json};

const SERVICE: &str = "Peccy Service";

fn scoped() -> ParamFilter {
    ParamFilter::new(BTreeMap::from([(SERVICE, vec!["password"])])).unwrap()
}

mod untouched_inputs {
    use super::*;

    #[test]
    fn unknown_scope_returns_equal_tree() {
        let data = json!({"password": "p@ssw0rd", "nested": [{"PASSWORD": 1}]});
        assert_eq!(scoped().filter("Unknown Service", &data), data);
    }

    #[test]
    fn scope_names_are_case_sensitive() {
        let data = json!({"password": "p@ssw0rd"});
        assert_eq!(scoped().filter("peccy service", &data), data);
    }

    #[test]
    fn scalars_pass_through() {
        let filter = scoped();
        assert_eq!(filter.filter(SERVICE, "password"), json!("password"));
        assert_eq!(filter.filter(SERVICE, &42_i64), json!(42));
        assert_eq!(filter.filter(SERVICE, &true), json!(true));
        assert_eq!(filter.filter(SERVICE, &JsonValue::Null), JsonValue::Null);
    }

    #[test]
    fn values_equal_to_a_rule_are_not_filtered() {
        let data = json!({"field": "password", "list": ["password"]});
        assert_eq!(scoped().filter(SERVICE, &data), data);
    }

    #[test]
    fn empty_containers_stay_empty() {
        let filter = scoped();
        assert_eq!(filter.filter(SERVICE, &json!({})), json!({}));
        assert_eq!(filter.filter(SERVICE, &json!([])), json!([]));
        assert_eq!(filter.filter(SERVICE, &Vec::<String>::new()), json!([]));
    }

    #[test]
    fn filter_without_rules_is_identity() {
        let filter = ParamFilter::new(Vec::<String>::new()).unwrap();
        let data = json!({"password": "p@ssw0rd"});
        assert_eq!(filter.filter(SERVICE, &data), data);
    }
}

mod input_is_not_mutated {
    use super::*;

    #[test]
    fn input_is_unchanged_after_filtering() {
        let data = json!({"password": "p@ssw0rd", "items": [{"password": "x"}]});
        let before = data.clone();
        let filtered = scoped().filter(SERVICE, &data);
        assert_ne!(filtered, before);
        assert_eq!(data, before);
    }

    #[test]
    fn output_changes_do_not_reach_input() {
        let data = json!({"user": "peccy"});
        let mut filtered = scoped().filter(SERVICE, &data);
        filtered["user"] = json!("changed");
        assert_eq!(data, json!({"user": "peccy"}));
    }
}

mod scope_union {
    use super::*;

    fn filter() -> ParamFilter {
        ParamFilter::new(BTreeMap::from([
            (SERVICE, vec!["password"]),
            (WILDCARD_SCOPE, vec!["token"]),
        ]))
        .unwrap()
    }

    #[test]
    fn scoped_and_global_rules_both_apply() {
        let data = json!({"password": "a", "Token": "b", "user": "c"});
        assert_eq!(
            filter().filter(SERVICE, &data),
            json!({"password": FILTERED, "Token": FILTERED, "user": "c"})
        );
    }

    #[test]
    fn global_rules_apply_to_unknown_scopes() {
        let data = json!({"password": "a", "TOKEN": "b"});
        assert_eq!(
            filter().filter("Other Service", &data),
            json!({"password": "a", "TOKEN": FILTERED})
        );
    }

    #[test]
    fn resolved_matchers_are_merged() {
        let filter = filter();
        let matchers = filter.rules().resolve(SERVICE);
        assert_eq!(matchers.iter().collect::<Vec<_>>(), vec!["password", "token"]);
    }

    #[test]
    fn legacy_list_and_wildcard_scope_are_equivalent() {
        let legacy = ParamFilter::new(["token"]).unwrap();
        let explicit = ParamFilter::new(BTreeMap::from([(WILDCARD_SCOPE, vec!["token"])])).unwrap();
        assert_eq!(legacy, explicit);
    }
}

mod structure {
    use super::*;

    #[test]
    fn every_key_is_preserved() {
        let data = json!({"password": {"a": 1}, "user": "peccy", "items": [1, 2]});
        let filtered = scoped().filter(SERVICE, &data);
        let keys = |value: &JsonValue| -> Vec<String> {
            value.as_object().unwrap().keys().cloned().collect()
        };
        assert_eq!(keys(&filtered), keys(&data));
    }

    #[test]
    fn differently_cased_keys_are_kept_apart() {
        let data = json!({"password": "a", "PASSWORD": "b", "Password": "c"});
        let filtered = scoped().filter(SERVICE, &data);
        assert_eq!(
            filtered,
            json!({"password": FILTERED, "PASSWORD": FILTERED, "Password": FILTERED})
        );
        assert_eq!(filtered.as_object().unwrap().len(), 3);
    }

    #[test]
    fn sensitive_keys_holding_null_are_filtered() {
        let data = json!({"password": null, "user": null});
        assert_eq!(
            scoped().filter(SERVICE, &data),
            json!({"password": FILTERED, "user": null})
        );
    }

    #[test]
    fn sequence_length_is_preserved() {
        let data = json!([{"password": 1}, 2, "three", null, [{"password": 5}]]);
        assert_eq!(
            scoped().filter(SERVICE, &data),
            json!([{"password": FILTERED}, 2, "three", null, [{"password": FILTERED}]])
        );
    }

    #[test]
    fn filtering_twice_is_stable() {
        let filter = scoped();
        let data = json!({"outer": [{"Password": "x", "keep": {"password": "y"}}]});
        let once = filter.filter(SERVICE, &data);
        assert_eq!(filter.filter(SERVICE, &once), once);
    }
}

mod depth_limit {
    use super::*;

    fn nested(depth: usize) -> JsonValue {
        (0..depth).fold(json!("leaf"), |inner, _| json!({"next": inner}))
    }

    #[test]
    fn shallow_trees_are_walked_fully() {
        let filter = ParamFilter::builder().max_depth(8).build().unwrap();
        let data = nested(8);
        assert_eq!(filter.filter(SERVICE, &data), data);
    }

    #[test]
    fn containers_past_the_limit_are_replaced() {
        let filter = ParamFilter::builder().max_depth(2).build().unwrap();
        assert_eq!(
            filter.filter(SERVICE, &nested(4)),
            json!({"next": {"next": FILTERED}})
        );
    }

    #[test]
    fn default_limit_handles_deep_input() {
        let data = nested(500);
        let filtered = scoped().filter(SERVICE, &data);
        let mut cursor = &filtered;
        let mut levels = 0;
        while let Some(next) = cursor.get("next") {
            cursor = next;
            levels += 1;
        }
        assert_eq!(levels, paramfilter::DEFAULT_MAX_DEPTH);
        assert_eq!(cursor, &json!(FILTERED));
    }
}

mod construction_errors {
    use super::*;

    #[test]
    fn json_spec_must_be_map_or_list() {
        let err = FilterSpec::from_json_str("42").unwrap_err();
        assert!(err.to_string().starts_with("invalid filter spec"));
    }

    #[test]
    fn scoped_values_must_be_lists() {
        let err = ParamFilter::from_value(&json!({SERVICE: "password"})).unwrap_err();
        assert!(err.to_string().contains(SERVICE));
    }

    #[test]
    fn field_names_must_be_strings() {
        assert!(ParamFilter::from_value(&json!([1, 2])).is_err());
        assert!(ParamFilter::from_value(&json!({SERVICE: [true]})).is_err());
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = FilterSpec::from_json_str("{").unwrap_err();
        assert!(err.to_string().contains("malformed JSON"));
    }
}

mod concurrency {
    use super::*;

    #[test]
    fn shared_filter_is_usable_from_many_threads() {
        let filter = Arc::new(scoped());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let filter = Arc::clone(&filter);
                thread::spawn(move || {
                    let data = json!({"password": i, "id": i});
                    filter.filter(SERVICE, &data)
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), json!({"password": FILTERED, "id": i}));
        }
    }
}
