//! Property-based tests for the response envelope
//!
//! Uses proptest to generate random inputs and verify properties

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use sekolah_beta::shared::envelope::{is_successful_status, sanitize, Envelope, Pagination};

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        ".{0,12}".prop_map(Value::from),
    ]
}

proptest! {
    #[test]
    fn test_status_and_success_follow_code(code in 100u16..600) {
        let envelope = Envelope::new(code, Value::Null, "m");
        let body = serde_json::to_value(&envelope).unwrap();

        prop_assert_eq!(envelope.success, is_successful_status(code));
        prop_assert_eq!(body["success"].as_bool(), Some((200..300).contains(&code)));
        prop_assert_eq!(
            body["status"].as_str(),
            Some(if envelope.success { "success" } else { "error" })
        );
    }

    #[test]
    fn test_sanitize_unwraps_exactly_one_level(inner in scalar()) {
        prop_assert_eq!(sanitize(json!({ "data": inner.clone() })), inner.clone());
        let nested = json!({ "data": { "data": inner.clone() } });
        prop_assert_eq!(sanitize(nested), json!({ "data": inner }));
    }

    #[test]
    fn test_sanitize_leaves_other_mappings(key in "[a-z]{1,8}", value in scalar()) {
        prop_assume!(key != "data");
        let mut map = Map::new();
        map.insert(key.clone(), value.clone());
        let mapping = Value::Object(map.clone());
        prop_assert_eq!(sanitize(mapping.clone()), mapping);

        map.insert("data".to_string(), value);
        let with_sibling = Value::Object(map);
        prop_assert_eq!(sanitize(with_sibling.clone()), with_sibling);
    }

    #[test]
    fn test_optional_keys_absent_until_set(code in 100u16..600) {
        let body = serde_json::to_value(Envelope::new(code, Value::Null, "m")).unwrap();
        prop_assert!(body.get("errors").is_none());
        prop_assert!(body.get("meta").is_none());
    }

    #[test]
    fn test_pagination_bounds(total in 0u64..10_000, per_page in 0u64..200, page in 0u64..600) {
        let p = Pagination::for_page(total, per_page, page);

        prop_assert!(p.per_page >= 1);
        prop_assert!(p.current_page >= 1);
        prop_assert!(p.last_page >= 1);
        match (p.from, p.to) {
            (Some(from), Some(to)) => {
                prop_assert!(from <= to);
                prop_assert!(to <= total);
                prop_assert!(to - from < p.per_page);
            }
            (None, None) => prop_assert!(total <= (p.current_page - 1) * p.per_page),
            other => prop_assert!(false, "from/to must both be set or both null: {:?}", other),
        }
    }
}
