//! Property-based tests for failure rendering and error classification

use proptest::prelude::*;
use serde_json::Value;

use sekolah_beta::backend::database::classify::adapter_for_url;
use sekolah_beta::backend::database::extract::UNKNOWN;
use sekolah_beta::backend::error::{generic_status, ApiError};
use sekolah_beta::backend::response::ResponseBuilder;
use sekolah_beta::shared::error::ValidationErrors;

proptest! {
    #[test]
    fn test_generic_status_range(code in any::<Option<i64>>()) {
        let status = generic_status(code);
        prop_assert!((100..600).contains(&status));
        if let Some(code) = code.filter(|c| (100..600).contains(c)) {
            prop_assert_eq!(i64::from(status), code);
        } else {
            prop_assert_eq!(status, 500);
        }
    }

    #[test]
    fn test_error_shorthand_never_succeeds(code in 100u16..600, message in ".{0,20}") {
        let response = ResponseBuilder::new(false).error(Some(&message), code, None);
        prop_assert!(!response.envelope().success);
        prop_assert_eq!(response.status().as_u16(), code);
    }

    #[test]
    fn test_internal_detail_only_in_debug(message in "[a-z ]{1,30}", code in any::<Option<i64>>()) {
        let error = ApiError::internal("RuntimeException", message.clone(), code);

        let quiet = ResponseBuilder::new(false).handle_exception(&error);
        let body = serde_json::to_value(quiet.envelope()).unwrap();
        prop_assert_eq!(&body["errors"], &Value::Array(vec![]));
        prop_assert_eq!(body["message"].as_str(), Some("An error occurred on the server."));

        let debug = ResponseBuilder::new(true).handle_exception(&error);
        let body = serde_json::to_value(debug.envelope()).unwrap();
        prop_assert_eq!(body["errors"]["message"].as_str(), Some(message.as_str()));
        prop_assert_eq!(quiet.status(), debug.status());
    }

    #[test]
    fn test_validation_summary_counts_remaining(fields in prop::collection::vec("[a-z]{1,6}", 1..6)) {
        let mut errors = ValidationErrors::new();
        for field in &fields {
            errors.add(field.clone(), format!("The {} field is required.", field));
        }
        let summary = errors.summary();
        let first = format!("The {} field is required.", fields[0]);
        prop_assert!(summary.starts_with(&first));
        match fields.len() - 1 {
            0 => prop_assert_eq!(summary, first),
            1 => prop_assert!(summary.ends_with(" (and 1 more error)")),
            n => {
                let suffix = format!(" (and {} more errors)", n);
                prop_assert!(summary.ends_with(&suffix));
            }
        }
    }

    #[test]
    fn test_adapters_never_panic_on_arbitrary_text(message in ".{0,80}") {
        for url in ["mysql://db", "postgres://db", "sqlite::memory:"] {
            let _ = adapter_for_url(url).classify(&message);
        }
    }

    #[test]
    fn test_plain_text_is_unclassified(message in "[a-z ]{0,40}") {
        for url in ["mysql://db", "postgres://db", "sqlite::memory:"] {
            prop_assert!(adapter_for_url(url).classify(&message).is_none());
        }
        prop_assert_eq!(UNKNOWN, "unknown");
    }
}
