//! Custom assertion macros and utilities
//!
//! Provides assertion macros for envelope-shaped JSON bodies.

/// Assert the `status`/`success` pair and message of an envelope body
#[macro_export]
macro_rules! assert_envelope {
    ($body:expr, success, $message:expr) => {
        assert_eq!($body["status"], "success", "body: {}", $body);
        assert_eq!($body["success"], true, "body: {}", $body);
        assert_eq!($body["message"], $message, "body: {}", $body);
    };
    ($body:expr, error, $message:expr) => {
        assert_eq!($body["status"], "error", "body: {}", $body);
        assert_eq!($body["success"], false, "body: {}", $body);
        assert_eq!($body["message"], $message, "body: {}", $body);
    };
}
