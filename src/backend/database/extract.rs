/**
 * Identifier Extraction
 *
 * Pure text-capture helpers that pull identifiers (keys, columns, tables,
 * values) out of MySQL driver messages. Every helper returns the literal
 * `"unknown"` when its pattern does not match.
 */

use std::sync::LazyLock;

use regex::Regex;

/// Placeholder returned when a pattern does not match
pub const UNKNOWN: &str = "unknown";

static DUPLICATE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"for key '(.+?)'").expect("invalid duplicate key pattern"));

static UNIQUE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_(\w+)_unique$").expect("invalid unique suffix pattern"));

static UNKNOWN_COLUMN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Unknown column '(.+?)'").expect("invalid unknown column pattern"));

static INSERT_TABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"insert into `(.+?)`").expect("invalid insert table pattern"));

static MISSING_TABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Table '(.+?)'").expect("invalid missing table pattern"));

static MISSING_DEFAULT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Field '(.+?)' doesn't have a default value").expect("invalid missing default pattern")
});

static INVALID_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Incorrect date value: '(.+?)' for column `.+?`\.`.+?`\.`(.+?)`")
        .expect("invalid date value pattern")
});

static NOT_NULL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Column '(.+?)' cannot be null").expect("invalid not null pattern")
});

fn capture(pattern: &Regex, message: &str, group: usize) -> Option<String> {
    pattern
        .captures(message)
        .and_then(|caps| caps.get(group))
        .map(|m| m.as_str().to_string())
}

fn or_unknown(value: Option<String>) -> String {
    value.unwrap_or_else(|| UNKNOWN.to_string())
}

/// Strip a `<table>_<name>_unique` index name down to `<name>`.
///
/// Names without the suffix are returned unchanged.
pub fn strip_unique_suffix(key: &str) -> String {
    capture(&UNIQUE_SUFFIX, key, 1).unwrap_or_else(|| key.to_string())
}

/// Key named in a `Duplicate entry ... for key '...'` message.
pub fn duplicate_key(message: &str) -> String {
    or_unknown(capture(&DUPLICATE_KEY, message, 1).map(|key| strip_unique_suffix(&key)))
}

/// Column named in an `Unknown column '...'` message.
pub fn unknown_column(message: &str) -> String {
    or_unknown(capture(&UNKNOWN_COLUMN, message, 1))
}

/// Target table of the `insert into` statement quoted in a message.
pub fn insert_table(message: &str) -> String {
    or_unknown(capture(&INSERT_TABLE, message, 1))
}

/// Table named in a `Table '...' doesn't exist` message.
pub fn missing_table(message: &str) -> String {
    or_unknown(capture(&MISSING_TABLE, message, 1))
}

/// Field named in a `Field '...' doesn't have a default value` message.
pub fn missing_default_field(message: &str) -> String {
    or_unknown(capture(&MISSING_DEFAULT, message, 1))
}

/// Rejected value and column of an `Incorrect date value` message.
pub fn invalid_date(message: &str) -> (String, String) {
    match INVALID_DATE.captures(message) {
        Some(caps) => (
            or_unknown(caps.get(1).map(|m| m.as_str().to_string())),
            or_unknown(caps.get(2).map(|m| m.as_str().to_string())),
        ),
        None => (UNKNOWN.to_string(), UNKNOWN.to_string()),
    }
}

/// Column named in a `Column '...' cannot be null` message.
pub fn not_null_column(message: &str) -> String {
    or_unknown(capture(&NOT_NULL, message, 1))
}
