/**
 * PostgreSQL Error Adapter
 *
 * PostgreSQL reports a NOT NULL failure the same way whether the column
 * was omitted or written as null, so it never produces
 * `MissingDefaultValue`.
 */

use std::sync::LazyLock;

use regex::Regex;

use super::classify::{ConstraintViolation, DbErrorAdapter};
use super::extract::{strip_unique_suffix, UNKNOWN};

static UNIQUE_CONSTRAINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"violates unique constraint "(.+?)""#).expect("invalid unique constraint pattern")
});

static KEY_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+?_(\w+)_key$").expect("invalid key suffix pattern"));

static UNDEFINED_COLUMN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"column "(.+?)"(?: of relation "(.+?)")? does not exist"#)
        .expect("invalid undefined column pattern")
});

static UNDEFINED_TABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"relation "(.+?)" does not exist"#).expect("invalid undefined table pattern")
});

static INVALID_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:invalid input syntax for type (?:date|timestamp)|date/time field value out of range): "(.+?)""#)
        .expect("invalid date pattern")
});

static NOT_NULL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"null value in column "(.+?)""#).expect("invalid not null pattern")
});

fn group(pattern: &Regex, message: &str, index: usize) -> String {
    pattern
        .captures(message)
        .and_then(|caps| caps.get(index))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Normalise `users_email_unique` and PostgreSQL's default `users_email_key`
fn normalise_key(constraint: &str) -> String {
    if constraint.ends_with("_unique") {
        return strip_unique_suffix(constraint);
    }
    KEY_SUFFIX
        .captures(constraint)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| constraint.to_string())
}

/// Adapter for PostgreSQL driver messages
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresAdapter;

impl DbErrorAdapter for PostgresAdapter {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    fn classify(&self, message: &str) -> Option<ConstraintViolation> {
        if message.contains("duplicate key value") {
            let key = UNIQUE_CONSTRAINT
                .captures(message)
                .and_then(|caps| caps.get(1))
                .map(|m| normalise_key(m.as_str()))
                .unwrap_or_else(|| UNKNOWN.to_string());
            return Some(ConstraintViolation::DuplicateEntry { key });
        }
        if UNDEFINED_COLUMN.is_match(message) {
            return Some(ConstraintViolation::UnknownColumn {
                column: group(&UNDEFINED_COLUMN, message, 1),
                table: group(&UNDEFINED_COLUMN, message, 2),
            });
        }
        if UNDEFINED_TABLE.is_match(message) {
            return Some(ConstraintViolation::UnknownTable {
                table: group(&UNDEFINED_TABLE, message, 1),
            });
        }
        if INVALID_DATE.is_match(message) {
            return Some(ConstraintViolation::InvalidDateValue {
                value: group(&INVALID_DATE, message, 1),
                column: UNKNOWN.to_string(),
            });
        }
        if message.contains("violates not-null constraint") {
            return Some(ConstraintViolation::NotNull {
                column: group(&NOT_NULL, message, 1),
            });
        }
        None
    }
}
