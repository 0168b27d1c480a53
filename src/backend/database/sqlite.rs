/**
 * SQLite Error Adapter
 *
 * SQLite has no date type and reports omitted required columns as NOT NULL
 * failures, so it only produces duplicate, unknown column, unknown table
 * and not-null violations.
 */

use std::sync::LazyLock;

use regex::Regex;

use super::classify::{ConstraintViolation, DbErrorAdapter};
use super::extract::UNKNOWN;

static UNIQUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"UNIQUE constraint failed: (.+)$").expect("invalid unique pattern")
});

static NO_COLUMN_NAMED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"table (\S+) has no column named (\S+)").expect("invalid column named pattern")
});

static NO_SUCH_COLUMN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"no such column: (\S+)").expect("invalid no such column pattern"));

static NO_SUCH_TABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"no such table: (\S+)").expect("invalid no such table pattern"));

static NOT_NULL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"NOT NULL constraint failed: (\S+)").expect("invalid not null pattern")
});

/// `users.email` -> `email`
fn column_of(qualified: &str) -> String {
    qualified
        .rsplit('.')
        .next()
        .filter(|column| !column.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}

fn capture(pattern: &Regex, message: &str, index: usize) -> Option<String> {
    pattern
        .captures(message)
        .and_then(|caps| caps.get(index))
        .map(|m| m.as_str().trim().to_string())
}

/// Adapter for SQLite driver messages
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteAdapter;

impl DbErrorAdapter for SqliteAdapter {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    fn classify(&self, message: &str) -> Option<ConstraintViolation> {
        if message.contains("UNIQUE constraint failed") {
            // Composite keys list every column: "t.a, t.b"
            let key = capture(&UNIQUE, message, 1)
                .map(|columns| {
                    columns
                        .split(',')
                        .map(|column| column_of(column.trim()))
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_else(|| UNKNOWN.to_string());
            return Some(ConstraintViolation::DuplicateEntry { key });
        }
        if let Some(caps) = NO_COLUMN_NAMED.captures(message) {
            return Some(ConstraintViolation::UnknownColumn {
                column: caps[2].to_string(),
                table: caps[1].to_string(),
            });
        }
        if let Some(column) = capture(&NO_SUCH_COLUMN, message, 1) {
            return Some(ConstraintViolation::UnknownColumn {
                column,
                table: UNKNOWN.to_string(),
            });
        }
        if let Some(table) = capture(&NO_SUCH_TABLE, message, 1) {
            return Some(ConstraintViolation::UnknownTable { table });
        }
        if message.contains("NOT NULL constraint failed") {
            let column = capture(&NOT_NULL, message, 1)
                .map(|qualified| column_of(&qualified))
                .unwrap_or_else(|| UNKNOWN.to_string());
            return Some(ConstraintViolation::NotNull { column });
        }
        None
    }
}
