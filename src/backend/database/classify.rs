/**
 * Database Error Classification
 *
 * Driver error text differs per backend, so each backend gets its own
 * [`DbErrorAdapter`] that turns a raw message into a structured
 * [`ConstraintViolation`]. Everything above the persistence layer only sees
 * the structured value.
 *
 * # Precedence
 *
 * Adapters test patterns in a fixed order and the first match wins:
 *
 * 1. duplicate key
 * 2. unknown column
 * 3. unknown table
 * 4. missing default value
 * 5. invalid date value
 * 6. not-null violation
 */

use std::fmt;
use std::sync::Arc;

use super::mysql::MySqlAdapter;
use super::postgres::PostgresAdapter;
use super::sqlite::SqliteAdapter;

/// A recognised constraint or schema failure with its identifiers extracted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// Unique key collision; `key` is the normalised field name
    DuplicateEntry { key: String },
    /// Statement referenced a column that does not exist
    UnknownColumn { column: String, table: String },
    /// Statement referenced a table that does not exist
    UnknownTable { table: String },
    /// Required column omitted and it has no default
    MissingDefaultValue { field: String },
    /// Value rejected by a date column
    InvalidDateValue { value: String, column: String },
    /// Explicit null written to a NOT NULL column
    NotNull { column: String },
}

impl ConstraintViolation {
    /// HTTP status code reported for this violation
    pub fn status_code(&self) -> u16 {
        match self {
            Self::DuplicateEntry { .. } => 409,
            Self::UnknownColumn { .. } | Self::UnknownTable { .. } => 500,
            Self::MissingDefaultValue { .. }
            | Self::InvalidDateValue { .. }
            | Self::NotNull { .. } => 422,
        }
    }

    /// Short label used in logs
    pub fn label(&self) -> &'static str {
        match self {
            Self::DuplicateEntry { .. } => "duplicate_entry",
            Self::UnknownColumn { .. } => "unknown_column",
            Self::UnknownTable { .. } => "unknown_table",
            Self::MissingDefaultValue { .. } => "missing_default_value",
            Self::InvalidDateValue { .. } => "invalid_date_value",
            Self::NotNull { .. } => "not_null",
        }
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateEntry { key } => write!(f, "duplicate entry for {}", key),
            Self::UnknownColumn { column, table } => {
                write!(f, "unknown column {} on table {}", column, table)
            }
            Self::UnknownTable { table } => write!(f, "unknown table {}", table),
            Self::MissingDefaultValue { field } => write!(f, "missing default value for {}", field),
            Self::InvalidDateValue { value, column } => {
                write!(f, "invalid date value {} for {}", value, column)
            }
            Self::NotNull { column } => write!(f, "null written to {}", column),
        }
    }
}

/// Translates one backend's driver messages into constraint violations
pub trait DbErrorAdapter: Send + Sync + fmt::Debug {
    /// Backend name used in logs
    fn backend(&self) -> &'static str;

    /// Classify a driver message, `None` when no pattern matches
    fn classify(&self, message: &str) -> Option<ConstraintViolation>;
}

/// Pick the adapter for a connection URL by its scheme.
///
/// Unrecognised schemes fall back to SQLite, the bundled backend.
pub fn adapter_for_url(url: &str) -> Arc<dyn DbErrorAdapter> {
    let scheme = url.split(':').next().unwrap_or_default().to_ascii_lowercase();
    match scheme.as_str() {
        "mysql" | "mariadb" => Arc::new(MySqlAdapter),
        "postgres" | "postgresql" => Arc::new(PostgresAdapter),
        _ => Arc::new(SqliteAdapter),
    }
}
