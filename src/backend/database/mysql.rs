/**
 * MySQL / MariaDB Error Adapter
 *
 * Recognises the messages MySQL drivers report (including the
 * `SQLSTATE[...]` prefixes) and extracts identifiers with the helpers in
 * [`super::extract`].
 */

use super::classify::{ConstraintViolation, DbErrorAdapter};
use super::extract;

/// Adapter for MySQL-family driver messages
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlAdapter;

impl DbErrorAdapter for MySqlAdapter {
    fn backend(&self) -> &'static str {
        "mysql"
    }

    fn classify(&self, message: &str) -> Option<ConstraintViolation> {
        if message.contains("Duplicate entry") {
            return Some(ConstraintViolation::DuplicateEntry {
                key: extract::duplicate_key(message),
            });
        }
        if message.contains("SQLSTATE[42S22]") || message.contains("Unknown column") {
            return Some(ConstraintViolation::UnknownColumn {
                column: extract::unknown_column(message),
                table: extract::insert_table(message),
            });
        }
        if message.contains("SQLSTATE[42S02]") {
            return Some(ConstraintViolation::UnknownTable {
                table: extract::missing_table(message),
            });
        }
        if message.contains("doesn't have a default value") {
            return Some(ConstraintViolation::MissingDefaultValue {
                field: extract::missing_default_field(message),
            });
        }
        if message.contains("Incorrect date value") {
            let (value, column) = extract::invalid_date(message);
            return Some(ConstraintViolation::InvalidDateValue { value, column });
        }
        if message.contains("cannot be null") {
            return Some(ConstraintViolation::NotNull {
                column: extract::not_null_column(message),
            });
        }
        None
    }
}
