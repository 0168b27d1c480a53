//! Shared Error Types
//!
//! Validation types used by both the server and the API client.
//!
//! [`ValidationErrors`] collects per-field messages in the
//! `{"field": ["message", ...]}` shape the envelope carries under `errors`.
//!
//! # Usage
//!
//! ```rust
//! use sekolah_beta::shared::error::ValidationErrors;
//!
//! let mut errors = ValidationErrors::new();
//! errors.add("email", "The email field is required.");
//! assert_eq!(errors.summary(), "The email field is required.");
//! ```
use std::collections::BTreeMap;

/// Field name to the list of messages reported for it
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Ordered collection of field validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    /// Insertion order of the first message per field, used for the summary
    order: Vec<String>,
    fields: FieldErrors,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        if !self.fields.contains_key(&field) {
            self.order.push(field.clone());
        }
        self.fields.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total number of messages across all fields
    pub fn len(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// The first message followed by a count of the remaining ones.
    ///
    /// `"The email field is required. (and 1 more error)"`
    pub fn summary(&self) -> String {
        let first = self
            .order
            .first()
            .and_then(|field| self.fields.get(field))
            .and_then(|messages| messages.first())
            .cloned()
            .unwrap_or_else(|| "The given data was invalid.".to_string());

        match self.len().saturating_sub(1) {
            0 => first,
            1 => format!("{} (and 1 more error)", first),
            n => format!("{} (and {} more errors)", first, n),
        }
    }

    pub fn into_map(self) -> FieldErrors {
        self.fields
    }
}
