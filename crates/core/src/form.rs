//! Form decoding helpers and the field error map.
//!
//! Every entity form is a struct of `Option<String>` fields. Values arrive as
//! strings from HTML-style forms or as JSON numbers from API clients; both are
//! normalized to strings here so validators see a single representation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Field error map
// ---------------------------------------------------------------------------

/// Field name to user-facing message. Empty when the form is valid.
///
/// At most one message is kept per field; a later insert for the same field
/// replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Field names with errors, in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for FieldErrors {
    fn from(pairs: [(&str, &str); N]) -> Self {
        let mut errors = Self::new();
        for (field, message) in pairs {
            errors.insert(field, message);
        }
        errors
    }
}

/// Collapse declarative `validator` results into one message per field.
///
/// The first error of each field wins; its custom message is used when set,
/// otherwise the rule code (e.g. `length`).
impl From<validator::ValidationErrors> for FieldErrors {
    fn from(source: validator::ValidationErrors) -> Self {
        let mut errors = Self::new();
        for (field, field_errors) in source.field_errors() {
            if let Some(first) = field_errors.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string());
                errors.insert(&field.to_string(), message);
            }
        }
        errors
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Serde adapter for form fields: accepts a string, a number, or `null`.
///
/// Numbers are stored in their decimal string form so `54221555232` and
/// `"54221555232"` decode identically. Use together with `#[serde(default)]`.
pub fn form_value<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawValue>::deserialize(deserializer)?;
    Ok(raw.map(|value| match value {
        RawValue::Text(s) => s,
        RawValue::Integer(n) => n.to_string(),
        RawValue::Float(n) => n.to_string(),
    }))
}

// ---------------------------------------------------------------------------
// Field checks
// ---------------------------------------------------------------------------

/// The value of a form field, if it was submitted and is non-empty.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Check one required field.
///
/// Records `missing` when the field is absent or empty; otherwise runs
/// `check` and records its message on failure. Returns the checked value only
/// when the field is valid.
pub fn required<T>(
    errors: &mut FieldErrors,
    field: &str,
    value: &Option<String>,
    missing: &str,
    check: impl FnOnce(&str) -> Result<T, &'static str>,
) -> Option<T> {
    let Some(raw) = present(value) else {
        errors.insert(field, missing);
        return None;
    };
    match check(raw) {
        Ok(parsed) => Some(parsed),
        Err(message) => {
            errors.insert(field, message);
            None
        }
    }
}

/// Accept text of at most `max` characters, else `too_long`.
///
/// Limits mirror the column CHECK constraints so an over-long value is
/// reported against its field instead of failing at insert time.
pub fn bounded(
    max: usize,
    too_long: &'static str,
) -> impl Fn(&str) -> Result<String, &'static str> {
    move |raw| {
        if raw.chars().count() <= max {
            Ok(raw.to_string())
        } else {
            Err(too_long)
        }
    }
}

/// Parse a finite decimal number. Surrounding whitespace is ignored.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse a row identifier.
pub fn parse_id(raw: &str) -> Option<DbId> {
    raw.trim().parse().ok()
}

/// Partial-update merge for one field: the incoming value when it is present
/// and non-empty, else the current one.
pub fn merge(incoming: &Option<String>, current: &Option<String>) -> Option<String> {
    present(incoming)
        .map(str::to_string)
        .or_else(|| current.clone())
}
