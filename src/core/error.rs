use std::collections::BTreeMap;
use std::fmt::Write as _;

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while building or rendering an e-invoice document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ArveError {
    /// One or more fields failed schema validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A document node broke a rendering invariant. Indicates a bug in the
    /// caller or the library, not bad input data.
    #[error("render error: {0}")]
    Render(String),

    /// XML serialization error.
    #[error("XML error: {0}")]
    Xml(String),
}

/// One violation reported for a field.
///
/// Scalar and nested-node fields report plain messages. Sequence fields
/// report a single `Items` entry keyed by the index of each failing element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldError {
    Message(String),
    Items(BTreeMap<usize, Vec<String>>),
}

impl FieldError {
    pub fn message(&self) -> Option<&str> {
        match self {
            FieldError::Message(m) => Some(m),
            FieldError::Items(_) => None,
        }
    }
}

impl From<&str> for FieldError {
    fn from(message: &str) -> Self {
        FieldError::Message(message.to_string())
    }
}

impl From<String> for FieldError {
    fn from(message: String) -> Self {
        FieldError::Message(message)
    }
}

/// Structured validation report: field name to every violation found for it.
///
/// All fields are checked before the report is produced, so a single error
/// carries every problem of the validated mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("validation failed: {}", summarize(.errors))]
pub struct ValidationError {
    errors: IndexMap<String, Vec<FieldError>>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation for `field`.
    pub fn push(&mut self, field: impl Into<String>, error: impl Into<FieldError>) {
        self.errors.entry(field.into()).or_default().push(error.into());
    }

    /// Record several violations for `field` at once.
    pub fn extend_field(&mut self, field: impl Into<String>, errors: Vec<FieldError>) {
        if errors.is_empty() {
            return;
        }
        self.errors.entry(field.into()).or_default().extend(errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with at least one violation.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&[FieldError]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    /// Plain messages reported for `field`, in the order they were found.
    pub fn messages(&self, field: &str) -> Vec<&str> {
        self.errors
            .get(field)
            .map(|errs| errs.iter().filter_map(FieldError::message).collect())
            .unwrap_or_default()
    }

    /// Messages reported for element `index` of the sequence field `field`.
    pub fn item_messages(&self, field: &str, index: usize) -> Vec<&str> {
        self.errors
            .get(field)
            .into_iter()
            .flatten()
            .filter_map(|e| match e {
                FieldError::Items(items) => items.get(&index),
                FieldError::Message(_) => None,
            })
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

fn summarize(errors: &IndexMap<String, Vec<FieldError>>) -> String {
    let mut out = String::new();
    for (i, (field, errs)) in errors.iter().enumerate() {
        if i > 0 {
            out.push_str("; ");
        }
        let _ = write!(out, "{field}: ");
        for (j, err) in errs.iter().enumerate() {
            if j > 0 {
                out.push_str(", ");
            }
            match err {
                FieldError::Message(m) => out.push_str(m),
                FieldError::Items(items) => {
                    let parts: Vec<String> = items
                        .iter()
                        .map(|(idx, msgs)| format!("[{idx}] {}", msgs.join(", ")))
                        .collect();
                    out.push_str(&parts.join(", "));
                }
            }
        }
    }
    out
}
