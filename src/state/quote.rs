//! Quote request form capture.
//!
//! Submissions never leave the browser; the captured fields are only used
//! for the log line written before the form is reset.

#[cfg(test)]
#[path = "quote_test.rs"]
mod quote_test;

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuoteRequest {
    pub fields: BTreeMap<String, String>,
}

impl QuoteRequest {
    /// Build from `(name, value)` pairs. Values are trimmed; repeated names
    /// keep the last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let fields = pairs
            .into_iter()
            .map(|(name, value)| (name.into(), value.as_ref().trim().to_owned()))
            .collect();
        Self { fields }
    }

    /// Number of fields the visitor actually filled in.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.fields.values().filter(|v| !v.is_empty()).count()
    }

    /// Field names in a stable order, for logging without personal data.
    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }
}
