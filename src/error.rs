//! Error type for the browser binding.
//!
//! The pure state modules cannot fail; everything here originates from DOM
//! lookups, `localStorage`, or the page config block.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("missing element: {selector}")]
    MissingElement { selector: String },

    #[error("element {selector} is not a {expected}")]
    WrongElementType { selector: String, expected: &'static str },

    #[error("storage unavailable: {0}")]
    Storage(String),

    #[error("javascript error: {0}")]
    Js(String),

    #[error("invalid site config: {0}")]
    Config(String),
}

impl SiteError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement { selector: selector.into() }
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
