//! Error types for the annotator

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, AnnotateError>;

/// Failures reported by a host while preparing or drawing the overlay.
///
/// None of these ever cross the JS boundary; the exported wrapper logs and
/// drops them.
#[derive(Error, Debug)]
pub enum AnnotateError {
    #[error("No global window available")]
    NoWindow,

    #[error("No document available")]
    NoDocument,

    #[error("Document has no body")]
    NoBody,

    #[error("Canvas 2D context unavailable")]
    ContextUnavailable,

    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<JsValue> for AnnotateError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        AnnotateError::Dom(message)
    }
}
