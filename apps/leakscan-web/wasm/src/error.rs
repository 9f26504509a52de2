//! Typed failures for the browser layer.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Everything that can go wrong between a button press and a rendered
/// result. Carried through the orchestrator so the view can show a distinct
/// failure state instead of silently reverting to idle.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("server returned status {0}")]
    Status(u16),

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("unsupported file type: {0}")]
    UnsupportedFile(String),

    #[error("page is missing element #{0}")]
    MissingElement(String),

    #[error("browser call failed: {0}")]
    Dom(String),
}

impl From<ScanError> for JsValue {
    fn from(err: ScanError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

/// Best-effort text for an error value thrown from JS.
pub fn describe(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
