//! Leakscan - pre-send PII leak scanning, in the browser
//!
//! WASM layer for the scan page. The remote service does the detection;
//! this crate orchestrates the requests and renders the results:
//! - Payload shaping (JSON vs multipart with attachment) and fetch
//! - Escaped inline overlay, category legend, and detail list via
//!   `overlay-engine`
//! - Busy/disabled controls, risk banner, error state
//! - Report download and clipboard copy
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { ScanApp } from './pkg/leakscan_wasm.js';
//!
//! await init();
//! const app = new ScanApp();
//! document.getElementById('analyze-btn').onclick = () => app.analyze();
//! document.getElementById('anonymize-btn').onclick = () => app.anonymize();
//! document.getElementById('report-btn').onclick = () => app.report();
//! document.getElementById('copy-btn').onclick = () => app.copyAnonymized();
//! ```

pub mod app;
pub mod attachment;
pub mod error;
pub mod net;
pub mod view;

use wasm_bindgen::prelude::*;

pub use app::ScanApp;
pub use error::ScanError;

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Leakscan WASM initialized".into());
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
