//! Request orchestration: one `ScanApp` per page, three operations.

use std::cell::Cell;

use shared_types::{AnalyzeResponse, AnonymizeResponse};
use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::attachment;
use crate::error::ScanError;
use crate::net;
use crate::view::View;

/// Fixed filename for the downloaded report, matching the service's
/// `Content-Disposition`.
pub const REPORT_FILENAME: &str = "rapport_rgpd.pdf";

/// The three operations the remote service supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Analyze,
    Anonymize,
    Report,
}

impl Operation {
    fn path(&self) -> &'static str {
        match self {
            Operation::Analyze => "/analyze",
            Operation::Anonymize => "/anonymize",
            Operation::Report => "/report",
        }
    }

    fn button_id(&self) -> &'static str {
        match self {
            Operation::Analyze => "analyze-btn",
            Operation::Anonymize => "anonymize-btn",
            Operation::Report => "report-btn",
        }
    }

    fn idle_label(&self) -> &'static str {
        match self {
            Operation::Analyze => "Analyze",
            Operation::Anonymize => "Anonymize",
            Operation::Report => "Download report",
        }
    }

    fn busy_label(&self) -> &'static str {
        match self {
            Operation::Analyze => "Analyzing...",
            Operation::Anonymize => "Anonymizing...",
            Operation::Report => "Generating report...",
        }
    }
}

/// Orchestrator for the scan page.
///
/// Holds no per-request state beyond a monotonically increasing token
/// counter: every trigger takes a fresh token, and a completion only writes
/// to the shared result panels while its token is still the latest issued.
/// A re-trigger therefore supersedes (not cancels) the in-flight request,
/// and the superseded completion is discarded on arrival.
#[wasm_bindgen]
pub struct ScanApp {
    api_base: String,
    tokens: Cell<u64>,
}

#[wasm_bindgen]
impl ScanApp {
    /// `api_base` is prepended to the service paths; defaults to the
    /// serving origin.
    #[wasm_bindgen(constructor)]
    pub fn new(api_base: Option<String>) -> ScanApp {
        ScanApp {
            api_base: api_base.unwrap_or_default(),
            tokens: Cell::new(0),
        }
    }

    /// Detect entities in the current input and render the overlay.
    pub async fn analyze(&self) -> Result<(), JsValue> {
        self.run(Operation::Analyze).await.map_err(JsValue::from)
    }

    /// Detect and substitute entities; also fills the anonymized panel.
    pub async fn anonymize(&self) -> Result<(), JsValue> {
        self.run(Operation::Anonymize).await.map_err(JsValue::from)
    }

    /// Produce the PDF report and save it locally.
    pub async fn report(&self) -> Result<(), JsValue> {
        self.run(Operation::Report).await.map_err(JsValue::from)
    }

    /// Copy the anonymized text to the clipboard. Best-effort: a failure is
    /// logged, never surfaced.
    #[wasm_bindgen(js_name = copyAnonymized)]
    pub async fn copy_anonymized(&self) -> Result<(), JsValue> {
        let view = View::attach()?;
        let text = view.anonymized_text()?;
        if let Err(err) = net::copy_to_clipboard(&text).await {
            console::warn_1(&format!("clipboard copy failed: {}", err).into());
        }
        Ok(())
    }
}

impl ScanApp {
    fn issue_token(&self) -> u64 {
        let token = self.tokens.get() + 1;
        self.tokens.set(token);
        token
    }

    fn is_current(&self, token: u64) -> bool {
        self.tokens.get() == token
    }

    async fn run(&self, op: Operation) -> Result<(), ScanError> {
        let view = View::attach()?;
        view.clear_error()?;

        let text = view.input_text()?;
        let file = view.selected_file()?;
        if net::classify(&text, file.is_some()).is_none() {
            // Nothing to send; stay idle.
            return Ok(());
        }
        if let Some(file) = &file {
            if !attachment::is_supported(&file.name()) {
                view.show_error(&ScanError::UnsupportedFile(file.name()).to_string())?;
                return Ok(());
            }
        }

        let token = self.issue_token();
        view.set_busy(op.button_id(), op.busy_label())?;
        let outcome = self.perform(op, token, &text, file.as_ref(), &view).await;
        // The busy indicator clears on every path, including failures.
        view.clear_busy(op.button_id(), op.idle_label())?;

        if let Err(err) = outcome {
            console::error_1(&format!("{} failed: {}", op.path(), err).into());
            if self.is_current(token) {
                view.show_error(&err.to_string())?;
            }
        }
        Ok(())
    }

    async fn perform(
        &self,
        op: Operation,
        token: u64,
        text: &str,
        file: Option<&web_sys::File>,
        view: &View,
    ) -> Result<(), ScanError> {
        match op {
            Operation::Analyze => {
                let response = net::post(&self.api_base, op.path(), text, file).await?;
                let data: AnalyzeResponse = net::decode_json(response).await?;
                if !self.is_current(token) {
                    console::log_1(&"discarding stale analyze response".into());
                    return Ok(());
                }
                view.render_analysis(text, &data)?;
            }
            Operation::Anonymize => {
                let response = net::post(&self.api_base, op.path(), text, file).await?;
                let data: AnonymizeResponse = net::decode_json(response).await?;
                if !self.is_current(token) {
                    console::log_1(&"discarding stale anonymize response".into());
                    return Ok(());
                }
                view.render_anonymization(text, &data)?;
            }
            Operation::Report => {
                // Saving a file touches no shared view state, so the
                // download is not token-guarded.
                let response = net::post(&self.api_base, op.path(), text, file).await?;
                net::save_as(response, REPORT_FILENAME).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_monotonic() {
        let app = ScanApp::new(None);
        let first = app.issue_token();
        let second = app.issue_token();
        assert!(second > first);
    }

    #[test]
    fn test_only_latest_token_is_current() {
        let app = ScanApp::new(None);
        let first = app.issue_token();
        assert!(app.is_current(first));
        let second = app.issue_token();
        assert!(!app.is_current(first));
        assert!(app.is_current(second));
    }

    #[test]
    fn test_operation_paths() {
        assert_eq!(Operation::Analyze.path(), "/analyze");
        assert_eq!(Operation::Anonymize.path(), "/anonymize");
        assert_eq!(Operation::Report.path(), "/report");
    }

    #[test]
    fn test_report_filename_is_fixed() {
        assert_eq!(REPORT_FILENAME, "rapport_rgpd.pdf");
    }
}
