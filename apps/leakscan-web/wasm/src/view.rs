//! DOM view: input readout, busy state, result panels, error banner.
//!
//! All element lookups go by id against the static page markup. The view
//! owns no state; it is re-attached per operation and writes whatever the
//! orchestrator hands it.

use overlay_engine::{escape_text, in_band, render_details, render_legend, render_overlay};
use shared_types::{AnalyzeResponse, AnonymizeResponse, Entity, RiskTier};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, File, HtmlButtonElement, HtmlElement, HtmlInputElement,
    HtmlTextAreaElement,
};

use crate::error::ScanError;

pub const TEXT_INPUT: &str = "text-input";
pub const FILE_INPUT: &str = "file-input";
pub const RESULTS: &str = "results";
pub const COUNT: &str = "pii-count";
pub const HIGHLIGHTED: &str = "highlighted-text";
pub const LEGEND: &str = "pii-legend";
pub const DETAILS: &str = "pii-details";
pub const RISK_BANNER: &str = "risk-banner";
pub const RISK_SUMMARY: &str = "risk-summary";
pub const ATTACHMENT_CARD: &str = "attachment-card";
pub const ATTACHMENT_NAME: &str = "attachment-name";
pub const ATTACHMENT_TEXT: &str = "attachment-text";
pub const ANONYMIZED_CARD: &str = "anonymized-card";
pub const ANONYMIZED_TEXT: &str = "anonymized-text";
pub const ERROR_BANNER: &str = "error-banner";

pub struct View {
    document: Document,
}

impl View {
    /// Attach to the current page.
    pub fn attach() -> Result<View, ScanError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ScanError::Dom("no document".to_string()))?;
        Ok(View { document })
    }

    fn element(&self, id: &str) -> Result<Element, ScanError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| ScanError::MissingElement(id.to_string()))
    }

    fn html_element(&self, id: &str) -> Result<HtmlElement, ScanError> {
        self.element(id)?
            .dyn_into()
            .map_err(|_| ScanError::MissingElement(id.to_string()))
    }

    /// The submitted text: the textarea value, trimmed.
    pub fn input_text(&self) -> Result<String, ScanError> {
        let textarea: HtmlTextAreaElement = self
            .element(TEXT_INPUT)?
            .dyn_into()
            .map_err(|_| ScanError::MissingElement(TEXT_INPUT.to_string()))?;
        Ok(textarea.value().trim().to_string())
    }

    /// The selected attachment, if any.
    pub fn selected_file(&self) -> Result<Option<File>, ScanError> {
        let input: HtmlInputElement = self
            .element(FILE_INPUT)?
            .dyn_into()
            .map_err(|_| ScanError::MissingElement(FILE_INPUT.to_string()))?;
        Ok(input.files().and_then(|files| files.get(0)))
    }

    /// Disable the triggering control and swap in its busy label.
    pub fn set_busy(&self, button_id: &str, busy_label: &str) -> Result<(), ScanError> {
        let button: HtmlButtonElement = self
            .element(button_id)?
            .dyn_into()
            .map_err(|_| ScanError::MissingElement(button_id.to_string()))?;
        button.set_disabled(true);
        button.set_text_content(Some(busy_label));
        Ok(())
    }

    /// Re-enable the control and restore its idle label. Runs on every exit
    /// path, success or failure.
    pub fn clear_busy(&self, button_id: &str, idle_label: &str) -> Result<(), ScanError> {
        let button: HtmlButtonElement = self
            .element(button_id)?
            .dyn_into()
            .map_err(|_| ScanError::MissingElement(button_id.to_string()))?;
        button.set_disabled(false);
        button.set_text_content(Some(idle_label));
        Ok(())
    }

    pub fn show_error(&self, message: &str) -> Result<(), ScanError> {
        let banner = self.html_element(ERROR_BANNER)?;
        banner.set_text_content(Some(message));
        banner.set_hidden(false);
        Ok(())
    }

    pub fn clear_error(&self) -> Result<(), ScanError> {
        let banner = self.html_element(ERROR_BANNER)?;
        banner.set_text_content(None);
        banner.set_hidden(true);
        Ok(())
    }

    /// Fan an analyze response out to the result panels.
    pub fn render_analysis(&self, text: &str, resp: &AnalyzeResponse) -> Result<(), ScanError> {
        self.show_results()?;
        self.set_count(resp.count)?;
        self.render_entities(text, &resp.entities)?;
        self.set_risk(&resp.risk_level, resp.risk_summary.as_deref())?;
        self.set_attachment(resp.attachment_name.as_deref(), resp.attachment_text.as_deref())?;
        self.set_anonymized(None)?;
        Ok(())
    }

    /// Fan an anonymize response out: same panels plus the anonymized text.
    pub fn render_anonymization(
        &self,
        text: &str,
        resp: &AnonymizeResponse,
    ) -> Result<(), ScanError> {
        self.show_results()?;
        self.set_count(resp.entities.len())?;
        self.render_entities(text, &resp.entities)?;
        self.set_risk(&resp.risk_level, resp.risk_summary.as_deref())?;
        self.set_attachment(resp.attachment_name.as_deref(), resp.attachment_text.as_deref())?;
        self.set_anonymized(Some(&resp.anonymized))?;
        Ok(())
    }

    /// Current content of the anonymized-text panel, for the clipboard.
    pub fn anonymized_text(&self) -> Result<String, ScanError> {
        Ok(self
            .element(ANONYMIZED_TEXT)?
            .text_content()
            .unwrap_or_default())
    }

    fn show_results(&self) -> Result<(), ScanError> {
        self.html_element(RESULTS)?.set_hidden(false);
        Ok(())
    }

    fn set_count(&self, count: usize) -> Result<(), ScanError> {
        let label = if count == 1 {
            "1 sensitive item detected".to_string()
        } else {
            format!("{} sensitive items detected", count)
        };
        self.element(COUNT)?.set_text_content(Some(&label));
        Ok(())
    }

    fn render_entities(&self, text: &str, entities: &[Entity]) -> Result<(), ScanError> {
        let ordered = in_band(entities);
        self.element(HIGHLIGHTED)?
            .set_inner_html(&render_overlay(text, &ordered));
        self.element(LEGEND)?
            .set_inner_html(&render_legend(entities));
        self.element(DETAILS)?
            .set_inner_html(&render_details(entities));
        Ok(())
    }

    fn set_risk(&self, risk_level: &str, risk_summary: Option<&str>) -> Result<(), ScanError> {
        let tier = RiskTier::from_banner(risk_level);
        let banner = self.element(RISK_BANNER)?;
        let label = if risk_level.trim().is_empty() {
            "no risk level reported"
        } else {
            risk_level
        };
        banner.set_text_content(Some(label));
        banner.set_class_name(&format!("risk-banner risk-{}", tier.as_str()));

        let summary = self.html_element(RISK_SUMMARY)?;
        match risk_summary {
            Some(text) if !text.is_empty() => {
                summary.set_text_content(Some(text));
                summary.set_hidden(false);
            }
            _ => {
                summary.set_text_content(None);
                summary.set_hidden(true);
            }
        }
        Ok(())
    }

    fn set_attachment(&self, name: Option<&str>, text: Option<&str>) -> Result<(), ScanError> {
        let card = self.html_element(ATTACHMENT_CARD)?;
        match (name, text) {
            (Some(name), Some(text)) => {
                self.element(ATTACHMENT_NAME)?.set_text_content(Some(name));
                // Extracted document text is untrusted; escaped, never raw.
                self.element(ATTACHMENT_TEXT)?
                    .set_inner_html(&escape_text(text));
                card.set_hidden(false);
            }
            _ => card.set_hidden(true),
        }
        Ok(())
    }

    fn set_anonymized(&self, anonymized: Option<&str>) -> Result<(), ScanError> {
        let card = self.html_element(ANONYMIZED_CARD)?;
        match anonymized {
            Some(text) => {
                self.element(ANONYMIZED_TEXT)?.set_text_content(Some(text));
                card.set_hidden(false);
            }
            None => card.set_hidden(true),
        }
        Ok(())
    }
}
