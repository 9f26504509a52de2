use serde::{Deserialize, Deserializer, Serialize};

/// A detected span of sensitive text, as returned by the analysis service.
///
/// `start`/`end` are half-open character offsets into the submitted text.
/// A negative `start` means the position is unknown (the entity came from an
/// attached document or a secondary AI pass); such entities are kept for the
/// legend and detail listings but never rendered inline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: String,
    pub start: i64,
    pub end: i64,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Entity {
    /// Whether this entity carries a usable offset into the submitted text.
    pub fn is_in_band(&self) -> bool {
        self.start >= 0
    }
}

/// Per-entity severity. The wire value is an open string; anything
/// unrecognized (or absent) lands on `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    #[default]
    Low,
}

impl Severity {
    /// Total parse of a wire severity string. Accepts the English set and
    /// the French values the deployed detector emits.
    pub fn parse(raw: &str) -> Severity {
        let normalized = raw.trim().to_lowercase();
        match normalized.as_str() {
            "critical" | "critique" => Severity::Critical,
            "high" | "eleve" | "élevé" => Severity::High,
            "medium" | "moyen" => Severity::Medium,
            _ => Severity::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(Severity::parse(raw.as_deref().unwrap_or_default()))
    }
}

/// Response of `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub risk_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_text: Option<String>,
}

/// Response of `POST /anonymize`: the same entity list plus the full text
/// with every in-band entity substituted by a placeholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizeResponse {
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub risk_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_text: Option<String>,
    pub anonymized: String,
}
