/// Coarse risk bucket for the summary banner.
///
/// The service reports `risk_level` as a free-form string (e.g.
/// `CRITIQUE - NE PAS ENVOYER`); [`RiskTier::from_banner`] is the one total
/// mapping from that string to a fixed tier, so no caller ever does its own
/// substring matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    Critical,
    High,
    Medium,
    Low,
    None,
}

impl RiskTier {
    /// Map a free-form banner string to a tier.
    ///
    /// Case-insensitive substring containment, checked in order
    /// critical, high, medium, none; anything else that is non-empty is
    /// `Low`. A blank banner is the no-result case, not a low-risk verdict,
    /// and maps to `None`.
    pub fn from_banner(raw: &str) -> RiskTier {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            RiskTier::None
        } else if normalized.contains("critical") || normalized.contains("critique") {
            RiskTier::Critical
        } else if normalized.contains("high")
            || normalized.contains("eleve")
            || normalized.contains("élevé")
        {
            RiskTier::High
        } else if normalized.contains("medium") || normalized.contains("moyen") {
            RiskTier::Medium
        } else if normalized.contains("none") || normalized.contains("aucun") {
            RiskTier::None
        } else {
            RiskTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Critical => "critical",
            RiskTier::High => "high",
            RiskTier::Medium => "medium",
            RiskTier::Low => "low",
            RiskTier::None => "none",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
