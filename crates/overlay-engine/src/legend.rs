//! Category legend: one entry per distinct label, first-seen order.

use std::collections::HashSet;

use shared_types::{Entity, Severity};

use crate::escape::escape_text;

/// One legend row: a label and the severity that colors its swatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: String,
    pub severity: Severity,
}

/// Reduce an entity list (unfiltered, out-of-band entities included) to one
/// entry per distinct label, in order of first appearance. The first-seen
/// severity wins even when later entities with the same label disagree.
pub fn aggregate_legend(entities: &[Entity]) -> Vec<LegendEntry> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut legend = Vec::new();
    for entity in entities {
        if seen.insert(entity.label.as_str()) {
            legend.push(LegendEntry {
                label: entity.label.clone(),
                severity: entity.severity,
            });
        }
    }
    legend
}

/// Render the legend as HTML items, one swatch per category.
pub fn render_legend(entities: &[Entity]) -> String {
    aggregate_legend(entities)
        .iter()
        .map(|entry| {
            format!(
                "<div class=\"legend-item\"><span class=\"legend-dot sev-{}\"></span>{}</div>",
                entry.severity.as_str(),
                escape_text(&entry.label),
            )
        })
        .collect()
}
