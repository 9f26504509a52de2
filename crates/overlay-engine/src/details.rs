//! Detail listing: every detected entity, duplicates included, input order.

use shared_types::Entity;

use crate::escape::escape_text;

/// Render the full entity list as HTML list items.
///
/// Unlike the legend this is not deduplicated and not re-sorted: each entity
/// gets its own row with a severity badge, its label, the matched text, and
/// the optional provenance tag and reason. Out-of-band entities (negative
/// offsets) appear here even though the overlay skips them.
pub fn render_details(entities: &[Entity]) -> String {
    entities.iter().map(render_item).collect()
}

fn render_item(entity: &Entity) -> String {
    let severity = entity.severity.as_str();
    let mut item = format!(
        "<li class=\"detail-item\">\
         <span class=\"badge sev-{severity}\">{severity}</span>\
         <span class=\"detail-label\">{label}</span>\
         <code class=\"detail-text\">{text}</code>",
        label = escape_text(&entity.label),
        text = escape_text(&entity.text),
    );
    if let Some(source) = &entity.source {
        item.push_str(&format!(
            "<span class=\"detail-source\">{}</span>",
            escape_text(source)
        ));
    }
    if let Some(reason) = &entity.reason {
        item.push_str(&format!(
            "<em class=\"detail-reason\">{}</em>",
            escape_text(reason)
        ));
    }
    item.push_str("</li>");
    item
}
