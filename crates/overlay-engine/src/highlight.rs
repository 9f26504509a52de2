//! Inline overlay rendering: escaped gaps interleaved with tagged spans.

use shared_types::Entity;

use crate::escape::{escape_attr, escape_text};
use crate::spans::clamp_span;

/// Render `text` with the ordered in-band entities tagged inline.
///
/// Walks the text with a cursor, emitting the escaped gap before each
/// entity, then a `<span class="pii-tag ...">` wrapping the entity's own
/// captured text (the renderer trusts `entity.text` rather than re-slicing,
/// so a server-side mismatch is displayed as-is). Offsets are character
/// offsets; they are clamped to the text bounds before slicing, and entities
/// starting past the end of the text are dropped. Overlapping or regressing
/// offsets are tolerated, not corrected: the cursor follows `entity.end`
/// wherever it points.
pub fn render_overlay(text: &str, ordered: &[&Entity]) -> String {
    if ordered.is_empty() {
        return escape_text(text);
    }

    // Offsets are in characters; index bytes once so slicing never lands
    // inside a multi-byte code point.
    let byte_at: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_len = byte_at.len() - 1;
    let slice = |a: usize, b: usize| &text[byte_at[a]..byte_at[b]];

    let mut out = String::with_capacity(text.len() + ordered.len() * 64);
    let mut last_end = 0usize;

    for entity in ordered {
        let Some((start, end)) = clamp_span(entity, char_len) else {
            continue;
        };
        if start > last_end {
            out.push_str(&escape_text(slice(last_end, start)));
        }
        out.push_str(&render_tag(entity));
        last_end = end;
    }

    if last_end < char_len {
        out.push_str(&escape_text(slice(last_end, char_len)));
    }
    out
}

fn render_tag(entity: &Entity) -> String {
    let severity = entity.severity.as_str();
    let mut title = format!("{} ({})", entity.label, severity);
    if let Some(reason) = &entity.reason {
        title.push_str(": ");
        title.push_str(reason);
    }
    format!(
        "<span class=\"pii-tag sev-{severity}\" data-label=\"{label}\" title=\"{title}\">{body}</span>",
        label = escape_attr(&entity.label),
        title = escape_attr(&title),
        body = escape_text(&entity.text),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use shared_types::Severity;

    fn entity(text: &str, label: &str, start: i64, end: i64, severity: Severity) -> Entity {
        Entity {
            text: text.to_string(),
            label: label.to_string(),
            start,
            end,
            severity,
            source: None,
            reason: None,
        }
    }

    fn char_slice(text: &str, start: usize, end: usize) -> String {
        text.chars().take(end).skip(start).collect()
    }

    /// Drop everything between `<` and `>`; escaped text never contains a
    /// raw `<`, so every bracket pair in the output is renderer markup.
    fn strip_tags(html: &str) -> String {
        let mut out = String::new();
        let mut in_tag = false;
        for c in html.chars() {
            match c {
                '<' => in_tag = true,
                '>' if in_tag => in_tag = false,
                c if !in_tag => out.push(c),
                _ => {}
            }
        }
        out
    }

    fn unescape(s: &str) -> String {
        s.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&")
    }

    #[test]
    fn test_render_overlay_email_scenario() {
        let text = "Contact: jean@example.com";
        let entities = vec![entity(
            "jean@example.com",
            "EMAIL",
            9,
            25,
            Severity::Medium,
        )];
        let ordered: Vec<&Entity> = entities.iter().collect();
        let html = render_overlay(text, &ordered);
        assert_eq!(
            html,
            "Contact: <span class=\"pii-tag sev-medium\" data-label=\"EMAIL\" \
             title=\"EMAIL (medium)\">jean@example.com</span>"
        );
    }

    #[test]
    fn test_render_overlay_no_entities_is_escaped_text() {
        let text = "a < b && c > d";
        assert_eq!(render_overlay(text, &[]), "a &lt; b &amp;&amp; c &gt; d");
    }

    #[test]
    fn test_render_overlay_escapes_gap_and_body() {
        let text = "<b>pwd</b>: hunter2";
        let entities = vec![entity("hunter2", "MOT_DE_PASSE", 12, 19, Severity::Critical)];
        let ordered: Vec<&Entity> = entities.iter().collect();
        let html = render_overlay(text, &ordered);
        assert!(html.starts_with("&lt;b&gt;pwd&lt;/b&gt;: "));
        assert!(html.contains(">hunter2</span>"));
        assert!(html.contains("sev-critical"));
    }

    #[test]
    fn test_render_overlay_trusts_entity_text_over_slice() {
        // Server sent text that does not match the offsets: rendered as-is.
        let text = "0123456789";
        let entities = vec![entity("MISMATCH", "X", 2, 4, Severity::Low)];
        let ordered: Vec<&Entity> = entities.iter().collect();
        let html = render_overlay(text, &ordered);
        assert_eq!(
            html,
            "01<span class=\"pii-tag sev-low\" data-label=\"X\" title=\"X (low)\">MISMATCH</span>456789"
        );
    }

    #[test]
    fn test_render_overlay_title_includes_reason() {
        let mut ent = entity("x", "SECRET", 0, 1, Severity::High);
        ent.reason = Some("credential \"value\"".to_string());
        let entities = vec![ent];
        let ordered: Vec<&Entity> = entities.iter().collect();
        let html = render_overlay("xy", &ordered);
        assert!(html.contains("title=\"SECRET (high): credential &quot;value&quot;\""));
    }

    #[test]
    fn test_render_overlay_multibyte_offsets_are_characters() {
        let text = "héllo José!";
        let entities = vec![entity("José", "NOM", 6, 10, Severity::Low)];
        let ordered: Vec<&Entity> = entities.iter().collect();
        let html = render_overlay(text, &ordered);
        assert!(html.starts_with("héllo <span"));
        assert!(html.ends_with("</span>!"));
        assert!(html.contains(">José</span>"));
    }

    #[test]
    fn test_render_overlay_clamps_out_of_range_end() {
        let text = "short";
        let entities = vec![entity("hort", "X", 1, 99, Severity::Low)];
        let ordered: Vec<&Entity> = entities.iter().collect();
        let html = render_overlay(text, &ordered);
        assert!(html.starts_with("s<span"));
        assert!(html.ends_with("</span>"));
    }

    #[test]
    fn test_render_overlay_skips_start_past_text() {
        let text = "abc";
        let entities = vec![entity("ghost", "X", 10, 12, Severity::Low)];
        let ordered: Vec<&Entity> = entities.iter().collect();
        assert_eq!(render_overlay(text, &ordered), "abc");
    }

    #[test]
    fn test_render_overlay_adjacent_spans_no_gap() {
        let text = "abcd";
        let entities = vec![
            entity("ab", "A", 0, 2, Severity::Low),
            entity("cd", "B", 2, 4, Severity::Low),
        ];
        let ordered: Vec<&Entity> = entities.iter().collect();
        let stripped = strip_tags(&render_overlay(text, &ordered));
        assert_eq!(unescape(&stripped), "abcd");
    }

    #[test]
    fn test_render_overlay_overlap_is_tolerated() {
        // Second span regresses into the first; no panic, entity text kept.
        let text = "abcdef";
        let entities = vec![
            entity("abcd", "A", 0, 4, Severity::Low),
            entity("cd", "B", 2, 4, Severity::Low),
        ];
        let ordered: Vec<&Entity> = entities.iter().collect();
        let html = render_overlay(text, &ordered);
        assert_eq!(html.matches("<span ").count(), 2);
        assert!(html.ends_with("ef"));
    }

    proptest! {
        /// Well-formed, sorted, non-overlapping spans round-trip: stripping
        /// the renderer's tags and reversing the escaping reproduces the
        /// input text, and one tag is emitted per in-band entity.
        #[test]
        fn prop_overlay_round_trips(
            text in "[ -~éà€\\n]{0,60}",
            cuts in proptest::collection::vec(0usize..=60, 0..8),
        ) {
            let char_len = text.chars().count();
            let mut cuts: Vec<usize> = cuts.into_iter().map(|c| c.min(char_len)).collect();
            cuts.sort_unstable();
            cuts.dedup();
            let spans: Vec<(usize, usize)> = cuts.chunks(2)
                .filter(|pair| pair.len() == 2)
                .map(|pair| (pair[0], pair[1]))
                .collect();

            let entities: Vec<Entity> = spans.iter()
                .map(|&(a, b)| entity(&char_slice(&text, a, b), "X", a as i64, b as i64, Severity::Low))
                .collect();
            let ordered: Vec<&Entity> = entities.iter().collect();

            let html = render_overlay(&text, &ordered);
            prop_assert_eq!(html.matches("<span ").count(), entities.len());
            prop_assert_eq!(unescape(&strip_tags(&html)), text);
        }
    }
}
