//! Span normalization: in-band filtering, ordering, bounds clamping.

use shared_types::Entity;

/// Select the entities that can be rendered inline and order them for the
/// overlay walk: `start >= 0`, ascending by `start`, ties keeping input
/// order. Out-of-band entities stay available to the legend and detail
/// builders, which take the unfiltered list.
pub fn in_band(entities: &[Entity]) -> Vec<&Entity> {
    let mut ordered: Vec<&Entity> = entities.iter().filter(|e| e.is_in_band()).collect();
    // sort_by_key is stable, so equal starts keep input order
    ordered.sort_by_key(|e| e.start);
    ordered
}

/// Validate an entity's offsets against a text of `char_len` characters.
///
/// Returns the clamped `(start, end)` in character space, or `None` when the
/// entity cannot be placed at all (negative start, or start beyond the end
/// of the text). A malformed `end < start` collapses to an empty span at
/// `start` rather than slicing backwards.
pub fn clamp_span(entity: &Entity, char_len: usize) -> Option<(usize, usize)> {
    // Compare in i64 before casting: offsets come off the wire unchecked
    // and usize is 32-bit on wasm targets.
    if entity.start < 0 || entity.start > char_len as i64 {
        return None;
    }
    let end = entity.end.max(entity.start).min(char_len as i64);
    Some((entity.start as usize, end as usize))
}
