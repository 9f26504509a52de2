//! Annotation-overlay rendering engine
//!
//! Reconciles a flat text string with the entity spans the analysis service
//! detected in it, producing escaped HTML fragments: an inline overlay of
//! tagged spans, a deduplicated per-category legend, and a full detail
//! listing. Pure string processing; no I/O and no DOM.

pub mod details;
pub mod escape;
pub mod highlight;
pub mod legend;
pub mod spans;

pub use details::render_details;
pub use escape::{escape_attr, escape_text};
pub use highlight::render_overlay;
pub use legend::{aggregate_legend, render_legend, LegendEntry};
pub use spans::{clamp_span, in_band};
