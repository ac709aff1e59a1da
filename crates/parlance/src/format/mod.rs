//! Template-driven phrase rendering.
//!
//! Locale format strings parse into [`Template`] values; a [`FormatFamily`]
//! pairs a default template with ordered regex overrides. Rendering
//! substitutes named arguments and normalizes whitespace, so templates can
//! carry optional slots that collapse away cleanly when unused.

mod family;
mod template;

pub use family::{FormatFamily, FormatOverride};
pub use template::{Template, TemplateError, parse_template};

use std::collections::HashMap;

/// Render one family for a selector: pick the template, substitute, and
/// normalize whitespace.
pub(crate) fn render_family(
    family: &FormatFamily,
    selector: &str,
    args: &HashMap<String, String>,
) -> String {
    collapse_whitespace(&family.select(selector).substitute(args))
}

/// Collapse runs of whitespace to single spaces and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    words.join(" ")
}
