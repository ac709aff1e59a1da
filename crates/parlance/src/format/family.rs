//! Format families: a default template plus ordered regex overrides.

use regex::Regex;

use super::template::Template;

/// One override: a pattern tried against the stringified selector, and the
/// template used when it matches.
#[derive(Debug, Clone)]
pub struct FormatOverride {
    pattern: Regex,
    template: Template,
}

impl FormatOverride {
    pub fn new(pattern: Regex, template: Template) -> Self {
        Self { pattern, template }
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

/// A named family of templates for one category of value (years, dates…).
///
/// Selection is data-driven: the override list is kept in its document
/// order and evaluated first-match-wins, which lets a locale encode
/// irregular cases (special phrasing for years ending in certain digits)
/// without code changes.
#[derive(Debug, Clone)]
pub struct FormatFamily {
    name: String,
    default: Template,
    overrides: Vec<FormatOverride>,
}

impl FormatFamily {
    pub fn new(
        name: impl Into<String>,
        default: Template,
        overrides: Vec<FormatOverride>,
    ) -> Self {
        Self {
            name: name.into(),
            default,
            overrides,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The template for a selector value: the first override whose pattern
    /// matches, or the family default.
    pub fn select(&self, selector: &str) -> &Template {
        for (position, entry) in self.overrides.iter().enumerate() {
            if entry.pattern.is_match(selector) {
                tracing::trace!(family = %self.name, selector, position, "override matched");
                return &entry.template;
            }
        }
        &self.default
    }
}
