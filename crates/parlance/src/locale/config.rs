//! Locale document model.
//!
//! A locale is one JSON document: number-word tables, format families, and
//! word lists. Format families hold a `"default"` template plus numbered
//! override entries tried in ascending numeric key order.

use std::collections::BTreeMap;

use regex::Regex;
use serde::Deserialize;

use crate::format::{FormatFamily, FormatOverride, parse_template};
use crate::locale::error::LoadError;
use crate::numbers::NumberDocument;

/// A deserialized locale document.
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleDocument {
    /// Locale code, e.g. `"en"`. Registry key for this document.
    pub code: String,
    /// Number-word tables.
    pub numbers: NumberDocument,
    /// Format families keyed by family name.
    #[serde(default)]
    pub formats: BTreeMap<String, FamilyDocument>,
    /// Weekday names, Monday first.
    #[serde(default)]
    pub weekdays: Vec<String>,
    /// Month names, January first.
    #[serde(default)]
    pub months: Vec<String>,
}

/// Raw format-family map: `"default"` plus numbered override entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct FamilyDocument(pub BTreeMap<String, FamilyEntry>);

/// One entry of a family document.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FamilyEntry {
    /// The default template string, under the `"default"` key.
    Default(String),
    /// A numbered override.
    Override(OverrideDocument),
}

/// A numbered override entry.
#[derive(Debug, Clone, Deserialize)]
pub struct OverrideDocument {
    /// Regular expression tried against the stringified selector.
    #[serde(rename = "match")]
    pub pattern: String,
    /// Template used when the pattern matches.
    pub format: String,
}

/// Compile one family document, preserving ascending numeric entry order.
pub(crate) fn build_family(name: &str, doc: &FamilyDocument) -> Result<FormatFamily, LoadError> {
    let mut default = None;
    let mut numbered: Vec<(u32, &OverrideDocument)> = Vec::new();

    for (key, entry) in &doc.0 {
        match entry {
            FamilyEntry::Default(text) => {
                if key != "default" {
                    return Err(LoadError::BadFamilyKey {
                        family: name.to_string(),
                        key: key.clone(),
                    });
                }
                let template = parse_template(text).map_err(|e| LoadError::BadTemplate {
                    family: name.to_string(),
                    message: e.to_string(),
                })?;
                default = Some(template);
            }
            FamilyEntry::Override(entry) => {
                let position: u32 = key.parse().map_err(|_| LoadError::BadFamilyKey {
                    family: name.to_string(),
                    key: key.clone(),
                })?;
                numbered.push((position, entry));
            }
        }
    }

    let default = default.ok_or_else(|| LoadError::MissingDefaultTemplate {
        family: name.to_string(),
    })?;

    numbered.sort_by_key(|&(position, _)| position);

    let mut overrides = Vec::with_capacity(numbered.len());
    for (position, entry) in numbered {
        let pattern = Regex::new(&entry.pattern).map_err(|e| LoadError::BadPattern {
            family: name.to_string(),
            key: position,
            message: e.to_string(),
        })?;
        let template = parse_template(&entry.format).map_err(|e| LoadError::BadTemplate {
            family: name.to_string(),
            message: e.to_string(),
        })?;
        overrides.push(FormatOverride::new(pattern, template));
    }

    Ok(FormatFamily::new(name, default, overrides))
}
