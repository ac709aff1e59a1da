//! The locale registry.
//!
//! Owns every loaded locale, keyed by code. Population is explicit: load
//! during startup, then share `&LocaleRegistry` freely; there are no lazy
//! caches to race on. A built-in English document is always present as the
//! designated fallback, so lookups are infallible.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::locale::config::LocaleDocument;
use crate::locale::error::LoadError;
use crate::locale::Locale;

/// The built-in fallback locale document.
const BUILTIN_EN: &str = include_str!("../../locales/en.json");

/// Registry of compiled locales with a designated default.
///
/// # Example
///
/// ```
/// use parlance::LocaleRegistry;
///
/// let registry = LocaleRegistry::with_builtin();
/// assert_eq!(registry.default_code(), "en");
///
/// // Unknown codes fall back to the default locale silently.
/// let locale = registry.get("xx");
/// assert_eq!(locale.code(), "en");
/// ```
#[derive(Debug)]
pub struct LocaleRegistry {
    locales: BTreeMap<String, Locale>,
    default_code: String,
}

impl LocaleRegistry {
    /// A registry seeded with the embedded English locale as the default.
    pub fn with_builtin() -> Self {
        let mut registry = Self {
            locales: BTreeMap::new(),
            default_code: "en".to_string(),
        };
        registry
            .load_str(BUILTIN_EN)
            .expect("built-in locale document is valid");
        registry
    }

    /// The designated fallback locale code.
    pub fn default_code(&self) -> &str {
        &self.default_code
    }

    /// Whether a locale is loaded under this code.
    pub fn contains(&self, code: &str) -> bool {
        self.locales.contains_key(code)
    }

    /// Codes of all loaded locales, in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Load a locale document from a file.
    ///
    /// The document's own `code` field decides the registry key; loading
    /// the same code twice **replaces** the earlier locale. Returns the
    /// loaded code.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<String, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.load_internal(&content, Some(path))
    }

    /// Load a locale document from a string. Same replace semantics as
    /// [`load_file`](Self::load_file).
    pub fn load_str(&mut self, content: &str) -> Result<String, LoadError> {
        self.load_internal(content, None)
    }

    /// Look up a locale, falling back to the default for unknown codes.
    ///
    /// The fallback is silent by design: a missing locale resource is a
    /// soft condition, reported only as a debug event.
    pub fn get(&self, code: &str) -> &Locale {
        if let Some(locale) = self.locales.get(code) {
            return locale;
        }
        tracing::debug!(
            requested = %code,
            fallback = %self.default_code,
            "locale not loaded, falling back"
        );
        self.locales
            .get(&self.default_code)
            .expect("default locale is always present")
    }

    fn load_internal(&mut self, content: &str, path: Option<&Path>) -> Result<String, LoadError> {
        let doc: LocaleDocument = serde_json::from_str(content).map_err(|e| LoadError::Parse {
            path: path.map_or_else(|| PathBuf::from("<string>"), Path::to_path_buf),
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        })?;

        let locale = Locale::from_document(&doc)?;
        tracing::debug!(code = %doc.code, families = doc.formats.len(), "loaded locale");
        self.locales.insert(doc.code.clone(), locale);
        Ok(doc.code)
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}
