//! Message Catalogs and the Translator
//!
//! A [`Catalog`] is a flat map of dot-separated keys to raw message
//! templates for one language, typically produced by a build-time loader
//! that converts source translation files into JSON. The [`Translator`]
//! holds one catalog per language and exposes the two runtime entry
//! points: [`trans`](Translator::trans) for plain messages and
//! [`trans_choice`](Translator::trans_choice) for pluralized ones.
//!
//! # Example
//!
//! ```
//! use lingo::{Catalog, Locale, Replacements, Translator};
//!
//! let mut en = Catalog::new();
//! en.add("apples", "{1} :count apple|[2,*] :count apples");
//!
//! let translator = Translator::new().with_locale(Locale::en());
//! translator.add_catalog(&Locale::en(), en);
//!
//! let msg = translator.trans_choice("apples", 3.0, &Replacements::new());
//! assert_eq!(msg, "3 apples");
//! ```

use crate::choose::choose;
use crate::replace::{Replacements, substitute};
use crate::{LingoError, Locale, Result};
use log::{debug, warn};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// A flat message catalog for a single language.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Messages keyed by dot-separated key ("auth.failed")
    messages: HashMap<String, String>,
}

impl Catalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from JSON.
    ///
    /// Nested objects flatten into dot-separated keys, so both the flat
    /// form a build-time loader emits and hand-written nested JSON work:
    ///
    /// ```json
    /// { "auth": { "failed": "These credentials do not match." } }
    /// ```
    ///
    /// becomes the key `auth.failed`. Non-string leaves are ignored.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let serde_json::Value::Object(map) = value else {
            return Err(LingoError::ParseError(
                "catalog root must be a JSON object".to_string(),
            ));
        };

        let mut catalog = Self::new();
        for (key, value) in &map {
            flatten(key, value, &mut catalog.messages);
        }
        Ok(catalog)
    }

    /// Add a message.
    pub fn add(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(key.into(), message.into());
    }

    /// Get a message template.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(|s| s.as_str())
    }

    /// Check if the catalog has a message.
    pub fn has(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Get all message keys.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.messages.keys()
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

fn flatten(prefix: &str, value: &serde_json::Value, out: &mut HashMap<String, String>) {
    match value {
        serde_json::Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        serde_json::Value::Object(map) => {
            for (key, value) in map {
                flatten(&format!("{prefix}.{key}"), value, out);
            }
        }
        _ => {}
    }
}

/// Translates message keys for an active language.
///
/// Thread-safe: clones share the underlying catalog map, so one clone can
/// keep loading catalogs while others translate. Lookup tries the active
/// locale, its language-only form, then the fallback locale; a key with
/// no catalog entry is echoed back unchanged.
///
/// Both [`trans`](Self::trans) and [`trans_choice`](Self::trans_choice)
/// are referentially transparent for a given catalog state: same inputs,
/// same output, no side effects beyond logging.
pub struct Translator {
    catalogs: Arc<RwLock<HashMap<String, Catalog>>>,
    locale: Locale,
    fallback: Option<Locale>,
}

impl Translator {
    /// Create a translator with the default ("en") locale and no fallback.
    pub fn new() -> Self {
        Self {
            catalogs: Arc::new(RwLock::new(HashMap::new())),
            locale: Locale::en(),
            fallback: None,
        }
    }

    /// Set the active locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set the fallback locale.
    pub fn with_fallback(mut self, locale: Locale) -> Self {
        self.fallback = Some(locale);
        self
    }

    /// Load catalogs from a directory of `<tag>.json` files.
    ///
    /// Expected structure:
    /// - `lang/en.json`
    /// - `lang/pt-BR.json`
    pub fn load_from_dir(self, dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.extension().is_some_and(|ext| ext == "json") {
                let stem = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .ok_or_else(|| LingoError::ParseError("invalid catalog filename".to_string()))?;

                let locale = Locale::parse(stem)?;
                let content = fs::read_to_string(&path)?;
                let catalog = Catalog::from_json(&content)?;

                debug!("loaded catalog {} ({} messages)", locale, catalog.len());
                self.add_catalog(&locale, catalog);
            }
        }

        Ok(self)
    }

    /// Add (or replace) the catalog for a locale.
    pub fn add_catalog(&self, locale: &Locale, catalog: Catalog) {
        self.catalogs.write().insert(locale.tag(), catalog);
    }

    /// Get the active locale.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Change the active locale.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Check if a key resolves to a message in the active or fallback
    /// catalogs.
    pub fn has(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Translate a message key.
    ///
    /// Missing keys echo back unchanged (the caller decides how visible
    /// that should be); replacements are applied either way, so a literal
    /// key with placeholders still substitutes.
    pub fn trans(&self, key: &str, replacements: &Replacements) -> String {
        let message = self.lookup(key).unwrap_or_else(|| {
            warn!("message not found for key '{key}' (locale {})", self.locale);
            key.to_string()
        });

        substitute(&message, replacements)
    }

    /// Translate a pluralized message key.
    ///
    /// Selects a segment of the compound message for `count` under the
    /// active language's plural rules, injects an implicit `count`
    /// replacement (a caller-supplied `count` wins), then substitutes.
    pub fn trans_choice(&self, key: &str, count: f64, replacements: &Replacements) -> String {
        let template = self.lookup(key).unwrap_or_else(|| {
            warn!("message not found for key '{key}' (locale {})", self.locale);
            key.to_string()
        });

        let message = choose(&template, count, &self.locale.tag());

        let mut replacements = replacements.clone();
        if !replacements.contains_key("count") {
            replacements.insert("count", format_quantity(count));
        }

        substitute(&message, &replacements)
    }

    fn lookup(&self, key: &str) -> Option<String> {
        let catalogs = self.catalogs.read();

        let mut candidates = vec![self.locale.tag()];
        if self.locale.region.is_some() {
            candidates.push(self.locale.language_only().tag());
        }
        if let Some(ref fallback) = self.fallback {
            candidates.push(fallback.tag());
            if fallback.region.is_some() {
                candidates.push(fallback.language_only().tag());
            }
        }

        candidates.iter().find_map(|tag| {
            catalogs
                .get(tag)
                .and_then(|catalog| catalog.get(key))
                .map(|s| s.to_string())
        })
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Translator {
    fn clone(&self) -> Self {
        Self {
            catalogs: Arc::clone(&self.catalogs),
            locale: self.locale.clone(),
            fallback: self.fallback.clone(),
        }
    }
}

/// Stringify a quantity for the implicit `count` replacement, keeping
/// whole numbers integral (3.0 -> "3").
fn format_quantity(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 9e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
