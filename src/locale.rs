//! Locale Representation
//!
//! Provides a small locale type (language + optional region) that accepts
//! both hyphen and underscore separators and renders the canonical
//! hyphenated tag used by the plural rule table.

use crate::{LingoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represents a locale (language + optional region).
///
/// # Examples
///
/// ```
/// use lingo::Locale;
/// use std::str::FromStr;
///
/// let en = Locale::new("en", None::<&str>);
/// let pt_br = Locale::from_str("pt_BR").unwrap();
/// assert_eq!(pt_br.tag(), "pt-BR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    /// Language code (ISO 639, e.g., "en", "fr", "fur")
    pub language: String,
    /// Optional region code (ISO 3166-1, e.g., "US", "BR")
    pub region: Option<String>,
}

impl Locale {
    /// Create a new locale.
    pub fn new(language: impl Into<String>, region: Option<impl Into<String>>) -> Self {
        Self {
            language: language.into().to_lowercase(),
            region: region.map(|r| r.into().to_uppercase()),
        }
    }

    /// Parse from a tag such as "en-US" or "pt_BR".
    ///
    /// Hyphens and underscores are treated as equivalent separators.
    pub fn parse(tag: &str) -> Result<Self> {
        let mut parts = tag.split(|c| c == '-' || c == '_');

        let language = parts.next().unwrap_or("");
        if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(LingoError::InvalidLocale(tag.to_string()));
        }

        let region = parts.next().filter(|r| !r.is_empty()).map(|r| r.to_string());
        Ok(Self::new(language, region))
    }

    /// Get the canonical hyphenated tag (e.g., "en-US").
    pub fn tag(&self) -> String {
        match self.region {
            Some(ref region) => format!("{}-{}", self.language, region),
            None => self.language.clone(),
        }
    }

    /// Get language-only locale (strips region).
    pub fn language_only(&self) -> Self {
        Self {
            language: self.language.clone(),
            region: None,
        }
    }

    /// English (no region)
    pub fn en() -> Self {
        Self::new("en", None::<&str>)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Locale {
    type Err = LingoError;

    fn from_str(s: &str) -> Result<Self> {
        Locale::parse(s)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::en()
    }
}
