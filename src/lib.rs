//! Laravel-style Message Translation and Pluralization
//!
//! Lingo implements the translation string format used by Laravel and its
//! front-end bridges: flat key-value catalogs, `:name` placeholder
//! substitution with case variants, and pipe-delimited plural messages
//! with inline `{n}` / `[a,b]` conditions backed by per-language plural
//! rules.
//!
//! The runtime core is three pure functions:
//!
//! - [`plural_index`]: `(language tag, quantity) -> plural form index`
//! - [`choose`]: pick a segment of a compound message for a quantity
//! - [`substitute`]: apply a [`Replacements`] mapping to a message
//!
//! plus a [`Translator`] that ties them to per-language [`Catalog`]s
//! loaded from JSON.
//!
//! # Quick Start
//!
//! ```
//! use lingo::{choose, substitute, Replacements};
//!
//! // Segment selection
//! let msg = "{1} :count minute ago|[2,*] :count minutes ago";
//! let selected = choose(msg, 3.0, "en");
//!
//! // Placeholder substitution
//! let replacements = Replacements::new().with("count", 3);
//! assert_eq!(substitute(&selected, &replacements), "3 minutes ago");
//! ```
//!
//! # Catalogs
//!
//! ```rust,ignore
//! use lingo::{Locale, Replacements, Translator};
//!
//! let translator = Translator::new()
//!     .with_locale(Locale::parse("pt-BR")?)
//!     .with_fallback(Locale::en())
//!     .load_from_dir("lang/")?;
//!
//! let msg = translator.trans("greeting", &Replacements::new().with("name", "Ana"));
//! let msg = translator.trans_choice("inbox.unread", 4.0, &Replacements::new());
//! ```

mod catalog;
mod choose;
mod error;
mod locale;
mod plural;
mod replace;

pub use catalog::{Catalog, Translator};
pub use choose::choose;
pub use error::LingoError;
pub use locale::Locale;
pub use plural::{PluralRule, plural_index, rule_for};
pub use replace::{Replacements, substitute};

/// Result type for catalog and locale operations
pub type Result<T> = std::result::Result<T, LingoError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Catalog, LingoError, Locale, Replacements, Result, Translator, choose, plural_index,
        substitute,
    };
}
