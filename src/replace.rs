//! Placeholder Substitution
//!
//! Replaces `:name` style placeholders in a resolved message. Each key is
//! matched in three case variants - as given, uppercase and capitalized -
//! and the value's casing follows the variant, so a template can write
//! `:name`, `:NAME` or `:Name` and get `ana`, `ANA` or `Ana` from one
//! replacement entry.

/// An ordered replacement mapping.
///
/// Keys are logically unique per substitution pass; insertion order is
/// preserved and breaks ties when the substitution pass re-orders entries
/// by descending key length.
///
/// # Example
///
/// ```
/// use lingo::{substitute, Replacements};
///
/// let replacements = Replacements::new().with("name", "Bob");
/// assert_eq!(substitute("Hi :name / :NAME", &replacements), "Hi Bob / BOB");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Replacements {
    entries: Vec<(String, String)>,
}

impl Replacements {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a replacement. The value is stringified on insertion.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.entries.push((key.into(), value.to_string()));
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Check whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Replacements {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut replacements = Self::new();
        for (key, value) in iter {
            replacements.insert(key, value);
        }
        replacements
    }
}

impl<K: Into<String> + Clone, V: ToString> From<&[(K, V)]> for Replacements {
    fn from(entries: &[(K, V)]) -> Self {
        entries.iter().map(|(k, v)| (k.clone(), v.to_string())).collect()
    }
}

/// Substitute placeholders in a message.
///
/// Entries are applied longest key first (stable on ties) so a short key
/// never clobbers a longer key's placeholder (`:name` vs `:names`). All
/// occurrences of each variant are replaced; placeholders without a
/// matching key are left intact.
pub fn substitute(message: &str, replacements: &Replacements) -> String {
    let mut ordered: Vec<&(String, String)> = replacements.entries.iter().collect();
    ordered.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut result = message.to_string();
    for (key, value) in ordered {
        result = result.replace(&format!(":{key}"), value);
        result = result.replace(&format!(":{}", key.to_uppercase()), &value.to_uppercase());
        result = result.replace(&format!(":{}", capitalize(key)), &capitalize(value));
    }
    result
}

/// Uppercase the first character, leaving the rest unchanged.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_substitution() {
        let replacements = Replacements::new().with("name", "Bob");
        assert_eq!(substitute("Hello :name!", &replacements), "Hello Bob!");
    }

    #[test]
    fn test_case_variants() {
        let replacements = Replacements::new().with("name", "ana");
        assert_eq!(
            substitute("Hi :NAME, :Name, :name", &replacements),
            "Hi ANA, Ana, ana"
        );
    }

    #[test]
    fn test_all_occurrences_replaced() {
        let replacements = Replacements::new().with("name", "Bob");
        assert_eq!(
            substitute(":name and :name and :name", &replacements),
            "Bob and Bob and Bob"
        );
    }

    #[test]
    fn test_longest_key_first() {
        let replacements = Replacements::new().with("name", "Bob").with("names", "Team");
        assert_eq!(substitute(":names and :name", &replacements), "Team and Bob");

        // Same result regardless of insertion order.
        let replacements = Replacements::new().with("names", "Team").with("name", "Bob");
        assert_eq!(substitute(":names and :name", &replacements), "Team and Bob");
    }

    #[test]
    fn test_empty_mapping_is_identity() {
        let message = "Hello :name, you have :count messages";
        assert_eq!(substitute(message, &Replacements::new()), message);
    }

    #[test]
    fn test_unmatched_placeholders_left_intact() {
        let replacements = Replacements::new().with("name", "Bob");
        assert_eq!(
            substitute(":greeting :name", &replacements),
            ":greeting Bob"
        );
    }

    #[test]
    fn test_numeric_values_stringified() {
        let replacements = Replacements::new().with("count", 3);
        assert_eq!(substitute(":count minutes", &replacements), "3 minutes");
    }

    #[test]
    fn test_from_iterator() {
        let replacements: Replacements =
            [("name", "Bob"), ("city", "Lisbon")].into_iter().collect();
        assert_eq!(replacements.len(), 2);
        assert!(replacements.contains_key("city"));
        assert_eq!(
            substitute(":name from :city", &replacements),
            "Bob from Lisbon"
        );
    }

    #[test]
    fn test_capitalize_multibyte() {
        let replacements = Replacements::new().with("name", "édouard");
        assert_eq!(substitute(":Name", &replacements), "Édouard");
    }
}
