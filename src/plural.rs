//! Pluralization Rules
//!
//! Maps a language tag and a quantity to a plural form index. Different
//! languages have different numbers of plural forms - English has 2,
//! Russian has 3 and Arabic has 6. The index selects a segment of a
//! pipe-delimited message when no inline condition matched.
//!
//! The rule table is derived from the Zend Framework plural rules
//! (2010-09-25), new BSD license, Copyright (c) 2005-2010 Zend
//! Technologies USA Inc.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A plural rule family.
///
/// Each variant carries the arithmetic predicate for one group of
/// languages; many tag aliases share a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralRule {
    /// 1 is singular, everything else plural (English, German, Spanish, ...)
    TwoForms,
    /// 0 and 1 are singular (French, Hindi, Armenian, ...)
    TwoFormsZeroOne,
    /// Russian-style three forms (also Ukrainian, Serbian, Croatian, ...)
    Slavic,
    /// Czech and Slovak three forms
    CzechSlovak,
    /// Irish and Scottish Gaelic three forms
    Gaelic,
    /// Lithuanian three forms
    Lithuanian,
    /// Slovenian four forms
    Slovenian,
    /// Macedonian two forms keyed on the final digit
    Macedonian,
    /// Maltese four forms
    Maltese,
    /// Latvian three forms with a dedicated zero form
    Latvian,
    /// Polish three forms
    Polish,
    /// Welsh four forms
    Welsh,
    /// Romanian three forms
    Romanian,
    /// Arabic six forms
    Arabic,
}

impl PluralRule {
    /// Get the 0-based plural form index for a quantity.
    ///
    /// The arithmetic intentionally runs on `f64` so fractional, negative
    /// and non-finite quantities flow through the same comparisons the
    /// integer cases use (a NaN quantity fails every equality and lands on
    /// the final index of its family).
    pub fn index(self, n: f64) -> usize {
        match self {
            Self::TwoForms => {
                if n == 1.0 { 0 } else { 1 }
            }
            Self::TwoFormsZeroOne => {
                if n == 0.0 || n == 1.0 { 0 } else { 1 }
            }
            Self::Slavic => {
                if n % 10.0 == 1.0 && n % 100.0 != 11.0 {
                    0
                } else if n % 10.0 >= 2.0 && n % 10.0 <= 4.0 && (n % 100.0 < 10.0 || n % 100.0 >= 20.0) {
                    1
                } else {
                    2
                }
            }
            Self::CzechSlovak => {
                if n == 1.0 {
                    0
                } else if n >= 2.0 && n <= 4.0 {
                    1
                } else {
                    2
                }
            }
            Self::Gaelic => {
                if n == 1.0 {
                    0
                } else if n == 2.0 {
                    1
                } else {
                    2
                }
            }
            Self::Lithuanian => {
                if n % 10.0 == 1.0 && n % 100.0 != 11.0 {
                    0
                } else if n % 10.0 >= 2.0 && (n % 100.0 < 10.0 || n % 100.0 >= 20.0) {
                    1
                } else {
                    2
                }
            }
            Self::Slovenian => {
                if n % 100.0 == 1.0 {
                    0
                } else if n % 100.0 == 2.0 {
                    1
                } else if n % 100.0 == 3.0 || n % 100.0 == 4.0 {
                    2
                } else {
                    3
                }
            }
            Self::Macedonian => {
                if n % 10.0 == 1.0 { 0 } else { 1 }
            }
            Self::Maltese => {
                if n == 1.0 {
                    0
                } else if n == 0.0 || (n % 100.0 > 1.0 && n % 100.0 < 11.0) {
                    1
                } else if n % 100.0 > 10.0 && n % 100.0 < 20.0 {
                    2
                } else {
                    3
                }
            }
            Self::Latvian => {
                if n == 0.0 {
                    0
                } else if n % 10.0 == 1.0 && n % 100.0 != 11.0 {
                    1
                } else {
                    2
                }
            }
            Self::Polish => {
                if n == 1.0 {
                    0
                } else if n % 10.0 >= 2.0 && n % 10.0 <= 4.0 && (n % 100.0 < 12.0 || n % 100.0 > 14.0) {
                    1
                } else {
                    2
                }
            }
            Self::Welsh => {
                if n == 1.0 {
                    0
                } else if n == 2.0 {
                    1
                } else if n == 8.0 || n == 11.0 {
                    2
                } else {
                    3
                }
            }
            Self::Romanian => {
                if n == 1.0 {
                    0
                } else if n == 0.0 || (n % 100.0 > 0.0 && n % 100.0 < 20.0) {
                    1
                } else {
                    2
                }
            }
            Self::Arabic => {
                if n == 0.0 {
                    0
                } else if n == 1.0 {
                    1
                } else if n == 2.0 {
                    2
                } else if n % 100.0 >= 3.0 && n % 100.0 <= 10.0 {
                    3
                } else if n % 100.0 >= 11.0 && n % 100.0 <= 99.0 {
                    4
                } else {
                    5
                }
            }
        }
    }
}

// ============================================================================
// Tag alias table
// ============================================================================

const TWO_FORM_TAGS: &[&str] = &[
    "af", "af-ZA", "bn", "bn-BD", "bn-IN", "bg", "bg-BG", "ca", "ca-AD", "ca-ES", "ca-FR",
    "ca-IT", "da", "da-DK", "de", "de-AT", "de-BE", "de-CH", "de-DE", "de-LI", "de-LU", "el",
    "el-CY", "el-GR", "en", "en-AG", "en-AU", "en-BW", "en-CA", "en-DK", "en-GB", "en-HK",
    "en-IE", "en-IN", "en-NG", "en-NZ", "en-PH", "en-SG", "en-US", "en-ZA", "en-ZM", "en-ZW",
    "eo", "eo-US", "es", "es-AR", "es-BO", "es-CL", "es-CO", "es-CR", "es-CU", "es-DO",
    "es-EC", "es-ES", "es-GT", "es-HN", "es-MX", "es-NI", "es-PA", "es-PE", "es-PR", "es-PY",
    "es-SV", "es-US", "es-UY", "es-VE", "et", "et-EE", "eu", "eu-ES", "eu-FR", "fa", "fa-IR",
    "fi", "fi-FI", "fo", "fo-FO", "fur", "fur-IT", "fy", "fy-DE", "fy-NL", "gl", "gl-ES",
    "gu", "gu-IN", "ha", "ha-NG", "he", "he-IL", "hu", "hu-HU", "is", "is-IS", "it", "it-CH",
    "it-IT", "ku", "ku-TR", "lb", "lb-LU", "ml", "ml-IN", "mn", "mn-MN", "mr", "mr-IN",
    "nah", "nb", "nb-NO", "ne", "ne-NP", "nl", "nl-AW", "nl-BE", "nl-NL", "nn", "nn-NO",
    "no", "om", "om-ET", "om-KE", "or", "or-IN", "pa", "pa-IN", "pa-PK", "pap", "pap-AN",
    "pap-AW", "pap-CW", "ps", "ps-AF", "pt", "pt-BR", "pt-PT", "so", "so-DJ", "so-ET",
    "so-KE", "so-SO", "sq", "sq-AL", "sq-MK", "sv", "sv-FI", "sv-SE", "sw", "sw-KE", "sw-TZ",
    "ta", "ta-IN", "ta-LK", "te", "te-IN", "tk", "tk-TM", "ur", "ur-IN", "ur-PK", "zu",
    "zu-ZA",
];

const ZERO_ONE_TAGS: &[&str] = &[
    "am", "am-ET", "bh", "fil", "fil-PH", "fr", "fr-BE", "fr-CA", "fr-CH", "fr-FR", "fr-LU",
    "gun", "hi", "hi-IN", "hy", "hy-AM", "ln", "ln-CD", "mg", "mg-MG", "nso", "nso-ZA", "ti",
    "ti-ER", "ti-ET", "wa", "wa-BE", "xbr",
];

const SLAVIC_TAGS: &[&str] = &[
    "be", "be-BY", "bs", "bs-BA", "hr", "hr-HR", "ru", "ru-RU", "ru-UA", "sr", "sr-ME",
    "sr-RS", "uk", "uk-UA",
];

const CZECH_SLOVAK_TAGS: &[&str] = &["cs", "cs-CZ", "sk", "sk-SK"];

const GAELIC_TAGS: &[&str] = &["ga", "ga-IE"];

const LITHUANIAN_TAGS: &[&str] = &["lt", "lt-LT"];

const SLOVENIAN_TAGS: &[&str] = &["sl", "sl-SI"];

const MACEDONIAN_TAGS: &[&str] = &["mk", "mk-MK"];

const MALTESE_TAGS: &[&str] = &["mt", "mt-MT"];

const LATVIAN_TAGS: &[&str] = &["lv", "lv-LV"];

const POLISH_TAGS: &[&str] = &["pl", "pl-PL"];

const WELSH_TAGS: &[&str] = &["cy", "cy-GB"];

const ROMANIAN_TAGS: &[&str] = &["ro", "ro-RO"];

const ARABIC_TAGS: &[&str] = &[
    "ar", "ar-AE", "ar-BH", "ar-DZ", "ar-EG", "ar-IN", "ar-IQ", "ar-JO", "ar-KW", "ar-LB",
    "ar-LY", "ar-MA", "ar-OM", "ar-QA", "ar-SA", "ar-SD", "ar-SS", "ar-SY", "ar-TN", "ar-YE",
];

const RULE_GROUPS: &[(&[&str], PluralRule)] = &[
    (TWO_FORM_TAGS, PluralRule::TwoForms),
    (ZERO_ONE_TAGS, PluralRule::TwoFormsZeroOne),
    (SLAVIC_TAGS, PluralRule::Slavic),
    (CZECH_SLOVAK_TAGS, PluralRule::CzechSlovak),
    (GAELIC_TAGS, PluralRule::Gaelic),
    (LITHUANIAN_TAGS, PluralRule::Lithuanian),
    (SLOVENIAN_TAGS, PluralRule::Slovenian),
    (MACEDONIAN_TAGS, PluralRule::Macedonian),
    (MALTESE_TAGS, PluralRule::Maltese),
    (LATVIAN_TAGS, PluralRule::Latvian),
    (POLISH_TAGS, PluralRule::Polish),
    (WELSH_TAGS, PluralRule::Welsh),
    (ROMANIAN_TAGS, PluralRule::Romanian),
    (ARABIC_TAGS, PluralRule::Arabic),
];

static RULES: Lazy<HashMap<&'static str, PluralRule>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for &(tags, rule) in RULE_GROUPS {
        for &tag in tags {
            table.insert(tag, rule);
        }
    }
    table
});

/// Look up the plural rule for a language tag.
///
/// Underscores are normalized to hyphens before lookup. Returns `None`
/// for unlisted tags.
pub fn rule_for(lang: &str) -> Option<PluralRule> {
    if lang.contains('_') {
        RULES.get(lang.replace('_', "-").as_str()).copied()
    } else {
        RULES.get(lang).copied()
    }
}

/// Get the plural form index for a quantity in a language.
///
/// Total over all inputs: unlisted or malformed tags yield index 0, which
/// degenerates to "always the first segment".
///
/// # Example
///
/// ```
/// use lingo::plural_index;
///
/// assert_eq!(plural_index("en", 1.0), 0);
/// assert_eq!(plural_index("en", 2.0), 1);
/// assert_eq!(plural_index("ru", 3.0), 1);
/// assert_eq!(plural_index("xx-unknown", 5.0), 0);
/// ```
pub fn plural_index(lang: &str, quantity: f64) -> usize {
    match rule_for(lang) {
        Some(rule) => rule.index(quantity),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_two_forms() {
        assert_eq!(plural_index("en", 1.0), 0);
        assert_eq!(plural_index("en", 0.0), 1);
        assert_eq!(plural_index("en", 2.0), 1);
        assert_eq!(plural_index("en-GB", 1.0), 0);
        assert_eq!(plural_index("pt-BR", 2.0), 1);
    }

    #[test]
    fn test_french_zero_inclusive() {
        assert_eq!(plural_index("fr", 0.0), 0);
        assert_eq!(plural_index("fr", 1.0), 0);
        assert_eq!(plural_index("fr", 2.0), 1);
        assert_eq!(plural_index("hy-AM", 0.0), 0);
    }

    #[test]
    fn test_slavic_three_forms() {
        for lang in ["ru", "uk", "be", "sr", "hr", "bs"] {
            assert_eq!(plural_index(lang, 1.0), 0, "{lang} n=1");
            assert_eq!(plural_index(lang, 21.0), 0, "{lang} n=21");
            assert_eq!(plural_index(lang, 3.0), 1, "{lang} n=3");
            assert_eq!(plural_index(lang, 22.0), 1, "{lang} n=22");
            assert_eq!(plural_index(lang, 0.0), 2, "{lang} n=0");
            assert_eq!(plural_index(lang, 5.0), 2, "{lang} n=5");
            assert_eq!(plural_index(lang, 11.0), 2, "{lang} n=11");
            assert_eq!(plural_index(lang, 12.0), 2, "{lang} n=12");
        }
    }

    #[test]
    fn test_czech_slovak() {
        assert_eq!(plural_index("cs", 1.0), 0);
        assert_eq!(plural_index("cs", 3.0), 1);
        assert_eq!(plural_index("sk", 5.0), 2);
        assert_eq!(plural_index("sk-SK", 0.0), 2);
    }

    #[test]
    fn test_gaelic() {
        assert_eq!(plural_index("ga", 1.0), 0);
        assert_eq!(plural_index("ga", 2.0), 1);
        assert_eq!(plural_index("ga-IE", 7.0), 2);
    }

    #[test]
    fn test_lithuanian() {
        assert_eq!(plural_index("lt", 1.0), 0);
        assert_eq!(plural_index("lt", 11.0), 2);
        assert_eq!(plural_index("lt", 2.0), 1);
        assert_eq!(plural_index("lt", 9.0), 1);
        assert_eq!(plural_index("lt", 10.0), 2);
        assert_eq!(plural_index("lt", 22.0), 1);
    }

    #[test]
    fn test_slovenian() {
        assert_eq!(plural_index("sl", 1.0), 0);
        assert_eq!(plural_index("sl", 101.0), 0);
        assert_eq!(plural_index("sl", 2.0), 1);
        assert_eq!(plural_index("sl", 3.0), 2);
        assert_eq!(plural_index("sl", 4.0), 2);
        assert_eq!(plural_index("sl", 5.0), 3);
    }

    #[test]
    fn test_macedonian() {
        assert_eq!(plural_index("mk", 1.0), 0);
        assert_eq!(plural_index("mk", 11.0), 0);
        assert_eq!(plural_index("mk", 2.0), 1);
    }

    #[test]
    fn test_maltese() {
        assert_eq!(plural_index("mt", 1.0), 0);
        assert_eq!(plural_index("mt", 0.0), 1);
        assert_eq!(plural_index("mt", 2.0), 1);
        assert_eq!(plural_index("mt", 10.0), 1);
        assert_eq!(plural_index("mt", 11.0), 2);
        assert_eq!(plural_index("mt", 19.0), 2);
        assert_eq!(plural_index("mt", 20.0), 3);
        assert_eq!(plural_index("mt", 101.0), 3);
    }

    #[test]
    fn test_latvian() {
        assert_eq!(plural_index("lv", 0.0), 0);
        assert_eq!(plural_index("lv", 1.0), 1);
        assert_eq!(plural_index("lv", 21.0), 1);
        assert_eq!(plural_index("lv", 11.0), 2);
        assert_eq!(plural_index("lv", 5.0), 2);
    }

    #[test]
    fn test_polish() {
        assert_eq!(plural_index("pl", 1.0), 0);
        assert_eq!(plural_index("pl", 2.0), 1);
        assert_eq!(plural_index("pl", 22.0), 1);
        assert_eq!(plural_index("pl", 12.0), 2);
        assert_eq!(plural_index("pl", 5.0), 2);
        assert_eq!(plural_index("pl", 0.0), 2);
    }

    #[test]
    fn test_welsh() {
        assert_eq!(plural_index("cy", 1.0), 0);
        assert_eq!(plural_index("cy", 2.0), 1);
        assert_eq!(plural_index("cy", 8.0), 2);
        assert_eq!(plural_index("cy", 11.0), 2);
        assert_eq!(plural_index("cy", 3.0), 3);
    }

    #[test]
    fn test_romanian() {
        assert_eq!(plural_index("ro", 1.0), 0);
        assert_eq!(plural_index("ro", 0.0), 1);
        assert_eq!(plural_index("ro", 19.0), 1);
        assert_eq!(plural_index("ro", 119.0), 1);
        assert_eq!(plural_index("ro", 20.0), 2);
        assert_eq!(plural_index("ro", 100.0), 2);
    }

    #[test]
    fn test_arabic() {
        assert_eq!(plural_index("ar", 0.0), 0);
        assert_eq!(plural_index("ar", 1.0), 1);
        assert_eq!(plural_index("ar", 2.0), 2);
        assert_eq!(plural_index("ar", 5.0), 3);
        assert_eq!(plural_index("ar", 103.0), 3);
        assert_eq!(plural_index("ar", 11.0), 4);
        assert_eq!(plural_index("ar", 99.0), 4);
        assert_eq!(plural_index("ar", 100.0), 5);
        assert_eq!(plural_index("ar-EG", 200.0), 5);
    }

    #[test]
    fn test_unknown_language_defaults_to_zero() {
        assert_eq!(plural_index("xx-unknown", 5.0), 0);
        assert_eq!(plural_index("xx-unknown", 1.0), 0);
        assert_eq!(plural_index("", 3.0), 0);
    }

    #[test]
    fn test_underscore_normalization() {
        assert_eq!(plural_index("pt_BR", 1.0), 0);
        assert_eq!(plural_index("ru_RU", 3.0), 1);
        assert_eq!(rule_for("ar_EG"), Some(PluralRule::Arabic));
    }

    // Negative and non-finite quantities fall through the arithmetic with
    // no special-casing; these pin the natural outcomes.
    #[test]
    fn test_negative_quantities() {
        assert_eq!(plural_index("en", -1.0), 1);
        // -1 % 10 == -1 in both JS and Rust, so the Slavic "ends in 1"
        // branch does not fire
        assert_eq!(plural_index("ru", -1.0), 2);
        assert_eq!(plural_index("fr", -0.0), 0);
    }

    #[test]
    fn test_non_finite_quantities() {
        assert_eq!(plural_index("en", f64::NAN), 1);
        assert_eq!(plural_index("ru", f64::NAN), 2);
        assert_eq!(plural_index("ar", f64::NAN), 5);
        assert_eq!(plural_index("en", f64::INFINITY), 1);
    }

    #[test]
    fn test_fractional_quantities() {
        assert_eq!(plural_index("en", 1.5), 1);
        assert_eq!(plural_index("ru", 1.5), 2);
        assert_eq!(plural_index("fr", 0.5), 1);
    }
}
