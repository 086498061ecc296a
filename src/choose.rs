//! Message Segment Selection
//!
//! Laravel-style compound messages pack every plural variant into one
//! string, separated by `|`. Segments may carry an inline condition:
//! `{1}` matches an exact quantity, `[2,*]` a range with `*` as an open
//! bound. When no condition matches, the segment at the language's plural
//! form index is used.
//!
//! # Example
//!
//! ```
//! use lingo::choose;
//!
//! let msg = "{0}none|{1}one apple|[2,*]:count apples";
//! assert_eq!(choose(msg, 0.0, "en"), "none");
//! assert_eq!(choose(msg, 1.0, "en"), "one apple");
//! assert_eq!(choose(msg, 7.0, "en"), ":count apples");
//! ```

use crate::plural::plural_index;
use once_cell::sync::Lazy;
use regex::Regex;

// Dot must match newlines: segment bodies may span lines.
static CONDITION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^[\{\[]([^\[\]\{\}]*)[\}\]](.*)").expect("valid regex"));

static STRIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\{\[][^\[\]\{\}]*[\}\]]").expect("valid regex"));

/// Select the proper translation segment for a quantity.
///
/// Segments with a qualifying inline condition win first (in template
/// order, trimmed). Otherwise the language's plural form index picks a
/// condition-stripped segment, falling back to the first segment when the
/// index is out of range. Never fails: malformed conditions simply do not
/// match.
pub fn choose(message: &str, quantity: f64, lang: &str) -> String {
    let segments: Vec<&str> = message.split('|').collect();

    if let Some(text) = extract(&segments, quantity) {
        return text.trim().to_string();
    }

    let stripped: Vec<&str> = segments.iter().map(|s| strip_condition(s)).collect();
    let index = plural_index(lang, quantity);

    if stripped.len() == 1 || stripped.get(index).is_none_or(|s| s.is_empty()) {
        return stripped[0].to_string();
    }

    stripped[index].to_string()
}

/// Find the first segment whose inline condition qualifies.
fn extract<'a>(segments: &[&'a str], quantity: f64) -> Option<&'a str> {
    segments
        .iter()
        .find_map(|part| extract_segment(part, quantity))
}

/// Get a segment's text if its condition matches the quantity.
fn extract_segment<'a>(part: &'a str, quantity: f64) -> Option<&'a str> {
    let caps = CONDITION_RE.captures(part)?;
    let condition = caps.get(1).map_or("", |m| m.as_str());
    let value = caps.get(2).map_or("", |m| m.as_str());

    if let Some((from, to)) = condition.split_once(',') {
        if to == "*" && quantity >= parse_float_loose(from) {
            return Some(value);
        } else if from == "*" && quantity <= parse_float_loose(to) {
            return Some(value);
        } else if quantity >= parse_float_loose(from) && quantity <= parse_float_loose(to) {
            return Some(value);
        }
    }

    // An unmatched range falls through to the exact comparison; the loose
    // parse of "5,3" is 5, matching the upstream parseFloat behavior.
    if parse_float_loose(condition) == quantity {
        Some(value)
    } else {
        None
    }
}

/// Strip a leading inline condition, leaving the segment text verbatim.
fn strip_condition(part: &str) -> &str {
    match STRIP_RE.find(part) {
        Some(m) => &part[m.end()..],
        None => part,
    }
}

/// JavaScript `parseFloat` semantics: parse the longest numeric prefix,
/// yielding NaN when no prefix parses. NaN compares false everywhere, so
/// malformed conditions never match.
pub(crate) fn parse_float_loose(s: &str) -> f64 {
    let s = s.trim();
    for end in (1..=s.len()).rev() {
        if !s.is_char_boundary(end) {
            continue;
        }
        if let Ok(value) = s[..end].parse::<f64>() {
            return value;
        }
    }
    f64::NAN
}
