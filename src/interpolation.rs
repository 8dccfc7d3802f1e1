//! Placeholder protection for machine translation
//!
//! Template interpolations (`{{name}}`, `%{count}`, ...) must reach the
//! translated output byte-for-byte intact. Before a string is sent to the
//! provider, every interpolation is swapped for a marker token; after
//! translation the markers are swapped back. Markers are what restoration
//! keys on, never the original fragment content, because the provider may
//! reword or reorder everything around them.
//!
//! Marker format: `_ID{index}_` where index is the 1-based position of the
//! fragment in extraction order. Examples: `_ID1_`, `_ID2_`, `_ID3_`.
//! The trailing underscore keeps `_ID1_` from ever matching inside `_ID10_`.

use regex::Regex;

use crate::error::{TranslateError, TranslateResult};

/// Fragments removed from one string, paired with the cleaned text
///
/// Scoped to a single translate-one-string operation; never shared or
/// persisted across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderSet {
    /// Input text with each fragment replaced by its marker
    pub cleaned: String,
    /// Removed fragments, in extraction order
    pub fragments: Vec<String>,
}

/// Marker token for the fragment at the given 1-based index
fn marker(index: usize) -> String {
    format!("_ID{}_", index)
}

/// Extract interpolations from text, leaving marker tokens behind
///
/// Every non-overlapping match of `pattern` is collected as a fragment and
/// replaced with a position-distinguishable marker. Repeated identical
/// fragments get distinct markers so they can be restored independently.
///
/// # Example
///
/// ```ignore
/// let pattern = Regex::new(r"\{\{[^{}]+\}\}")?;
/// let set = extract("Hello {{name}}, you have {{count}} messages", &pattern);
/// assert_eq!(set.cleaned, "Hello _ID1_, you have _ID2_ messages");
/// assert_eq!(set.fragments, vec!["{{name}}", "{{count}}"]);
/// ```
pub fn extract(text: &str, pattern: &Regex) -> PlaceholderSet {
    let mut fragments: Vec<String> = Vec::new();
    let cleaned = pattern
        .replace_all(text, |caps: &regex::Captures<'_>| {
            fragments.push(caps[0].to_string());
            marker(fragments.len())
        })
        .into_owned();

    PlaceholderSet { cleaned, fragments }
}

/// Re-insert extracted fragments into translated text
///
/// Replaces `_ID1_` with the first fragment, `_ID2_` with the second, and so
/// on. Translation may have moved the markers anywhere; only their presence
/// matters. A missing marker means extraction and restoration have come
/// apart and is surfaced as an integrity error.
///
/// # Example
///
/// ```ignore
/// let restored = reinsert("_ID1_, hola", &["{{name}}".to_string()])?;
/// assert_eq!(restored, "{{name}}, hola");
/// ```
pub fn reinsert(text: &str, fragments: &[String]) -> TranslateResult<String> {
    let mut result = text.to_string();

    for (i, fragment) in fragments.iter().enumerate() {
        let token = marker(i + 1);
        if !result.contains(&token) {
            return Err(TranslateError::Integrity(format!(
                "marker {} missing from translated text (expected {} fragments)",
                token,
                fragments.len()
            )));
        }
        result = result.replace(&token, fragment);
    }

    Ok(result)
}
