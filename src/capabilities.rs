//! Provider capability registry
//!
//! Built once per session from the provider's language catalog and read-only
//! afterwards. Providers advertise regional variants (`EN-US`) while callers
//! routinely ask for the base code (`EN`), so every catalog code is indexed
//! both in full and truncated to the segment before the region separator.
//! That trades a little memory at build time for O(1) case-insensitive
//! lookups with no per-call string surgery.

use std::collections::HashSet;

use serde::Deserialize;

/// One row of the provider's target-language catalog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageEntry {
    /// Provider's canonical code, e.g. `EN-US`
    pub language: String,
    /// Display name, e.g. `English (American)`
    pub name: String,
    /// Whether the formality register may be requested for this target
    #[serde(default)]
    pub supports_formality: bool,
}

/// Derived language/feature membership sets
///
/// Membership tests are pure once the set is built; nothing mutates it for
/// the rest of the session.
#[derive(Debug, Clone, Default)]
pub struct CapabilitySet {
    translatable: HashSet<String>,
    formality_capable: HashSet<String>,
}

impl CapabilitySet {
    /// Build the capability set from catalog entries
    pub fn from_entries(entries: &[LanguageEntry]) -> Self {
        let mut set = CapabilitySet::default();
        for entry in entries {
            insert_with_base(&mut set.translatable, &entry.language);
            if entry.supports_formality {
                insert_with_base(&mut set.formality_capable, &entry.language);
            }
        }
        set
    }

    /// Is `code` a valid translation target?
    ///
    /// Case-insensitive; both the full regional code and its base segment
    /// hit, because both were indexed at build time.
    pub fn supports_language(&self, code: &str) -> bool {
        self.translatable.contains(&code.to_lowercase())
    }

    /// May the formality register be requested for `code`?
    pub fn supports_formality(&self, code: &str) -> bool {
        self.formality_capable.contains(&code.to_lowercase())
    }
}

/// Index a code lowercased, in full and as its base segment
fn insert_with_base(set: &mut HashSet<String>, code: &str) {
    let full = code.to_lowercase();
    if let Some((base, _)) = full.split_once('-') {
        set.insert(base.to_string());
    }
    set.insert(full);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(language: &str, name: &str, supports_formality: bool) -> LanguageEntry {
        LanguageEntry {
            language: language.to_string(),
            name: name.to_string(),
            supports_formality,
        }
    }

    fn sample_set() -> CapabilitySet {
        CapabilitySet::from_entries(&[
            entry("DE", "German", true),
            entry("EN-US", "English (American)", false),
            entry("PT-BR", "Portuguese (Brazilian)", true),
            entry("JA", "Japanese", false),
        ])
    }

    // ========== Language Lookup Tests ==========

    #[test]
    fn test_regional_code_matches_full_and_base() {
        let set = sample_set();
        assert!(set.supports_language("en-us"));
        assert!(set.supports_language("EN-US"));
        assert!(set.supports_language("en"));
        assert!(set.supports_language("EN"));
    }

    #[test]
    fn test_plain_code_matches() {
        let set = sample_set();
        assert!(set.supports_language("de"));
        assert!(set.supports_language("DE"));
        assert!(set.supports_language("ja"));
    }

    #[test]
    fn test_unknown_code_does_not_match() {
        let set = sample_set();
        assert!(!set.supports_language("fr"));
        assert!(!set.supports_language("en-gb"));
        assert!(!set.supports_language(""));
    }

    // ========== Formality Lookup Tests ==========

    #[test]
    fn test_formality_capable_targets() {
        let set = sample_set();
        assert!(set.supports_formality("de"));
        assert!(set.supports_formality("DE"));
        assert!(set.supports_formality("pt-br"));
        assert!(set.supports_formality("pt"));
    }

    #[test]
    fn test_formality_incapable_targets() {
        let set = sample_set();
        assert!(!set.supports_formality("en-us"));
        assert!(!set.supports_formality("en"));
        assert!(!set.supports_formality("ja"));
        assert!(!set.supports_formality("fr"));
    }

    #[test]
    fn test_empty_catalog_supports_nothing() {
        let set = CapabilitySet::from_entries(&[]);
        assert!(!set.supports_language("en"));
        assert!(!set.supports_formality("de"));
    }

    // ========== Catalog Deserialization Tests ==========

    #[test]
    fn test_language_entry_deserialization() {
        let json = r#"{"language":"EN-US","name":"English (American)","supports_formality":false}"#;
        let parsed: LanguageEntry = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, entry("EN-US", "English (American)", false));
    }

    #[test]
    fn test_language_entry_formality_defaults_to_false() {
        // Some catalog rows omit the flag entirely
        let json = r#"{"language":"JA","name":"Japanese"}"#;
        let parsed: LanguageEntry = serde_json::from_str(json).unwrap();
        assert!(!parsed.supports_formality);
    }
}
