//! Translation provider trait and shared item types
//!
//! The `TranslationProvider` trait is the seam between the localization
//! pipeline and a concrete machine-translation backend (DeepL, mock, ...).
//! All methods that touch the network are async; capability queries are
//! synchronous reads against state built at initialization.

use async_trait::async_trait;

use crate::error::{TranslateError, TranslateResult};

/// One translatable localization entry
///
/// Identity is the key; the value is never mutated in place. Translation
/// produces new `TranslationOutcome` objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatableItem {
    pub key: String,
    pub value: String,
}

impl TranslatableItem {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Result of translating one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationOutcome {
    /// Key of the source item, unchanged
    pub key: String,
    /// Original value, unchanged
    pub value: String,
    /// Translated value with placeholders restored
    pub translated: String,
}

/// Generic trait for machine translation providers
///
/// Implementations own whatever session state translation needs (credential,
/// capability sets, HTTP client), built once by an inherent constructor and
/// read-only afterwards.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Is `code` a valid translation target for this provider?
    fn supports_language(&self, code: &str) -> bool;

    /// May the formality register be requested when translating into `code`?
    fn supports_formality(&self, code: &str) -> bool;

    /// Translate a list of items concurrently
    ///
    /// # Guarantees
    ///
    /// - Output order matches input order, regardless of completion order
    /// - Output length equals input length
    /// - Any item failing terminally fails the whole batch; no partial
    ///   results are returned. Callers needing per-item tolerance wrap
    ///   items individually.
    async fn translate_strings(
        &self,
        items: &[TranslatableItem],
        source_lang: &str,
        target_lang: &str,
    ) -> TranslateResult<Vec<TranslationOutcome>>;

    /// Name of this provider, for logging and diagnostics
    fn provider_name(&self) -> &str;
}

/// Normalize a language code to its lowercase base segment
///
/// - `EN-US` -> `en`
/// - `pt-BR` -> `pt`
/// - `de` -> `de`
pub fn normalize_language(code: &str) -> String {
    code.split('-').next().unwrap_or(code).to_lowercase()
}

/// Validate that a language code is plausibly well-formed
///
/// Rejects empty codes and anything outside alphanumerics, `-` and `_`.
/// Runs before any network call so garbage never reaches the wire.
pub fn validate_language(code: &str) -> TranslateResult<()> {
    if code.is_empty() {
        return Err(TranslateError::Config(
            "language code is empty".to_string(),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(TranslateError::Config(format!(
            "invalid characters in language code: {}",
            code
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Item Type Tests ==========

    #[test]
    fn test_translatable_item_new() {
        let item = TranslatableItem::new("greeting", "Hello {{name}}");
        assert_eq!(item.key, "greeting");
        assert_eq!(item.value, "Hello {{name}}");
    }

    #[test]
    fn test_outcome_keeps_original_value() {
        let outcome = TranslationOutcome {
            key: "greeting".to_string(),
            value: "Hello".to_string(),
            translated: "Hola".to_string(),
        };
        assert_eq!(outcome.value, "Hello");
        assert_eq!(outcome.translated, "Hola");
    }

    // ========== Normalization Tests ==========

    #[test]
    fn test_normalize_language_with_region() {
        assert_eq!(normalize_language("EN-US"), "en");
        assert_eq!(normalize_language("pt-BR"), "pt");
        assert_eq!(normalize_language("en-GB"), "en");
    }

    #[test]
    fn test_normalize_language_already_plain() {
        assert_eq!(normalize_language("de"), "de");
        assert_eq!(normalize_language("JA"), "ja");
    }

    // ========== Validation Tests ==========

    #[test]
    fn test_validate_language_accepts_common_codes() {
        assert!(validate_language("en").is_ok());
        assert!(validate_language("EN-US").is_ok());
        assert!(validate_language("pt_BR").is_ok());
    }

    #[test]
    fn test_validate_language_rejects_empty() {
        assert!(validate_language("").is_err());
    }

    #[test]
    fn test_validate_language_rejects_garbage() {
        assert!(validate_language("en@US").is_err());
        assert!(validate_language("fr#bad").is_err());
        assert!(validate_language("es error").is_err());
    }
}
