//! Mock translation provider for testing
//!
//! A deterministic, network-free `TranslationProvider` for exercising
//! localization pipelines without credentials or API calls.
//!
//! # Example
//!
//! ```ignore
//! use i18n_deepl::{MockMode, MockTranslator, TranslatableItem, TranslationProvider};
//!
//! #[tokio::test]
//! async fn test_pipeline() {
//!     let mock = MockTranslator::new(MockMode::Suffix);
//!     let items = vec![TranslatableItem::new("hi", "hello")];
//!     let outcomes = mock.translate_strings(&items, "en", "fr").await.unwrap();
//!     assert_eq!(outcomes[0].translated, "hello_fr");
//! }
//! ```

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{TranslateError, TranslateResult};
use crate::translator::{TranslatableItem, TranslationOutcome, TranslationProvider};

/// Mock translation modes for different test scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append the target code: "hello" -> "hello_fr"
    Suffix,

    /// Predefined (value, target) -> translation mappings, suffix fallback
    Mappings(HashMap<(String, String), String>),

    /// Fail every call with a provider-style error
    Error(String),

    /// Return the input unchanged
    NoOp,
}

/// Network-free provider that simulates translation behaviors
///
/// Claims support for every language and no formality targets; tests that
/// need capability negotiation talk to the real provider over a mock server.
#[derive(Debug, Clone)]
pub struct MockTranslator {
    mode: MockMode,
    delay_ms: u64,
}

impl MockTranslator {
    pub fn new(mode: MockMode) -> Self {
        Self { mode, delay_ms: 0 }
    }

    /// Add a simulated per-batch delay, for timing-sensitive tests
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self { mode, delay_ms }
    }

    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    fn apply_translation(&self, value: &str, target: &str) -> TranslateResult<String> {
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", value, target)),
            MockMode::Mappings(map) => {
                let key = (value.to_string(), target.to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", value, target)))
            }
            MockMode::Error(msg) => Err(TranslateError::Provider {
                status: 503,
                status_text: "Service Unavailable".to_string(),
                body: msg.clone(),
            }),
            MockMode::NoOp => Ok(value.to_string()),
        }
    }
}

#[async_trait]
impl TranslationProvider for MockTranslator {
    fn supports_language(&self, _code: &str) -> bool {
        true
    }

    fn supports_formality(&self, _code: &str) -> bool {
        false
    }

    async fn translate_strings(
        &self,
        items: &[TranslatableItem],
        _source_lang: &str,
        target_lang: &str,
    ) -> TranslateResult<Vec<TranslationOutcome>> {
        self.apply_delay().await;

        let target = target_lang.to_lowercase();
        let mut outcomes = Vec::with_capacity(items.len());
        for item in items {
            let translated = self.apply_translation(&item.value, &target)?;
            outcomes.push(TranslationOutcome {
                key: item.key.clone(),
                value: item.value.clone(),
                translated,
            });
        }
        Ok(outcomes)
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[(&str, &str)]) -> Vec<TranslatableItem> {
        values
            .iter()
            .map(|(k, v)| TranslatableItem::new(*k, *v))
            .collect()
    }

    // ========== Suffix Mode Tests ==========

    #[tokio::test]
    async fn test_suffix_mode() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let outcomes = mock
            .translate_strings(&items(&[("hi", "hello")]), "en", "fr")
            .await
            .unwrap();
        assert_eq!(outcomes[0].translated, "hello_fr");
        assert_eq!(outcomes[0].value, "hello");
    }

    #[tokio::test]
    async fn test_suffix_mode_lowercases_target() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let outcomes = mock
            .translate_strings(&items(&[("hi", "hello")]), "en", "FR")
            .await
            .unwrap();
        assert_eq!(outcomes[0].translated, "hello_fr");
    }

    #[tokio::test]
    async fn test_suffix_preserves_order() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let outcomes = mock
            .translate_strings(
                &items(&[("1", "first"), ("2", "second"), ("3", "third")]),
                "en",
                "de",
            )
            .await
            .unwrap();
        let translated: Vec<&str> = outcomes.iter().map(|o| o.translated.as_str()).collect();
        assert_eq!(translated, vec!["first_de", "second_de", "third_de"]);
    }

    // ========== Mappings Mode Tests ==========

    #[tokio::test]
    async fn test_mappings_mode() {
        let mut map = HashMap::new();
        map.insert(
            ("hello".to_string(), "fr".to_string()),
            "bonjour".to_string(),
        );

        let mock = MockTranslator::new(MockMode::Mappings(map));
        let outcomes = mock
            .translate_strings(&items(&[("hi", "hello"), ("other", "unmapped")]), "en", "fr")
            .await
            .unwrap();
        assert_eq!(outcomes[0].translated, "bonjour");
        // Unknown mapping falls back to suffix behavior
        assert_eq!(outcomes[1].translated, "unmapped_fr");
    }

    // ========== Error Mode Tests ==========

    #[tokio::test]
    async fn test_error_mode_fails_the_batch() {
        let mock = MockTranslator::new(MockMode::Error("backend down".to_string()));
        let result = mock
            .translate_strings(&items(&[("hi", "hello")]), "en", "fr")
            .await;
        match result {
            Err(TranslateError::Provider { status, body, .. }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "backend down");
            }
            other => panic!("expected provider error, got {:?}", other.err()),
        }
    }

    // ========== NoOp Mode Tests ==========

    #[tokio::test]
    async fn test_noop_mode() {
        let mock = MockTranslator::new(MockMode::NoOp);
        let outcomes = mock
            .translate_strings(&items(&[("hi", "Hello {{name}}")]), "en", "fr")
            .await
            .unwrap();
        assert_eq!(outcomes[0].translated, "Hello {{name}}");
    }

    // ========== Capability Claims ==========

    #[test]
    fn test_mock_claims_all_languages_and_no_formality() {
        let mock = MockTranslator::new(MockMode::Suffix);
        assert!(mock.supports_language("xx"));
        assert!(!mock.supports_formality("de"));
        assert_eq!(mock.provider_name(), "Mock Translator");
    }

    // ========== Delay Tests ==========

    #[tokio::test]
    async fn test_delay_adds_latency() {
        let mock = MockTranslator::with_delay(MockMode::Suffix, 50);
        let start = std::time::Instant::now();
        let _ = mock
            .translate_strings(&items(&[("hi", "hello")]), "en", "fr")
            .await
            .unwrap();
        assert!(start.elapsed().as_millis() >= 50);
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let outcomes = mock.translate_strings(&[], "en", "fr").await.unwrap();
        assert!(outcomes.is_empty());
    }
}
