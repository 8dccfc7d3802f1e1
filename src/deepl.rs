//! DeepL translation provider
//!
//! Talks to the DeepL API: the target-language catalog is fetched once at
//! initialization and turned into a capability set, then each string is
//! translated through one request with interpolations protected on the way
//! out and restored on the way back.
//!
//! # Authentication
//!
//! The auth key comes from the adapter configuration string (or the
//! `DEEPL_AUTH_KEY` environment variable via `TranslatorConfig::from_env`).
//! Obtain a key from: https://www.deepl.com/pro-api
//!
//! # Rate limiting
//!
//! DeepL throttles with HTTP 429. A rate-limited request is reissued
//! immediately up to a fixed retry budget; there is no backoff schedule
//! beyond the provider's own throttling. Exhausting the budget is terminal.
//!
//! # Example
//!
//! ```ignore
//! use i18n_deepl::{DeepLTranslator, TranslatableItem, TranslationProvider, TranslatorConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TranslatorConfig::from_config_str("your-auth-key,less")?;
//!     let deepl = DeepLTranslator::initialize(config).await?;
//!
//!     let items = vec![TranslatableItem::new("greeting", "Hello {{name}}!")];
//!     let outcomes = deepl.translate_strings(&items, "en", "de").await?;
//!     println!("{}", outcomes[0].translated);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::capabilities::{CapabilitySet, LanguageEntry};
use crate::config::TranslatorConfig;
use crate::error::{TranslateError, TranslateResult};
use crate::interpolation::{extract, reinsert};
use crate::translator::{
    TranslatableItem, TranslationOutcome, TranslationProvider, validate_language,
};

/// DeepL API base URL (free tier)
const DEFAULT_API_URL: &str = "https://api-free.deepl.com/v2";

/// DeepL-backed implementation of `TranslationProvider`
///
/// All state is built by `initialize` and read-only afterwards, so a single
/// instance can serve any number of concurrent translation calls.
pub struct DeepLTranslator {
    config: TranslatorConfig,
    pattern: Regex,
    client: reqwest::Client,
    api_url: String,
    capabilities: CapabilitySet,
}

/// Response body of the translate endpoint
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    text: String,
}

impl DeepLTranslator {
    /// Retries granted to a rate-limited request, on top of the first attempt
    const RETRY_BUDGET: u32 = 5;

    /// Create a provider against the default DeepL endpoint
    ///
    /// Fetches the full target-language catalog before returning; no
    /// translation call is permitted without a capability set.
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - Ready provider with capabilities loaded
    /// * `Err(TranslateError::Config)` - Empty auth key or invalid
    ///   interpolation pattern, detected before any network call
    /// * `Err(TranslateError::CapabilityFetch)` - Catalog retrieval failed
    pub async fn initialize(config: TranslatorConfig) -> TranslateResult<Self> {
        Self::initialize_at(config, DEFAULT_API_URL).await
    }

    /// Create a provider against an explicit API base URL
    ///
    /// For self-hosted proxies and tests. Behaves exactly like `initialize`.
    pub async fn initialize_at(
        config: TranslatorConfig,
        api_url: impl Into<String>,
    ) -> TranslateResult<Self> {
        if config.auth_key.trim().is_empty() {
            return Err(TranslateError::Config(
                "DeepL auth key is empty".to_string(),
            ));
        }

        let pattern = Regex::new(&config.interpolation_pattern).map_err(|e| {
            TranslateError::Config(format!("invalid interpolation pattern: {}", e))
        })?;

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        let api_url = api_url.into();
        let capabilities = fetch_capabilities(&client, &api_url, &config.auth_key).await?;

        Ok(Self {
            config,
            pattern,
            client,
            api_url,
            capabilities,
        })
    }

    /// Translate a single item
    ///
    /// Placeholders are extracted before the request and restored from their
    /// markers afterwards. A 429 response is retried up to the fixed budget;
    /// nothing survives a retry except the decremented counter, so every
    /// attempt re-extracts and reissues the full request. Every other
    /// non-success response fails immediately with status and body attached.
    pub async fn translate_one(
        &self,
        item: &TranslatableItem,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslateResult<TranslationOutcome> {
        validate_language(source_lang)?;
        validate_language(target_lang)?;

        let mut retries_remaining = Self::RETRY_BUDGET;

        loop {
            let placeholders = extract(&item.value, &self.pattern);

            let mut query: Vec<(&str, String)> = vec![
                ("text", placeholders.cleaned.clone()),
                ("source_lang", source_lang.to_uppercase()),
                ("target_lang", target_lang.to_uppercase()),
                ("auth_key", self.config.auth_key.clone()),
            ];
            // Sending formality to a target that rejects the feature fails
            // the whole request, so it is attached only when the catalog
            // says the target accepts it.
            if self.capabilities.supports_formality(target_lang) {
                query.push(("formality", self.config.formality.as_param().to_string()));
            }

            let response = self
                .client
                .get(format!("{}/translate", self.api_url))
                .query(&query)
                .send()
                .await?;
            let status = response.status();

            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                if retries_remaining > 0 {
                    warn!(
                        key = %item.key,
                        retries_remaining,
                        "rate limited by DeepL, reissuing request"
                    );
                    retries_remaining -= 1;
                    continue;
                }
                let body = read_body(response).await;
                return Err(TranslateError::RateLimited {
                    attempts: Self::RETRY_BUDGET + 1,
                    body,
                });
            }

            if !status.is_success() {
                let body = read_body(response).await;
                return Err(TranslateError::Provider {
                    status: status.as_u16(),
                    status_text: status.canonical_reason().unwrap_or("").to_string(),
                    body,
                });
            }

            let parsed: TranslateResponse = response.json().await?;
            let translation = parsed.translations.into_iter().next().ok_or_else(|| {
                TranslateError::Provider {
                    status: status.as_u16(),
                    status_text: status.canonical_reason().unwrap_or("").to_string(),
                    body: "response contained no translations".to_string(),
                }
            })?;

            let restored = reinsert(&translation.text, &placeholders.fragments)?;
            let translated = if self.config.decode_entities {
                html_escape::decode_html_entities(&restored).into_owned()
            } else {
                restored
            };

            if retries_remaining < Self::RETRY_BUDGET {
                debug!(key = %item.key, "translation succeeded after rate-limit retries");
            }

            return Ok(TranslationOutcome {
                key: item.key.clone(),
                value: item.value.clone(),
                translated,
            });
        }
    }
}

/// Fetch the target-language catalog and build the capability set
async fn fetch_capabilities(
    client: &reqwest::Client,
    api_url: &str,
    auth_key: &str,
) -> TranslateResult<CapabilitySet> {
    let response = client
        .get(format!("{}/languages", api_url))
        .query(&[("type", "target"), ("auth_key", auth_key)])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = read_body(response).await;
        return Err(TranslateError::CapabilityFetch {
            status: status.as_u16(),
            body,
        });
    }

    let entries: Vec<LanguageEntry> = response.json().await?;
    debug!(languages = entries.len(), "fetched DeepL target catalog");

    Ok(CapabilitySet::from_entries(&entries))
}

/// Read a response body for diagnostics, never silently dropping it
async fn read_body(response: reqwest::Response) -> String {
    match response.text().await {
        Ok(body) if body.is_empty() => "<empty body>".to_string(),
        Ok(body) => body,
        Err(e) => format!("<failed to read body: {}>", e),
    }
}

impl std::fmt::Debug for DeepLTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeepLTranslator")
            .field("auth_key", &"***")
            .field("api_url", &self.api_url)
            .field("formality", &self.config.formality)
            .finish()
    }
}

#[async_trait]
impl TranslationProvider for DeepLTranslator {
    fn supports_language(&self, code: &str) -> bool {
        self.capabilities.supports_language(code)
    }

    fn supports_formality(&self, code: &str) -> bool {
        self.capabilities.supports_formality(code)
    }

    async fn translate_strings(
        &self,
        items: &[TranslatableItem],
        source_lang: &str,
        target_lang: &str,
    ) -> TranslateResult<Vec<TranslationOutcome>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        // All items in flight at once; the join keeps input order and fails
        // the whole batch on the first terminal item failure.
        let calls = items
            .iter()
            .map(|item| self.translate_one(item, source_lang, target_lang));
        futures::future::try_join_all(calls).await
    }

    fn provider_name(&self) -> &str {
        "DeepL"
    }
}
