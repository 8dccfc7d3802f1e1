//! Adapter configuration
//!
//! A `TranslatorConfig` is built once, before any translation call, and is
//! read-only afterwards. The canonical input is a single configuration
//! string of the form `secret[,formality]`, the format localization
//! pipelines pass provider credentials around in.

use crate::error::{TranslateError, TranslateResult};

/// Default pattern matching `{{name}}`-style template interpolations
pub const DEFAULT_INTERPOLATION_PATTERN: &str = r"\{\{[^{}]+\}\}";

/// Formality register requested from the provider, where supported
///
/// DeepL only honors this parameter for a subset of target languages;
/// the provider adapter omits it for targets that would reject it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Formality {
    #[default]
    Default,
    Less,
    More,
}

impl Formality {
    /// Parse a formality value from the configuration string
    ///
    /// Anything other than `less` or `more` falls back to `Default`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "less" => Formality::Less,
            "more" => Formality::More,
            _ => Formality::Default,
        }
    }

    /// Wire value sent as the `formality` query parameter
    pub fn as_param(&self) -> &'static str {
        match self {
            Formality::Default => "default",
            Formality::Less => "less",
            Formality::More => "more",
        }
    }
}

/// Immutable provider configuration
///
/// # Example
///
/// ```ignore
/// let config = TranslatorConfig::from_config_str("my-auth-key,less")?
///     .with_decode_entities(true);
/// ```
#[derive(Clone)]
pub struct TranslatorConfig {
    /// Provider credential (opaque secret)
    pub auth_key: String,
    /// Formality register to request where the target supports it
    pub formality: Formality,
    /// Regex source matching the interpolations to protect
    pub interpolation_pattern: String,
    /// Decode HTML entities in translated output
    pub decode_entities: bool,
}

impl TranslatorConfig {
    /// Create a configuration with default formality and pattern
    pub fn new(auth_key: impl Into<String>) -> Self {
        Self {
            auth_key: auth_key.into(),
            formality: Formality::Default,
            interpolation_pattern: DEFAULT_INTERPOLATION_PATTERN.to_string(),
            decode_entities: false,
        }
    }

    /// Parse a `secret[,formality]` configuration string
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - Parsed configuration
    /// * `Err(TranslateError::Config)` - If the secret part is empty
    pub fn from_config_str(raw: &str) -> TranslateResult<Self> {
        let mut parts = raw.splitn(2, ',');
        let auth_key = parts.next().unwrap_or("").trim();
        if auth_key.is_empty() {
            return Err(TranslateError::Config(
                "configuration string is missing the auth key".to_string(),
            ));
        }

        let formality = parts.next().map(Formality::parse).unwrap_or_default();
        Ok(Self::new(auth_key).with_formality(formality))
    }

    /// Load the configuration string from the `DEEPL_AUTH_KEY` environment variable
    pub fn from_env() -> TranslateResult<Self> {
        let raw = std::env::var("DEEPL_AUTH_KEY").map_err(|_| {
            TranslateError::Config("DEEPL_AUTH_KEY environment variable not set".to_string())
        })?;
        Self::from_config_str(&raw)
    }

    /// Set the formality register
    pub fn with_formality(mut self, formality: Formality) -> Self {
        self.formality = formality;
        self
    }

    /// Override the interpolation pattern (a regex source string)
    pub fn with_interpolation_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.interpolation_pattern = pattern.into();
        self
    }

    /// Enable or disable HTML entity decoding of translated output
    pub fn with_decode_entities(mut self, decode: bool) -> Self {
        self.decode_entities = decode;
        self
    }
}

impl std::fmt::Debug for TranslatorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslatorConfig")
            .field("auth_key", &"***")
            .field("formality", &self.formality)
            .field("interpolation_pattern", &self.interpolation_pattern)
            .field("decode_entities", &self.decode_entities)
            .finish()
    }
}
