//! DeepL machine translation adapter for localization pipelines
//!
//! This crate lets a localization pipeline delegate string translation to
//! DeepL while keeping embedded template interpolations byte-for-byte
//! intact, respecting DeepL's per-language capability differences, and
//! absorbing its rate limiting with a bounded retry budget.
//!
//! # Overview
//!
//! The adapter is built from a few small pieces working together:
//!
//! 1. **Interpolation protection** - swaps `{{name}}`-style fragments for
//!    marker tokens before the provider sees the text, and swaps them back
//!    afterwards, so translation can reword and reorder freely around them
//! 2. **Capability registry** - built once from DeepL's target-language
//!    catalog; answers which languages are valid targets and which accept
//!    the formality register
//! 3. **Request executor** - one provider call per string, with bounded
//!    retry on HTTP 429 and immediate failure on anything else
//! 4. **Batch coordinator** - fans a list of items out concurrently and
//!    joins them back in input order, all-or-nothing
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
//!     let items = vec![
//!         TranslatableItem::new("greeting", "Hello {{name}}!"),
//!         TranslatableItem::new("farewell", "Bye"),
//!     ];
//!     let outcomes = deepl.translate_strings(&items, "en", "de").await?;
//!     println!("{}", outcomes[0].translated); // "Hallo {{name}}!"
//!     Ok(())
//! }
//! ```

pub mod capabilities;
pub mod config;
pub mod deepl;
pub mod error;
pub mod interpolation;
pub mod mock;
pub mod translator;

pub use capabilities::{CapabilitySet, LanguageEntry};
pub use config::{DEFAULT_INTERPOLATION_PATTERN, Formality, TranslatorConfig};
pub use deepl::DeepLTranslator;
pub use error::{TranslateError, TranslateResult};
pub use interpolation::{PlaceholderSet, extract, reinsert};
pub use mock::{MockMode, MockTranslator};
pub use translator::{
    TranslatableItem, TranslationOutcome, TranslationProvider, normalize_language,
    validate_language,
};
