use thiserror::Error;

/// Error types for the translation adapter
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Missing or invalid configuration, caught before any network call
    #[error("configuration error: {0}")]
    Config(String),

    /// The provider's language catalog could not be retrieved
    #[error("language catalog fetch failed ({status}): {body}")]
    CapabilityFetch { status: u16, body: String },

    /// Rate limited on every attempt, retry budget spent
    #[error("rate limited by provider after {attempts} attempts (429 Too Many Requests): {body}")]
    RateLimited { attempts: u32, body: String },

    /// Any other non-success provider response, never retried
    #[error("provider error {status} {status_text}: {body}")]
    Provider {
        status: u16,
        status_text: String,
        body: String,
    },

    /// Transport-level failure (connection, timeout, malformed payload)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A marker expected during placeholder restoration was not found
    #[error("placeholder integrity error: {0}")]
    Integrity(String),
}

/// Result type for translation operations
pub type TranslateResult<T> = Result<T, TranslateError>;
