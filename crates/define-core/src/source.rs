use crate::result::LookupResult;

/// Live dictionary client produced by a provider
#[async_trait::async_trait]
pub trait Source: Send + Sync {
    /// Display name of the source
    fn name(&self) -> &str;

    /// Look up a single word
    async fn define(&self, word: &str) -> Result<LookupResult, SourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("no results found for {word:?}")]
    EmptyResult { word: String },

    #[error("unexpected response status code {0}")]
    UnexpectedStatus(u16),

    #[error("unexpected response content type {0:?}")]
    UnexpectedContentType(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
