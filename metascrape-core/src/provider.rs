use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use metascrape_model::{MediaMetadata, MediaSearchResult, SearchQuery};

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Not found")]
    NotFound,

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Identity of a metadata provider, as reported by the provider itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Stable provider id, used as `MediaSearchResult::provider_id`.
    pub id: String,
    /// Human-readable provider name.
    pub name: String,
}

impl ProviderInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Get the provider's identity
    fn info(&self) -> ProviderInfo;

    /// Search for media matching the query
    async fn search(&self, query: &SearchQuery)
    -> Result<Vec<MediaSearchResult>, ProviderError>;

    /// Resolve full metadata for a specific candidate result
    async fn get_metadata(
        &self,
        result: &MediaSearchResult,
    ) -> Result<MediaMetadata, ProviderError>;
}
