use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::media_type::MediaType;
use crate::metadata::MediaMetadata;

/// A candidate match produced during scraping.
///
/// Carries the provider that produced it, the provider-scoped external id, a
/// confidence score in `[0, 1]`, an auxiliary string map for fields that do
/// not merit their own slot, and optionally the full metadata record once a
/// provider has been asked to resolve the candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaSearchResult {
    pub provider_id: String,
    pub id: String,
    pub title: String,
    pub year: Option<u16>,
    pub media_type: Option<MediaType>,
    pub score: f32,
    pub extra: HashMap<String, String>,
    metadata: Option<MediaMetadata>,
}

impl MediaSearchResult {
    pub fn new(
        provider_id: impl Into<String>,
        id: impl Into<String>,
        title: impl Into<String>,
        year: Option<u16>,
        score: f32,
    ) -> Self {
        Self {
            provider_id: provider_id.into(),
            id: id.into(),
            title: title.into(),
            year,
            media_type: None,
            score,
            extra: HashMap::new(),
            metadata: None,
        }
    }

    /// Whether this candidate carries a resolved metadata record.
    pub fn has_metadata(&self) -> bool {
        self.metadata.is_some()
    }

    pub fn metadata(&self) -> Option<&MediaMetadata> {
        self.metadata.as_ref()
    }

    pub fn set_metadata(&mut self, metadata: MediaMetadata) {
        self.metadata = Some(metadata);
    }
}
