use std::collections::HashMap;
use std::fmt::Display;
use std::fmt::Formatter;

use serde::{Deserialize, Serialize};

use crate::media_type::MediaType;

/// Enumerated fields of a [`SearchQuery`].
///
/// The list is declarative: iteration goes through [`QueryField::ALL`] and
/// per-field behavior hangs off [`QueryField::copyable`] rather than
/// name-based exclusions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryField {
    /// Free-text query sentinel. Never copied into result extras.
    Query,
    RawTitle,
    CleanTitle,
    Year,
    Season,
    Episode,
    EpisodeTitle,
    MetadataId,
}

impl QueryField {
    /// Every query field, in declaration order.
    pub const ALL: &'static [QueryField] = &[
        QueryField::Query,
        QueryField::RawTitle,
        QueryField::CleanTitle,
        QueryField::Year,
        QueryField::Season,
        QueryField::Episode,
        QueryField::EpisodeTitle,
        QueryField::MetadataId,
    ];

    /// Canonical name, used as the key when a field lands in a search
    /// result's extra map.
    pub fn as_str(self) -> &'static str {
        match self {
            QueryField::Query => "QUERY",
            QueryField::RawTitle => "RAW_TITLE",
            QueryField::CleanTitle => "CLEAN_TITLE",
            QueryField::Year => "YEAR",
            QueryField::Season => "SEASON",
            QueryField::Episode => "EPISODE",
            QueryField::EpisodeTitle => "EPISODE_TITLE",
            QueryField::MetadataId => "METADATA_ID",
        }
    }

    /// Whether this field may be copied into a search result's extras.
    pub fn copyable(self) -> bool {
        !matches!(self, QueryField::Query)
    }
}

impl Display for QueryField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A search input for a metadata provider: string-valued fields plus the
/// media type being searched for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    media_type: MediaType,
    fields: HashMap<QueryField, String>,
}

impl SearchQuery {
    pub fn new(media_type: MediaType) -> Self {
        Self {
            media_type,
            fields: HashMap::new(),
        }
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub fn set(&mut self, field: QueryField, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }

    pub fn get(&self, field: QueryField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }
}
