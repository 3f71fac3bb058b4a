use std::collections::HashMap;
use std::fmt::Display;
use std::fmt::Formatter;

use serde::{Deserialize, Serialize};

/// Enumerated key space for [`MediaMetadata`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetadataKey {
    MediaTitle,
    OriginalTitle,
    Year,
    ReleaseDate,
    RunningTime,
    Description,
    Genres,
    Rating,
    EpisodeTitle,
    SeasonNumber,
    EpisodeNumber,
}

impl MetadataKey {
    /// Canonical name for the key, stable across serialization boundaries.
    pub fn as_str(self) -> &'static str {
        match self {
            MetadataKey::MediaTitle => "MEDIA_TITLE",
            MetadataKey::OriginalTitle => "ORIGINAL_TITLE",
            MetadataKey::Year => "YEAR",
            MetadataKey::ReleaseDate => "RELEASE_DATE",
            MetadataKey::RunningTime => "RUNNING_TIME",
            MetadataKey::Description => "DESCRIPTION",
            MetadataKey::Genres => "GENRES",
            MetadataKey::Rating => "RATING",
            MetadataKey::EpisodeTitle => "EPISODE_TITLE",
            MetadataKey::SeasonNumber => "SEASON_NUMBER",
            MetadataKey::EpisodeNumber => "EPISODE_NUMBER",
        }
    }
}

impl Display for MetadataKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved media item's attributes, keyed by [`MetadataKey`].
///
/// The record only stores non-empty string values; setting an empty value is
/// equivalent to clearing the key. The `RELEASE_DATE` value, when written
/// through the date utilities, is always in `%Y-%m-%d` form or cleared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaMetadata {
    values: HashMap<MetadataKey, String>,
}

impl MediaMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`. An empty value clears the key instead.
    pub fn set(&mut self, key: MetadataKey, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.values.remove(&key);
        } else {
            self.values.insert(key, value);
        }
    }

    pub fn get(&self, key: MetadataKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    /// Remove any stored value for `key`.
    pub fn clear(&mut self, key: MetadataKey) {
        self.values.remove(&key);
    }

    pub fn media_title(&self) -> Option<&str> {
        self.get(MetadataKey::MediaTitle)
    }

    /// Lenient numeric read of the `YEAR` value.
    pub fn year(&self) -> Option<u16> {
        self.get(MetadataKey::Year).and_then(|y| y.trim().parse().ok())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_clears_key() {
        let mut md = MediaMetadata::new();
        md.set(MetadataKey::MediaTitle, "Heat");
        assert_eq!(md.media_title(), Some("Heat"));

        md.set(MetadataKey::MediaTitle, "");
        assert_eq!(md.media_title(), None);
        assert!(md.is_empty());
    }

    #[test]
    fn year_parses_leniently() {
        let mut md = MediaMetadata::new();
        md.set(MetadataKey::Year, " 1995 ");
        assert_eq!(md.year(), Some(1995));

        md.set(MetadataKey::Year, "not-a-year");
        assert_eq!(md.year(), None);
    }
}
