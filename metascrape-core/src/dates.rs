//! Release-date normalization.
//!
//! Dates are stored in metadata records under [`MetadataKey::ReleaseDate`] in
//! one canonical format, `%Y-%m-%d`, regardless of what format a provider
//! delivered them in.

use chrono::NaiveDate;
use tracing::warn;

use metascrape_model::{MediaMetadata, MetadataKey};

use crate::error::{Result, ScrapeError};

/// Canonical storage format for release dates.
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse `date` using the strftime-style `format` and store it canonically
/// under `RELEASE_DATE`.
///
/// On parse failure the stored value is cleared, so the record never carries
/// a release date in a non-canonical format.
pub fn set_release_date_from_formatted_date(
    md: &mut MediaMetadata,
    date: &str,
    format: &str,
) -> Result<()> {
    match NaiveDate::parse_from_str(date, format) {
        Ok(parsed) => {
            md.set(
                MetadataKey::ReleaseDate,
                parsed.format(RELEASE_DATE_FORMAT).to_string(),
            );
            Ok(())
        }
        Err(err) => {
            warn!(
                "Failed to parse release date {:?} with format {:?}: {}",
                date, format, err
            );
            md.clear(MetadataKey::ReleaseDate);
            Err(ScrapeError::ParseFailed {
                what: "release date",
                value: date.to_string(),
            })
        }
    }
}

/// Read the stored release date back as a calendar date.
///
/// A missing value is plain absence; a malformed value is logged and treated
/// as absent.
pub fn release_date(md: &MediaMetadata) -> Option<NaiveDate> {
    let date = md.get(MetadataKey::ReleaseDate)?;
    match NaiveDate::parse_from_str(date, RELEASE_DATE_FORMAT) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            warn!("Failed to parse stored release date {:?}: {}", date, err);
            None
        }
    }
}
