//! # Metascrape Core
//!
//! Stateless helper surface for media-metadata scraping pipelines: fuzzy
//! title scoring, date and running-time normalization, title sanitization,
//! and id-based search bridging over a pluggable [`MetadataProvider`].
//!
//! Every helper is a pure computation except [`search::search_by_id`], which
//! makes a single awaited provider call. Nothing here holds state; all
//! mutation targets are caller-owned records, and every fallible operation
//! returns a typed [`ScrapeError`] alongside a warn-level log entry.
//!
//! ```
//! use metascrape_core::{calculate_score, remove_non_search_characters};
//!
//! let cleaned = remove_non_search_characters("CSI: Miami!");
//! assert_eq!(cleaned, "CSI Miami");
//! assert_eq!(calculate_score(&cleaned, &cleaned), 1.0);
//! ```

pub mod dates;
pub mod error;
pub mod provider;
pub mod running_time;
pub mod score;
pub mod search;
pub mod titles;

pub use dates::{RELEASE_DATE_FORMAT, release_date, set_release_date_from_formatted_date};
pub use error::{Result, ScrapeError};
pub use provider::{MetadataProvider, ProviderError, ProviderInfo};
pub use running_time::{minutes_to_millis, parse_running_time};
pub use score::{calculate_compressed_score, calculate_score};
pub use search::{copy_search_query_to_search_result, search_by_id};
pub use titles::{bare_title, remove_non_search_characters, split_metadata_id};
