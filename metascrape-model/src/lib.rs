//! Core data model definitions shared across metascrape crates.

pub mod media_type;
pub mod metadata;
pub mod query;
pub mod result;

pub use media_type::MediaType;
pub use metadata::{MediaMetadata, MetadataKey};
pub use query::{QueryField, SearchQuery};
pub use result::MediaSearchResult;
