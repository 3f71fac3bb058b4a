use thiserror::Error;

use crate::provider::ProviderError;

/// Failure surface of the scraper utilities.
///
/// Every fallible helper returns one of these instead of swallowing the
/// failure; callers can distinguish a malformed value from a missing match
/// from a provider-side fault without inspecting logs.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("failed to parse {what}: {value:?}")]
    ParseFailed { what: &'static str, value: String },

    #[error("no match for pattern {pattern:?}")]
    NoMatch { pattern: String },

    #[error("provider call failed: {0}")]
    ProviderFailed(#[from] ProviderError),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
