//! Integration coverage for the id-based search path against a stub provider.

use async_trait::async_trait;

use metascrape_core::provider::{MetadataProvider, ProviderError, ProviderInfo};
use metascrape_core::{ScrapeError, search_by_id};
use metascrape_model::{
    MediaMetadata, MediaSearchResult, MediaType, MetadataKey, QueryField, SearchQuery,
};

enum StubBehavior {
    Metadata(MediaMetadata),
    Empty,
    Fail,
}

struct StubProvider {
    behavior: StubBehavior,
}

#[async_trait]
impl MetadataProvider for StubProvider {
    fn info(&self) -> ProviderInfo {
        ProviderInfo::new("stub", "Stub Provider")
    }

    async fn search(
        &self,
        _query: &SearchQuery,
    ) -> Result<Vec<MediaSearchResult>, ProviderError> {
        Ok(Vec::new())
    }

    async fn get_metadata(
        &self,
        _result: &MediaSearchResult,
    ) -> Result<MediaMetadata, ProviderError> {
        match &self.behavior {
            StubBehavior::Metadata(md) => Ok(md.clone()),
            StubBehavior::Empty => Ok(MediaMetadata::new()),
            StubBehavior::Fail => Err(ProviderError::ApiError("boom".to_string())),
        }
    }
}

fn movie_query() -> SearchQuery {
    let mut query = SearchQuery::new(MediaType::Movie);
    query.set(QueryField::RawTitle, "dark knight");
    query.set(QueryField::Year, "2008");
    query
}

#[tokio::test]
async fn successful_lookup_populates_the_result_from_metadata() {
    let mut md = MediaMetadata::new();
    md.set(MetadataKey::MediaTitle, "The Dark Knight");
    md.set(MetadataKey::Year, "2008");
    let provider = StubProvider {
        behavior: StubBehavior::Metadata(md),
    };

    let result = search_by_id(&provider, &movie_query(), "tt0468569")
        .await
        .expect("provider succeeds");

    assert_eq!(result.provider_id, "stub");
    assert_eq!(result.id, "tt0468569");
    assert_eq!(result.score, 1.0);
    assert_eq!(result.title, "The Dark Knight");
    assert_eq!(result.year, Some(2008));
    assert_eq!(result.media_type, Some(MediaType::Movie));
    assert!(result.has_metadata());
    assert_eq!(
        result.extra.get("RAW_TITLE").map(String::as_str),
        Some("dark knight")
    );
}

#[tokio::test]
async fn provider_failure_surfaces_as_a_typed_error() {
    let provider = StubProvider {
        behavior: StubBehavior::Fail,
    };

    let err = search_by_id(&provider, &movie_query(), "tt0468569")
        .await
        .expect_err("provider fails");
    assert!(matches!(err, ScrapeError::ProviderFailed(_)));
}

#[tokio::test]
async fn empty_metadata_record_is_treated_as_a_failure() {
    let provider = StubProvider {
        behavior: StubBehavior::Empty,
    };

    let err = search_by_id(&provider, &movie_query(), "tt0468569")
        .await
        .expect_err("empty record is not a result");
    assert!(matches!(
        err,
        ScrapeError::ProviderFailed(ProviderError::NotFound)
    ));
}

#[tokio::test]
async fn query_title_survives_when_metadata_omits_it() {
    let mut md = MediaMetadata::new();
    md.set(MetadataKey::Description, "A caped vigilante.");
    let provider = StubProvider {
        behavior: StubBehavior::Metadata(md),
    };

    let result = search_by_id(&provider, &movie_query(), "tt0468569")
        .await
        .expect("provider succeeds");
    assert_eq!(result.title, "dark knight");
    assert_eq!(result.year, Some(2008));
}
