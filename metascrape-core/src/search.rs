//! Search-query/result bridging and id-based lookup.

use tracing::{debug, info, warn};

use metascrape_model::{MediaSearchResult, QueryField, SearchQuery};

use crate::error::{Result, ScrapeError};
use crate::provider::{MetadataProvider, ProviderError};

/// Copy every copyable, non-empty query field into the result's extra map,
/// keyed by the field's canonical name.
pub fn copy_search_query_to_search_result(query: &SearchQuery, result: &mut MediaSearchResult) {
    for field in QueryField::ALL.iter().copied().filter(|f| f.copyable()) {
        if let Some(value) = query.get(field) {
            if !value.is_empty() {
                result
                    .extra
                    .insert(field.as_str().to_string(), value.to_string());
            }
        }
    }
}

/// Resolve a single search result directly from a known external id.
///
/// The result is seeded from the query (score pinned at 1.0 — an id lookup is
/// an exact match by definition), then the provider is asked for the full
/// metadata record. Title and year are overwritten from the fetched record
/// when it carries them. A provider failure or an empty record surfaces as
/// [`ScrapeError::ProviderFailed`].
pub async fn search_by_id(
    provider: &dyn MetadataProvider,
    query: &SearchQuery,
    id: &str,
) -> Result<MediaSearchResult> {
    debug!("search_by_id for {:?}", query);

    let title = query.get(QueryField::RawTitle).unwrap_or_default();
    let year = query
        .get(QueryField::Year)
        .and_then(|y| y.trim().parse().ok());

    let mut result = MediaSearchResult::new(provider.info().id, id, title, year, 1.0);
    copy_search_query_to_search_result(query, &mut result);

    let md = match provider.get_metadata(&result).await {
        Ok(md) => md,
        Err(err) => {
            warn!("search_by_id failed for {:?}: {}", query, err);
            return Err(err.into());
        }
    };

    if md.is_empty() {
        warn!("search_by_id for {:?} returned an empty metadata record", id);
        return Err(ScrapeError::ProviderFailed(ProviderError::NotFound));
    }

    if let Some(media_title) = md.media_title() {
        result.title = media_title.to_string();
    }
    if let Some(md_year) = md.year() {
        result.year = Some(md_year);
    }
    result.media_type = Some(query.media_type());
    result.score = 1.0;
    result.set_metadata(md);

    info!("search_by_id succeeded for {}", id);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use metascrape_model::MediaType;

    #[test]
    fn copies_only_copyable_non_empty_fields() {
        let mut query = SearchQuery::new(MediaType::Tv);
        query.set(QueryField::Query, "csi miami s01e01");
        query.set(QueryField::RawTitle, "CSI: Miami");
        query.set(QueryField::Season, "1");
        query.set(QueryField::Episode, "");

        let mut result = MediaSearchResult::new("tmdb", "1431", "CSI: Miami", None, 0.9);
        copy_search_query_to_search_result(&query, &mut result);

        assert_eq!(result.extra.get("RAW_TITLE").map(String::as_str), Some("CSI: Miami"));
        assert_eq!(result.extra.get("SEASON").map(String::as_str), Some("1"));
        assert!(!result.extra.contains_key("QUERY"));
        assert!(!result.extra.contains_key("EPISODE"));
    }
}
