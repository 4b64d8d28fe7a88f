//! Feed search results shown on the following-management page.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Results listed before the reader asks for more.
pub const PREVIEW_LIMIT: usize = 3;

/// Total the scrolling list assumes the search endpoint can return.
pub const REMOTE_TOTAL_COUNT: usize = 200;

pub const NO_RESULTS_MESSAGE: &str = "There were no site results for your query.";

pub const SHOW_MORE_LABEL: &str = "Show more";

/// One site returned by feed search.
///
/// The endpoint sends IDs either as numbers or as numeric strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSearchResult {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "feed_ID", deserialize_with = "numeric_id")]
    pub feed_id: u64,
    /// Feeds without a hosted blog have no blog ID.
    #[serde(
        rename = "blog_ID",
        default,
        deserialize_with = "optional_numeric_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub blog_id: Option<u64>,
}

/// A subscription row in the preview list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionListItem {
    pub url: String,
    pub feed_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<u64>,
    /// Stable row key, unique per feed.
    pub key: String,
}

impl From<&FeedSearchResult> for SubscriptionListItem {
    fn from(result: &FeedSearchResult) -> Self {
        Self {
            url: result.url.clone(),
            feed_id: result.feed_id,
            site_id: result.blog_id,
            key: format!("search-result-site-id-{}", result.feed_id),
        }
    }
}

/// What the results area shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchResultsView {
    /// Search has not returned yet.
    Placeholder,
    /// Search returned nothing.
    NoResults { message: &'static str },
    /// The first few results and a control to reveal the rest.
    Preview {
        items: Vec<SubscriptionListItem>,
        show_more_label: &'static str,
    },
    /// Every result in a scrolling list that pages in more on demand.
    Full {
        sites: Vec<FeedSearchResult>,
        remote_total_count: usize,
    },
}

/// Pick the results view for `results`.
///
/// `results` is `None` while the search is in flight. `show_more` is set once
/// the reader has asked for the full list.
pub fn search_results_view(
    results: Option<&[FeedSearchResult]>,
    show_more: bool,
) -> SearchResultsView {
    let view = match results {
        None => SearchResultsView::Placeholder,
        Some([]) => SearchResultsView::NoResults {
            message: NO_RESULTS_MESSAGE,
        },
        Some(results) if !show_more => SearchResultsView::Preview {
            items: results
                .iter()
                .take(PREVIEW_LIMIT)
                .map(SubscriptionListItem::from)
                .collect(),
            show_more_label: SHOW_MORE_LABEL,
        },
        Some(results) => SearchResultsView::Full {
            sites: results.to_vec(),
            remote_total_count: REMOTE_TOTAL_COUNT,
        },
    };

    tracing::debug!(
        results = results.map(<[FeedSearchResult]>::len),
        show_more,
        "selected feed search results view"
    );

    view
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumericId {
    Number(u64),
    Text(String),
}

impl NumericId {
    fn into_u64<E: de::Error>(self) -> Result<u64, E> {
        match self {
            NumericId::Number(n) => Ok(n),
            NumericId::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid numeric id: {:?}", s))),
        }
    }
}

fn numeric_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    NumericId::deserialize(deserializer)?.into_u64()
}

fn optional_numeric_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NumericId>::deserialize(deserializer)?
        .map(NumericId::into_u64)
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(feed_id: u64) -> FeedSearchResult {
        FeedSearchResult {
            url: format!("https://site{}.example", feed_id),
            feed_id,
            blog_id: Some(feed_id + 1000),
        }
    }

    #[test]
    fn test_placeholder_while_searching() {
        assert_eq!(search_results_view(None, false), SearchResultsView::Placeholder);
        assert_eq!(search_results_view(None, true), SearchResultsView::Placeholder);
    }

    #[test]
    fn test_empty_results_message() {
        let view = search_results_view(Some(&[][..]), false);
        assert_eq!(
            view,
            SearchResultsView::NoResults {
                message: "There were no site results for your query."
            }
        );
    }

    #[test]
    fn test_preview_takes_first_three() {
        let results: Vec<FeedSearchResult> = (1..=5).map(result).collect();
        let SearchResultsView::Preview { items, show_more_label } =
            search_results_view(Some(results.as_slice()), false)
        else {
            panic!("expected preview");
        };

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].key, "search-result-site-id-1");
        assert_eq!(items[2].feed_id, 3);
        assert_eq!(items[2].site_id, Some(1003));
        assert_eq!(show_more_label, "Show more");
    }

    #[test]
    fn test_preview_with_fewer_results_keeps_control() {
        let results = vec![result(7)];
        let view = search_results_view(Some(results.as_slice()), false);
        assert_eq!(
            view,
            SearchResultsView::Preview {
                items: vec![SubscriptionListItem {
                    url: "https://site7.example".to_string(),
                    feed_id: 7,
                    site_id: Some(1007),
                    key: "search-result-site-id-7".to_string(),
                }],
                show_more_label: SHOW_MORE_LABEL,
            }
        );
    }

    #[test]
    fn test_show_more_lists_everything() {
        let results: Vec<FeedSearchResult> = (1..=5).map(result).collect();
        let view = search_results_view(Some(results.as_slice()), true);
        assert_eq!(
            view,
            SearchResultsView::Full {
                sites: results,
                remote_total_count: 200,
            }
        );
    }

    #[test]
    fn test_string_ids_are_coerced() {
        let parsed: FeedSearchResult = serde_json::from_str(
            r#"{ "URL": "https://a.example", "feed_ID": "42", "blog_ID": "77", "title": "A" }"#,
        )
        .unwrap();
        assert_eq!(parsed.feed_id, 42);
        assert_eq!(parsed.blog_id, Some(77));

        let parsed: FeedSearchResult =
            serde_json::from_str(r#"{ "URL": "https://b.example", "feed_ID": 5 }"#).unwrap();
        assert_eq!(parsed.blog_id, None);
    }

    #[test]
    fn test_non_numeric_id_is_rejected() {
        let parsed: Result<FeedSearchResult, _> =
            serde_json::from_str(r#"{ "URL": "https://a.example", "feed_ID": "abc" }"#);
        assert!(parsed.is_err());
    }
}
