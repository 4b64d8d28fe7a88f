//! Followed-site search results view model for shopkit.

mod search;

pub use search::{
    search_results_view, FeedSearchResult, SearchResultsView, SubscriptionListItem,
    NO_RESULTS_MESSAGE, PREVIEW_LIMIT, REMOTE_TOTAL_COUNT, SHOW_MORE_LABEL,
};
