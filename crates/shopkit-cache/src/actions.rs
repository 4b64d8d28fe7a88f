//! Async action creators.

use serde_json::Value;

use crate::client::{CacheClient, DeleteCacheRequest};
use crate::state::{CacheAction, SiteId};

/// Delete the page cache for `site_id`.
///
/// Dispatches `DeleteCache` before sending, then `DeleteCacheSuccess` or
/// `DeleteCacheFailure` once the client answers. Failures are reported only
/// through the dispatched action.
pub async fn delete_cache<C, D>(client: &C, dispatch: &mut D, site_id: SiteId, kind: Value)
where
    C: CacheClient + ?Sized,
    D: FnMut(CacheAction),
{
    dispatch(CacheAction::DeleteCache { site_id });

    let request = DeleteCacheRequest::new(site_id, kind);
    match client.delete_cache(&request).await {
        Ok(()) => {
            tracing::debug!(%site_id, "cache deleted");
            dispatch(CacheAction::DeleteCacheSuccess { site_id });
        }
        Err(e) => {
            tracing::warn!(%site_id, error = %e, "cache delete failed");
            dispatch(CacheAction::DeleteCacheFailure { site_id });
        }
    }
}
