//! Read-only queries over cache state.
//!
//! The cache slice may not exist yet (extension never loaded), so every
//! selector accepts `Option<&CacheState>`.

use crate::state::{CacheState, RequestStatus, SiteId};

/// Check if a delete request is in flight for `site_id`.
pub fn is_deleting_cache(state: Option<&CacheState>, site_id: SiteId) -> bool {
    state
        .and_then(|s| s.delete_status.get(&site_id))
        .map(|d| d.deleting)
        .unwrap_or(false)
}

/// Check if the last delete request for `site_id` succeeded.
pub fn is_cache_delete_successful(state: Option<&CacheState>, site_id: SiteId) -> bool {
    get_cache_delete_status(state, site_id) == Some(RequestStatus::Success)
}

/// Status of the last delete request for `site_id`, if any.
pub fn get_cache_delete_status(
    state: Option<&CacheState>,
    site_id: SiteId,
) -> Option<RequestStatus> {
    state
        .and_then(|s| s.delete_status.get(&site_id))
        .map(|d| d.status)
}
