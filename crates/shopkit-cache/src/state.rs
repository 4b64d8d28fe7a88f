//! Delete-status state and the actions that drive it.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric site identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteId(pub u64);

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SiteId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Outcome of the most recent delete request for a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Success,
    Error,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Success => "success",
            RequestStatus::Error => "error",
        }
    }
}

/// Per-site delete tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteStatus {
    /// A delete request is in flight.
    pub deleting: bool,
    pub status: RequestStatus,
}

impl DeleteStatus {
    pub const PENDING: DeleteStatus = DeleteStatus {
        deleting: true,
        status: RequestStatus::Pending,
    };
    pub const SUCCESS: DeleteStatus = DeleteStatus {
        deleting: false,
        status: RequestStatus::Success,
    };
    pub const ERROR: DeleteStatus = DeleteStatus {
        deleting: false,
        status: RequestStatus::Error,
    };
}

/// Actions that update cache state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CacheAction {
    /// A delete request was sent.
    DeleteCache { site_id: SiteId },
    /// The site confirmed the delete.
    DeleteCacheSuccess { site_id: SiteId },
    /// The delete request failed.
    DeleteCacheFailure { site_id: SiteId },
    /// Application state is being written to storage.
    Persist,
    /// Application state is being restored from storage.
    Hydrate,
}

/// Cache slice of application state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheState {
    /// Delete status keyed by site. Sites never touched have no entry.
    #[serde(default)]
    pub delete_status: BTreeMap<SiteId, DeleteStatus>,
}

impl CacheState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `action`, returning the next state.
    ///
    /// Delete status is transient: persisting or hydrating yields an empty
    /// map rather than carrying in-flight requests across sessions.
    pub fn reduce(mut self, action: &CacheAction) -> Self {
        match action {
            CacheAction::DeleteCache { site_id } => {
                self.delete_status.insert(*site_id, DeleteStatus::PENDING);
            }
            CacheAction::DeleteCacheSuccess { site_id } => {
                self.delete_status.insert(*site_id, DeleteStatus::SUCCESS);
            }
            CacheAction::DeleteCacheFailure { site_id } => {
                self.delete_status.insert(*site_id, DeleteStatus::ERROR);
            }
            CacheAction::Persist | CacheAction::Hydrate => {
                self.delete_status.clear();
            }
        }
        self
    }

    /// Fold a sequence of actions starting from this state.
    pub fn reduce_all<'a, I>(self, actions: I) -> Self
    where
        I: IntoIterator<Item = &'a CacheAction>,
    {
        actions.into_iter().fold(self, CacheState::reduce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIMARY: SiteId = SiteId(123456);
    const SECONDARY: SiteId = SiteId(456789);

    fn pending_primary() -> CacheState {
        CacheState::new().reduce(&CacheAction::DeleteCache { site_id: PRIMARY })
    }

    #[test]
    fn test_default_is_empty() {
        assert!(CacheState::default().delete_status.is_empty());
    }

    #[test]
    fn test_request_marks_pending() {
        let state = pending_primary();
        assert_eq!(
            state.delete_status.get(&PRIMARY),
            Some(&DeleteStatus {
                deleting: true,
                status: RequestStatus::Pending
            })
        );
    }

    #[test]
    fn test_requests_accumulate() {
        let state = pending_primary().reduce(&CacheAction::DeleteCache { site_id: SECONDARY });

        assert_eq!(state.delete_status.len(), 2);
        assert_eq!(state.delete_status[&PRIMARY], DeleteStatus::PENDING);
        assert_eq!(state.delete_status[&SECONDARY], DeleteStatus::PENDING);
    }

    #[test]
    fn test_success_clears_deleting() {
        let state = pending_primary().reduce(&CacheAction::DeleteCacheSuccess { site_id: PRIMARY });
        assert_eq!(state.delete_status[&PRIMARY], DeleteStatus::SUCCESS);
    }

    #[test]
    fn test_failure_clears_deleting() {
        let state = pending_primary().reduce(&CacheAction::DeleteCacheFailure { site_id: PRIMARY });
        assert_eq!(
            state.delete_status[&PRIMARY],
            DeleteStatus {
                deleting: false,
                status: RequestStatus::Error
            }
        );
    }

    #[test]
    fn test_not_persisted() {
        assert!(pending_primary()
            .reduce(&CacheAction::Persist)
            .delete_status
            .is_empty());
    }

    #[test]
    fn test_not_hydrated() {
        assert!(pending_primary()
            .reduce(&CacheAction::Hydrate)
            .delete_status
            .is_empty());
    }

    #[test]
    fn test_action_json_shape() {
        let action: CacheAction =
            serde_json::from_str(r#"{ "type": "delete_cache_success", "site_id": 42 }"#).unwrap();
        assert_eq!(action, CacheAction::DeleteCacheSuccess { site_id: SiteId(42) });

        let action: CacheAction = serde_json::from_str(r#"{ "type": "persist" }"#).unwrap();
        assert_eq!(action, CacheAction::Persist);
    }
}
