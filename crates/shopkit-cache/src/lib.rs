//! Page cache delete-status tracking for shopkit.
//!
//! Follows the action/reducer/selector split used across the store UI:
//!
//! ```rust
//! use shopkit_cache::{is_deleting_cache, CacheAction, CacheState, SiteId};
//!
//! let site = SiteId(123456);
//! let state = CacheState::new().reduce(&CacheAction::DeleteCache { site_id: site });
//! assert!(is_deleting_cache(Some(&state), site));
//! ```

mod actions;
mod client;
mod error;
mod selectors;
mod state;

pub use actions::delete_cache;
pub use client::{CacheClient, DeleteCacheRequest, CACHE_ENDPOINT};
pub use error::CacheError;
pub use selectors::*;
pub use state::*;
