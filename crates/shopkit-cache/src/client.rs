//! Delete-cache requests and the client seam that sends them.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::CacheError;
use crate::state::SiteId;

/// Plugin endpoint that clears the page cache.
pub const CACHE_ENDPOINT: &str = "/wp-super-cache/v1/cache";

/// A request to clear a site's page cache, proxied through the site's
/// REST API tunnel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteCacheRequest {
    pub site_id: SiteId,
    /// Tunnel path on the API host.
    pub path: String,
    /// Endpoint on the site, passed as the `path` query parameter.
    pub query_path: String,
    /// JSON body describing what to clear.
    pub body: serde_json::Value,
}

impl DeleteCacheRequest {
    pub fn new(site_id: SiteId, kind: serde_json::Value) -> Self {
        Self {
            site_id,
            path: format!("/jetpack-blogs/{}/rest-api/", site_id),
            query_path: CACHE_ENDPOINT.to_string(),
            body: kind,
        }
    }

    /// Encoded request body.
    pub fn body_json(&self) -> Result<String, CacheError> {
        Ok(serde_json::to_string(&self.body)?)
    }
}

/// Transport for delete-cache requests.
#[async_trait]
pub trait CacheClient: Send + Sync {
    /// Send the request. `Ok` means the site accepted it.
    async fn delete_cache(&self, request: &DeleteCacheRequest) -> Result<(), CacheError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_paths() {
        let request = DeleteCacheRequest::new(SiteId(123456), json!({ "all": true }));
        assert_eq!(request.path, "/jetpack-blogs/123456/rest-api/");
        assert_eq!(request.query_path, "/wp-super-cache/v1/cache");
    }

    #[test]
    fn test_body_json() {
        let request = DeleteCacheRequest::new(SiteId(1), json!("expired"));
        assert_eq!(request.body_json().unwrap(), r#""expired""#);
    }
}
