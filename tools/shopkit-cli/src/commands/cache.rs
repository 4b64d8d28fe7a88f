//! Cache delete-status commands.

use anyhow::{Context as _, Result};
use serde::Serialize;
use shopkit_cache::{
    get_cache_delete_status, is_cache_delete_successful, is_deleting_cache, CacheAction,
    CacheState, DeleteCacheRequest, SiteId,
};

use super::{CacheArgs, CacheCommand};
use crate::context::Context;
use crate::output::status_badge;

/// Run the cache command.
pub async fn run(args: CacheArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CacheCommand::Replay { actions, site } => replay(&actions, site.map(SiteId), ctx).await,
        CacheCommand::Request { site, kind } => request(SiteId(site), &kind, ctx).await,
    }
}

#[derive(Debug, PartialEq, Serialize)]
struct SiteStatus {
    site_id: SiteId,
    deleting: bool,
    successful: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'static str>,
}

async fn replay(path: &str, site: Option<SiteId>, ctx: &Context) -> Result<()> {
    let content = ctx.read_input(path)?;
    let actions: Vec<CacheAction> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse cache actions: {}", path))?;

    ctx.logger
        .builder(shopkit_observability::LogLevel::Debug, "replaying cache actions")
        .field_u64("actions", actions.len() as u64)
        .emit();

    let state = CacheState::new().reduce_all(&actions);
    let statuses = site_statuses(&state, site);

    if ctx.output.is_json() {
        ctx.output.json(&statuses);
        return Ok(());
    }

    if statuses.is_empty() {
        ctx.output.info("No delete status recorded.");
        return Ok(());
    }

    ctx.output.header("Cache delete status");
    ctx.output
        .table_row(&["SITE", "DELETING", "SUCCESSFUL", "STATUS"], &[12, 10, 12, 10]);
    for s in &statuses {
        let site_id = s.site_id.to_string();
        let badge = status_badge(s.status.unwrap_or("none"));
        ctx.output.table_row(
            &[
                &site_id,
                &s.deleting.to_string(),
                &s.successful.to_string(),
                &badge,
            ],
            &[12, 10, 12, 10],
        );
    }

    Ok(())
}

/// Status for every tracked site, or just `site` (even if untracked).
fn site_statuses(state: &CacheState, site: Option<SiteId>) -> Vec<SiteStatus> {
    let sites: Vec<SiteId> = match site {
        Some(site) => vec![site],
        None => state.delete_status.keys().copied().collect(),
    };

    sites
        .into_iter()
        .map(|site_id| SiteStatus {
            site_id,
            deleting: is_deleting_cache(Some(state), site_id),
            successful: is_cache_delete_successful(Some(state), site_id),
            status: get_cache_delete_status(Some(state), site_id).map(|s| s.as_str()),
        })
        .collect()
}

async fn request(site: SiteId, kind: &str, ctx: &Context) -> Result<()> {
    let kind: serde_json::Value =
        serde_json::from_str(kind).with_context(|| format!("Invalid --kind JSON: {}", kind))?;
    let request = DeleteCacheRequest::new(site, kind);

    if ctx.output.is_json() {
        ctx.output.json(&request);
        return Ok(());
    }

    ctx.output.header(&format!("Delete cache for site {}", site));
    ctx.output.kv("path", &request.path);
    ctx.output.kv("query", &format!("path={}", request.query_path));
    ctx.output.kv("body", &request.body_json()?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_statuses_all_sites() {
        let state = CacheState::new().reduce_all(&[
            CacheAction::DeleteCache { site_id: SiteId(1) },
            CacheAction::DeleteCache { site_id: SiteId(2) },
            CacheAction::DeleteCacheSuccess { site_id: SiteId(2) },
        ]);

        let statuses = site_statuses(&state, None);
        assert_eq!(
            statuses,
            vec![
                SiteStatus {
                    site_id: SiteId(1),
                    deleting: true,
                    successful: false,
                    status: Some("pending"),
                },
                SiteStatus {
                    site_id: SiteId(2),
                    deleting: false,
                    successful: true,
                    status: Some("success"),
                },
            ]
        );
    }

    #[test]
    fn test_site_statuses_untracked_site() {
        let statuses = site_statuses(&CacheState::new(), Some(SiteId(9)));
        assert_eq!(
            statuses,
            vec![SiteStatus {
                site_id: SiteId(9),
                deleting: false,
                successful: false,
                status: None,
            }]
        );
    }
}
