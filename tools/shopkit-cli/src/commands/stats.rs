//! Stats route command.

use anyhow::{bail, Result};
use serde::Serialize;
use shopkit_stats::{
    QueryParams, RouteParams, RouteResolution, StatsNavigation, StatsProps, StatsRoute,
};

use super::StatsArgs;
use crate::context::Context;

#[derive(Serialize)]
struct ResolvedStats {
    props: StatsProps,
    navigation: StatsNavigation,
}

/// Run the stats command.
pub async fn run(args: StatsArgs, ctx: &Context) -> Result<()> {
    let params = route_params(&args);
    let query = query_params(&args);

    let props = match StatsRoute::resolve(&params, &query) {
        RouteResolution::Render(props) => props,
        RouteResolution::Redirect(target) => {
            if let Err(e) = StatsRoute::validate(&params) {
                ctx.output.warn(&e.to_string());
            }
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "redirect": target }));
                return Ok(());
            }
            bail!("Invalid stats route, redirecting to {}", target);
        }
    };

    let slug = args
        .slug
        .clone()
        .or_else(|| ctx.config.stats.default_slug.clone())
        .unwrap_or_default();
    if slug.is_empty() {
        ctx.output
            .debug("No site slug given; navigation links use an empty slug");
    }
    let navigation = StatsNavigation::new(props.stats_type, &slug);

    if ctx.output.is_json() {
        ctx.output.json(&ResolvedStats { props, navigation });
        return Ok(());
    }

    ctx.output.header(&format!("Store stats: {}", navigation.selected_text));
    ctx.output.kv("type", props.stats_type.as_str());
    ctx.output.kv("period", props.period.as_str());
    ctx.output.kv("segment", props.segment.as_str());
    if let Some(start) = props.start_date {
        ctx.output.kv("start_date", &start.to_string());
    }
    if let Some(end) = props.end_date {
        ctx.output.kv("end_date", &end.to_string());
    }

    ctx.output.info("");
    ctx.output.info("Tabs:");
    for tab in &navigation.tabs {
        let marker = if tab.selected { "*" } else { " " };
        ctx.output
            .list_item(&format!("{} {} -> {}", marker, tab.label, tab.path));
    }

    ctx.output.info("Switch:");
    for option in &navigation.control {
        ctx.output.list_item(&format!(
            "{} {}",
            option.label,
            option.path.as_deref().unwrap_or("(current)")
        ));
    }

    Ok(())
}

fn route_params(args: &StatsArgs) -> RouteParams {
    RouteParams::from([
        ("type".to_string(), args.stats_type.clone()),
        ("period".to_string(), args.period.clone()),
        ("segment".to_string(), args.segment.clone()),
    ])
}

fn query_params(args: &StatsArgs) -> QueryParams {
    let mut query = QueryParams::new();
    if let Some(start) = &args.start_date {
        query.insert("start_date".to_string(), start.clone());
    }
    if let Some(end) = &args.end_date {
        query.insert("end_date".to_string(), end.clone());
    }
    query
}
