//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    ctx.output.info("");
    ctx.output.info("[log]");
    ctx.output
        .kv("format", &format!("{:?}", ctx.config.log.format).to_lowercase());
    ctx.output
        .kv("level", &ctx.config.log.level.to_string().to_lowercase());

    ctx.output.info("");
    ctx.output.info("[variations]");
    ctx.output.kv(
        "warn_threshold",
        &ctx.config.variations.warn_threshold.to_string(),
    );

    ctx.output.info("");
    ctx.output.info("[stats]");
    if let Some(ref slug) = ctx.config.stats.default_slug {
        ctx.output.kv("default_slug", slug);
    }

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check_config(&ctx.config);

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Returns (errors, warnings).
fn check_config(config: &CliConfig) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if config.variations.warn_threshold == 0 {
        errors.push("variations.warn_threshold must be at least 1".to_string());
    }

    if let Some(ref slug) = config.stats.default_slug {
        if slug.is_empty() {
            errors.push("stats.default_slug must not be empty".to_string());
        } else if slug.contains('/') {
            warnings.push(format!(
                "stats.default_slug '{}' contains '/', navigation paths will break",
                slug
            ));
        }
    }

    (errors, warnings)
}
