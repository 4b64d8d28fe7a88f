//! shopkit - Command line tool for store catalog, stats and cache utilities.
//!
//! Commands:
//! - `shopkit variations` - Generate variations for a product document
//! - `shopkit stats` - Resolve a store stats route
//! - `shopkit cache` - Inspect cache delete-status actions
//! - `shopkit session` - Inspect login state and the current user
//! - `shopkit reader` - Preview followed-site search results
//! - `shopkit config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CacheArgs, ConfigArgs, ReaderArgs, SessionArgs, StatsArgs, VariationsArgs};

/// shopkit - Store catalog, stats, cache, session and reader utilities
#[derive(Parser)]
#[command(name = "shopkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate every variation of a product
    Variations(VariationsArgs),

    /// Resolve a store stats route
    Stats(StatsArgs),

    /// Inspect cache delete-status actions
    Cache(CacheArgs),

    /// Inspect login state and the current user
    Session(SessionArgs),

    /// Preview followed-site search results
    Reader(ReaderArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Variations(_) => "variations",
            Commands::Stats(_) => "stats",
            Commands::Cache(_) => "cache",
            Commands::Session(_) => "session",
            Commands::Reader(_) => "reader",
            Commands::Config(_) => "config",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output, cli.command.name())?;
    ctx.logger.debug("starting command");

    let result = match cli.command {
        Commands::Variations(args) => commands::variations::run(args, &ctx).await,
        Commands::Stats(args) => commands::stats::run(args, &ctx).await,
        Commands::Cache(args) => commands::cache::run(args, &ctx).await,
        Commands::Session(args) => commands::session::run(args, &ctx).await,
        Commands::Reader(args) => commands::reader::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.logger.debug("command failed");
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
