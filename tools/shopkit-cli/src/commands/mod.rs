//! CLI command implementations.

pub mod cache;
pub mod config;
pub mod reader;
pub mod session;
pub mod stats;
pub mod variations;

use clap::{Args, Subcommand};

/// Arguments for the variations command.
#[derive(Args)]
pub struct VariationsArgs {
    /// Product JSON document (`-` reads stdin).
    pub product: String,

    /// Show only the first N variations.
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Only print how many variations would be generated.
    #[arg(long)]
    pub count: bool,
}

/// Arguments for the stats command.
#[derive(Args)]
pub struct StatsArgs {
    /// Report type (orders, customers, stock).
    #[arg(value_name = "TYPE")]
    pub stats_type: String,

    /// Period (year, last_month, month, 7day, custom).
    pub period: String,

    /// Segment (sales_by_date, sales_by_product, sales_by_category, coupon_usage).
    pub segment: String,

    /// Start date (YYYY-MM-DD).
    #[arg(long)]
    pub start_date: Option<String>,

    /// End date (YYYY-MM-DD).
    #[arg(long)]
    pub end_date: Option<String>,

    /// Site slug for navigation links.
    #[arg(short, long)]
    pub slug: Option<String>,
}

/// Arguments for the cache command.
#[derive(Args)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheCommand,
}

#[derive(Subcommand)]
pub enum CacheCommand {
    /// Fold a list of cache actions and show the resulting status.
    Replay {
        /// JSON file holding an array of actions (`-` reads stdin).
        actions: String,

        /// Only show this site.
        #[arg(long)]
        site: Option<u64>,
    },
    /// Show the request that would clear a site's cache.
    Request {
        /// Site ID.
        site: u64,

        /// JSON body describing what to clear.
        #[arg(long, default_value = "null")]
        kind: String,
    },
}

/// Arguments for the session command.
#[derive(Args)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand)]
pub enum SessionCommand {
    /// Fold a list of login actions and show the resulting state.
    Replay {
        /// JSON file holding an array of actions (`-` reads stdin).
        actions: String,
    },
    /// Show whether the current user reads right-to-left.
    Rtl {
        /// Current-user JSON document (`-` reads stdin).
        user: String,
    },
}

/// Arguments for the reader command.
#[derive(Args)]
pub struct ReaderArgs {
    #[command(subcommand)]
    pub command: ReaderCommand,
}

#[derive(Subcommand)]
pub enum ReaderCommand {
    /// Show the followed-site search results view.
    SearchResults {
        /// JSON array of search results, or `null` while searching.
        results: String,

        /// List every result instead of the preview.
        #[arg(long)]
        show_more: bool,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
