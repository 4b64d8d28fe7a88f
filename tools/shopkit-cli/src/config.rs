//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shopkit_observability::{LogFormat, LogLevel};

/// Config file names searched from the working directory upward.
pub const CONFIG_NAMES: [&str; 3] = ["shopkit.toml", ".shopkit.toml", "shopkit.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,

    /// Variation generation settings.
    #[serde(default)]
    pub variations: VariationsConfig,

    /// Stats route settings.
    #[serde(default)]
    pub stats: StatsConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    /// Parse config content, picking the format from the file extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log line format.
    #[serde(default)]
    pub format: LogFormat,

    /// Minimum level written.
    #[serde(default)]
    pub level: LogLevel,
}

/// Variation generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariationsConfig {
    /// Warn when a product would produce more variations than this.
    #[serde(default = "default_warn_threshold")]
    pub warn_threshold: usize,
}

fn default_warn_threshold() -> usize {
    100
}

impl Default for VariationsConfig {
    fn default() -> Self {
        Self {
            warn_threshold: default_warn_threshold(),
        }
    }
}

/// Stats route settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Site slug used when `--slug` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_slug: Option<String>,
}

/// Generate a default shopkit.toml config file.
pub fn generate_default_config() -> String {
    r#"# shopkit configuration

[log]
format = "human"
level = "info"

[variations]
warn_threshold = 100

[stats]
# default_slug = "example.com"
"#
    .to_string()
}
