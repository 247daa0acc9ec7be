use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use studyboard_core::SearchParams;

/// Path used when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "./config/sboard.toml";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CanvasConfig {
    #[serde(default = "default_snap_threshold")]
    pub snap_threshold: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            snap_threshold: default_snap_threshold(),
        }
    }
}

fn default_snap_threshold() -> f64 {
    8.0
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,
    #[serde(default = "default_context_chars")]
    pub context_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_chars: default_min_query_chars(),
            context_chars: default_context_chars(),
        }
    }
}

fn default_min_query_chars() -> usize {
    2
}
fn default_context_chars() -> usize {
    50
}

impl SearchConfig {
    pub fn params(&self) -> SearchParams {
        SearchParams {
            min_query_chars: self.min_query_chars,
            context_chars: self.context_chars,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "warn".to_string()
}

/// Load the config at `path`, falling back to defaults when the default
/// path is used and nothing exists there.
pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) => load_config(p),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                load_config(default_path)
            } else {
                Ok(Config::default())
            }
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config = parse_config(&content).with_context(|| "Failed to parse config file")?;
    Ok(config)
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;

    // Validate canvas
    let threshold = config.canvas.snap_threshold;
    if !threshold.is_finite() || threshold < 0.0 {
        anyhow::bail!("canvas.snap_threshold must be a finite number >= 0");
    }

    // Validate search
    if config.search.min_query_chars == 0 {
        anyhow::bail!("search.min_query_chars must be >= 1");
    }

    // Validate log
    if let Err(e) = EnvFilter::try_new(&config.log.filter) {
        anyhow::bail!("log.filter is not a valid tracing filter: {}", e);
    }

    Ok(config)
}
