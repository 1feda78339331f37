use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Retry policy parameters (optional `[retry]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Attempt budget; `should_retry` is false once the attempt number reaches it.
    pub max_retries: u32,
    /// Delay before the first retry, in milliseconds.
    pub retry_delay_ms: u64,
    /// Growth factor applied per attempt.
    pub backoff_multiplier: f64,
    /// Ceiling for any single delay, in milliseconds.
    pub max_retry_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_delay_ms: 1000,
            backoff_multiplier: 2.0,
            max_retry_delay_ms: 10_000,
        }
    }
}

impl RetryConfig {
    /// Reject parameter combinations that would make backoff shrink or misbehave.
    pub fn validate(&self) -> Result<()> {
        if !self.backoff_multiplier.is_finite() || self.backoff_multiplier < 1.0 {
            bail!(
                "retry.backoff_multiplier must be a finite number >= 1.0 (got {})",
                self.backoff_multiplier
            );
        }
        if self.max_retry_delay_ms < self.retry_delay_ms {
            bail!(
                "retry.max_retry_delay_ms ({}) is smaller than retry.retry_delay_ms ({})",
                self.max_retry_delay_ms,
                self.retry_delay_ms
            );
        }
        Ok(())
    }
}

/// Global configuration loaded from `~/.config/fedapi/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FedApiConfig {
    /// Message used by the normalizer when the upstream response carries none.
    #[serde(default = "default_message")]
    pub default_message: String,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

fn default_message() -> String {
    "Request completed".to_string()
}

impl Default for FedApiConfig {
    fn default() -> Self {
        Self {
            default_message: default_message(),
            retry: None,
        }
    }
}

impl FedApiConfig {
    /// Effective retry parameters (the `[retry]` section, or defaults).
    pub fn retry_config(&self) -> RetryConfig {
        self.retry.clone().unwrap_or_default()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(retry) = &self.retry {
            retry.validate()?;
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fedapi")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FedApiConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] but against an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<FedApiConfig> {
    if !path.exists() {
        let default_cfg = FedApiConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FedApiConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
