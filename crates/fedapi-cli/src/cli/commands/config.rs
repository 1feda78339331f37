//! `fedapi config` – where the config lives and what is in effect.

use anyhow::Result;
use fedapi_core::config::{self, FedApiConfig};

pub fn run_config(cfg: &FedApiConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    let mut effective = cfg.clone();
    effective.retry = Some(cfg.retry_config());
    print!("{}", toml::to_string_pretty(&effective)?);
    Ok(())
}
