//! `fedapi normalize <path>` – wrap a JSON response in an envelope.

use anyhow::{Context, Result};
use fedapi_core::envelope::handle_api_response;
use serde_json::Value;
use tokio::io::AsyncReadExt;

async fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("read stdin")?;
        Ok(buf)
    } else {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("read {}", path))
    }
}

pub async fn run_normalize(path: &str, default_message: &str) -> Result<()> {
    let raw = read_input(path).await?;
    let response: Value = serde_json::from_str(&raw).context("input is not valid JSON")?;
    let envelope = handle_api_response(&response, default_message);
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}
