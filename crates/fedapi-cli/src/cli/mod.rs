//! CLI for inspecting fedapi classification, backoff and envelopes.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use fedapi_core::config::{self, FedApiConfig};

use commands::{
    run_backoff, run_classify, run_completions, run_config, run_normalize, run_simulate,
};

/// Top-level CLI for fedapi.
#[derive(Debug, Parser)]
#[command(name = "fedapi")]
#[command(about = "fedapi: API error classification, retry policy and response envelopes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify an HTTP status (0 = no response) and show the user-facing message.
    Classify {
        /// HTTP status code.
        status: u16,
        /// Server-supplied error message, if any.
        #[arg(long)]
        message: Option<String>,
    },

    /// Print the backoff schedule and retry decision per attempt.
    Backoff {
        /// Number of attempts to show (default: retry budget + 1).
        #[arg(long, value_name = "N")]
        attempts: Option<u32>,
        /// Status the failing request returns.
        #[arg(long, default_value = "503")]
        status: u16,
    },

    /// Normalize a JSON response into an envelope and print it.
    Normalize {
        /// Path to a JSON file, or `-` for stdin.
        path: String,
        /// Message used when the response carries none (default: from config).
        #[arg(long)]
        message: Option<String>,
    },

    /// Replay a scripted sequence of statuses through the retry loop.
    Simulate {
        /// Status returned by each successive attempt; 2xx ends the loop, 0 = no response.
        #[arg(required = true, num_args = 1..)]
        statuses: Vec<u16>,
        /// Skip the backoff waits.
        #[arg(long)]
        no_wait: bool,
    },

    /// Show the config file path and effective settings.
    Config,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

fn load_config() -> Result<FedApiConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    /// Whether the command reads the config file (creating it if missing).
    pub fn uses_config(&self) -> bool {
        match self {
            CliCommand::Backoff { .. }
            | CliCommand::Normalize { .. }
            | CliCommand::Simulate { .. }
            | CliCommand::Config => true,
            CliCommand::Classify { .. } | CliCommand::Completions { .. } => false,
        }
    }

    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        // Commands that never read config get defaults without touching disk.
        let cfg = if cli.command.uses_config() {
            load_config()?
        } else {
            FedApiConfig::default()
        };

        match cli.command {
            CliCommand::Classify { status, message } => run_classify(status, message.as_deref()),
            CliCommand::Backoff { attempts, status } => run_backoff(&cfg, attempts, status),
            CliCommand::Normalize { path, message } => {
                let message = message.unwrap_or_else(|| cfg.default_message.clone());
                run_normalize(&path, &message).await?;
            }
            CliCommand::Simulate { statuses, no_wait } => {
                run_simulate(&cfg, &statuses, no_wait).await?
            }
            CliCommand::Config => run_config(&cfg)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
