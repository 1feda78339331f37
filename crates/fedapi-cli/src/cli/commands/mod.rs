//! CLI command handlers, one per file.

mod backoff;
mod classify;
mod completions;
mod config;
mod normalize;
mod simulate;

pub use backoff::run_backoff;
pub use classify::run_classify;
pub use completions::run_completions;
pub use config::run_config;
pub use normalize::run_normalize;
pub use simulate::run_simulate;
