//! Client-side plumbing for the federation API: uniform response envelopes,
//! error classification and retry policy.

pub mod classify;
pub mod config;
pub mod envelope;
pub mod logging;
pub mod retry;
pub mod timestamp;
