//! Terminal failure of a retry loop.

use thiserror::Error;

use crate::classify::HandledError;

#[derive(Debug, Clone, Error)]
pub enum RetryError {
    /// The last error was retryable but the attempt budget ran out.
    #[error("gave up after {attempts} attempt(s): {error}")]
    Exhausted { attempts: u32, error: HandledError },
    /// The error's category is never retried (e.g. authentication).
    #[error("not retryable after {attempts} attempt(s): {error}")]
    Rejected { attempts: u32, error: HandledError },
    /// The caller's abort flag was set while waiting.
    #[error("retry aborted after {attempts} attempt(s)")]
    Aborted { attempts: u32 },
}

impl RetryError {
    pub fn attempts(&self) -> u32 {
        match self {
            RetryError::Exhausted { attempts, .. }
            | RetryError::Rejected { attempts, .. }
            | RetryError::Aborted { attempts } => *attempts,
        }
    }

    /// The last classified error, if the loop ended on one.
    pub fn handled(&self) -> Option<&HandledError> {
        match self {
            RetryError::Exhausted { error, .. } | RetryError::Rejected { error, .. } => Some(error),
            RetryError::Aborted { .. } => None,
        }
    }
}
