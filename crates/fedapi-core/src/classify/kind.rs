use serde::{Deserialize, Serialize};

/// Closed classification of an API error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// No response reached us (status 0).
    Network,
    /// 401: session missing or expired.
    Authentication,
    /// 403: authenticated but not permitted.
    Authorization,
    /// 400: request rejected as invalid.
    Validation,
    /// 404.
    NotFound,
    /// 5xx other than 504.
    ServerError,
    /// 408 or 504.
    Timeout,
    /// Anything else.
    Unknown,
}

/// Static display and policy record attached to an [`ErrorKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorCategory {
    pub title: &'static str,
    pub description: &'static str,
    pub user_message: &'static str,
    /// Whether re-attempting the same operation is ever appropriate.
    pub retryable: bool,
    /// Whether the user must act (log in, request access) before anything can succeed.
    pub action_required: bool,
}

const NETWORK: ErrorCategory = ErrorCategory {
    title: "Network Error",
    description: "Unable to connect to the server",
    user_message: "Please check your internet connection and try again.",
    retryable: true,
    action_required: false,
};

const AUTHENTICATION: ErrorCategory = ErrorCategory {
    title: "Authentication Error",
    description: "Your session has expired or is invalid",
    user_message: "Please log in again to continue.",
    retryable: false,
    action_required: true,
};

const AUTHORIZATION: ErrorCategory = ErrorCategory {
    title: "Access Denied",
    description: "You do not have permission to perform this action",
    user_message: "You don't have permission to access this resource.",
    retryable: false,
    action_required: true,
};

const VALIDATION: ErrorCategory = ErrorCategory {
    title: "Validation Error",
    description: "The submitted data is invalid",
    user_message: "Please check your input and try again.",
    retryable: true,
    action_required: false,
};

const NOT_FOUND: ErrorCategory = ErrorCategory {
    title: "Not Found",
    description: "The requested resource could not be found",
    user_message: "The requested item could not be found.",
    retryable: false,
    action_required: false,
};

const SERVER_ERROR: ErrorCategory = ErrorCategory {
    title: "Server Error",
    description: "The server encountered an error",
    user_message: "Something went wrong on our end. Please try again later.",
    retryable: true,
    action_required: false,
};

const TIMEOUT: ErrorCategory = ErrorCategory {
    title: "Request Timeout",
    description: "The request took too long to complete",
    user_message: "The request timed out. Please try again.",
    retryable: true,
    action_required: false,
};

const UNKNOWN: ErrorCategory = ErrorCategory {
    title: "Unexpected Error",
    description: "An unexpected error occurred",
    user_message: "An unexpected error occurred. Please try again.",
    retryable: true,
    action_required: false,
};

impl ErrorKind {
    pub const ALL: [ErrorKind; 8] = [
        ErrorKind::Network,
        ErrorKind::Authentication,
        ErrorKind::Authorization,
        ErrorKind::Validation,
        ErrorKind::NotFound,
        ErrorKind::ServerError,
        ErrorKind::Timeout,
        ErrorKind::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Network => "network",
            ErrorKind::Authentication => "authentication",
            ErrorKind::Authorization => "authorization",
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not_found",
            ErrorKind::ServerError => "server_error",
            ErrorKind::Timeout => "timeout",
            ErrorKind::Unknown => "unknown",
        }
    }

    pub fn category(self) -> &'static ErrorCategory {
        match self {
            ErrorKind::Network => &NETWORK,
            ErrorKind::Authentication => &AUTHENTICATION,
            ErrorKind::Authorization => &AUTHORIZATION,
            ErrorKind::Validation => &VALIDATION,
            ErrorKind::NotFound => &NOT_FOUND,
            ErrorKind::ServerError => &SERVER_ERROR,
            ErrorKind::Timeout => &TIMEOUT,
            ErrorKind::Unknown => &UNKNOWN,
        }
    }

    pub fn is_retryable(self) -> bool {
        self.category().retryable
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_flags() {
        let retryable: Vec<_> = ErrorKind::ALL
            .iter()
            .filter(|k| k.is_retryable())
            .copied()
            .collect();
        assert_eq!(
            retryable,
            vec![
                ErrorKind::Network,
                ErrorKind::Validation,
                ErrorKind::ServerError,
                ErrorKind::Timeout,
                ErrorKind::Unknown,
            ]
        );
    }

    #[test]
    fn action_required_only_for_auth_kinds() {
        for kind in ErrorKind::ALL {
            let expected = matches!(kind, ErrorKind::Authentication | ErrorKind::Authorization);
            assert_eq!(kind.category().action_required, expected, "{kind}");
        }
    }

    #[test]
    fn serde_names_match_as_str() {
        for kind in ErrorKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }
}
