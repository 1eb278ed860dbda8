//! Error Types

use thiserror::Error;

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, AgentiaError>;

/// Errors raised while talking to the hosted services behind the site
#[derive(Error, Debug)]
pub enum AgentiaError {
    /// Network failure before a response arrived
    #[error("Transport error: {0}")]
    Transport(String),

    /// Upstream answered with a non-2xx status
    #[error("Upstream returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// Upstream answered 2xx but with an `{"error": ...}` body
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Upstream answered without any generated text
    #[error("Empty completion")]
    EmptyCompletion,

    /// Response body did not have the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Request payload could not be understood
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreadable_json_converts() {
        let err: AgentiaError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, AgentiaError::Json(_)));
    }

    #[test]
    fn test_upstream_status_display_carries_body() {
        let err = AgentiaError::UpstreamStatus {
            status: 503,
            body: "Model gpt2 is currently loading".into(),
        };
        assert_eq!(
            err.to_string(),
            "Upstream returned status 503: Model gpt2 is currently loading"
        );
    }
}
