//! Error types for field resolution

use thiserror::Error;

/// Error thrown when a string is not a valid URN
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid URN '{value}': {reason}")]
pub struct UrnParseError {
    pub value: String,
    pub reason: String,
}

/// General authorization error type
#[derive(Debug, Error)]
pub enum AuthzError {
    #[error(transparent)]
    InvalidUrn(#[from] UrnParseError),

    #[error("Remote invocation failed: {0}")]
    RemoteInvocation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, AuthzError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urn_error_message() {
        let err = UrnParseError {
            value: "nope".to_string(),
            reason: "missing 'urn:li:' prefix".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid URN 'nope': missing 'urn:li:' prefix");
    }

    #[test]
    fn test_urn_error_is_transparent() {
        let err: AuthzError = UrnParseError {
            value: "x".to_string(),
            reason: "bad".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Invalid URN 'x': bad");
    }

    #[test]
    fn test_remote_invocation_message() {
        let err = AuthzError::RemoteInvocation("connection reset".to_string());
        assert_eq!(err.to_string(), "Remote invocation failed: connection reset");
    }
}
