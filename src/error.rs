use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures reported by the external document store or auth provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("{collection}/{id} not found")]
    NotFound { collection: String, id: String },

    #[error("user not authenticated")]
    Unauthenticated,

    #[error("backend unavailable: {0}")]
    TransientIo(String),

    #[error("malformed document in {collection}: {reason}")]
    Decode { collection: String, reason: String },
}

/// Transaction screening outcomes that stop a purchase.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScreeningError {
    #[error("potential fraud detected (score {score:.2}): {}", reasons.join("; "))]
    TransactionBlocked { score: f64, reasons: Vec<String> },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Screening(#[from] ScreeningError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocked_message_lists_reasons() {
        let err = Error::from(ScreeningError::TransactionBlocked {
            score: 0.95,
            reasons: vec!["a".into(), "b".into()],
        });
        assert_eq!(err.to_string(), "potential fraud detected (score 0.95): a; b");
    }

    #[test]
    fn backend_errors_convert() {
        let err: Error = BackendError::Unauthenticated.into();
        assert!(matches!(err, Error::Backend(BackendError::Unauthenticated)));
    }
}
