use thiserror::Error;

/// Failure to complete a page fetch at the transport level.
///
/// This is the only error kind that crosses the data-source boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("unexpected HTTP status {status}: {reason}")]
    Status { status: u16, reason: String },

    #[error("connection failed: {0}")]
    Connectivity(String),

    #[error("malformed response body: {0}")]
    Decode(String),
}

impl TransportError {
    /// Whether retrying the same request could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            TransportError::Connectivity(_) => true,
            TransportError::Status { status, .. } => *status == 429 || *status >= 500,
            TransportError::Decode(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(TransportError::Connectivity("reset".into()).is_retryable());
        assert!(TransportError::Status {
            status: 503,
            reason: "Service Unavailable".into()
        }
        .is_retryable());
        assert!(!TransportError::Status {
            status: 404,
            reason: "Not Found".into()
        }
        .is_retryable());
        assert!(!TransportError::Decode("eof".into()).is_retryable());
    }

    #[test]
    fn test_status_display() {
        let err = TransportError::Status {
            status: 500,
            reason: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "unexpected HTTP status 500: Internal Server Error");
    }
}
