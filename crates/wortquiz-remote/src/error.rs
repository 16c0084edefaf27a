//! Remote fetch error types.

use thiserror::Error;

/// Errors from talking to a remote vocabulary source.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("source returned HTTP {status}")]
    HttpStatus { status: u16 },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    Network(String),

    /// The body was not what the protocol promises.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl FetchError {
    /// True when the remote could not be reached at all, as opposed to
    /// answering with a broken payload.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            FetchError::HttpStatus { .. } | FetchError::Timeout(_) | FetchError::Network(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert!(FetchError::HttpStatus { status: 404 }.is_unavailable());
        assert!(FetchError::Timeout(30).is_unavailable());
        assert!(FetchError::Network("dns".into()).is_unavailable());
        assert!(!FetchError::MalformedResponse("not json".into()).is_unavailable());
    }

    #[test]
    fn display_names_the_status() {
        assert_eq!(
            FetchError::HttpStatus { status: 503 }.to_string(),
            "source returned HTTP 503"
        );
    }
}
