//! Error types for the checklist client.

use reqwest::StatusCode;
use thiserror::Error;

/// Unified error type for the checklist client.
///
/// Every remote failure (transport error or non-success status) is treated
/// the same way by the workflow: logged, surfaced once as a notice, and
/// otherwise ignored. The variants only exist so the log line can say what
/// went wrong.
#[derive(Error, Debug)]
pub enum ChecklistError {
    /// The request never produced a response.
    #[error("request to {endpoint} failed: {source}")]
    Request {
        /// Endpoint that was called.
        endpoint: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("request to {endpoint} returned {status}")]
    Status {
        /// Endpoint that was called.
        endpoint: String,
        /// Returned HTTP status.
        status: StatusCode,
    },

    /// The response body could not be decoded.
    #[error("invalid response from {endpoint}: {reason}")]
    Decode {
        /// Endpoint that was called.
        endpoint: String,
        /// Decoder message.
        reason: String,
    },

    /// Simulated failure raised by the in-memory backend.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// The backend base URL could not be parsed.
    #[error("invalid backend url {url}: {reason}")]
    InvalidUrl {
        /// Offending URL.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// Nickname submission was empty or whitespace only.
    #[error("Please enter a nickname")]
    EmptyNickname,

    /// A toggle was attempted without a stored nickname while tracking is on.
    #[error("Please set a nickname before checking APIs")]
    IdentityRequired,

    /// No rendered control matches the requested item.
    #[error("no checklist item {0}")]
    UnknownItem(String),

    /// Local identity storage failed.
    #[error("identity storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Local identity file could not be (de)serialized.
    #[error("identity format error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChecklistError {
    /// Returns `true` for failures of a backend call.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            ChecklistError::Request { .. }
                | ChecklistError::Status { .. }
                | ChecklistError::Decode { .. }
                | ChecklistError::Unavailable(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_and_local_failures_are_told_apart() {
        let status = ChecklistError::Status {
            endpoint: "/check".into(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert!(status.is_remote());
        assert!(ChecklistError::Unavailable("groups".into()).is_remote());

        assert!(!ChecklistError::EmptyNickname.is_remote());
        assert!(!ChecklistError::IdentityRequired.is_remote());
        assert!(!ChecklistError::UnknownItem("#9".into()).is_remote());
    }
}
