//! Shared error type across ownguard crates.

use thiserror::Error;

/// Caller-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The actor is the unauthenticated sentinel.
    Unauthenticated,
    /// Authenticated actor is not the document's author.
    Forbidden,
    /// Document store failure other than not-found.
    Backend,
    /// Malformed request or hook payload.
    BadRequest,
    /// Invalid engine configuration.
    Config,
}

impl ErrorCode {
    /// String representation used in host error payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Unauthenticated => "UNAUTHENTICATED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::Backend => "BACKEND",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::Config => "CONFIG",
        }
    }
}

/// Opaque store failure, carried through the engine untouched.
pub type BackendError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Shared result type.
pub type Result<T> = std::result::Result<T, PolicyError>;

/// Unified error type used by core and policy crates.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error(transparent)]
    Backend(BackendError),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("config: {0}")]
    Config(String),
}

impl PolicyError {
    /// Map internal error to a stable caller-facing code.
    pub fn code(&self) -> ErrorCode {
        match self {
            PolicyError::Unauthenticated(_) => ErrorCode::Unauthenticated,
            PolicyError::Forbidden(_) => ErrorCode::Forbidden,
            PolicyError::Backend(_) => ErrorCode::Backend,
            PolicyError::InvalidRequest(_) => ErrorCode::BadRequest,
            PolicyError::Config(_) => ErrorCode::Config,
        }
    }

    /// True for the two outcomes produced by an ownership denial.
    pub fn is_denial(&self) -> bool {
        matches!(
            self,
            PolicyError::Unauthenticated(_) | PolicyError::Forbidden(_)
        )
    }
}
