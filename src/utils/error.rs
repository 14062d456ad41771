//! Error handling for the authorization core
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for the authorization core
pub type Result<T> = std::result::Result<T, AuthzError>;

/// Main error type for the authorization core
///
/// Denial variants carry deliberately generic messages: which permission was
/// missing or which ownership rule fired is reported to the audit sink only,
/// never across the trust boundary.
#[derive(Error, Debug)]
pub enum AuthzError {
    /// No authenticated principal was resolved for the request
    #[error("authentication required")]
    Unauthenticated,

    /// The principal is authenticated but the permission or ownership check failed
    #[error("access denied")]
    Forbidden,

    /// Entity-level denial masked as absence, so callers cannot confirm the
    /// existence of records they have no visibility rights to
    #[error("not found")]
    NotFound,

    /// An operation declared an invalid permission requirement; this is a
    /// programming error surfaced at registration time, not a request error
    #[error("misconfigured permission requirement: {0}")]
    MisconfiguredRequirement(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Authentication collaborator errors
    #[error("authentication error: {0}")]
    Auth(String),

    /// Audit sink errors
    #[error("audit error: {0}")]
    Audit(String),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AuthzError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an authentication collaborator error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Create an audit sink error
    pub fn audit(message: impl Into<String>) -> Self {
        Self::Audit(message.into())
    }

    /// Create a misconfigured requirement error
    pub fn misconfigured(message: impl Into<String>) -> Self {
        Self::MisconfiguredRequirement(message.into())
    }

    /// Whether this error is an ordinary denial outcome rather than a fault
    pub fn is_denial(&self) -> bool {
        matches!(
            self,
            Self::Unauthenticated | Self::Forbidden | Self::NotFound
        )
    }

    /// HTTP status code equivalent for the consuming request layer
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Unauthenticated | Self::Auth(_) => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::MisconfiguredRequirement(_)
            | Self::Config(_)
            | Self::Audit(_)
            | Self::Serialization(_) => 500,
        }
    }
}
