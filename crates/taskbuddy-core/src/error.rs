//! Error types for taskbuddy-core
//!
//! Logout is the only fallible operation the header performs; its failures are
//! described by [`AuthError`].

use thiserror::Error;

/// Failure reported by the auth collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("No user is signed in")]
    NotSignedIn,

    #[error("Logout rejected: {reason}")]
    Rejected { reason: String },

    #[error("Auth service unavailable: {message}")]
    Unavailable { message: String },
}

impl AuthError {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}
