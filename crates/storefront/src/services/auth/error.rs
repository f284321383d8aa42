//! Authentication error types.

use thiserror::Error;

use cabella_backend::BackendError;

/// Errors that can occur during client authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] cabella_core::EmailError),

    /// Invalid credentials (wrong password or unknown email).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// An account with this email already exists.
    #[error("email already registered")]
    EmailTaken,

    /// Password too weak, or the confirmation did not match.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Data service error.
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
