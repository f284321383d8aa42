//! Admin authentication service.
//!
//! Login only: admin accounts are seeded directly in the backend and
//! never managed from here.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};
use thiserror::Error;

use cabella_backend::db::AdminRepository;
use cabella_backend::{BackendClient, BackendError};
use cabella_core::Email;

/// Errors that can occur during admin authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] cabella_core::EmailError),

    /// Invalid credentials (wrong password or unknown email).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Data service error.
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}

/// Admin authentication service.
pub struct AuthService<'a> {
    admins: AdminRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(backend: &'a BackendClient) -> Self {
        Self {
            admins: AdminRepository::new(backend),
        }
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email is unknown or
    /// the password is wrong; the two cases are indistinguishable to the
    /// caller.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<cabella_backend::models::Admin, AuthError> {
        let email = Email::parse(email)?;

        let admin = self
            .admins
            .get_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &admin.password_hash)?;

        Ok(admin)
    }
}

/// Verify a password against a stored Argon2id hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use argon2::password_hash::{PasswordHasher, SaltString, rand_core::OsRng};

    use super::*;

    #[test]
    fn test_verify_password_roundtrip() {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(b"admin-mdp", &salt)
            .unwrap()
            .to_string();

        assert!(verify_password("admin-mdp", &hash).is_ok());
        assert!(verify_password("autre-mdp", &hash).is_err());
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(matches!(
            verify_password("whatever", "plaintext-password"),
            Err(AuthError::InvalidCredentials)
        ));
    }
}
