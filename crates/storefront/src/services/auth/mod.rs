//! Client authentication service.
//!
//! Registration, login and profile updates over the `clients` table.
//! Passwords are stored as Argon2id hashes; the hash never leaves this
//! module.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use cabella_backend::db::ClientRepository;
use cabella_backend::models::{Client, ClientPatch, NewClient};
use cabella_backend::{BackendClient, BackendError};
use cabella_core::{ClientId, Email};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Registration input, as submitted by the signup form.
#[derive(Debug)]
pub struct RegisterInput<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub password_confirm: &'a str,
    pub name: &'a str,
    pub phone: Option<&'a str>,
    pub address: Option<&'a str>,
}

/// Client authentication service.
pub struct AuthService<'a> {
    clients: ClientRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(backend: &'a BackendClient) -> Self {
        Self {
            clients: ClientRepository::new(backend),
        }
    }

    /// Register a new client account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password is too short or
    /// the confirmation does not match.
    /// Returns `AuthError::EmailTaken` if the email is already registered.
    pub async fn register(&self, input: RegisterInput<'_>) -> Result<Client, AuthError> {
        let email = Email::parse(input.email)?;
        validate_password(input.password, input.password_confirm)?;

        // Checked up front for the friendly message; the insert below
        // still races, so a unique-violation maps to the same error.
        if self.clients.email_exists(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = hash_password(input.password)?;

        let client = self
            .clients
            .insert(&NewClient {
                email,
                password_hash,
                name: input.name.to_owned(),
                phone: input.phone.map(str::to_owned),
                address: input.address.map(str::to_owned),
            })
            .await
            .map_err(|e| match e {
                BackendError::Conflict(_) => AuthError::EmailTaken,
                other => AuthError::Backend(other),
            })?;

        Ok(client)
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email is unknown or
    /// the password is wrong; the two cases are indistinguishable to the
    /// caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<Client, AuthError> {
        let email = Email::parse(email)?;

        let client = self
            .clients
            .get_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &client.password_hash)?;

        Ok(client)
    }

    /// Apply a profile patch and return the updated account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Backend` if the update fails.
    pub async fn update_profile(
        &self,
        id: ClientId,
        patch: &ClientPatch,
    ) -> Result<Client, AuthError> {
        let client = self.clients.update_profile(id, patch).await?;
        Ok(client)
    }
}

/// Validate password length and confirmation.
fn validate_password(password: &str, password_confirm: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "Le mot de passe doit contenir au moins {MIN_PASSWORD_LENGTH} caractères"
        )));
    }
    if password != password_confirm {
        return Err(AuthError::WeakPassword(
            "Les mots de passe ne correspondent pas".to_string(),
        ));
    }
    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored hash.
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
    use super::*;

    #[test]
    fn test_validate_password_too_short() {
        let err = validate_password("abc", "abc").unwrap_err();
        assert!(matches!(err, AuthError::WeakPassword(msg) if msg.contains('6')));
    }

    #[test]
    fn test_validate_password_mismatch() {
        let err = validate_password("abcdef", "abcdeg").unwrap_err();
        assert!(matches!(
            err,
            AuthError::WeakPassword(msg) if msg == "Les mots de passe ne correspondent pas"
        ));
    }

    #[test]
    fn test_validate_password_accepts_six_chars() {
        assert!(validate_password("abcdef", "abcdef").is_ok());
    }

    #[test]
    fn test_hash_then_verify_roundtrip() {
        let hash = hash_password("trèsbon-mdp").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("trèsbon-mdp", &hash).is_ok());
        assert!(verify_password("mauvais-mdp", &hash).is_err());
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(matches!(
            verify_password("whatever", "not-a-phc-string"),
            Err(AuthError::InvalidCredentials)
        ));
    }
}
