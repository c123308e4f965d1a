//! Password hashing and credential checks.
//!
//! Argon2 with a random salt per password; the PHC string stored in the
//! users table carries everything verification needs.

use crate::store::AuraStore;
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid username or password!")]
    InvalidCredentials,

    #[error("Username already exists!")]
    UserAlreadyExists,

    #[error("Username and password must not be empty!")]
    EmptyCredentials,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Hash a password for storage.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Internal(format!("Password hashing failed: {}", e)))
}

/// Verify a password against a stored PHC hash string.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Register a new user.
pub fn register_user(store: &AuraStore, username: &str, password: &str) -> Result<(), AuthError> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(AuthError::EmptyCredentials);
    }

    let hash = hash_password(password)?;
    let created = store
        .create_user(username, &hash)
        .map_err(|e| AuthError::Internal(e.to_string()))?;

    if created {
        Ok(())
    } else {
        Err(AuthError::UserAlreadyExists)
    }
}

/// Check a login attempt.
pub fn login_user(store: &AuraStore, username: &str, password: &str) -> Result<(), AuthError> {
    let hash = store
        .password_hash(username)
        .map_err(|e| AuthError::Internal(e.to_string()))?
        .ok_or(AuthError::InvalidCredentials)?;

    if verify_password(password, &hash) {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials)
    }
}
