//! Password hashing and verification.
//!
//! Passwords are hashed with Argon2id and stored as PHC strings. The PHC
//! encoding carries the algorithm identifier, cost parameters, and salt, so
//! verification needs nothing beyond the stored string itself. Cost parameters
//! can be raised later without invalidating hashes already on disk.
//!
//! Plaintext passwords are transient: they are hashed or verified and then
//! dropped, never persisted and never logged.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

/// Errors from password hashing and verification.
///
/// A stored hash that fails to parse is reported as [`PasswordError::MalformedHash`],
/// distinct from a well-formed hash that simply does not match the supplied
/// password (which is an `Ok(false)` from [`verify_password`], not an error).
#[derive(Debug, Error, PartialEq)]
pub enum PasswordError {
    /// The stored hash string is not a valid PHC string.
    #[error("malformed password hash")]
    MalformedHash,

    /// Hashing itself failed.
    #[error("failed to hash password: {0}")]
    Hashing(String),
}

/// Hash a password using Argon2id.
///
/// Generates a fresh random salt per call, so hashing the same password twice
/// yields two different strings that both verify.
///
/// # Returns
///
/// The PHC-formatted hash string (e.g. `$argon2id$v=19$m=19456,t=2,p=1$...`).
pub fn hash_password(plain: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::Hashing(e.to_string()))
}

/// Verify a password against a stored PHC hash.
///
/// Recomputes the digest with the parameters embedded in `hash` and compares
/// in constant time.
///
/// # Returns
///
/// * `Ok(true)` - the password matches
/// * `Ok(false)` - the hash is well-formed but the password does not match
/// * `Err(PasswordError::MalformedHash)` - the stored hash cannot be parsed
pub fn verify_password(hash: &str, plain: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| PasswordError::MalformedHash)?;

    match Argon2::default().verify_password(plain.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        // Well-formed PHC string, but with parameters we cannot run (corrupt
        // data rather than a failed login).
        Err(_) => Err(PasswordError::MalformedHash),
    }
}
