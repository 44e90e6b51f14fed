//! Password hashing, verification and login tokens
//!
//! New passwords are stored as Argon2id PHC strings. Rows written by the
//! old web client hold `base64(email + password)` instead; those are still
//! accepted at login and compared in constant time.
//!
//! The login token is `base64("{id}:{email}")`. It identifies the student
//! to the client and is not a bearer credential.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use subtle::ConstantTimeEq;

/// PHC prefix of hashes produced by [`hash_password`]
const ARGON2_PREFIX: &str = "$argon2";

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("password hashing failed: {0}")]
    Hashing(String),
}

/// Hash a password with Argon2id and a random salt.
pub fn hash_password(password: &str) -> Result<String, CredentialError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| CredentialError::Hashing(e.to_string()))
}

/// Pick the value to store for a student's password.
///
/// A plaintext password wins over a client-supplied hash.
pub fn stored_hash(
    plaintext: Option<&str>,
    supplied_hash: Option<&str>,
) -> Result<Option<String>, CredentialError> {
    match (plaintext, supplied_hash) {
        (Some(plain), _) => hash_password(plain).map(Some),
        (None, hash) => Ok(hash.map(str::to_owned)),
    }
}

/// Check a login attempt against the stored hash.
pub fn verify_password(email: &str, password: &str, stored: &str) -> bool {
    if stored.starts_with(ARGON2_PREFIX) {
        return match PasswordHash::new(stored) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!(error = %e, "stored password hash is not a valid PHC string");
                false
            }
        };
    }

    let expected = legacy_encoding(email, password);
    expected.as_bytes().ct_eq(stored.as_bytes()).into()
}

/// Encoding used by the old web client: `base64(email + password)`.
pub fn legacy_encoding(email: &str, password: &str) -> String {
    STANDARD.encode(format!("{email}{password}"))
}

/// Token returned by a successful login.
pub fn issue_token(student_id: i32, email: &str) -> String {
    STANDARD.encode(format!("{student_id}:{email}"))
}

/// Split a login token back into student id and email.
pub fn decode_token(token: &str) -> Option<(i32, String)> {
    let bytes = STANDARD.decode(token).ok()?;
    let text = String::from_utf8(bytes).ok()?;
    let (id, email) = text.split_once(':')?;
    Some((id.parse().ok()?, email.to_owned()))
}
