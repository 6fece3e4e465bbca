use argon2::{
    password_hash::{PasswordHash, PasswordVerifier},
    Argon2,
};

use crate::server::error::Error;

/// Verify a password against a PHC-format Argon2 hash string.
///
/// # Returns
/// - `Ok(true)` - Password matches the hash
/// - `Ok(false)` - Password does not match
/// - `Err(Error::PasswordHashError)` - The stored hash could not be parsed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, Error> {
    let parsed_hash = PasswordHash::new(hash).map_err(Error::PasswordHashError)?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
