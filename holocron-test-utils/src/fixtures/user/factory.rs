//! Factory functions for user test values.

use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use password_hash::rand_core::OsRng;

/// Hash a password with Argon2id default parameters, returning a PHC-format string
pub fn hash_password(password: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .expect("hashing a test password should not fail")
        .to_string()
}

/// Email of the mock user numbered `n`
pub fn mock_email(n: u32) -> String {
    format!("user{}@holocron.test", n)
}
