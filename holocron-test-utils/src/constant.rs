//! Constant values shared across tests.
//!
//! These are placeholder values for testing purposes, never real credentials.

/// Secret used to sign bearer tokens in tests
pub static TEST_JWT_SECRET: &str = "holocron-test-secret";

/// Password of every user created with `insert_mock_user`
pub static MOCK_PASSWORD: &str = "maytheforcebewithyou";
