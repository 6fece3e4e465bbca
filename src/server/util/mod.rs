//! Utility functions and helpers for server operations.
//!
//! Password hash verification used when issuing tokens, and required field validation
//! shared by the planet & character request models.

pub mod password;
pub mod validation;
