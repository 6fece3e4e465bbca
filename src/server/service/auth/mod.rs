//! Authentication service layer.
//!
//! [`login`] checks credentials and issues bearer tokens, [`token`] signs and validates
//! them.

pub mod login;
pub mod token;
