//! Test fixture modules for database record creation.
//!
//! Each submodule extends [`TestSetup`](crate::TestSetup) with a fixture accessor:
//!
//! - `user` - Users with Argon2 hashed passwords
//! - `planet` / `character` - Records with standard test values
//! - `favorite` - Raw favorite rows, including dangling ones

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
