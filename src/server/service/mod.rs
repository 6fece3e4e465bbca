//! Service layer for business logic.
//!
//! Services coordinate repositories within a single connection or unit of work, turn
//! missing records into [`Error::NotFound`](crate::server::error::Error::NotFound) and
//! enforce the favorites rules. Authentication lives in [`auth`].

pub mod auth;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
