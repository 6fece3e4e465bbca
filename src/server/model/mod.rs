//! Server application models and type definitions.
//!
//! This module contains the application state shared by all handlers, database model type
//! aliases, the per-request unit of work and the domain types that sit between request
//! bodies and database rows (validated inputs & the tagged favorite target).

pub mod app;
pub mod character;
pub mod db;
pub mod favorite;
pub mod planet;
pub mod uow;
pub mod user;
