//! Server application core modules.
//!
//! This module contains all server-side functionality for Holocron: HTTP routing,
//! bearer token authentication, the per-request unit of work, database repositories and
//! the services implementing planet, character, user & favorite operations.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
