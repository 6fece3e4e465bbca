//! HTTP controller endpoints for the Holocron API.
//!
//! Axum handlers that parse paths & bodies, authenticate the caller through the
//! [`AuthenticatedUser`](util::auth::AuthenticatedUser) extractor, call into the service
//! layer and map the result to a JSON response. Every handler is annotated for the
//! generated OpenAPI document.

pub mod auth;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod util;
