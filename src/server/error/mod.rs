//! Error types for the Holocron server application.
//!
//! A single [`Error`] enum aggregates domain-specific errors (authentication, configuration)
//! and external library errors. Every variant maps to an HTTP response through its
//! `IntoResponse` implementation, so controllers simply return `Result<_, Error>` and use `?`.

pub mod auth;
pub mod config;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Main error type for the Holocron server application.
///
/// # Error Categories
/// - Client errors: validation, not found, conflict & authentication failures
/// - Server errors: configuration, database, token signing & password hash parsing
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (credentials, missing/invalid/expired bearer token).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Missing or malformed request input.
    #[error("{0}")]
    ValidationError(String),
    /// The requested planet, character or favorite does not exist.
    #[error("{0}")]
    NotFound(String),
    /// The request conflicts with existing data, such as favoriting an entity twice.
    #[error("{0}")]
    Conflict(String),
    /// Internal error indicating a bug in Holocron's code.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Failure to sign a bearer token.
    #[error(transparent)]
    TokenError(#[from] jsonwebtoken::errors::Error),
    /// A stored password hash could not be parsed.
    #[error("Invalid stored password hash: {0}")]
    PasswordHashError(argon2::password_hash::Error),
    /// Failure binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::ValidationError(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Self::ValidationError(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation errors & conflicts
/// - 401 Unauthorized - Authentication errors
/// - 404 Not Found - Missing planets, characters or favorites
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(message) | Self::Conflict(message) => {
                tracing::debug!("Bad request: {}", message);

                client_error(StatusCode::BAD_REQUEST, message)
            }
            Self::NotFound(message) => {
                tracing::debug!("Not found: {}", message);

                client_error(StatusCode::NOT_FOUND, message)
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn client_error(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorDto { error: message })).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
