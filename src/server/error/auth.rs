use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email or password is incorrect")]
    InvalidCredentials,
    #[error("Request is missing a bearer token in the Authorization header")]
    MissingToken,
    #[error("Bearer token is invalid")]
    TokenInvalid,
    #[error("Bearer token has expired")]
    TokenExpired,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Authentication error: {}", self);

        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Bearer")],
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
