use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::server::{
    error::{auth::AuthError, Error},
    model::app::AppState,
};

/// The user a request's bearer token was issued for
///
/// Extracting this rejects the request with a 401 when the `Authorization` header is
/// missing, isn't a bearer token, or carries a token that fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i32,
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Error> {
        let token = bearer_token(parts).ok_or(AuthError::MissingToken)?;

        let user_id = state.tokens.authenticate(token)?;

        Ok(Self { user_id })
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
