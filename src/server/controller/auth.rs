use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{TokenDto, TokenRequestDto},
    },
    server::{
        error::Error, model::app::AppState, service::auth::login::LoginService,
        util::validation::RequiredFields,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Exchange email & password for a bearer token valid for one hour
#[utoipa::path(
    post,
    path = "/token",
    tag = AUTH_TAG,
    request_body = TokenRequestDto,
    responses(
        (status = 200, description = "Credentials accepted", body = TokenDto),
        (status = 400, description = "Missing email or password, or malformed body", body = ErrorDto),
        (status = 401, description = "Email or password is incorrect", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_token(
    State(state): State<AppState>,
    body: Result<Json<TokenRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(credentials) = body?;

    let mut required = RequiredFields::new();
    let email = required.take("email", credentials.email);
    let password = required.take_verbatim("password", credentials.password);
    required.finish()?;

    let login_service = LoginService::new(&state.db, &state.tokens);
    let token = login_service.issue_token(&email, &password).await?;

    Ok((StatusCode::OK, Json(TokenDto { token })))
}
