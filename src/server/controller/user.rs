use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, favorite::FavoriteDto, user::UserDto},
    server::{
        controller::util::auth::AuthenticatedUser,
        error::Error,
        model::app::AppState,
        service::{favorite::FavoriteService, user::UserService},
    },
};

pub static USER_TAG: &str = "user";

/// List every registered user
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Every registered user", body = Vec<UserDto>),
        (status = 401, description = "Missing, invalid or expired bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    _user: AuthenticatedUser,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).list_users().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// List the authenticated user's favorite planets & characters
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The user's favorites in the order they were added", body = Vec<FavoriteDto>),
        (status = 401, description = "Missing, invalid or expired bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    user: AuthenticatedUser,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db)
        .list_favorites(user.user_id)
        .await?;

    Ok((StatusCode::OK, Json(favorites)))
}
