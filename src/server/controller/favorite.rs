use axum::{
    extract::{rejection::PathRejection, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        favorite::{
            FavoriteCharacterAddedDto, FavoriteCharacterRemovedDto, FavoritePlanetAddedDto,
            FavoritePlanetRemovedDto,
        },
    },
    server::{
        controller::util::auth::AuthenticatedUser,
        error::Error,
        model::{favorite::FavoriteTarget, uow::UnitOfWork},
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// Add a planet to the authenticated user's favorites
#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    security(("bearer_auth" = [])),
    params(("planet_id" = i32, Path, description = "ID of the planet")),
    responses(
        (status = 201, description = "Planet added to favorites", body = FavoritePlanetAddedDto),
        (status = 400, description = "Planet is already in favorites", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired bearer token", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    user: AuthenticatedUser,
    path: Result<Path<i32>, PathRejection>,
    uow: UnitOfWork,
) -> Result<impl IntoResponse, Error> {
    let Path(planet_id) = path?;
    let favorite = FavoriteService::new(uow.conn())
        .add_favorite(user.user_id, FavoriteTarget::Planet(planet_id))
        .await?;
    uow.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(FavoritePlanetAddedDto {
            message: "Planet added to favorites".to_string(),
            planet_id,
            planet_name: favorite.name().to_string(),
        }),
    ))
}

/// Add a character to the authenticated user's favorites
#[utoipa::path(
    post,
    path = "/favorite/character/{character_id}",
    tag = FAVORITE_TAG,
    security(("bearer_auth" = [])),
    params(("character_id" = i32, Path, description = "ID of the character")),
    responses(
        (status = 201, description = "Character added to favorites", body = FavoriteCharacterAddedDto),
        (status = 400, description = "Character is already in favorites", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired bearer token", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_character(
    user: AuthenticatedUser,
    path: Result<Path<i32>, PathRejection>,
    uow: UnitOfWork,
) -> Result<impl IntoResponse, Error> {
    let Path(character_id) = path?;
    let favorite = FavoriteService::new(uow.conn())
        .add_favorite(user.user_id, FavoriteTarget::Character(character_id))
        .await?;
    uow.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(FavoriteCharacterAddedDto {
            message: "Character added to favorites".to_string(),
            character_id,
            character_name: favorite.name().to_string(),
        }),
    ))
}

/// Remove a planet from the authenticated user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    security(("bearer_auth" = [])),
    params(("planet_id" = i32, Path, description = "ID of the planet")),
    responses(
        (status = 200, description = "Planet removed from favorites", body = FavoritePlanetRemovedDto),
        (status = 401, description = "Missing, invalid or expired bearer token", body = ErrorDto),
        (status = 404, description = "Planet is not in favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    user: AuthenticatedUser,
    path: Result<Path<i32>, PathRejection>,
    uow: UnitOfWork,
) -> Result<impl IntoResponse, Error> {
    let Path(planet_id) = path?;
    FavoriteService::new(uow.conn())
        .remove_favorite(user.user_id, FavoriteTarget::Planet(planet_id))
        .await?;
    uow.commit().await?;

    Ok((
        StatusCode::OK,
        Json(FavoritePlanetRemovedDto {
            message: "Planet removed from favorites".to_string(),
            planet_id,
        }),
    ))
}

/// Remove a character from the authenticated user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/character/{character_id}",
    tag = FAVORITE_TAG,
    security(("bearer_auth" = [])),
    params(("character_id" = i32, Path, description = "ID of the character")),
    responses(
        (status = 200, description = "Character removed from favorites", body = FavoriteCharacterRemovedDto),
        (status = 401, description = "Missing, invalid or expired bearer token", body = ErrorDto),
        (status = 404, description = "Character is not in favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_character(
    user: AuthenticatedUser,
    path: Result<Path<i32>, PathRejection>,
    uow: UnitOfWork,
) -> Result<impl IntoResponse, Error> {
    let Path(character_id) = path?;
    FavoriteService::new(uow.conn())
        .remove_favorite(user.user_id, FavoriteTarget::Character(character_id))
        .await?;
    uow.commit().await?;

    Ok((
        StatusCode::OK,
        Json(FavoriteCharacterRemovedDto {
            message: "Character removed from favorites".to_string(),
            character_id,
        }),
    ))
}
