use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        character::{
            CharacterDeletedDto, CharacterDto, CharacterWrittenDto, CreateCharacterDto,
            UpdateCharacterDto,
        },
    },
    server::{
        controller::util::auth::AuthenticatedUser,
        error::Error,
        model::{
            app::AppState,
            character::{CharacterChanges, NewCharacter},
            uow::UnitOfWork,
        },
        service::character::CharacterService,
    },
};

pub static CHARACTER_TAG: &str = "character";

/// List every character ordered by ID
#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Every character", body = Vec<CharacterDto>),
        (status = 401, description = "Missing, invalid or expired bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(
    _user: AuthenticatedUser,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let characters = CharacterService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(characters)))
}

/// Get a single character
#[utoipa::path(
    get,
    path = "/character/{character_id}",
    tag = CHARACTER_TAG,
    security(("bearer_auth" = [])),
    params(("character_id" = i32, Path, description = "ID of the character")),
    responses(
        (status = 200, description = "The character", body = CharacterDto),
        (status = 401, description = "Missing, invalid or expired bearer token", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    _user: AuthenticatedUser,
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(character_id) = path?;
    let character = CharacterService::new(&state.db).get(character_id).await?;

    Ok((StatusCode::OK, Json(character)))
}

/// Create a character
#[utoipa::path(
    post,
    path = "/character",
    tag = CHARACTER_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateCharacterDto,
    responses(
        (status = 201, description = "Character created", body = CharacterWrittenDto),
        (status = 400, description = "Missing required fields or malformed body", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    _user: AuthenticatedUser,
    uow: UnitOfWork,
    body: Result<Json<CreateCharacterDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(body) = body?;
    let new_character = NewCharacter::try_from(body)?;

    let character = CharacterService::new(uow.conn()).create(new_character).await?;
    uow.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(CharacterWrittenDto {
            message: "Character added successfully".to_string(),
            character_id: character.character_id,
            name: character.name,
        }),
    ))
}

/// Update the provided fields of a character, fields not provided keep their value
#[utoipa::path(
    put,
    path = "/character/{character_id}",
    tag = CHARACTER_TAG,
    security(("bearer_auth" = [])),
    params(("character_id" = i32, Path, description = "ID of the character")),
    request_body = UpdateCharacterDto,
    responses(
        (status = 200, description = "Character updated", body = CharacterWrittenDto),
        (status = 400, description = "Blank field or malformed body", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired bearer token", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_character(
    _user: AuthenticatedUser,
    path: Result<Path<i32>, PathRejection>,
    uow: UnitOfWork,
    body: Result<Json<UpdateCharacterDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(character_id) = path?;
    let Json(body) = body?;
    let changes = CharacterChanges::try_from(body)?;

    let character = CharacterService::new(uow.conn())
        .update(character_id, changes)
        .await?;
    uow.commit().await?;

    Ok((
        StatusCode::OK,
        Json(CharacterWrittenDto {
            message: "Character updated successfully".to_string(),
            character_id: character.character_id,
            name: character.name,
        }),
    ))
}

/// Delete a character, removing it from every user's favorites
#[utoipa::path(
    delete,
    path = "/character/{character_id}",
    tag = CHARACTER_TAG,
    security(("bearer_auth" = [])),
    params(("character_id" = i32, Path, description = "ID of the character")),
    responses(
        (status = 200, description = "Character deleted", body = CharacterDeletedDto),
        (status = 401, description = "Missing, invalid or expired bearer token", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_character(
    _user: AuthenticatedUser,
    path: Result<Path<i32>, PathRejection>,
    uow: UnitOfWork,
) -> Result<impl IntoResponse, Error> {
    let Path(character_id) = path?;
    CharacterService::new(uow.conn()).delete(character_id).await?;
    uow.commit().await?;

    Ok((
        StatusCode::OK,
        Json(CharacterDeletedDto {
            message: "Character deleted successfully".to_string(),
            character_id,
        }),
    ))
}
