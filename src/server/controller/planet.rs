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
        planet::{
            CreatePlanetDto, PlanetDeletedDto, PlanetDto, PlanetWrittenDto, UpdatePlanetDto,
        },
    },
    server::{
        controller::util::auth::AuthenticatedUser,
        error::Error,
        model::{
            app::AppState,
            planet::{NewPlanet, PlanetChanges},
            uow::UnitOfWork,
        },
        service::planet::PlanetService,
    },
};

pub static PLANET_TAG: &str = "planet";

/// List every planet ordered by ID
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Every planet", body = Vec<PlanetDto>),
        (status = 401, description = "Missing, invalid or expired bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(
    _user: AuthenticatedUser,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let planets = PlanetService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a single planet
#[utoipa::path(
    get,
    path = "/planet/{planet_id}",
    tag = PLANET_TAG,
    security(("bearer_auth" = [])),
    params(("planet_id" = i32, Path, description = "ID of the planet")),
    responses(
        (status = 200, description = "The planet", body = PlanetDto),
        (status = 401, description = "Missing, invalid or expired bearer token", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    _user: AuthenticatedUser,
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(planet_id) = path?;
    let planet = PlanetService::new(&state.db).get(planet_id).await?;

    Ok((StatusCode::OK, Json(planet)))
}

/// Create a planet
#[utoipa::path(
    post,
    path = "/planet",
    tag = PLANET_TAG,
    security(("bearer_auth" = [])),
    request_body = CreatePlanetDto,
    responses(
        (status = 201, description = "Planet created", body = PlanetWrittenDto),
        (status = 400, description = "Missing required fields or malformed body", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    _user: AuthenticatedUser,
    uow: UnitOfWork,
    body: Result<Json<CreatePlanetDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(body) = body?;
    let new_planet = NewPlanet::try_from(body)?;

    let planet = PlanetService::new(uow.conn()).create(new_planet).await?;
    uow.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(PlanetWrittenDto {
            message: "Planet added successfully".to_string(),
            planet_id: planet.planet_id,
            name: planet.name,
        }),
    ))
}

/// Update the provided fields of a planet, fields not provided keep their value
#[utoipa::path(
    put,
    path = "/planet/{planet_id}",
    tag = PLANET_TAG,
    security(("bearer_auth" = [])),
    params(("planet_id" = i32, Path, description = "ID of the planet")),
    request_body = UpdatePlanetDto,
    responses(
        (status = 200, description = "Planet updated", body = PlanetWrittenDto),
        (status = 400, description = "Blank field or malformed body", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired bearer token", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_planet(
    _user: AuthenticatedUser,
    path: Result<Path<i32>, PathRejection>,
    uow: UnitOfWork,
    body: Result<Json<UpdatePlanetDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(planet_id) = path?;
    let Json(body) = body?;
    let changes = PlanetChanges::try_from(body)?;

    let planet = PlanetService::new(uow.conn())
        .update(planet_id, changes)
        .await?;
    uow.commit().await?;

    Ok((
        StatusCode::OK,
        Json(PlanetWrittenDto {
            message: "Planet updated successfully".to_string(),
            planet_id: planet.planet_id,
            name: planet.name,
        }),
    ))
}

/// Delete a planet, removing it from every user's favorites
#[utoipa::path(
    delete,
    path = "/planet/{planet_id}",
    tag = PLANET_TAG,
    security(("bearer_auth" = [])),
    params(("planet_id" = i32, Path, description = "ID of the planet")),
    responses(
        (status = 200, description = "Planet deleted", body = PlanetDeletedDto),
        (status = 401, description = "Missing, invalid or expired bearer token", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_planet(
    _user: AuthenticatedUser,
    path: Result<Path<i32>, PathRejection>,
    uow: UnitOfWork,
) -> Result<impl IntoResponse, Error> {
    let Path(planet_id) = path?;
    PlanetService::new(uow.conn()).delete(planet_id).await?;
    uow.commit().await?;

    Ok((
        StatusCode::OK,
        Json(PlanetDeletedDto {
            message: "Planet deleted successfully".to_string(),
            planet_id,
        }),
    ))
}
