use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holocron::{
    model::planet::{CreatePlanetDto, PlanetDeletedDto, PlanetDto, PlanetWrittenDto, UpdatePlanetDto},
    server::{
        controller::planet::{create_planet, delete_planet, get_planet, get_planets, update_planet},
        error::Error,
        model::uow::UnitOfWork,
    },
};

use super::*;

fn tatooine() -> CreatePlanetDto {
    CreatePlanetDto {
        name: Some("Tatooine".to_string()),
        climate: Some("arid".to_string()),
        terrain: Some("desert".to_string()),
        population: Some(200_000),
    }
}

/// Expect 201 and the stored planet to be readable with identical fields
#[tokio::test]
async fn create_then_get_returns_same_fields() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let user = test.user().insert_mock_user(1).await?;
    let state = test.into_app_state();

    let uow = UnitOfWork::begin(&state.db).await.unwrap();
    let resp = create_planet(as_user(user.id), uow, Ok(Json(tatooine())))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: PlanetWrittenDto = json_body(resp).await;
    assert_eq!(created.message, "Planet added successfully");
    assert_eq!(created.name, "Tatooine");

    let resp = get_planet(as_user(user.id), State(state), Ok(Path(created.planet_id)))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let planet: PlanetDto = json_body(resp).await;
    assert_eq!(
        planet,
        PlanetDto {
            planet_id: created.planet_id,
            name: "Tatooine".to_string(),
            climate: "arid".to_string(),
            terrain: "desert".to_string(),
            population: Some(200_000),
        }
    );

    Ok(())
}

/// Expect 400 naming the missing fields, without creating a planet
#[tokio::test]
async fn create_rejects_missing_fields() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let user = test.user().insert_mock_user(1).await?;
    let state = test.into_app_state();

    let body = CreatePlanetDto {
        name: Some("Hoth".to_string()),
        ..Default::default()
    };
    let uow = UnitOfWork::begin(&state.db).await.unwrap();
    let result = create_planet(as_user(user.id), uow, Ok(Json(body))).await;

    let err = result.err().unwrap();
    match &err {
        Error::ValidationError(message) => {
            assert_eq!(message, "Missing required fields: climate, terrain")
        }
        err => panic!("expected validation error, got {:?}", err),
    }
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

    let resp = get_planets(as_user(user.id), State(state))
        .await
        .unwrap()
        .into_response();
    let planets: Vec<PlanetDto> = json_body(resp).await;
    assert!(planets.is_empty());

    Ok(())
}

/// Expect planets ordered by ID
#[tokio::test]
async fn lists_planets() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_planet("Naboo")
        .with_mock_planet("Coruscant")
        .build()
        .await?;

    let resp = get_planets(as_user(1), State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let planets: Vec<PlanetDto> = json_body(resp).await;
    let names: Vec<&str> = planets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Naboo", "Coruscant"]);

    Ok(())
}

/// Expect 200 with only the provided fields changed
#[tokio::test]
async fn update_changes_provided_fields() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let planet = test.planet().insert_mock_planet("Geonosis").await?;
    let state = test.into_app_state();

    let body = UpdatePlanetDto {
        terrain: Some("rock, mesas".to_string()),
        ..Default::default()
    };
    let uow = UnitOfWork::begin(&state.db).await.unwrap();
    let resp = update_planet(as_user(1), Ok(Path(planet.id)), uow, Ok(Json(body)))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let written: PlanetWrittenDto = json_body(resp).await;
    assert_eq!(written.message, "Planet updated successfully");

    let resp = get_planet(as_user(1), State(state), Ok(Path(planet.id)))
        .await
        .unwrap()
        .into_response();
    let updated: PlanetDto = json_body(resp).await;
    assert_eq!(updated.name, "Geonosis");
    assert_eq!(updated.climate, planet.climate);
    assert_eq!(updated.terrain, "rock, mesas");

    Ok(())
}

/// Expect 404 when updating a planet that does not exist
#[tokio::test]
async fn update_fails_for_nonexistent_planet() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let state = test.into_app_state();

    let uow = UnitOfWork::begin(&state.db).await.unwrap();
    let result = update_planet(
        as_user(1),
        Ok(Path(1)),
        uow,
        Ok(Json(UpdatePlanetDto::default())),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 on delete and 404 when getting the planet afterwards
#[tokio::test]
async fn delete_then_get_is_not_found() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let planet = test.planet().insert_mock_planet("Alderaan").await?;
    let state = test.into_app_state();

    let uow = UnitOfWork::begin(&state.db).await.unwrap();
    let resp = delete_planet(as_user(1), Ok(Path(planet.id)), uow)
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let deleted: PlanetDeletedDto = json_body(resp).await;
    assert_eq!(deleted.message, "Planet deleted successfully");
    assert_eq!(deleted.planet_id, planet.id);

    let result = get_planet(as_user(1), State(state), Ok(Path(planet.id))).await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
