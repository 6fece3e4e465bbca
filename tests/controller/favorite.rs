use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{
    model::favorite::{
        FavoriteCharacterAddedDto, FavoriteCharacterRemovedDto, FavoriteDto,
        FavoritePlanetAddedDto, FavoritePlanetRemovedDto,
    },
    server::{
        controller::{
            favorite::{
                add_favorite_character, add_favorite_planet, remove_favorite_character,
                remove_favorite_planet,
            },
            planet::delete_planet,
            user::get_user_favorites,
        },
        error::Error,
        model::uow::UnitOfWork,
    },
};

use super::*;

/// Expect 201 with the planet's name
#[tokio::test]
async fn adds_planet_to_favorites() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let user = test.user().insert_mock_user(1).await?;
    let planet = test.planet().insert_mock_planet("Jakku").await?;
    let state = test.into_app_state();

    let uow = UnitOfWork::begin(&state.db).await.unwrap();
    let resp = add_favorite_planet(as_user(user.id), Ok(Path(planet.id)), uow)
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: FavoritePlanetAddedDto = json_body(resp).await;
    assert_eq!(body.message, "Planet added to favorites");
    assert_eq!(body.planet_id, planet.id);
    assert_eq!(body.planet_name, "Jakku");

    Ok(())
}

/// Expect 400 when favoriting the same character twice
#[tokio::test]
async fn rejects_duplicate_character_favorite() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let user = test.user().insert_mock_user(1).await?;
    let character = test.character().insert_mock_character("R2-D2").await?;
    let state = test.into_app_state();

    let uow = UnitOfWork::begin(&state.db).await.unwrap();
    let resp = add_favorite_character(as_user(user.id), Ok(Path(character.id)), uow)
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: FavoriteCharacterAddedDto = json_body(resp).await;
    assert_eq!(body.character_name, "R2-D2");

    let uow = UnitOfWork::begin(&state.db).await.unwrap();
    let result = add_favorite_character(as_user(user.id), Ok(Path(character.id)), uow).await;

    let err = result.err().unwrap();
    assert!(matches!(err, Error::Conflict(_)));
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 when favoriting a planet that does not exist
#[tokio::test]
async fn fails_for_nonexistent_planet() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let user = test.user().insert_mock_user(1).await?;
    let state = test.into_app_state();

    let uow = UnitOfWork::begin(&state.db).await.unwrap();
    let result = add_favorite_planet(as_user(user.id), Ok(Path(1)), uow).await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect 200 on removal, then 404 when removing again
#[tokio::test]
async fn removes_favorites() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let user = test.user().insert_mock_user(1).await?;
    let planet = test.planet().insert_mock_planet("Scarif").await?;
    let character = test.character().insert_mock_character("Jyn").await?;
    let state = test.into_app_state();

    let uow = UnitOfWork::begin(&state.db).await.unwrap();
    add_favorite_planet(as_user(user.id), Ok(Path(planet.id)), uow)
        .await
        .unwrap();
    let uow = UnitOfWork::begin(&state.db).await.unwrap();
    add_favorite_character(as_user(user.id), Ok(Path(character.id)), uow)
        .await
        .unwrap();

    let uow = UnitOfWork::begin(&state.db).await.unwrap();
    let resp = remove_favorite_planet(as_user(user.id), Ok(Path(planet.id)), uow)
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: FavoritePlanetRemovedDto = json_body(resp).await;
    assert_eq!(body.message, "Planet removed from favorites");

    let uow = UnitOfWork::begin(&state.db).await.unwrap();
    let resp = remove_favorite_character(as_user(user.id), Ok(Path(character.id)), uow)
        .await
        .unwrap()
        .into_response();
    let body: FavoriteCharacterRemovedDto = json_body(resp).await;
    assert_eq!(body.character_id, character.id);

    let uow = UnitOfWork::begin(&state.db).await.unwrap();
    let result = remove_favorite_planet(as_user(user.id), Ok(Path(planet.id)), uow).await;
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect a deleted planet to disappear from every user's favorites
#[tokio::test]
async fn deleting_planet_removes_it_from_favorites() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let luke = test.user().insert_mock_user(1).await?;
    let leia = test.user().insert_mock_user(2).await?;
    let planet = test.planet().insert_mock_planet("Starkiller Base").await?;
    let state = test.into_app_state();

    for user_id in [luke.id, leia.id] {
        let uow = UnitOfWork::begin(&state.db).await.unwrap();
        add_favorite_planet(as_user(user_id), Ok(Path(planet.id)), uow)
            .await
            .unwrap();
    }

    let uow = UnitOfWork::begin(&state.db).await.unwrap();
    delete_planet(as_user(luke.id), Ok(Path(planet.id)), uow)
        .await
        .unwrap();

    for user_id in [luke.id, leia.id] {
        let resp = get_user_favorites(as_user(user_id), State(state.clone()))
            .await
            .unwrap()
            .into_response();
        let favorites: Vec<FavoriteDto> = json_body(resp).await;
        assert!(favorites.is_empty());
    }

    Ok(())
}
