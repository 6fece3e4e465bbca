use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holocron::{
    model::character::{
        CharacterDeletedDto, CharacterDto, CharacterWrittenDto, CreateCharacterDto,
        UpdateCharacterDto,
    },
    server::{
        controller::character::{
            create_character, delete_character, get_character, get_characters, update_character,
        },
        error::Error,
        model::uow::UnitOfWork,
    },
};

use super::*;

fn luke() -> CreateCharacterDto {
    CreateCharacterDto {
        name: Some("Luke".to_string()),
        species: Some("Human".to_string()),
        homeworld: Some("Tatooine".to_string()),
        gender: None,
    }
}

/// Expect create, get, delete & get to return 201, 200, 200 & 404
#[tokio::test]
async fn character_lifecycle() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let state = test.into_app_state();

    let uow = UnitOfWork::begin(&state.db).await.unwrap();
    let resp = create_character(as_user(1), uow, Ok(Json(luke())))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: CharacterWrittenDto = json_body(resp).await;
    assert_eq!(created.character_id, 1);
    assert_eq!(created.name, "Luke");
    assert_eq!(created.message, "Character added successfully");

    let resp = get_character(as_user(1), State(state.clone()), Ok(Path(1)))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let character: CharacterDto = json_body(resp).await;
    assert_eq!(
        character,
        CharacterDto {
            character_id: 1,
            name: "Luke".to_string(),
            species: "Human".to_string(),
            homeworld: "Tatooine".to_string(),
            gender: None,
        }
    );

    let uow = UnitOfWork::begin(&state.db).await.unwrap();
    let resp = delete_character(as_user(1), Ok(Path(1)), uow)
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let deleted: CharacterDeletedDto = json_body(resp).await;
    assert_eq!(deleted.character_id, 1);

    let result = get_character(as_user(1), State(state), Ok(Path(1))).await;
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect characters ordered by ID
#[tokio::test]
async fn lists_characters() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_character("Rey")
        .with_mock_character("Finn")
        .build()
        .await?;

    let resp = get_characters(as_user(1), State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();

    let characters: Vec<CharacterDto> = json_body(resp).await;
    let names: Vec<&str> = characters.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Rey", "Finn"]);

    Ok(())
}

/// Expect 400 when an update blanks a required field, leaving the character unchanged
#[tokio::test]
async fn update_rejects_blank_field() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let character = test.character().insert_mock_character("Lando").await?;
    let state = test.into_app_state();

    let body = UpdateCharacterDto {
        name: Some("  ".to_string()),
        ..Default::default()
    };
    let uow = UnitOfWork::begin(&state.db).await.unwrap();
    let result = update_character(as_user(1), Ok(Path(character.id)), uow, Ok(Json(body))).await;

    let err = result.err().unwrap();
    assert!(matches!(err, Error::ValidationError(_)));
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

    let resp = get_character(as_user(1), State(state), Ok(Path(character.id)))
        .await
        .unwrap()
        .into_response();
    let stored: CharacterDto = json_body(resp).await;
    assert_eq!(stored.name, "Lando");

    Ok(())
}

/// Expect 200 with the new name in the response
#[tokio::test]
async fn update_returns_new_name() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let character = test.character().insert_mock_character("Ben").await?;
    let state = test.into_app_state();

    let body = UpdateCharacterDto {
        name: Some("Kylo Ren".to_string()),
        gender: Some(Some("male".to_string())),
        ..Default::default()
    };
    let uow = UnitOfWork::begin(&state.db).await.unwrap();
    let resp = update_character(as_user(1), Ok(Path(character.id)), uow, Ok(Json(body)))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let written: CharacterWrittenDto = json_body(resp).await;
    assert_eq!(written.character_id, character.id);
    assert_eq!(written.name, "Kylo Ren");
    assert_eq!(written.message, "Character updated successfully");

    Ok(())
}

/// Expect 404 when deleting a character that does not exist
#[tokio::test]
async fn delete_fails_for_nonexistent_character() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let state = test.into_app_state();

    let uow = UnitOfWork::begin(&state.db).await.unwrap();
    let result = delete_character(as_user(1), Ok(Path(1)), uow).await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}
