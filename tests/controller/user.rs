use axum::{extract::State, http::StatusCode, response::IntoResponse};
use entity::sea_orm_active_enums::FavoriteType;
use holocron::{
    model::{favorite::FavoriteDto, user::UserDto},
    server::controller::user::{get_user_favorites, get_users},
};

use super::*;

/// Expect every user without exposing password hashes
#[tokio::test]
async fn lists_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("luke@tatooine.net", "Luke", "usetheforce")
        .with_user("leia@alderaan.gov", "Leia", "hope")
        .build()
        .await?;

    let resp = get_users(as_user(1), State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let users: Vec<serde_json::Value> = json_body(resp).await;
    assert_eq!(users.len(), 2);
    for user in &users {
        assert!(user.get("password_hash").is_none());
        assert!(user.get("user_creation_date").is_some());
    }
    let users: Vec<UserDto> = serde_json::from_value(serde_json::Value::Array(users))?;
    assert_eq!(users[0].email, "luke@tatooine.net");
    assert_eq!(users[1].username, "Leia");

    Ok(())
}

/// Expect only the caller's favorites, skipping ones whose target is gone
#[tokio::test]
async fn lists_own_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("luke@tatooine.net", "Luke", "usetheforce")
        .with_user("leia@alderaan.gov", "Leia", "hope")
        .with_mock_planet("Dagobah")
        .with_mock_character("Yoda")
        .with_favorite(1, FavoriteType::Planet, 1)
        .with_favorite(1, FavoriteType::Character, 1)
        .with_favorite(1, FavoriteType::Character, 99)
        .with_favorite(2, FavoriteType::Character, 1)
        .build()
        .await?;

    let resp = get_user_favorites(as_user(1), State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let favorites: Vec<FavoriteDto> = json_body(resp).await;
    assert_eq!(
        favorites,
        vec![
            FavoriteDto::Planet {
                planet_id: 1,
                name: "Dagobah".to_string()
            },
            FavoriteDto::Character {
                character_id: 1,
                name: "Yoda".to_string()
            },
        ]
    );

    Ok(())
}
