use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use holocron::{
    model::auth::{TokenDto, TokenRequestDto},
    server::{
        controller::auth::create_token,
        error::{auth::AuthError, Error},
    },
};

use super::*;

fn credentials(email: &str, password: &str) -> TokenRequestDto {
    TokenRequestDto {
        email: Some(email.to_string()),
        password: Some(password.to_string()),
    }
}

/// Expect 200 with a token that authenticates as the user
#[tokio::test]
async fn issues_token_for_valid_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("han@falcon.net", "Han", "kesselrun")
        .build()
        .await?;
    let state = test.into_app_state();

    let result = create_token(
        State(state.clone()),
        Ok(Json(credentials("han@falcon.net", "kesselrun"))),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: TokenDto = json_body(resp).await;
    assert_eq!(state.tokens.authenticate(&body.token), Ok(1));

    Ok(())
}

/// Expect 401 for a wrong password
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("han@falcon.net", "Han", "kesselrun")
        .build()
        .await?;

    let result = create_token(
        State(test.into_app_state()),
        Ok(Json(credentials("han@falcon.net", "twelve parsecs"))),
    )
    .await;

    let err = result.err().unwrap();
    assert!(matches!(
        err,
        Error::AuthError(AuthError::InvalidCredentials)
    ));
    assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 400 naming each missing field
#[tokio::test]
async fn rejects_missing_fields() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let result = create_token(
        State(test.into_app_state()),
        Ok(Json(TokenRequestDto::default())),
    )
    .await;

    match result.err().unwrap() {
        Error::ValidationError(message) => {
            assert_eq!(message, "Missing required fields: email, password")
        }
        err => panic!("expected validation error, got {:?}", err),
    }

    Ok(())
}

/// Expect a whitespace password to be checked against the stored hash, not rejected as missing
#[tokio::test]
async fn checks_whitespace_password_as_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("han@falcon.net", "Han", "kesselrun")
        .build()
        .await?;

    let result = create_token(
        State(test.into_app_state()),
        Ok(Json(credentials("han@falcon.net", "   "))),
    )
    .await;

    assert!(matches!(
        result.err().unwrap(),
        Error::AuthError(AuthError::InvalidCredentials)
    ));

    Ok(())
}
