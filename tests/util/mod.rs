//! Helpers shared by the integration tests.

use axum::{body::Body, response::Response};
use holocron::server::{controller::util::auth::AuthenticatedUser, model::app::AppState};
use holocron_test_utils::TestSetup;
use serde::de::DeserializeOwned;

/// Extension trait for building application state & credentials from a [`TestSetup`]
pub trait TestSetupExt {
    fn into_app_state(&self) -> AppState;

    /// `Authorization` header value with a valid token for the user
    fn bearer(&self, user_id: i32) -> String;
}

impl TestSetupExt for TestSetup {
    fn into_app_state(&self) -> AppState {
        self.app_state()
    }

    fn bearer(&self, user_id: i32) -> String {
        let token = self.into_app_state().tokens.issue(user_id).unwrap();

        format!("Bearer {}", token)
    }
}

/// The extractor value a request authenticated as `user_id` would produce
pub fn as_user(user_id: i32) -> AuthenticatedUser {
    AuthenticatedUser { user_id }
}

/// Reads and deserializes a JSON response body
pub async fn json_body<T: DeserializeOwned>(resp: Response<Body>) -> T {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
