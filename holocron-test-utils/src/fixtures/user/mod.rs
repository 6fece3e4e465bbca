//! User fixture utilities.

pub mod factory;

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::MOCK_PASSWORD, error::TestError, TestSetup};

impl TestSetup {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user whose password hash verifies against `password`
    pub async fn insert_user(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<entity::user::Model, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(factory::hash_password(password)),
            username: ActiveValue::Set(username.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    /// Insert a user numbered `n`, with email `user{n}@holocron.test` & [`MOCK_PASSWORD`]
    pub async fn insert_mock_user(&self, n: u32) -> Result<entity::user::Model, TestError> {
        self.insert_user(
            &factory::mock_email(n),
            &format!("user{}", n),
            MOCK_PASSWORD,
        )
        .await
    }
}
