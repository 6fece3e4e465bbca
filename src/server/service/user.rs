use sea_orm::ConnectionTrait;

use crate::{
    model::user::UserDto,
    server::{data::user::UserRepository, error::Error},
};

pub struct UserService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserService<'a, C> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists every registered user, without password hashes
    pub async fn list_users(&self) -> Result<Vec<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        let users = user_repo
            .get_all()
            .await?
            .into_iter()
            .map(UserDto::from)
            .collect();

        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use holocron_test_utils::prelude::*;

    use crate::server::service::user::UserService;

    /// Expect users with their public fields only
    #[tokio::test]
    async fn lists_users() -> Result<(), TestError> {
        let mut test = test_setup_with_all_tables!()?;
        let user = test
            .user()
            .insert_user("leia@alderaan.gov", "Leia", "hope")
            .await?;

        let user_service = UserService::new(&test.state.db);
        let users = user_service.list_users().await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].user_id, user.id);
        assert_eq!(users[0].email, "leia@alderaan.gov");
        assert_eq!(users[0].username, "Leia");
        assert_eq!(users[0].user_creation_date, user.created_at);

        Ok(())
    }
}
