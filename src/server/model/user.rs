use crate::{model::user::UserDto, server::model::db::UserModel};

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            user_id: user.id,
            email: user.email,
            username: user.username,
            user_creation_date: user.created_at,
        }
    }
}
