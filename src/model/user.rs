use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub user_id: i32,
    pub email: String,
    pub username: String,
    pub user_creation_date: NaiveDateTime,
}
