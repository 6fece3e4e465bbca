use entity::sea_orm_active_enums::FavoriteType;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn favorite<'a>(&'a mut self) -> FavoriteFixtures<'a> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> FavoriteFixtures<'a> {
    /// Insert a favorite row directly, the referenced entity is not required to exist
    pub async fn insert_favorite(
        &self,
        user_id: i32,
        favorite_type: FavoriteType,
        entity_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                favorite_type: ActiveValue::Set(favorite_type),
                entity_id: ActiveValue::Set(entity_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}
