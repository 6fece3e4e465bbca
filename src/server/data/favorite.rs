use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::favorite::FavoriteTarget;

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a user's favorites in the order they were added
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::FavoriteType.eq(target.favorite_type()))
            .filter(entity::favorite::Column::EntityId.eq(target.entity_id()))
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<entity::favorite::Model, DbErr> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            favorite_type: ActiveValue::Set(target.favorite_type()),
            entity_id: ActiveValue::Set(target.entity_id()),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Deletes a single user's favorite
    ///
    /// Check [`DeleteResult::rows_affected`] to confirm the favorite existed.
    pub async fn delete(&self, user_id: i32, target: FavoriteTarget) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::FavoriteType.eq(target.favorite_type()))
            .filter(entity::favorite::Column::EntityId.eq(target.entity_id()))
            .exec(self.db)
            .await
    }

    /// Deletes every user's favorite referencing the target
    pub async fn delete_by_target(&self, target: FavoriteTarget) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::FavoriteType.eq(target.favorite_type()))
            .filter(entity::favorite::Column::EntityId.eq(target.entity_id()))
            .exec(self.db)
            .await
    }
}
