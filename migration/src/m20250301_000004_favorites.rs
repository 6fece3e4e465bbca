use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000001_users::Users;

static IDX_FAVORITES_USER_TARGET: &str = "idx-favorites-user_id-favorite_type-entity_id";
static IDX_FAVORITES_TARGET: &str = "idx-favorites-favorite_type-entity_id";
static FK_FAVORITES_USER_ID: &str = "fk-favorites-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorites::Id))
                    .col(integer(Favorites::UserId))
                    .col(string_len(Favorites::FavoriteType, 16))
                    .col(integer(Favorites::EntityId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_USER_ID)
                            .from(Favorites::Table, Favorites::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A user can favorite a given planet or character only once
        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITES_USER_TARGET)
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::FavoriteType)
                    .col(Favorites::EntityId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Used when cascading deletes of planets & characters to their favorites
        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITES_TARGET)
                    .table(Favorites::Table)
                    .col(Favorites::FavoriteType)
                    .col(Favorites::EntityId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITES_TARGET)
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITES_USER_TARGET)
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    Id,
    UserId,
    FavoriteType,
    EntityId,
}
