use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::character::{CharacterChanges, NewCharacter};

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, character: NewCharacter) -> Result<entity::character::Model, DbErr> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(character.name),
            species: ActiveValue::Set(character.species),
            homeworld: ActiveValue::Set(character.homeworld),
            gender: ActiveValue::Set(character.gender),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        character_id: i32,
    ) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_ids(
        &self,
        character_ids: &[i32],
    ) -> Result<Vec<entity::character::Model>, DbErr> {
        if character_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Character::find()
            .filter(entity::character::Column::Id.is_in(character_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Applies the provided changes to a character
    ///
    /// Returns `Ok(None)` if the character does not exist.
    pub async fn update(
        &self,
        character_id: i32,
        changes: CharacterChanges,
    ) -> Result<Option<entity::character::Model>, DbErr> {
        let character = match entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await?
        {
            Some(character) => character,
            None => return Ok(None),
        };

        let mut character_am = character.clone().into_active_model();
        if let Some(name) = changes.name {
            character_am.name = ActiveValue::Set(name);
        }
        if let Some(species) = changes.species {
            character_am.species = ActiveValue::Set(species);
        }
        if let Some(homeworld) = changes.homeworld {
            character_am.homeworld = ActiveValue::Set(homeworld);
        }
        if let Some(gender) = changes.gender {
            character_am.gender = ActiveValue::Set(gender);
        }

        if !character_am.is_changed() {
            return Ok(Some(character));
        }

        let character = character_am.update(self.db).await?;

        Ok(Some(character))
    }

    /// Deletes a character
    ///
    /// Check [`DeleteResult::rows_affected`] to confirm the character existed.
    pub async fn delete(&self, character_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Character::delete_by_id(character_id)
            .exec(self.db)
            .await
    }
}
