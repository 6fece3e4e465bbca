use sea_orm::ConnectionTrait;

use crate::{
    model::character::CharacterDto,
    server::{
        data::{character::CharacterRepository, favorite::FavoriteRepository},
        error::Error,
        model::{
            character::{CharacterChanges, NewCharacter},
            favorite::FavoriteTarget,
        },
    },
};

const CHARACTER_NOT_FOUND: &str = "Character not found";

pub struct CharacterService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterService<'a, C> {
    /// Creates a new instance of [`CharacterService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<CharacterDto>, Error> {
        let character_repo = CharacterRepository::new(self.db);

        let characters = character_repo
            .get_all()
            .await?
            .into_iter()
            .map(CharacterDto::from)
            .collect();

        Ok(characters)
    }

    pub async fn get(&self, character_id: i32) -> Result<CharacterDto, Error> {
        let character_repo = CharacterRepository::new(self.db);

        let character = character_repo
            .get_by_id(character_id)
            .await?
            .ok_or_else(|| Error::NotFound(CHARACTER_NOT_FOUND.to_string()))?;

        Ok(character.into())
    }

    pub async fn create(&self, character: NewCharacter) -> Result<CharacterDto, Error> {
        let character_repo = CharacterRepository::new(self.db);

        let character = character_repo.create(character).await?;

        tracing::debug!("Created character ID {}", character.id);

        Ok(character.into())
    }

    pub async fn update(
        &self,
        character_id: i32,
        changes: CharacterChanges,
    ) -> Result<CharacterDto, Error> {
        let character_repo = CharacterRepository::new(self.db);

        let character = character_repo
            .update(character_id, changes)
            .await?
            .ok_or_else(|| Error::NotFound(CHARACTER_NOT_FOUND.to_string()))?;

        Ok(character.into())
    }

    /// Deletes a character along with every favorite referencing it
    pub async fn delete(&self, character_id: i32) -> Result<(), Error> {
        let character_repo = CharacterRepository::new(self.db);
        let favorite_repo = FavoriteRepository::new(self.db);

        let result = character_repo.delete(character_id).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound(CHARACTER_NOT_FOUND.to_string()));
        }

        let favorites = favorite_repo
            .delete_by_target(FavoriteTarget::Character(character_id))
            .await?;

        tracing::debug!(
            "Deleted character ID {} and {} favorite(s) referencing it",
            character_id,
            favorites.rows_affected
        );

        Ok(())
    }
}
