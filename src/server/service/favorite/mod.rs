//! Favorites service.
//!
//! Resolves a user's favorites to the planets & characters they reference and guards the
//! rules for adding & removing them: a target must exist, and a user can favorite it once.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DbErr, SqlErr};

use crate::{
    model::favorite::FavoriteDto,
    server::{
        data::{
            character::CharacterRepository, favorite::FavoriteRepository,
            planet::PlanetRepository,
        },
        error::Error,
        model::favorite::{FavoriteTarget, ResolvedFavorite},
    },
};

pub struct FavoriteService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteService<'a, C> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists the user's favorites in the order they were added.
    ///
    /// Planets and characters are each resolved with a single batched query. Favorites
    /// whose target no longer exists are skipped.
    pub async fn list_favorites(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        let favorite_repo = FavoriteRepository::new(self.db);
        let planet_repo = PlanetRepository::new(self.db);
        let character_repo = CharacterRepository::new(self.db);

        let targets: Vec<FavoriteTarget> = favorite_repo
            .get_by_user_id(user_id)
            .await?
            .iter()
            .map(FavoriteTarget::from)
            .collect();

        let mut planet_ids = Vec::new();
        let mut character_ids = Vec::new();
        for target in &targets {
            match target {
                FavoriteTarget::Planet(id) => planet_ids.push(*id),
                FavoriteTarget::Character(id) => character_ids.push(*id),
            }
        }

        let planets: HashMap<i32, _> = planet_repo
            .get_by_ids(&planet_ids)
            .await?
            .into_iter()
            .map(|planet| (planet.id, planet))
            .collect();
        let characters: HashMap<i32, _> = character_repo
            .get_by_ids(&character_ids)
            .await?
            .into_iter()
            .map(|character| (character.id, character))
            .collect();

        let mut favorites = Vec::with_capacity(targets.len());
        for target in targets {
            let resolved = match target {
                FavoriteTarget::Planet(id) => {
                    planets.get(&id).cloned().map(ResolvedFavorite::Planet)
                }
                FavoriteTarget::Character(id) => {
                    characters.get(&id).cloned().map(ResolvedFavorite::Character)
                }
            };

            match resolved {
                Some(favorite) => favorites.push(FavoriteDto::from(favorite)),
                None => tracing::debug!(
                    "Skipping favorite of user ID {} referencing missing {} ID {}",
                    user_id,
                    target.kind(),
                    target.entity_id()
                ),
            }
        }

        Ok(favorites)
    }

    /// Adds the target to the user's favorites
    ///
    /// # Returns
    /// - `Ok(ResolvedFavorite)` - Favorite added, with the record it references
    /// - `Err(Error::NotFound)` - The planet or character does not exist
    /// - `Err(Error::Conflict)` - The user already has the target in their favorites
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<ResolvedFavorite, Error> {
        let favorite_repo = FavoriteRepository::new(self.db);

        let resolved = self.resolve(target).await?.ok_or_else(|| {
            Error::NotFound(format!("{} not found", target.kind()))
        })?;

        if favorite_repo.find(user_id, target).await?.is_some() {
            return Err(already_favorited(target));
        }

        self.insert(user_id, target).await?;

        tracing::debug!(
            "User ID {} added {} ID {} to favorites",
            user_id,
            target.kind(),
            target.entity_id()
        );

        Ok(resolved)
    }

    /// Removes the target from the user's favorites
    ///
    /// # Returns
    /// - `Ok(())` - Favorite removed
    /// - `Err(Error::NotFound)` - The user does not have the target in their favorites
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_favorite(&self, user_id: i32, target: FavoriteTarget) -> Result<(), Error> {
        let favorite_repo = FavoriteRepository::new(self.db);

        let result = favorite_repo.delete(user_id, target).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound(format!(
                "{} is not in favorites",
                target.kind()
            )));
        }

        Ok(())
    }

    /// Inserts the favorite row, reporting a unique index violation as a conflict
    async fn insert(&self, user_id: i32, target: FavoriteTarget) -> Result<(), Error> {
        FavoriteRepository::new(self.db)
            .create(user_id, target)
            .await
            .map_err(|err| match err.sql_err() {
                // Lost a race with a concurrent request adding the same favorite
                Some(SqlErr::UniqueConstraintViolation(_)) => already_favorited(target),
                _ => Error::DbErr(err),
            })?;

        Ok(())
    }

    async fn resolve(&self, target: FavoriteTarget) -> Result<Option<ResolvedFavorite>, DbErr> {
        let resolved = match target {
            FavoriteTarget::Planet(id) => PlanetRepository::new(self.db)
                .get_by_id(id)
                .await?
                .map(ResolvedFavorite::Planet),
            FavoriteTarget::Character(id) => CharacterRepository::new(self.db)
                .get_by_id(id)
                .await?
                .map(ResolvedFavorite::Character),
        };

        Ok(resolved)
    }
}

fn already_favorited(target: FavoriteTarget) -> Error {
    Error::Conflict(format!("{} is already in favorites", target.kind()))
}
