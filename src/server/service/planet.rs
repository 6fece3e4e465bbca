use sea_orm::ConnectionTrait;

use crate::{
    model::planet::PlanetDto,
    server::{
        data::{favorite::FavoriteRepository, planet::PlanetRepository},
        error::Error,
        model::{
            favorite::FavoriteTarget,
            planet::{NewPlanet, PlanetChanges},
        },
    },
};

const PLANET_NOT_FOUND: &str = "Planet not found";

pub struct PlanetService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetService<'a, C> {
    /// Creates a new instance of [`PlanetService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<PlanetDto>, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let planets = planet_repo
            .get_all()
            .await?
            .into_iter()
            .map(PlanetDto::from)
            .collect();

        Ok(planets)
    }

    pub async fn get(&self, planet_id: i32) -> Result<PlanetDto, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let planet = planet_repo
            .get_by_id(planet_id)
            .await?
            .ok_or_else(|| Error::NotFound(PLANET_NOT_FOUND.to_string()))?;

        Ok(planet.into())
    }

    pub async fn create(&self, planet: NewPlanet) -> Result<PlanetDto, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let planet = planet_repo.create(planet).await?;

        tracing::debug!("Created planet ID {}", planet.id);

        Ok(planet.into())
    }

    pub async fn update(&self, planet_id: i32, changes: PlanetChanges) -> Result<PlanetDto, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let planet = planet_repo
            .update(planet_id, changes)
            .await?
            .ok_or_else(|| Error::NotFound(PLANET_NOT_FOUND.to_string()))?;

        Ok(planet.into())
    }

    /// Deletes a planet along with every favorite referencing it
    ///
    /// # Returns
    /// - `Ok(())` - Planet & its favorites were deleted
    /// - `Err(Error::NotFound)` - No planet with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete(&self, planet_id: i32) -> Result<(), Error> {
        let planet_repo = PlanetRepository::new(self.db);
        let favorite_repo = FavoriteRepository::new(self.db);

        let result = planet_repo.delete(planet_id).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound(PLANET_NOT_FOUND.to_string()));
        }

        let favorites = favorite_repo
            .delete_by_target(FavoriteTarget::Planet(planet_id))
            .await?;

        tracing::debug!(
            "Deleted planet ID {} and {} favorite(s) referencing it",
            planet_id,
            favorites.rows_affected
        );

        Ok(())
    }
}
