use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::planet::{NewPlanet, PlanetChanges};

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, planet: NewPlanet) -> Result<entity::planet::Model, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(planet.name),
            climate: ActiveValue::Set(planet.climate),
            terrain: ActiveValue::Set(planet.terrain),
            population: ActiveValue::Set(planet.population),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    /// Gets every planet ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    /// Gets the planets matching the provided IDs, IDs without a planet are ignored
    pub async fn get_by_ids(&self, planet_ids: &[i32]) -> Result<Vec<entity::planet::Model>, DbErr> {
        if planet_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Planet::find()
            .filter(entity::planet::Column::Id.is_in(planet_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Applies the provided changes to a planet
    ///
    /// Returns `Ok(None)` if the planet does not exist.
    pub async fn update(
        &self,
        planet_id: i32,
        changes: PlanetChanges,
    ) -> Result<Option<entity::planet::Model>, DbErr> {
        let planet = match entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await?
        {
            Some(planet) => planet,
            None => return Ok(None),
        };

        let mut planet_am = planet.clone().into_active_model();
        if let Some(name) = changes.name {
            planet_am.name = ActiveValue::Set(name);
        }
        if let Some(climate) = changes.climate {
            planet_am.climate = ActiveValue::Set(climate);
        }
        if let Some(terrain) = changes.terrain {
            planet_am.terrain = ActiveValue::Set(terrain);
        }
        if let Some(population) = changes.population {
            planet_am.population = ActiveValue::Set(population);
        }

        // Nothing to write, avoid an UPDATE without any SET clause
        if !planet_am.is_changed() {
            return Ok(Some(planet));
        }

        let planet = planet_am.update(self.db).await?;

        Ok(Some(planet))
    }

    /// Deletes a planet
    ///
    /// Returns OK regardless of planet existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planet::delete_by_id(planet_id)
            .exec(self.db)
            .await
    }
}
