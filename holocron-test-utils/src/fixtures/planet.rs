use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn planet<'a>(&'a mut self) -> PlanetFixtures<'a> {
        PlanetFixtures { setup: self }
    }
}

pub struct PlanetFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> PlanetFixtures<'a> {
    pub async fn insert_mock_planet(&self, name: &str) -> Result<entity::planet::Model, TestError> {
        Ok(entity::prelude::Planet::insert(entity::planet::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            climate: ActiveValue::Set("arid".to_string()),
            terrain: ActiveValue::Set("desert".to_string()),
            population: ActiveValue::Set(Some(200_000)),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }
}
