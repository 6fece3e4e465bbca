use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn character<'a>(&'a mut self) -> CharacterFixtures<'a> {
        CharacterFixtures { setup: self }
    }
}

pub struct CharacterFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> CharacterFixtures<'a> {
    pub async fn insert_mock_character(
        &self,
        name: &str,
    ) -> Result<entity::character::Model, TestError> {
        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                species: ActiveValue::Set("Human".to_string()),
                homeworld: ActiveValue::Set("Tatooine".to_string()),
                gender: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}
