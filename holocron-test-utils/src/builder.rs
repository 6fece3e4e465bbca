//! Declarative test builder.
//!
//! The builder pattern allows chaining table & fixture configuration together, with all
//! operations queued and executed during the final `build()` call.

use entity::sea_orm_active_enums::FavoriteType;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, setup::all_tables, TestSetup};

/// Builder for declarative test initialization.
///
/// # Example
/// ```no_run
/// use holocron_test_utils::TestBuilder;
///
/// # async fn example() -> Result<(), holocron_test_utils::TestError> {
/// let test = TestBuilder::new()
///     .with_all_tables()
///     .with_user("luke@tatooine.net", "Luke", "usetheforce")
///     .with_mock_planet("Tatooine")
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_all_tables: bool,

    users: Vec<(String, String, String)>, // (email, username, password)
    planets: Vec<String>,
    characters: Vec<String>,
    favorites: Vec<(i32, FavoriteType, i32)>, // (user_id, favorite_type, entity_id)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the user, planet, character & favorite tables
    pub fn with_all_tables(mut self) -> Self {
        self.include_all_tables = true;
        self
    }

    /// Add a custom entity table to the test database
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the provided credentials, users get IDs in insertion order
    pub fn with_user(mut self, email: &str, username: &str, password: &str) -> Self {
        self.users
            .push((email.to_string(), username.to_string(), password.to_string()));
        self
    }

    /// Insert a planet with standard test values, planets get IDs in insertion order
    pub fn with_mock_planet(mut self, name: &str) -> Self {
        self.planets.push(name.to_string());
        self
    }

    /// Insert a character with standard test values, characters get IDs in insertion order
    pub fn with_mock_character(mut self, name: &str) -> Self {
        self.characters.push(name.to_string());
        self
    }

    /// Insert a favorite row as-is, without checking that the referenced entity exists
    pub fn with_favorite(
        mut self,
        user_id: i32,
        favorite_type: FavoriteType,
        entity_id: i32,
    ) -> Self {
        self.favorites.push((user_id, favorite_type, entity_id));
        self
    }

    /// Build the test setup, executing all queued operations.
    ///
    /// 1. Creates database tables
    /// 2. Inserts users, planets & characters
    /// 3. Inserts favorites
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        let mut tables = Vec::new();
        if self.include_all_tables {
            tables.extend(all_tables());
        }
        tables.extend(self.tables);
        setup.with_tables(tables).await?;

        for (email, username, password) in self.users {
            setup.user().insert_user(&email, &username, &password).await?;
        }

        for name in self.planets {
            setup.planet().insert_mock_planet(&name).await?;
        }

        for name in self.characters {
            setup.character().insert_mock_character(&name).await?;
        }

        for (user_id, favorite_type, entity_id) in self.favorites {
            setup
                .favorite()
                .insert_favorite(user_id, favorite_type, entity_id)
                .await?;
        }

        Ok(setup)
    }
}
