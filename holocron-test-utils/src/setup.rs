use migration::{Migrator, MigratorTrait};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{constant::TEST_JWT_SECRET, error::TestError};

pub struct TestAppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
}

pub struct TestSetup {
    pub state: TestAppState,
}

impl TestSetup {
    /// Convert the test state into any type that can be constructed from its fields.
    /// This allows conversion to AppState without creating a circular dependency.
    ///
    /// # Example
    /// ```ignore
    /// let app_state: AppState = test.app_state();
    /// ```
    pub fn app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, String)>,
    {
        T::from((self.state.db.clone(), self.state.jwt_secret.clone()))
    }
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            state: TestAppState {
                db,
                jwt_secret: TEST_JWT_SECRET.to_string(),
            },
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Builds the schema with the application's migrations, including the indexes and
    /// foreign keys that entity-derived tables lack
    pub async fn with_migrations(&self) -> Result<(), TestError> {
        Migrator::up(&self.state.db, None).await?;

        Ok(())
    }
}

/// Creates a [`TestSetup`] with a table for each of the provided entities
#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Creates a [`TestSetup`] with the user, planet, character & favorite tables
#[macro_export]
macro_rules! test_setup_with_all_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;
            setup.with_tables($crate::setup::all_tables()).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Creates a [`TestSetup`] with the schema built by running every migration
#[macro_export]
macro_rules! test_setup_with_migrations {
    () => {{
        async {
            let setup = TestSetup::new().await?;
            setup.with_migrations().await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// CREATE TABLE statements for every entity, in foreign key order
pub fn all_tables() -> Vec<TableCreateStatement> {
    let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::User),
        schema.create_table_from_entity(entity::prelude::Planet),
        schema.create_table_from_entity(entity::prelude::Character),
        schema.create_table_from_entity(entity::prelude::Favorite),
    ]
}
