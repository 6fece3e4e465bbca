pub use sea_orm_migration::prelude::*;

mod m20250301_000001_users;
mod m20250301_000002_planets;
mod m20250301_000003_characters;
mod m20250301_000004_favorites;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_users::Migration),
            Box::new(m20250301_000002_planets::Migration),
            Box::new(m20250301_000003_characters::Migration),
            Box::new(m20250301_000004_favorites::Migration),
        ]
    }
}
