//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for one table each. They are generic over
//! [`ConnectionTrait`](sea_orm::ConnectionTrait) so the same code runs against the
//! connection pool or inside a request's unit of work transaction.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
