//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM models generated in the `entity` crate, so services
//! and controllers don't need to spell out `entity::<table>::Model` everywhere.

/// Type alias for a user account.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `email` - Unique login email
/// - `password_hash` - Argon2id PHC string, never serialized to clients
/// - `username` - Display name
/// - `created_at` - Timestamp when the account was created
pub type UserModel = entity::user::Model;

/// Type alias for a planet record.
pub type PlanetModel = entity::planet::Model;

/// Type alias for a character record.
pub type CharacterModel = entity::character::Model;

/// Type alias for a favorite row.
///
/// The `(favorite_type, entity_id)` pair should be read through
/// [`FavoriteTarget`](crate::server::model::favorite::FavoriteTarget) rather than directly.
pub type FavoriteModel = entity::favorite::Model;
