//! Request & response bodies exchanged with API clients.

pub mod api;
pub mod auth;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod util;
