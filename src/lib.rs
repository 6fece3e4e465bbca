//! Holocron: a REST API for planets, characters and per-user favorites.

pub mod model;
pub mod server;
