use entity::sea_orm_active_enums::FavoriteType;

use crate::{
    model::favorite::FavoriteDto,
    server::model::db::{CharacterModel, FavoriteModel, PlanetModel},
};

/// The entity a favorite points at.
///
/// Stored as a `(favorite_type, entity_id)` pair, but always handled as exactly one of
/// a planet or a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteTarget {
    Planet(i32),
    Character(i32),
}

impl FavoriteTarget {
    pub fn favorite_type(&self) -> FavoriteType {
        match self {
            Self::Planet(_) => FavoriteType::Planet,
            Self::Character(_) => FavoriteType::Character,
        }
    }

    pub fn entity_id(&self) -> i32 {
        match self {
            Self::Planet(id) | Self::Character(id) => *id,
        }
    }

    /// Human readable name of the target kind, used in response messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Planet(_) => "Planet",
            Self::Character(_) => "Character",
        }
    }
}

impl From<&FavoriteModel> for FavoriteTarget {
    fn from(favorite: &FavoriteModel) -> Self {
        match favorite.favorite_type {
            FavoriteType::Planet => Self::Planet(favorite.entity_id),
            FavoriteType::Character => Self::Character(favorite.entity_id),
        }
    }
}

/// A favorite resolved to the record it references
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedFavorite {
    Planet(PlanetModel),
    Character(CharacterModel),
}

impl ResolvedFavorite {
    pub fn target(&self) -> FavoriteTarget {
        match self {
            Self::Planet(planet) => FavoriteTarget::Planet(planet.id),
            Self::Character(character) => FavoriteTarget::Character(character.id),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Planet(planet) => &planet.name,
            Self::Character(character) => &character.name,
        }
    }
}

impl From<ResolvedFavorite> for FavoriteDto {
    fn from(favorite: ResolvedFavorite) -> Self {
        match favorite {
            ResolvedFavorite::Planet(planet) => FavoriteDto::Planet {
                planet_id: planet.id,
                name: planet.name,
            },
            ResolvedFavorite::Character(character) => FavoriteDto::Character {
                character_id: character.id,
                name: character.name,
            },
        }
    }
}
