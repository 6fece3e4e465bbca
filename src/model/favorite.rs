use serde::{Deserialize, Serialize};

/// A favorited planet or character, tagged by `favorite_type`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(tag = "favorite_type", rename_all = "lowercase")]
pub enum FavoriteDto {
    Planet { planet_id: i32, name: String },
    Character { character_id: i32, name: String },
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoritePlanetAddedDto {
    pub message: String,
    pub planet_id: i32,
    pub planet_name: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteCharacterAddedDto {
    pub message: String,
    pub character_id: i32,
    pub character_name: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoritePlanetRemovedDto {
    pub message: String,
    pub planet_id: i32,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteCharacterRemovedDto {
    pub message: String,
    pub character_id: i32,
}
