use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterDto {
    pub character_id: i32,
    pub name: String,
    pub species: String,
    pub homeworld: String,
    pub gender: Option<String>,
}

/// Body of `POST /character`, `name`, `species` & `homeworld` are required
#[derive(Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct CreateCharacterDto {
    pub name: Option<String>,
    pub species: Option<String>,
    pub homeworld: Option<String>,
    pub gender: Option<String>,
}

/// Body of `PUT /character/{id}`, absent fields keep their current value & an explicit
/// `null` gender clears it
#[derive(Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct UpdateCharacterDto {
    pub name: Option<String>,
    pub species: Option<String>,
    pub homeworld: Option<String>,
    #[serde(default, deserialize_with = "crate::model::util::present")]
    #[schema(value_type = Option<String>)]
    pub gender: Option<Option<String>>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterWrittenDto {
    pub message: String,
    pub character_id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterDeletedDto {
    pub message: String,
    pub character_id: i32,
}
