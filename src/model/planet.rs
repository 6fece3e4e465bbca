use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetDto {
    pub planet_id: i32,
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub population: Option<i64>,
}

/// Body of `POST /planet`, `name`, `climate` & `terrain` are required
#[derive(Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct CreatePlanetDto {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<i64>,
}

/// Body of `PUT /planet/{id}`, absent fields keep their current value & an explicit
/// `null` population clears it
#[derive(Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct UpdatePlanetDto {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    #[serde(default, deserialize_with = "crate::model::util::present")]
    #[schema(value_type = Option<i64>)]
    pub population: Option<Option<i64>>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetWrittenDto {
    pub message: String,
    pub planet_id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetDeletedDto {
    pub message: String,
    pub planet_id: i32,
}
