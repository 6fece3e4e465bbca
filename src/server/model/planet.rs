use crate::{
    model::planet::{CreatePlanetDto, PlanetDto, UpdatePlanetDto},
    server::{
        error::Error,
        model::db::PlanetModel,
        util::validation::{non_blank, RequiredFields},
    },
};

/// Validated fields for a new planet
#[derive(Clone, Debug)]
pub struct NewPlanet {
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub population: Option<i64>,
}

impl TryFrom<CreatePlanetDto> for NewPlanet {
    type Error = Error;

    fn try_from(dto: CreatePlanetDto) -> Result<Self, Error> {
        let mut required = RequiredFields::new();
        let name = required.take("name", dto.name);
        let climate = required.take("climate", dto.climate);
        let terrain = required.take("terrain", dto.terrain);
        required.finish()?;

        Ok(Self {
            name,
            climate,
            terrain,
            population: dto.population,
        })
    }
}

/// Partial replacement of a planet's fields, `None` keeps the stored value
#[derive(Clone, Debug, Default)]
pub struct PlanetChanges {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    /// `Some(None)` clears the population
    pub population: Option<Option<i64>>,
}

impl TryFrom<UpdatePlanetDto> for PlanetChanges {
    type Error = Error;

    fn try_from(dto: UpdatePlanetDto) -> Result<Self, Error> {
        Ok(Self {
            name: non_blank("name", dto.name)?,
            climate: non_blank("climate", dto.climate)?,
            terrain: non_blank("terrain", dto.terrain)?,
            population: dto.population,
        })
    }
}

impl From<PlanetModel> for PlanetDto {
    fn from(planet: PlanetModel) -> Self {
        Self {
            planet_id: planet.id,
            name: planet.name,
            climate: planet.climate,
            terrain: planet.terrain,
            population: planet.population,
        }
    }
}
