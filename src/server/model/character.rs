use crate::{
    model::character::{CharacterDto, CreateCharacterDto, UpdateCharacterDto},
    server::{
        error::Error,
        model::db::CharacterModel,
        util::validation::{non_blank, RequiredFields},
    },
};

/// Validated fields for a new character
#[derive(Clone, Debug)]
pub struct NewCharacter {
    pub name: String,
    pub species: String,
    pub homeworld: String,
    pub gender: Option<String>,
}

impl TryFrom<CreateCharacterDto> for NewCharacter {
    type Error = Error;

    fn try_from(dto: CreateCharacterDto) -> Result<Self, Error> {
        let mut required = RequiredFields::new();
        let name = required.take("name", dto.name);
        let species = required.take("species", dto.species);
        let homeworld = required.take("homeworld", dto.homeworld);
        required.finish()?;

        Ok(Self {
            name,
            species,
            homeworld,
            gender: dto.gender,
        })
    }
}

/// Partial replacement of a character's fields, `None` keeps the stored value
#[derive(Clone, Debug, Default)]
pub struct CharacterChanges {
    pub name: Option<String>,
    pub species: Option<String>,
    pub homeworld: Option<String>,
    /// `Some(None)` clears the gender
    pub gender: Option<Option<String>>,
}

impl TryFrom<UpdateCharacterDto> for CharacterChanges {
    type Error = Error;

    fn try_from(dto: UpdateCharacterDto) -> Result<Self, Error> {
        Ok(Self {
            name: non_blank("name", dto.name)?,
            species: non_blank("species", dto.species)?,
            homeworld: non_blank("homeworld", dto.homeworld)?,
            gender: dto.gender,
        })
    }
}

impl From<CharacterModel> for CharacterDto {
    fn from(character: CharacterModel) -> Self {
        Self {
            character_id: character.id,
            name: character.name,
            species: character.species,
            homeworld: character.homeworld,
            gender: character.gender,
        }
    }
}
