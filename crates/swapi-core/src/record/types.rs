//! Record types persisted to the `characters` table.

/// Character identifier (trailing path segment of the source URL).
pub type CharacterId = i64;

/// One flattened character row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterRecord {
    pub id: CharacterId,
    pub birth_year: String,
    pub eye_color: String,
    pub films: String,
    pub gender: String,
    pub hair_color: String,
    pub height: String,
    pub homeworld: String,
    pub mass: String,
    pub name: String,
    pub skin_color: String,
    pub species: String,
    pub starships: String,
    pub vehicles: String,
}
