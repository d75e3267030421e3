//! DTOs for games_sea adapter.

/// DTO for creating a new game. The creator joins as a participant.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub name: String,
    pub created_by: i64,
}

impl GameCreate {
    pub fn new(name: impl Into<String>, created_by: i64) -> Self {
        Self {
            name: name.into(),
            created_by,
        }
    }
}
