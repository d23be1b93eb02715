//! DTOs for players_sea adapter.

/// DTO for registering a player.
#[derive(Debug, Clone)]
pub struct PlayerCreate {
    pub username: String,
    pub forename: Option<String>,
    pub surname: Option<String>,
}

impl PlayerCreate {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            forename: None,
            surname: None,
        }
    }

    pub fn with_names(mut self, forename: Option<String>, surname: Option<String>) -> Self {
        self.forename = forename;
        self.surname = surname;
        self
    }
}
