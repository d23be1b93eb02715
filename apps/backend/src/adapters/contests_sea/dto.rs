//! DTOs for contests_sea adapter.

use time::OffsetDateTime;

/// DTO for creating a contest.
#[derive(Debug, Clone)]
pub struct ContestCreate {
    pub opponent: String,
    pub location: String,
    pub timestamp: OffsetDateTime,
}

/// DTO for editing a contest; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct ContestUpdate {
    pub opponent: Option<String>,
    pub location: Option<String>,
    pub timestamp: Option<OffsetDateTime>,
}
