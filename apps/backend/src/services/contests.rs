//! Contest CRUD. Deletion lives in the ledger because it cascades to scores.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use time::{OffsetDateTime, UtcOffset};
use tracing::info;

use super::require_contest;
use crate::domain::rules::normalize_label;
use crate::errors::domain::DomainError;
use crate::repos::contests::{self, Contest, ContestCreate, ContestUpdate};

/// Edit request for a contest; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct ContestEdit {
    pub opponent: Option<String>,
    pub location: Option<String>,
    pub timestamp: Option<OffsetDateTime>,
}

pub struct ContestService;

impl ContestService {
    pub fn new() -> Self {
        Self
    }

    /// `timestamp` defaults to now; any offset is stored as UTC.
    pub async fn create_contest(
        &self,
        txn: &DatabaseTransaction,
        opponent: &str,
        location: &str,
        timestamp: Option<OffsetDateTime>,
    ) -> Result<Contest, DomainError> {
        let dto = ContestCreate {
            opponent: normalize_label("Opponent", opponent)?,
            location: normalize_label("Location", location)?,
            timestamp: timestamp.map_or_else(OffsetDateTime::now_utc, to_utc),
        };

        let contest = contests::create_contest(txn, dto).await?;
        info!(
            contest_id = contest.id,
            opponent = %contest.opponent,
            location = %contest.location,
            "Contest created"
        );
        Ok(contest)
    }

    pub async fn update_contest(
        &self,
        txn: &DatabaseTransaction,
        contest_id: i64,
        edit: ContestEdit,
    ) -> Result<Contest, DomainError> {
        let dto = ContestUpdate {
            opponent: edit
                .opponent
                .map(|o| normalize_label("Opponent", &o))
                .transpose()?,
            location: edit
                .location
                .map(|l| normalize_label("Location", &l))
                .transpose()?,
            timestamp: edit.timestamp.map(to_utc),
        };

        require_contest(txn, contest_id).await?;
        let contest = contests::update_contest(txn, contest_id, dto).await?;
        info!(contest_id, "Contest updated");
        Ok(contest)
    }

    pub async fn get_contest<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        contest_id: i64,
    ) -> Result<Contest, DomainError> {
        require_contest(conn, contest_id).await
    }

    /// All contests, newest first.
    pub async fn list_contests<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Contest>, DomainError> {
        contests::list_all(conn).await
    }
}

/// SQLite keeps timestamps as text, so newest-first ordering only holds when
/// every stored value shares one offset.
fn to_utc(ts: OffsetDateTime) -> OffsetDateTime {
    ts.to_offset(UtcOffset::UTC)
}

impl Default for ContestService {
    fn default() -> Self {
        Self::new()
    }
}
