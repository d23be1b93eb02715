//! Contest repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::contests_sea as contests_adapter;
use crate::errors::domain::DomainError;

pub use contests_adapter::{ContestCreate, ContestUpdate};

/// Contest domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contest {
    pub id: i64,
    pub opponent: String,
    pub location: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: time::OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: time::OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: time::OffsetDateTime,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    contest_id: i64,
) -> Result<Option<Contest>, DomainError> {
    let contest = contests_adapter::find_by_id(conn, contest_id).await?;
    Ok(contest.map(Contest::from))
}

/// Contests with the given ids, newest first.
pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    contest_ids: &[i64],
) -> Result<Vec<Contest>, DomainError> {
    let contests = contests_adapter::find_by_ids(conn, contest_ids).await?;
    Ok(contests.into_iter().map(Contest::from).collect())
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Contest>, DomainError> {
    let contests = contests_adapter::list_all(conn).await?;
    Ok(contests.into_iter().map(Contest::from).collect())
}

pub async fn create_contest<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ContestCreate,
) -> Result<Contest, DomainError> {
    let contest = contests_adapter::create_contest(conn, dto).await?;
    Ok(Contest::from(contest))
}

pub async fn update_contest<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    contest_id: i64,
    dto: ContestUpdate,
) -> Result<Contest, DomainError> {
    let contest = contests_adapter::update_contest(conn, contest_id, dto).await?;
    Ok(Contest::from(contest))
}

pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    contest_id: i64,
) -> Result<u64, DomainError> {
    Ok(contests_adapter::delete_by_id(conn, contest_id).await?)
}

impl From<crate::entities::contests::Model> for Contest {
    fn from(model: crate::entities::contests::Model) -> Self {
        Self {
            id: model.id,
            opponent: model.opponent,
            location: model.location,
            timestamp: model.timestamp,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
