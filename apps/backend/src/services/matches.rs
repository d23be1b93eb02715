//! Read-side views composed from the ledger.

use std::collections::{BTreeMap, HashMap};

use sea_orm::ConnectionTrait;
use serde::Serialize;
use tracing::debug;

use super::{require_contest, require_player};
use crate::domain::aggregate::{build_match_table, MatchTable};
use crate::domain::reconcile::TurnSheet;
use crate::errors::domain::DomainError;
use crate::repos::contests::{self, Contest};
use crate::repos::players::{self, Player};
use crate::repos::score_entries::{self, ScoreEntry};

/// One contest as seen from a single player's page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContestLine {
    pub contest: Contest,
    pub sheet: TurnSheet,
    pub total: i32,
    pub completed_turns: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerOverview {
    pub player: Player,
    /// Newest contest first.
    pub contests: Vec<ContestLine>,
    pub grand_total: i64,
}

pub struct MatchService;

impl MatchService {
    pub fn new() -> Self {
        Self
    }

    /// Cross-player table for one contest: a row per turn, a column per
    /// player holding at least one entry.
    pub async fn match_table<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        contest_id: i64,
    ) -> Result<MatchTable, DomainError> {
        require_contest(conn, contest_id).await?;

        let entries = score_entries::find_by_contest(conn, contest_id).await?;

        let mut player_ids: Vec<i64> = entries.iter().map(|e| e.player_id).collect();
        player_ids.sort_unstable();
        player_ids.dedup();
        let usernames: HashMap<i64, String> = players::find_by_ids(conn, &player_ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p.username))
            .collect();

        debug!(
            contest_id,
            entries = entries.len(),
            players = player_ids.len(),
            "Building match table"
        );
        Ok(build_match_table(contest_id, &entries, &usernames))
    }

    /// Every contest the player has scored in, with that player's sheet.
    pub async fn player_overview<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        player_id: i64,
    ) -> Result<PlayerOverview, DomainError> {
        let player = require_player(conn, player_id).await?;

        let mut by_contest: BTreeMap<i64, Vec<ScoreEntry>> = BTreeMap::new();
        for entry in score_entries::find_by_player(conn, player_id).await? {
            by_contest.entry(entry.contest_id).or_default().push(entry);
        }

        let contest_ids: Vec<i64> = by_contest.keys().copied().collect();
        let contests = contests::find_by_ids(conn, &contest_ids).await?;

        let lines: Vec<ContestLine> = contests
            .into_iter()
            .map(|contest| {
                let entries = by_contest.remove(&contest.id).unwrap_or_default();
                let sheet = TurnSheet::from_entries(&entries);
                ContestLine {
                    total: sheet.total(),
                    completed_turns: sheet.completed_turns(),
                    contest,
                    sheet,
                }
            })
            .collect();

        let grand_total = lines.iter().map(|l| i64::from(l.total)).sum();
        Ok(PlayerOverview {
            player,
            contests: lines,
            grand_total,
        })
    }
}

impl Default for MatchService {
    fn default() -> Self {
        Self::new()
    }
}
