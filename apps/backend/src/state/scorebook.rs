//! One-call-one-transaction facade over the services.

use time::OffsetDateTime;

use crate::db::txn::with_txn;
use crate::domain::aggregate::MatchTable;
use crate::domain::reconcile::{TurnSheet, TurnSlot};
use crate::errors::domain::DomainError;
use crate::repos::contests::Contest;
use crate::repos::players::Player;
use crate::repos::score_entries::ScoreEntry;
use crate::services::contests::ContestEdit;
use crate::services::{ContestService, LedgerService, MatchService, PlayerOverview, PlayerService};
use crate::state::app_state::AppState;

/// Entry point for collaborators (web handlers, scripts).
///
/// Every method runs in its own transaction through [`with_txn`], so a
/// failed call leaves no partial writes behind.
#[derive(Debug, Clone)]
pub struct Scorebook {
    state: AppState,
}

impl From<AppState> for Scorebook {
    fn from(state: AppState) -> Self {
        Self::new(state)
    }
}

impl Scorebook {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    // ---- ledger ----

    pub async fn upsert_turn_score(
        &self,
        actor: i64,
        contest_id: i64,
        turn_number: i16,
        score_value: i16,
    ) -> Result<ScoreEntry, DomainError> {
        with_txn(&self.state, move |txn| {
            Box::pin(async move {
                LedgerService::new()
                    .upsert_turn_score(txn, actor, contest_id, turn_number, score_value)
                    .await
            })
        })
        .await
    }

    pub async fn remove_turn_score(
        &self,
        actor: i64,
        contest_id: i64,
        turn_number: i16,
    ) -> Result<bool, DomainError> {
        with_txn(&self.state, move |txn| {
            Box::pin(async move {
                LedgerService::new()
                    .remove_turn_score(txn, actor, contest_id, turn_number)
                    .await
            })
        })
        .await
    }

    pub async fn list_entries(
        &self,
        player_id: i64,
        contest_id: i64,
    ) -> Result<Vec<ScoreEntry>, DomainError> {
        with_txn(&self.state, move |txn| {
            Box::pin(async move {
                LedgerService::new()
                    .list_entries(txn, player_id, contest_id)
                    .await
            })
        })
        .await
    }

    pub async fn turn_sheet(
        &self,
        player_id: i64,
        contest_id: i64,
    ) -> Result<TurnSheet, DomainError> {
        with_txn(&self.state, move |txn| {
            Box::pin(async move {
                LedgerService::new()
                    .turn_sheet(txn, player_id, contest_id)
                    .await
            })
        })
        .await
    }

    pub async fn delete_contest_cascade(&self, contest_id: i64) -> Result<u64, DomainError> {
        with_txn(&self.state, move |txn| {
            Box::pin(async move {
                LedgerService::new()
                    .delete_contest_cascade(txn, contest_id)
                    .await
            })
        })
        .await
    }

    pub async fn append_turn_score(
        &self,
        actor: i64,
        contest_id: i64,
        score_value: i16,
    ) -> Result<ScoreEntry, DomainError> {
        with_txn(&self.state, move |txn| {
            Box::pin(async move {
                LedgerService::new()
                    .append_turn_score(txn, actor, contest_id, score_value)
                    .await
            })
        })
        .await
    }

    pub async fn save_turn_sheet(
        &self,
        actor: i64,
        contest_id: i64,
        slots: Vec<TurnSlot>,
    ) -> Result<TurnSheet, DomainError> {
        with_txn(&self.state, move |txn| {
            Box::pin(async move {
                LedgerService::new()
                    .save_turn_sheet(txn, actor, contest_id, slots)
                    .await
            })
        })
        .await
    }

    // ---- views ----

    pub async fn match_table(&self, contest_id: i64) -> Result<MatchTable, DomainError> {
        with_txn(&self.state, move |txn| {
            Box::pin(async move { MatchService::new().match_table(txn, contest_id).await })
        })
        .await
    }

    pub async fn player_overview(&self, player_id: i64) -> Result<PlayerOverview, DomainError> {
        with_txn(&self.state, move |txn| {
            Box::pin(async move { MatchService::new().player_overview(txn, player_id).await })
        })
        .await
    }

    // ---- players ----

    pub async fn register_player(
        &self,
        username: &str,
        forename: Option<String>,
        surname: Option<String>,
    ) -> Result<Player, DomainError> {
        let username = username.to_owned();
        with_txn(&self.state, move |txn| {
            Box::pin(async move {
                PlayerService::new()
                    .register_player(txn, &username, forename, surname)
                    .await
            })
        })
        .await
    }

    pub async fn rename_player(
        &self,
        actor: i64,
        player_id: i64,
        new_username: &str,
    ) -> Result<Player, DomainError> {
        let new_username = new_username.to_owned();
        with_txn(&self.state, move |txn| {
            Box::pin(async move {
                PlayerService::new()
                    .rename_player(txn, actor, player_id, &new_username)
                    .await
            })
        })
        .await
    }

    pub async fn find_player(&self, player_id: i64) -> Result<Player, DomainError> {
        with_txn(&self.state, move |txn| {
            Box::pin(async move { PlayerService::new().find_player(txn, player_id).await })
        })
        .await
    }

    pub async fn find_player_by_username(&self, username: &str) -> Result<Player, DomainError> {
        let username = username.to_owned();
        with_txn(&self.state, move |txn| {
            Box::pin(async move {
                PlayerService::new()
                    .find_player_by_username(txn, &username)
                    .await
            })
        })
        .await
    }

    // ---- contests ----

    pub async fn create_contest(
        &self,
        opponent: &str,
        location: &str,
        timestamp: Option<OffsetDateTime>,
    ) -> Result<Contest, DomainError> {
        let opponent = opponent.to_owned();
        let location = location.to_owned();
        with_txn(&self.state, move |txn| {
            Box::pin(async move {
                ContestService::new()
                    .create_contest(txn, &opponent, &location, timestamp)
                    .await
            })
        })
        .await
    }

    pub async fn update_contest(
        &self,
        contest_id: i64,
        edit: ContestEdit,
    ) -> Result<Contest, DomainError> {
        with_txn(&self.state, move |txn| {
            Box::pin(async move {
                ContestService::new()
                    .update_contest(txn, contest_id, edit)
                    .await
            })
        })
        .await
    }

    pub async fn get_contest(&self, contest_id: i64) -> Result<Contest, DomainError> {
        with_txn(&self.state, move |txn| {
            Box::pin(async move { ContestService::new().get_contest(txn, contest_id).await })
        })
        .await
    }

    pub async fn list_contests(&self) -> Result<Vec<Contest>, DomainError> {
        with_txn(&self.state, move |txn| {
            Box::pin(async move { ContestService::new().list_contests(txn).await })
        })
        .await
    }
}
