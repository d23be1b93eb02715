//! Match-wide comparison table built from every player's ledger rows.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::reconcile::{completed_turns, project, total, ScoredTurn, TurnSheet, TurnSlot};
use crate::domain::rules::TURN_COUNT;

/// One player column of the match table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerColumn {
    pub player_id: i64,
    pub username: String,
    pub total: i32,
    pub completed_turns: usize,
}

/// One turn row; `cells[i]` belongs to `columns[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRow {
    pub turn_number: i16,
    pub cells: Vec<TurnSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchTable {
    pub contest_id: i64,
    pub columns: Vec<PlayerColumn>,
    pub rows: Vec<MatchRow>,
}

impl MatchTable {
    pub fn column_index(&self, player_id: i64) -> Option<usize> {
        self.columns.iter().position(|c| c.player_id == player_id)
    }

    /// Cell for `player_id` at 1-based `turn_number`.
    pub fn cell(&self, turn_number: i16, player_id: i64) -> TurnSlot {
        let col = self.column_index(player_id)?;
        if turn_number < 1 {
            return None;
        }
        self.rows
            .get(turn_number as usize - 1)
            .and_then(|row| row.cells.get(col).copied().flatten())
    }

    /// Column `player_id` as a standalone sheet.
    pub fn sheet_for(&self, player_id: i64) -> Option<TurnSheet> {
        let col = self.column_index(player_id)?;
        let slots = self
            .rows
            .iter()
            .map(|row| row.cells.get(col).copied().flatten())
            .collect();
        TurnSheet::from_slots(slots).ok()
    }
}

/// Build the cross-player table for one contest.
///
/// Columns follow the first appearance of each player when `entries` are
/// read in ascending entry id order, regardless of the slice's own order.
/// `usernames` supplies display names; unknown players fall back to `#<id>`.
pub fn build_match_table<E: ScoredTurn>(
    contest_id: i64,
    entries: &[E],
    usernames: &HashMap<i64, String>,
) -> MatchTable {
    let mut by_id: Vec<&E> = entries.iter().collect();
    by_id.sort_by_key(|e| e.entry_id());

    let mut order: Vec<i64> = Vec::new();
    let mut per_player: HashMap<i64, Vec<&E>> = HashMap::new();
    for entry in by_id {
        let pid = entry.player_id();
        per_player
            .entry(pid)
            .or_insert_with(|| {
                order.push(pid);
                Vec::new()
            })
            .push(entry);
    }

    let projections: Vec<Vec<TurnSlot>> = order
        .iter()
        .map(|pid| project(&per_player[pid], TURN_COUNT))
        .collect();

    let columns = order
        .iter()
        .zip(&projections)
        .map(|(&player_id, slots)| PlayerColumn {
            player_id,
            username: usernames
                .get(&player_id)
                .cloned()
                .unwrap_or_else(|| format!("#{player_id}")),
            total: total(slots),
            completed_turns: completed_turns(slots),
        })
        .collect();

    let rows = (0..TURN_COUNT)
        .map(|idx| MatchRow {
            turn_number: idx as i16 + 1,
            cells: projections.iter().map(|slots| slots[idx]).collect(),
        })
        .collect();

    MatchTable {
        contest_id,
        columns,
        rows,
    }
}
