//! Turn reconciliation: sparse ledger rows <-> dense per-turn sheets.
//!
//! A player's entries for one contest are stored sparsely (one row per
//! recorded turn). Views and edit forms want a dense sequence of exactly
//! `TURN_COUNT` slots. Slot `t - 1` always holds the score for turn `t`;
//! placement is by turn number and never by row order.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::rules::{validate_score, TURN_COUNT};
use crate::errors::domain::{DomainError, ValidationKind};

/// One recorded turn as the reconciler sees it.
///
/// Implemented by the ledger's entry model; kept as a trait so the pure
/// domain code never depends on the persistence layer.
pub trait ScoredTurn {
    fn entry_id(&self) -> i64;
    fn player_id(&self) -> i64;
    fn turn_number(&self) -> i16;
    fn score_value(&self) -> i16;
}

impl<T: ScoredTurn> ScoredTurn for &T {
    fn entry_id(&self) -> i64 {
        (**self).entry_id()
    }
    fn player_id(&self) -> i64 {
        (**self).player_id()
    }
    fn turn_number(&self) -> i16 {
        (**self).turn_number()
    }
    fn score_value(&self) -> i16 {
        (**self).score_value()
    }
}

/// A slot of the dense projection; `None` is the empty sentinel.
pub type TurnSlot = Option<i16>;

/// Project sparse entries into `turn_count` positional slots.
///
/// Entries outside `1..=turn_count` are skipped. If two entries claim the
/// same turn the larger entry id wins, so the result does not depend on the
/// order of `entries`.
pub fn project<E: ScoredTurn>(entries: &[E], turn_count: usize) -> Vec<TurnSlot> {
    let mut winners: Vec<Option<(i64, i16)>> = vec![None; turn_count];

    for entry in entries {
        let turn = entry.turn_number();
        if turn < 1 || turn as usize > turn_count {
            warn!(
                entry_id = entry.entry_id(),
                turn_number = turn,
                turn_count,
                "skipping score entry outside the turn range"
            );
            continue;
        }
        let slot = &mut winners[turn as usize - 1];
        if let Some((kept, _)) = *slot {
            debug!(
                kept,
                other = entry.entry_id(),
                turn_number = turn,
                "duplicate turn entry"
            );
            if kept >= entry.entry_id() {
                continue;
            }
        }
        *slot = Some((entry.entry_id(), entry.score_value()));
    }

    winners
        .into_iter()
        .map(|w| w.map(|(_, score)| score))
        .collect()
}

/// Sum of the non-empty slots.
pub fn total(slots: &[TurnSlot]) -> i32 {
    slots.iter().flatten().map(|&s| i32::from(s)).sum()
}

/// Number of non-empty slots.
pub fn completed_turns(slots: &[TurnSlot]) -> usize {
    slots.iter().filter(|s| s.is_some()).count()
}

/// Dense, validated sheet of `TURN_COUNT` slots for one (player, contest).
///
/// Deserializing goes through [`TurnSheet::from_slots`], so a submitted
/// sheet is checked the same way as one built in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SubmittedSheet")]
pub struct TurnSheet {
    slots: Vec<TurnSlot>,
}

#[derive(Deserialize)]
struct SubmittedSheet {
    slots: Vec<TurnSlot>,
}

impl TryFrom<SubmittedSheet> for TurnSheet {
    type Error = DomainError;

    fn try_from(raw: SubmittedSheet) -> Result<Self, Self::Error> {
        Self::from_slots(raw.slots)
    }
}

impl Default for TurnSheet {
    fn default() -> Self {
        Self::empty()
    }
}

impl TurnSheet {
    pub fn empty() -> Self {
        Self {
            slots: vec![None; TURN_COUNT],
        }
    }

    pub fn from_entries<E: ScoredTurn>(entries: &[E]) -> Self {
        Self {
            slots: project(entries, TURN_COUNT),
        }
    }

    /// Build a sheet from submitted slots (the edit form), validating shape
    /// and every filled score.
    pub fn from_slots(slots: Vec<TurnSlot>) -> Result<Self, DomainError> {
        if slots.len() != TURN_COUNT {
            return Err(DomainError::validation(
                ValidationKind::InvalidSheet,
                format!(
                    "A turn sheet has exactly {TURN_COUNT} slots, got {}",
                    slots.len()
                ),
            ));
        }
        for score in slots.iter().flatten() {
            validate_score(*score)?;
        }
        Ok(Self { slots })
    }

    pub fn slots(&self) -> &[TurnSlot] {
        &self.slots
    }

    pub fn into_slots(self) -> Vec<TurnSlot> {
        self.slots
    }

    /// Score at 1-based `turn_number`, or `None` when empty or out of range.
    pub fn get(&self, turn_number: i16) -> TurnSlot {
        if turn_number < 1 {
            return None;
        }
        self.slots.get(turn_number as usize - 1).copied().flatten()
    }

    pub fn total(&self) -> i32 {
        total(&self.slots)
    }

    pub fn completed_turns(&self) -> usize {
        completed_turns(&self.slots)
    }

    pub fn is_complete(&self) -> bool {
        self.completed_turns() == self.slots.len()
    }

    /// Turn after the highest recorded one (1 when nothing is recorded);
    /// `None` once the last turn holds a score.
    pub fn next_turn_after_last(&self) -> Option<i16> {
        let last = self
            .slots
            .iter()
            .rposition(|s| s.is_some())
            .map_or(0, |idx| idx + 1);
        (last < self.slots.len()).then(|| last as i16 + 1)
    }

    /// Apply a single change in place.
    pub fn apply(&mut self, change: &TurnChange) {
        let (turn, value) = match *change {
            TurnChange::Upsert {
                turn_number,
                score_value,
            } => (turn_number, Some(score_value)),
            TurnChange::Remove { turn_number } => (turn_number, None),
        };
        if turn >= 1 {
            if let Some(slot) = self.slots.get_mut(turn as usize - 1) {
                *slot = value;
            }
        }
    }
}

/// One ledger mutation needed to move a sheet towards a desired state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TurnChange {
    Upsert { turn_number: i16, score_value: i16 },
    Remove { turn_number: i16 },
}

impl TurnChange {
    pub fn turn_number(&self) -> i16 {
        match *self {
            Self::Upsert { turn_number, .. } | Self::Remove { turn_number } => turn_number,
        }
    }
}

/// Changes turning `current` into `desired`, ascending by turn, one per
/// differing slot.
pub fn reconcile_changes(current: &TurnSheet, desired: &TurnSheet) -> Vec<TurnChange> {
    current
        .slots
        .iter()
        .zip(desired.slots.iter())
        .enumerate()
        .filter(|(_, (have, want))| have != want)
        .map(|(idx, (_, want))| {
            let turn_number = idx as i16 + 1;
            match *want {
                Some(score_value) => TurnChange::Upsert {
                    turn_number,
                    score_value,
                },
                None => TurnChange::Remove { turn_number },
            }
        })
        .collect()
}
