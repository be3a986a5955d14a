//! Game state snapshot and related entities.

use std::{cmp::Ordering, fmt};

use serde::Serialize;

use super::constants::{TOTAL_ROUNDS, TURN_DURATION_SECS};
use crate::words::Category;

/// One of the two competing teams.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum Team {
    One,
    Two,
}

impl Team {
    /// The opposing team.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::One => "team 1",
            Self::Two => "team 2",
        };
        write!(f, "{repr}")
    }
}

/// Immutable snapshot of all game variables at a point in time.
///
/// The single source of truth for the presentation layer. Transitions
/// never mutate a snapshot in place; they replace it wholesale.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameState {
    /// Selected category. Absent exactly in the pre-game menu phase.
    pub category: Option<&'static Category>,
    /// Word currently being guessed. Empty only when no category is
    /// selected or a catalog lookup degraded.
    pub current_word: String,
    /// Seconds left in the current turn.
    pub time_remaining: u32,
    /// True while the countdown is running.
    pub is_active: bool,
    pub team1_score: u32,
    pub team2_score: u32,
    /// Team whose turn it is.
    pub current_team: Team,
    pub round_number: u32,
    pub total_rounds: u32,
    /// True during the transient "turn expired, awaiting advance" display.
    pub is_time_up: bool,
    /// True once the game has reached its terminal state.
    pub is_finished: bool,
    pub team1_played_this_round: bool,
    pub team2_played_this_round: bool,
}

impl Default for GameState {
    /// The all-defaults menu state.
    fn default() -> Self {
        Self {
            category: None,
            current_word: String::new(),
            time_remaining: TURN_DURATION_SECS,
            is_active: false,
            team1_score: 0,
            team2_score: 0,
            current_team: Team::One,
            round_number: 1,
            total_rounds: TOTAL_ROUNDS,
            is_time_up: false,
            is_finished: false,
            team1_played_this_round: false,
            team2_played_this_round: false,
        }
    }
}

impl GameState {
    /// Score of the given team.
    #[must_use]
    pub fn score_of(&self, team: Team) -> u32 {
        match team {
            Team::One => self.team1_score,
            Team::Two => self.team2_score,
        }
    }

    /// Whether the given team has already acted this round.
    #[must_use]
    pub fn played_this_round(&self, team: Team) -> bool {
        match team {
            Team::One => self.team1_played_this_round,
            Team::Two => self.team2_played_this_round,
        }
    }

    /// The winning team once the game is finished, `None` while the game
    /// is still running or when the scores are tied.
    #[must_use]
    pub fn winner(&self) -> Option<Team> {
        if !self.is_finished {
            return None;
        }
        match self.team1_score.cmp(&self.team2_score) {
            Ordering::Greater => Some(Team::One),
            Ordering::Less => Some(Team::Two),
            Ordering::Equal => None,
        }
    }
}
