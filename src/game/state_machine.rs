//! Charades game state machine.
//!
//! All transitions are synchronous, non-blocking functions over an owned
//! [`GameState`]. Operations called in the wrong state are guard
//! conditions, not failures: they leave the snapshot untouched and return
//! [`TimerDirective::None`]. Each transition tells the scheduling layer
//! what to do with the countdown through its returned directive; the
//! engine itself never sleeps or spawns.

use log::debug;

use super::{
    constants::{TOTAL_ROUNDS, TURN_DURATION_SECS},
    entities::{GameState, Team},
};
use crate::words::{Category, WordProvider};

/// What the scheduling layer must do with the countdown after a
/// transition.
///
/// The scheduler always cancels any outstanding countdown before arming a
/// new one; `Restart` therefore covers both the initial start and every
/// mid-game restart.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimerDirective {
    /// Leave the countdown alone.
    None,
    /// Cancel any outstanding countdown and arm a fresh one counting down
    /// from the snapshot's `time_remaining`.
    Restart,
    /// Hold the time-up display for the fixed observation pause, then
    /// deliver the deferred turn advance.
    PauseThenAdvance,
    /// Cancel any outstanding countdown.
    Cancel,
}

/// The game engine: owns the current snapshot and a word provider.
///
/// Replaces the snapshot wholesale on every transition. Exactly one
/// writer must drive an engine at a time; the session actor serializes
/// user intents with countdown ticks for exactly this reason.
#[derive(Debug)]
pub struct GameEngine {
    state: GameState,
    words: WordProvider,
    turn_duration: u32,
    total_rounds: u32,
}

impl GameEngine {
    /// Create an engine with the standard rules (60 second turns, 10
    /// rounds).
    #[must_use]
    pub fn new(words: WordProvider) -> Self {
        Self::with_rules(words, TURN_DURATION_SECS, TOTAL_ROUNDS)
    }

    /// Create an engine with custom turn duration and round count.
    #[must_use]
    pub fn with_rules(words: WordProvider, turn_duration: u32, total_rounds: u32) -> Self {
        let state = GameState {
            time_remaining: turn_duration,
            total_rounds,
            ..GameState::default()
        };
        Self {
            state,
            words,
            turn_duration,
            total_rounds,
        }
    }

    /// The current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Select a category and reset to the ready state for it: fresh
    /// word, full time, round 1, cleared played-flags, inactive,
    /// unfinished. Valid from any state.
    pub fn select_category(&mut self, category: &'static Category) -> TimerDirective {
        let current_word = self.draw_word_for(Some(category));
        // Scores and the acting team carry over; the menu flow zeroes
        // them through reset_to_menu.
        self.state = GameState {
            category: Some(category),
            current_word,
            time_remaining: self.turn_duration,
            is_active: false,
            team1_score: self.state.team1_score,
            team2_score: self.state.team2_score,
            current_team: self.state.current_team,
            round_number: 1,
            total_rounds: self.total_rounds,
            is_time_up: false,
            is_finished: false,
            team1_played_this_round: false,
            team2_played_this_round: false,
        };
        TimerDirective::Cancel
    }

    /// Begin (or re-begin) counting down the current turn. No-op unless
    /// a category is selected and the game is not finished.
    pub fn start_game(&mut self) -> TimerDirective {
        if self.state.category.is_none() || self.state.is_finished {
            return TimerDirective::None;
        }
        let mut next = self.state.clone();
        next.is_active = true;
        next.is_time_up = false;
        self.state = next;
        TimerDirective::Restart
    }

    /// Toggle between paused and running, preserving `time_remaining`.
    /// No-op in the menu, during the time-up display, or after finish.
    pub fn pause_resume(&mut self) -> TimerDirective {
        if self.state.category.is_none() || self.state.is_finished || self.state.is_time_up {
            return TimerDirective::None;
        }
        let mut next = self.state.clone();
        next.is_active = !next.is_active;
        let directive = if next.is_active {
            TimerDirective::Restart
        } else {
            TimerDirective::Cancel
        };
        self.state = next;
        directive
    }

    /// Score a point for the acting team, then advance the turn. The
    /// point is counted before the terminal check so the last correct
    /// answer of the final round lands.
    pub fn correct_answer(&mut self) -> TimerDirective {
        if !self.can_act() {
            return TimerDirective::None;
        }
        let mut next = self.state.clone();
        match next.current_team {
            Team::One => next.team1_score += 1,
            Team::Two => next.team2_score += 1,
        }
        self.state = next;
        self.advance_turn()
    }

    /// Give up on the current word and cede the turn. No score change.
    pub fn skip_word(&mut self) -> TimerDirective {
        if !self.can_act() {
            return TimerDirective::None;
        }
        self.advance_turn()
    }

    /// Apply one countdown tick. No-op for raced ticks delivered after a
    /// pause, reset, or finish. On reaching zero the turn expires: the
    /// time-up display goes up and the advance is deferred to
    /// [`Self::advance_after_time_up`], unless this expiry completes the
    /// final round, in which case the game finishes immediately.
    pub fn tick(&mut self) -> TimerDirective {
        if !self.can_act() {
            return TimerDirective::None;
        }
        let remaining = self.state.time_remaining.saturating_sub(1);
        let mut next = self.state.clone();
        next.time_remaining = remaining;
        if remaining > 0 {
            self.state = next;
            return TimerDirective::None;
        }
        next.is_time_up = true;
        match next.current_team {
            Team::One => next.team1_played_this_round = true,
            Team::Two => next.team2_played_this_round = true,
        }
        let round_complete = next.team1_played_this_round && next.team2_played_this_round;
        if round_complete && next.round_number + 1 > self.total_rounds {
            next.is_time_up = false;
            next.is_finished = true;
            next.is_active = false;
            self.state = next;
            debug!("final turn expired, game over");
            return TimerDirective::Cancel;
        }
        self.state = next;
        TimerDirective::PauseThenAdvance
    }

    /// Apply the turn advance deferred by a timer expiry, once the
    /// observation pause has elapsed. No-op unless the time-up display
    /// is still showing.
    pub fn advance_after_time_up(&mut self) -> TimerDirective {
        if !self.state.is_time_up || self.state.is_finished {
            return TimerDirective::None;
        }
        let mut next = self.state.clone();
        if next.team1_played_this_round && next.team2_played_this_round {
            next.round_number += 1;
            next.current_team = Team::One;
            next.team1_played_this_round = false;
            next.team2_played_this_round = false;
        } else {
            next.current_team = next.current_team.other();
        }
        next.current_word = self.draw_word_for(next.category);
        next.time_remaining = self.turn_duration;
        next.is_time_up = false;
        self.state = next;
        TimerDirective::Restart
    }

    /// End the game immediately. Valid any time the game is not already
    /// finished.
    pub fn finish_game(&mut self) -> TimerDirective {
        if self.state.is_finished {
            return TimerDirective::None;
        }
        let mut next = self.state.clone();
        next.is_finished = true;
        next.is_active = false;
        next.is_time_up = false;
        self.state = next;
        TimerDirective::Cancel
    }

    /// Start over with the same category: scores zeroed, round 1, team 1
    /// up first, fresh word. No-op without a selected category.
    pub fn restart_game(&mut self) -> TimerDirective {
        let Some(category) = self.state.category else {
            return TimerDirective::None;
        };
        let current_word = self.draw_word_for(Some(category));
        self.state = GameState {
            category: Some(category),
            current_word,
            time_remaining: self.turn_duration,
            total_rounds: self.total_rounds,
            ..GameState::default()
        };
        TimerDirective::Cancel
    }

    /// Return to the all-defaults menu state.
    pub fn reset_to_menu(&mut self) -> TimerDirective {
        self.state = GameState {
            time_remaining: self.turn_duration,
            total_rounds: self.total_rounds,
            ..GameState::default()
        };
        TimerDirective::Cancel
    }

    /// Whether user actions on the current word are accepted right now.
    fn can_act(&self) -> bool {
        self.state.is_active && !self.state.is_time_up && !self.state.is_finished
    }

    /// Shared turn-advancement logic for correct answers, skips, and
    /// deferred expiry advances. Marks the acting team's played-flag,
    /// crosses the round boundary when both teams have acted, and
    /// finishes the game past the final round.
    fn advance_turn(&mut self) -> TimerDirective {
        let acting = self.state.current_team;
        let mut next = self.state.clone();
        match acting {
            Team::One => next.team1_played_this_round = true,
            Team::Two => next.team2_played_this_round = true,
        }
        if next.team1_played_this_round && next.team2_played_this_round {
            if next.round_number + 1 > self.total_rounds {
                next.is_finished = true;
                next.is_active = false;
                self.state = next;
                debug!("final round complete, game over");
                return TimerDirective::Cancel;
            }
            next.round_number += 1;
            next.current_team = Team::One;
            next.team1_played_this_round = false;
            next.team2_played_this_round = false;
        } else {
            next.current_team = acting.other();
        }
        next.current_word = self.draw_word_for(next.category);
        next.time_remaining = self.turn_duration;
        next.is_time_up = false;
        self.state = next;
        TimerDirective::Restart
    }

    /// Draw the next word, degrading to an empty string on a catalog
    /// lookup miss.
    fn draw_word_for(&mut self, category: Option<&'static Category>) -> String {
        category
            .and_then(|category| self.words.random_word(category.id))
            .unwrap_or_default()
    }
}
