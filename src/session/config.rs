//! Session configuration models.

use serde::{Deserialize, Serialize};

use crate::game::constants::{TIME_UP_PAUSE_SECS, TOTAL_ROUNDS, TURN_DURATION_SECS};

/// Session configuration.
///
/// Turn duration and round count are the only rule tunables; everything
/// else about the rules is fixed.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SessionConfig {
    /// Seconds each team gets per turn.
    pub turn_duration_secs: u32,

    /// Rounds in a full game.
    pub total_rounds: u32,

    /// Seconds the time-up display stays up before the next turn goes
    /// live.
    pub time_up_pause_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            turn_duration_secs: TURN_DURATION_SECS,
            total_rounds: TOTAL_ROUNDS,
            time_up_pause_secs: TIME_UP_PAUSE_SECS,
        }
    }
}

impl SessionConfig {
    /// Validate configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.turn_duration_secs == 0 {
            return Err("Turn duration must be at least 1 second".to_string());
        }
        if self.total_rounds == 0 {
            return Err("There must be at least 1 round".to_string());
        }
        Ok(())
    }
}
