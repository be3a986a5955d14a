//! Fixed game rule constants.

/// Seconds each team gets per turn.
pub const TURN_DURATION_SECS: u32 = 60;

/// Rounds in a full game. A round is complete once both teams have acted.
pub const TOTAL_ROUNDS: u32 = 10;

/// Seconds the "time's up" state stays on screen before the next turn
/// goes live.
pub const TIME_UP_PAUSE_SECS: u64 = 2;
