//! Session actor message types.

use tokio::sync::oneshot;

use crate::{game::GameState, words::CategoryId};

/// Messages that can be sent to a [`super::GameSession`].
#[derive(Debug)]
pub enum SessionMessage {
    /// Select a category and reset to the ready state for it.
    SelectCategory { category_id: CategoryId },

    /// Begin counting down the current turn.
    Start,

    /// Toggle between paused and running.
    PauseResume,

    /// The acting team guessed the word.
    Correct,

    /// Give up on the current word and cede the turn.
    Skip,

    /// End the game immediately.
    Finish,

    /// Start over with the same category.
    Restart,

    /// Return to the category menu.
    ResetToMenu,

    /// Get the current state snapshot.
    GetState {
        response: oneshot::Sender<GameState>,
    },

    /// Internal: one second of the countdown elapsed.
    Tick { generation: u64 },

    /// Internal: the time-up observation pause elapsed.
    TimeUpElapsed { generation: u64 },

    /// Shut the session down.
    Close,
}
