//! # Charades
//!
//! A turn-based charades party game engine.
//!
//! Two teams alternate guessing words from a chosen category within a
//! per-turn time limit, across a fixed number of rounds, accumulating
//! scores until a winner is determined. The crate is the game core only:
//! presentation (screens, cards, timers) and application bootstrapping
//! are external consumers of the in-process API.
//!
//! ## Architecture
//!
//! The game state lives in a single immutable [`GameState`] snapshot that
//! is replaced wholesale on every transition:
//!
//! - [`words`]: the fixed category catalog and [`WordProvider`], which
//!   draws a uniformly random word with an injectable RNG.
//! - [`game`]: the [`GameEngine`] state machine. Every transition is a
//!   synchronous, non-blocking function that returns a [`TimerDirective`]
//!   telling the scheduling layer what to do with the countdown.
//! - [`session`]: the async layer. A [`GameSession`] actor owns the
//!   engine in a Tokio task, serializes user intents with countdown
//!   ticks, and publishes snapshots through a watch channel.
//!
//! ## Example
//!
//! ```
//! use charades::{GameEngine, WordProvider, catalog};
//!
//! let animals = catalog::get(1).unwrap();
//! let mut engine = GameEngine::new(WordProvider::new());
//! engine.select_category(animals);
//! engine.start_game();
//! engine.correct_answer();
//! assert_eq!(engine.state().team1_score, 1);
//! ```

/// Core game logic, entities, and state machine.
pub mod game;
pub use game::{
    GameEngine, GameState, Team, TimerDirective,
    constants::{self, TIME_UP_PAUSE_SECS, TOTAL_ROUNDS, TURN_DURATION_SECS},
};

/// Async session actor driving the countdown and publishing snapshots.
pub mod session;
pub use session::{GameSession, SessionConfig, SessionError, SessionHandle};

/// Word categories and random word selection.
pub mod words;
pub use words::{Category, CategoryId, WordProvider, catalog};
