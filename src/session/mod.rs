//! Async session layer driving a game with an actor model.
//!
//! This module implements:
//! - [`GameSession`]: an actor owning the [`crate::GameEngine`] in a
//!   Tokio task
//! - [`SessionHandle`]: the presentation layer's way in (intents) and
//!   out (state snapshots)
//! - Message-based communication with tokio channels
//! - The cancellable countdown timer behind the engine's directives
//!
//! ## Architecture
//!
//! All state mutation happens inside the actor task, which serializes
//! user intents with countdown ticks — the single-writer model the
//! engine requires. Snapshots are published through a watch channel, so
//! subscribers always observe the latest state and never block the
//! actor. Countdown tasks tag their messages with a generation counter;
//! the actor drops anything stale, so a tick raced against a pause or
//! reset can never resurrect a cancelled countdown.
//!
//! ## Example
//!
//! ```
//! use charades::{GameSession, SessionConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (session, _task) = GameSession::spawn(SessionConfig::default());
//!
//!     session.select_category(1).await.unwrap();
//!     session.start().await.unwrap();
//!     session.correct_answer().await.unwrap();
//!
//!     let state = session.state().await.unwrap();
//!     assert_eq!(state.team1_score, 1);
//! }
//! ```

pub mod actor;
pub mod config;
pub mod errors;
pub mod messages;
mod timer;

pub use actor::{GameSession, SessionHandle};
pub use config::SessionConfig;
pub use errors::SessionError;
pub use messages::SessionMessage;
