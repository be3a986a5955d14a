//! Charades game core - state snapshot and transition state machine.
//!
//! This module provides:
//! - The immutable [`GameState`] snapshot replaced wholesale on every
//!   transition
//! - The [`GameEngine`] with all game transitions and the
//!   turn-advancement logic
//! - Fixed rule constants

pub mod constants;
pub mod entities;
pub mod state_machine;

pub use entities::{GameState, Team};
pub use state_machine::{GameEngine, TimerDirective};
