//! Session error types.

use thiserror::Error;

/// Errors surfaced by [`super::SessionHandle`] operations.
///
/// Game-rule violations are not errors: the engine treats operations
/// called in the wrong state as silent no-ops. The only failure mode at
/// this boundary is the actor being gone.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum SessionError {
    #[error("session is closed")]
    Closed,
}
