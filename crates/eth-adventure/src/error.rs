//! Error types for adventure sessions.

use thiserror::Error;

use eth_core::CoreError;

use crate::safety::SafetyCategory;

/// Result type for session operations.
pub type AdventureResult<T> = Result<T, AdventureError>;

/// Errors that can occur during an adventure session.
///
/// Response generation itself never fails; these come from screening input
/// and from loading or saving sessions.
#[derive(Debug, Error)]
pub enum AdventureError {
    /// The player's input was rejected by the content safety filter.
    #[error("that action cannot be narrated ({0})")]
    ContentRejected(SafetyCategory),

    /// Reading or writing session data failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}
