//! Error types for the order desk.

use thiserror::Error;

/// Errors a caller can get back from the desk.
///
/// Desk operations themselves never fail: "nothing to match" is an empty
/// answer, not an error. These variants only describe a desk that is gone.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DeskError {
    /// The desk task has stopped and no longer accepts requests.
    #[error("Order desk closed")]
    Closed,

    /// The desk stopped before answering.
    #[error("Order desk dropped response channel")]
    Dropped,
}
