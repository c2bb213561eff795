use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by focus-cycling operations.
///
/// There is exactly one hard failure: a policy invoked with an event whose
/// current target is not an element. Everything else (empty focusable sets,
/// no active element, out-of-range indices) degrades to a silent no-op.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// The event's current target is not an element. This is a
    /// listener-attachment mistake and is not recoverable at runtime.
    #[error("invalid event target")]
    InvalidTarget,
}
