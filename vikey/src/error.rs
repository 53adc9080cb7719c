//! Error types for the binding engine.

use thiserror::Error;

/// Result type alias for binding operations.
pub type Result<T> = std::result::Result<T, BindError>;

/// Conditions a bind can fail with.
///
/// User-input failures travel inside `BindResult::Error`; the
/// programmer-usage conditions (`DuplicateTrigger`, `ReentrantRun`,
/// `EmptyTrigger`) are reported synchronously at the call that caused them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// The typed key sequence is not a prefix of any registered trigger.
    #[error("no binding matches the typed keys")]
    NoMatchingBinding,
    /// The key following the register marker does not name a register.
    #[error("invalid register name: '{0}'")]
    InvalidRegister(char),
    /// A binding with this trigger is already registered.
    #[error("duplicate trigger: {0}")]
    DuplicateTrigger(String),
    /// `run` was invoked from inside an executing key continuation.
    #[error("run invoked re-entrantly from a key continuation")]
    ReentrantRun,
    /// A key trigger must contain at least one key.
    #[error("empty key trigger")]
    EmptyTrigger,
}
