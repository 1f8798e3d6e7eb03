//! Error types for machine construction and transitions.

use thiserror::Error;

/// Errors signaled by [`Machine`](crate::core::Machine) operations.
///
/// Every variant carries the offending identifier, so callers can report
/// exactly which state or event was rejected. All conditions are signaled
/// synchronously at the offending call; a failed call leaves the machine
/// unchanged and usable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MachineError {
    /// The configuration cannot produce a usable machine. Fatal to
    /// construction; no machine is created.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// `change_state` was asked to jump to a state the configuration does
    /// not declare.
    #[error("Unknown state: '{0}'")]
    UnknownState(String),

    /// `trigger` was asked to fire an event with no transition rule in the
    /// current state.
    #[error("No transition for event '{event}' in state '{state}'")]
    UnknownEvent { event: String, state: String },
}
