//! Build errors for configuration builders.

use thiserror::Error;

/// Errors that can occur when building a configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// `build` was called without a prior `.initial(state)`.
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    /// No `.state(...)` calls were made; a machine needs at least one state.
    #[error("No states defined. Add at least one state")]
    NoStates,

    /// The name given to `.initial(state)` was never declared with
    /// `.state(...)`.
    #[error("Initial state '{0}' is not a declared state")]
    UndeclaredInitialState(String),
}
