//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder for assembling a [`Config`] with
//! minimal boilerplate, validating the pieces a machine cannot live without.

pub mod error;

pub use error::BuildError;

use crate::core::{Config, StateDef};
use indexmap::IndexMap;

/// Builder for constructing configurations with a fluent API.
///
/// States are recorded in the order they are declared, which becomes the
/// enumeration order of the finished configuration.
///
/// # Example
///
/// ```rust
/// use statewalk::{ConfigBuilder, Machine};
///
/// let config = ConfigBuilder::new()
///     .initial("idle")
///     .state("idle", [("go", "running")])
///     .state("running", [("stop", "idle")])
///     .build()
///     .unwrap();
///
/// let machine = Machine::new(config).unwrap();
/// assert_eq!(machine.state(), "idle");
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<String>,
    states: IndexMap<String, StateDef>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state with its `(event, target)` transition rules.
    ///
    /// Declaring the same state twice replaces its earlier rules but keeps
    /// its original position in declaration order.
    pub fn state<I, E, T>(mut self, name: impl Into<String>, transitions: I) -> Self
    where
        I: IntoIterator<Item = (E, T)>,
        E: Into<String>,
        T: Into<String>,
    {
        self.states.insert(name.into(), StateDef::new(transitions));
        self
    }

    /// Build the configuration.
    /// Returns an error if required pieces are missing or inconsistent.
    pub fn build(self) -> Result<Config, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        if !self.states.contains_key(&initial) {
            return Err(BuildError::UndeclaredInitialState(initial));
        }

        Ok(Config {
            initial,
            states: self.states,
        })
    }
}
