//! Machine configuration: the declarative state/transition table.
//!
//! A [`Config`] is a passive data structure supplied by the caller. It is
//! never mutated by a machine, so one `Config` behind an `Arc` can drive any
//! number of independent machines.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Transition table for a single state.
///
/// Maps event names to target state names. Iteration order is declaration
/// order, which is semantically meaningful for every enumeration query.
///
/// # Example
///
/// ```rust
/// use statewalk::StateDef;
///
/// let def = StateDef::new([("go", "running"), ("sleep", "idle")]);
/// assert_eq!(def.target("go"), Some("running"));
/// assert_eq!(def.target("fly"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    /// Event name -> target state name, in declaration order.
    pub transitions: IndexMap<String, String>,
}

impl StateDef {
    /// Create a state definition from `(event, target)` pairs.
    pub fn new<I, E, T>(transitions: I) -> Self
    where
        I: IntoIterator<Item = (E, T)>,
        E: Into<String>,
        T: Into<String>,
    {
        Self {
            transitions: transitions
                .into_iter()
                .map(|(event, target)| (event.into(), target.into()))
                .collect(),
        }
    }

    /// Target state for `event`, or `None` if this state has no rule for it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Whether this state has a transition rule for `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Declarative configuration for a [`Machine`](crate::core::Machine).
///
/// Holds the starting state and the full state/transition table. The maps
/// are insertion-ordered, so "declaration order" is a guaranteed property of
/// enumeration queries, not an accident of hashing.
///
/// Transition targets are NOT validated against the declared states: the
/// machine trusts the configuration, and an undeclared target only surfaces
/// when the transition referencing it actually fires.
///
/// # Example
///
/// ```rust
/// use statewalk::{Config, StateDef};
///
/// let config = Config::new(
///     "idle",
///     [
///         ("idle", StateDef::new([("go", "running")])),
///         ("running", StateDef::new([("stop", "idle")])),
///     ],
/// );
///
/// assert_eq!(config.initial, "idle");
/// assert!(config.states.contains_key("running"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Name of the starting state.
    pub initial: String,
    /// State name -> definition, in declaration order.
    pub states: IndexMap<String, StateDef>,
}

impl Config {
    /// Create a configuration from an initial state name and
    /// `(name, definition)` pairs.
    pub fn new<I, N>(initial: impl Into<String>, states: I) -> Self
    where
        I: IntoIterator<Item = (N, StateDef)>,
        N: Into<String>,
    {
        Self {
            initial: initial.into(),
            states: states
                .into_iter()
                .map(|(name, def)| (name.into(), def))
                .collect(),
        }
    }

    /// Parse a configuration from a JSON document.
    ///
    /// Key order in the document becomes declaration order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statewalk::Config;
    ///
    /// let config = Config::from_json(
    ///     r#"{
    ///         "initial": "idle",
    ///         "states": {
    ///             "idle": { "transitions": { "go": "running" } },
    ///             "running": { "transitions": { "stop": "idle" } }
    ///         }
    ///     }"#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(config.initial, "idle");
    /// ```
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
