//! The finite state machine itself.

use crate::core::config::Config;
use crate::core::error::MachineError;
use crate::core::history::History;
use std::sync::Arc;

/// A table-driven finite state machine with linear undo/redo history.
///
/// A machine owns nothing but a shared handle to its [`Config`] and the
/// [`History`] of states it has visited; the active state is always the
/// history entry under the cursor, so `history()[cursor()] == state()` holds
/// after every operation.
///
/// All mutators take `&mut self` and run to completion synchronously. Each
/// one is atomic with respect to its own outcome: a failed call leaves the
/// machine exactly as it was.
///
/// # Example
///
/// ```rust
/// use statewalk::{Config, Machine, StateDef};
///
/// let config = Config::new(
///     "idle",
///     [
///         ("idle", StateDef::new([("go", "running")])),
///         ("running", StateDef::new([("stop", "idle")])),
///     ],
/// );
///
/// let mut machine = Machine::new(config).unwrap();
/// assert_eq!(machine.state(), "idle");
///
/// machine.trigger("go").unwrap();
/// machine.trigger("stop").unwrap();
/// assert_eq!(machine.state(), "idle");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "running");
/// assert!(machine.undo());
/// assert!(!machine.undo());
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "running");
/// ```
#[derive(Clone, Debug)]
pub struct Machine {
    config: Arc<Config>,
    history: History,
}

impl Machine {
    /// Create a machine in the configuration's initial state.
    ///
    /// Accepts a [`Config`] by value or an `Arc<Config>` shared with other
    /// machines. Fails with [`MachineError::InvalidConfig`] when the
    /// configuration declares no states, or when `initial` is not a declared
    /// state (this check is what makes [`reset`](Self::reset) infallible).
    /// Transition targets are NOT validated here: an undeclared target only
    /// surfaces when the transition referencing it fires.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statewalk::{Config, Machine, MachineError, StateDef};
    ///
    /// let bad = Config::new("ghost", [("idle", StateDef::default())]);
    /// assert!(matches!(
    ///     Machine::new(bad),
    ///     Err(MachineError::InvalidConfig(_))
    /// ));
    /// ```
    pub fn new(config: impl Into<Arc<Config>>) -> Result<Self, MachineError> {
        let config = config.into();
        if config.states.is_empty() {
            return Err(MachineError::InvalidConfig(
                "no states declared".to_string(),
            ));
        }
        if !config.states.contains_key(&config.initial) {
            return Err(MachineError::InvalidConfig(format!(
                "initial state '{}' is not a declared state",
                config.initial
            )));
        }
        let history = History::new(config.initial.clone());
        Ok(Self { config, history })
    }

    /// The active state. Pure query.
    pub fn state(&self) -> &str {
        self.history.current()
    }

    /// Shared handle to the configuration driving this machine.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Jump unconditionally to `target`, bypassing the transition table.
    ///
    /// `target` must be a declared state; the current state's transition
    /// rules are irrelevant. On success the redo branch is discarded, the
    /// new state is appended to history, and the cursor advances. On
    /// failure ([`MachineError::UnknownState`]) nothing changes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statewalk::{Config, Machine, MachineError, StateDef};
    ///
    /// let config = Config::new(
    ///     "idle",
    ///     [
    ///         ("idle", StateDef::new([("go", "running")])),
    ///         ("running", StateDef::default()),
    ///     ],
    /// );
    /// let mut machine = Machine::new(config).unwrap();
    ///
    /// // No "go" event fired; the jump is unconditional.
    /// machine.change_state("running").unwrap();
    /// assert_eq!(machine.state(), "running");
    ///
    /// let err = machine.change_state("nonexistent").unwrap_err();
    /// assert_eq!(err, MachineError::UnknownState("nonexistent".to_string()));
    /// assert_eq!(machine.state(), "running");
    /// ```
    pub fn change_state(&mut self, target: &str) -> Result<(), MachineError> {
        if !self.config.states.contains_key(target) {
            return Err(MachineError::UnknownState(target.to_string()));
        }
        self.history.push(target.to_string());
        Ok(())
    }

    /// Fire `event`, following the current state's transition table.
    ///
    /// Fails with [`MachineError::UnknownEvent`] when the current state has
    /// no rule for `event`, leaving the machine unchanged. On success the
    /// configured target becomes the active state with the same history
    /// bookkeeping as [`change_state`](Self::change_state).
    ///
    /// The target itself is NOT checked against the declared states: the
    /// machine trusts the configuration, and an undeclared target silently
    /// becomes the active state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statewalk::{Config, Machine, StateDef};
    ///
    /// let config = Config::new(
    ///     "idle",
    ///     [
    ///         ("idle", StateDef::new([("go", "running")])),
    ///         ("running", StateDef::new([("stop", "idle")])),
    ///     ],
    /// );
    /// let mut machine = Machine::new(config).unwrap();
    ///
    /// machine.trigger("go").unwrap();
    /// assert_eq!(machine.state(), "running");
    /// assert!(machine.trigger("go").is_err()); // no "go" rule in "running"
    /// assert_eq!(machine.state(), "running");
    /// ```
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        let current = self.history.current();
        // Construction guarantees the active state is declared, unless a
        // previous trigger already followed an undeclared target.
        let target = self
            .config
            .states
            .get(current)
            .and_then(|def| def.target(event))
            .ok_or_else(|| MachineError::UnknownEvent {
                event: event.to_string(),
                state: current.to_string(),
            })?;
        let target = target.to_string();
        self.history.push(target);
        Ok(())
    }

    /// Return to the configuration's initial state. Never fails.
    ///
    /// Recorded as a regular visit: the redo branch is discarded, the
    /// initial state is appended, and the cursor advances onto it.
    pub fn reset(&mut self) {
        self.history.push(self.config.initial.clone());
    }

    /// All declared state names, in declaration order. Pure query.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statewalk::{Config, Machine, StateDef};
    ///
    /// let config = Config::new(
    ///     "idle",
    ///     [
    ///         ("idle", StateDef::new([("go", "running")])),
    ///         ("running", StateDef::new([("stop", "idle")])),
    ///     ],
    /// );
    /// let machine = Machine::new(config).unwrap();
    ///
    /// assert_eq!(machine.states(), vec!["idle", "running"]);
    /// assert_eq!(machine.states_for("go"), vec!["idle"]);
    /// assert_eq!(machine.states_for("stop"), vec!["running"]);
    /// assert!(machine.states_for("missing").is_empty());
    /// ```
    pub fn states(&self) -> Vec<&str> {
        self.config.states.keys().map(String::as_str).collect()
    }

    /// All states with a transition rule for `event`, in declaration order.
    /// Pure query; an empty result is a valid answer.
    pub fn states_for(&self, event: &str) -> Vec<&str> {
        self.config
            .states
            .iter()
            .filter(|(_, def)| def.handles(event))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Events legal in the active state, in declaration order. Empty when
    /// the active state is undeclared (reachable only via a trigger to an
    /// undeclared target).
    pub fn events(&self) -> Vec<&str> {
        self.config
            .states
            .get(self.history.current())
            .map(|def| def.transitions.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Step back to the previously visited state.
    ///
    /// Returns `false` (and does nothing) when already at the oldest entry.
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    /// Step forward to the next visited state.
    ///
    /// Returns `false` (and does nothing) when already at the newest entry.
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// Whether [`undo`](Self::undo) would succeed. Pure query.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether [`redo`](Self::redo) would succeed. Pure query.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Every state visited so far, in order, including any redo branch.
    pub fn history(&self) -> &[String] {
        self.history.entries()
    }

    /// Index of the active entry in [`history`](Self::history).
    pub fn cursor(&self) -> usize {
        self.history.cursor()
    }

    /// Forget all undo/redo information, keeping the active state as the
    /// sole history entry. Irreversible; the state itself is unchanged.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::StateDef;

    fn idle_running() -> Config {
        Config::new(
            "idle",
            [
                ("idle", StateDef::new([("go", "running")])),
                ("running", StateDef::new([("stop", "idle")])),
            ],
        )
    }

    fn assert_invariant(machine: &Machine) {
        assert_eq!(machine.history()[machine.cursor()], machine.state());
    }

    #[test]
    fn new_machine_starts_in_initial_state() {
        let machine = Machine::new(idle_running()).unwrap();
        assert_eq!(machine.state(), "idle");
        assert_eq!(machine.history(), ["idle"]);
        assert_eq!(machine.cursor(), 0);
        assert_invariant(&machine);
    }

    #[test]
    fn new_machine_cannot_undo() {
        let mut machine = Machine::new(idle_running()).unwrap();
        assert!(!machine.undo());
        assert_eq!(machine.state(), "idle");
    }

    #[test]
    fn empty_config_is_rejected() {
        let config = Config::new("idle", Vec::<(String, StateDef)>::new());
        let err = Machine::new(config).unwrap_err();
        assert!(matches!(err, MachineError::InvalidConfig(_)));
    }

    #[test]
    fn undeclared_initial_state_is_rejected() {
        let config = Config::new("ghost", [("idle", StateDef::default())]);
        let err = Machine::new(config).unwrap_err();
        assert!(matches!(err, MachineError::InvalidConfig(_)));
    }

    #[test]
    fn config_is_shareable_across_machines() {
        let config = Arc::new(idle_running());
        let mut first = Machine::new(Arc::clone(&config)).unwrap();
        let second = Machine::new(Arc::clone(&config)).unwrap();

        first.trigger("go").unwrap();
        assert_eq!(first.state(), "running");
        assert_eq!(second.state(), "idle");
    }

    #[test]
    fn change_state_jumps_unconditionally() {
        let mut machine = Machine::new(idle_running()).unwrap();
        // "idle" has no transition to "running" named here; the jump
        // bypasses the table entirely.
        machine.change_state("running").unwrap();
        assert_eq!(machine.state(), "running");
        assert_eq!(machine.history(), ["idle", "running"]);
        assert_invariant(&machine);
    }

    #[test]
    fn change_state_to_unknown_state_is_atomic() {
        let mut machine = Machine::new(idle_running()).unwrap();
        machine.change_state("running").unwrap();

        let err = machine.change_state("nonexistent").unwrap_err();
        assert_eq!(err, MachineError::UnknownState("nonexistent".to_string()));
        assert_eq!(machine.state(), "running");
        assert_eq!(machine.history(), ["idle", "running"]);
        assert_eq!(machine.cursor(), 1);
    }

    #[test]
    fn change_state_to_current_state_appends() {
        let mut machine = Machine::new(idle_running()).unwrap();
        machine.change_state("idle").unwrap();
        assert_eq!(machine.history(), ["idle", "idle"]);
        assert_eq!(machine.cursor(), 1);
    }

    #[test]
    fn trigger_follows_transition_table() {
        let mut machine = Machine::new(idle_running()).unwrap();
        machine.trigger("go").unwrap();
        assert_eq!(machine.state(), "running");
        machine.trigger("stop").unwrap();
        assert_eq!(machine.state(), "idle");
        assert_eq!(machine.history(), ["idle", "running", "idle"]);
        assert_invariant(&machine);
    }

    #[test]
    fn trigger_unknown_event_is_atomic() {
        let mut machine = Machine::new(idle_running()).unwrap();
        machine.trigger("go").unwrap();

        let err = machine.trigger("go").unwrap_err();
        assert_eq!(
            err,
            MachineError::UnknownEvent {
                event: "go".to_string(),
                state: "running".to_string(),
            }
        );
        assert_eq!(machine.state(), "running");
        assert_eq!(machine.history(), ["idle", "running"]);
    }

    #[test]
    fn trigger_trusts_undeclared_targets() {
        let config = Config::new("a", [("a", StateDef::new([("leap", "limbo")]))]);
        let mut machine = Machine::new(config).unwrap();

        machine.trigger("leap").unwrap();
        assert_eq!(machine.state(), "limbo");
        assert!(machine.events().is_empty());
        // Any further trigger fails; the machine stays usable.
        assert!(machine.trigger("leap").is_err());
        assert_eq!(machine.state(), "limbo");
        // change_state back to declared territory still works.
        machine.change_state("a").unwrap();
        assert_eq!(machine.state(), "a");
    }

    #[test]
    fn undo_redo_walk_the_worked_example() {
        let mut machine = Machine::new(idle_running()).unwrap();
        machine.trigger("go").unwrap();
        machine.trigger("stop").unwrap();

        assert!(machine.undo());
        assert_eq!(machine.state(), "running");
        assert!(machine.undo());
        assert_eq!(machine.state(), "idle");
        assert!(!machine.undo());
        assert_eq!(machine.state(), "idle");
        assert!(machine.redo());
        assert_eq!(machine.state(), "running");
        assert_invariant(&machine);
    }

    #[test]
    fn redo_restores_state_before_undo() {
        let mut machine = Machine::new(idle_running()).unwrap();
        machine.change_state("running").unwrap();
        machine.change_state("idle").unwrap();

        let before = machine.state().to_string();
        assert!(machine.undo());
        assert!(machine.redo());
        assert_eq!(machine.state(), before);
    }

    #[test]
    fn new_transition_after_undo_drops_redo_branch() {
        let mut machine = Machine::new(idle_running()).unwrap();
        machine.trigger("go").unwrap();
        machine.trigger("stop").unwrap();
        machine.undo();

        machine.change_state("idle").unwrap();
        assert!(!machine.redo());
        assert_eq!(machine.history(), ["idle", "running", "idle"]);
        assert_invariant(&machine);
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut machine = Machine::new(idle_running()).unwrap();
        machine.trigger("go").unwrap();
        machine.reset();
        assert_eq!(machine.state(), "idle");
        assert_eq!(machine.history(), ["idle", "running", "idle"]);
        assert_invariant(&machine);
    }

    #[test]
    fn reset_truncates_redo_branch() {
        let mut machine = Machine::new(idle_running()).unwrap();
        machine.trigger("go").unwrap();
        machine.trigger("stop").unwrap();
        machine.undo();
        machine.undo();

        machine.reset();
        // Undo walks to the pre-reset state, never into the dropped branch.
        assert_eq!(machine.history(), ["idle", "idle"]);
        assert!(machine.undo());
        assert_eq!(machine.state(), "idle");
        assert!(!machine.undo());
    }

    #[test]
    fn states_enumerate_in_declaration_order() {
        let machine = Machine::new(idle_running()).unwrap();
        assert_eq!(machine.states(), vec!["idle", "running"]);
        assert_eq!(machine.states_for("go"), vec!["idle"]);
        assert_eq!(machine.states_for("stop"), vec!["running"]);
        assert_eq!(machine.states_for("missing"), Vec::<&str>::new());
    }

    #[test]
    fn states_for_collects_every_handler() {
        let config = Config::new(
            "solid",
            [
                ("solid", StateDef::new([("heat", "liquid")])),
                ("liquid", StateDef::new([("heat", "gas"), ("chill", "solid")])),
                ("gas", StateDef::new([("chill", "liquid")])),
            ],
        );
        let machine = Machine::new(config).unwrap();
        assert_eq!(machine.states_for("heat"), vec!["solid", "liquid"]);
        assert_eq!(machine.states_for("chill"), vec!["liquid", "gas"]);
    }

    #[test]
    fn events_list_current_state_rules() {
        let config = Config::new(
            "liquid",
            [
                ("liquid", StateDef::new([("heat", "gas"), ("chill", "solid")])),
                ("gas", StateDef::default()),
                ("solid", StateDef::default()),
            ],
        );
        let mut machine = Machine::new(config).unwrap();
        assert_eq!(machine.events(), vec!["heat", "chill"]);
        machine.trigger("heat").unwrap();
        assert!(machine.events().is_empty());
    }

    #[test]
    fn clear_history_disables_undo_and_redo() {
        let mut machine = Machine::new(idle_running()).unwrap();
        machine.trigger("go").unwrap();
        machine.clear_history();

        assert_eq!(machine.state(), "running");
        assert!(!machine.undo());
        assert!(!machine.redo());
        assert_eq!(machine.history(), ["running"]);
        assert_eq!(machine.cursor(), 0);
    }
}
