//! Statewalk: a table-driven finite state machine with walkable history
//!
//! Statewalk tracks a current state against a declarative table of states
//! and event-triggered transitions, and keeps a linear undo/redo history of
//! every state visited. It is an embeddable building block for anything that
//! needs explicit state tracking (UI widgets, protocol handlers, workflow
//! steps) without rolling its own transition bookkeeping.
//!
//! # Core Concepts
//!
//! - **Config**: insertion-ordered table of states and their event rules,
//!   shareable read-only across machines
//! - **Machine**: the FSM itself; validates transitions, tracks the current
//!   state, and records every visit
//! - **History**: the ordered record of visited states with a cursor for
//!   undo/redo; new transitions taken mid-history drop the redo branch
//!
//! # Example
//!
//! ```rust
//! use statewalk::{ConfigBuilder, Machine};
//!
//! let config = ConfigBuilder::new()
//!     .initial("idle")
//!     .state("idle", [("go", "running")])
//!     .state("running", [("stop", "idle")])
//!     .build()
//!     .unwrap();
//!
//! let mut machine = Machine::new(config).unwrap();
//!
//! machine.trigger("go").unwrap();
//! assert_eq!(machine.state(), "running");
//!
//! machine.change_state("idle").unwrap(); // unconditional jump
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "running");
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder};
pub use core::{Config, History, Machine, MachineError, StateDef};
