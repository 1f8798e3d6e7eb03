//! Core state machine types and logic.
//!
//! This module contains the whole behavioral contract of the machine:
//! - Configuration tables via [`Config`] and [`StateDef`]
//! - The [`Machine`] itself with transition validation
//! - Linear undo/redo bookkeeping via [`History`]
//! - The closed [`MachineError`] taxonomy
//!
//! Everything here is synchronous and single-threaded; the only shared
//! value is the read-only configuration.

mod config;
mod error;
mod history;
mod machine;

pub use config::{Config, StateDef};
pub use error::MachineError;
pub use history::History;
pub use machine::Machine;
