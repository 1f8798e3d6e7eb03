//! Linear visit history with a bounds-checked cursor.
//!
//! Every state a machine has occupied is recorded in order. The cursor marks
//! the active entry; entries past the cursor are the redo branch, discarded
//! whenever a new transition is taken from a non-newest position (the same
//! rule a browser back/forward stack follows).

use serde::{Deserialize, Serialize};

/// Ordered record of every state a machine has occupied.
///
/// Invariant: `cursor < entries.len()` at all times, so the active entry
/// `entries[cursor]` always exists.
///
/// # Example
///
/// ```rust
/// use statewalk::History;
///
/// let mut history = History::new("idle".to_string());
/// history.push("running".to_string());
/// history.push("idle".to_string());
///
/// assert_eq!(history.current(), "idle");
/// assert!(history.undo());
/// assert_eq!(history.current(), "running");
///
/// // A new visit from here drops the redo branch.
/// history.push("paused".to_string());
/// assert!(!history.redo());
/// assert_eq!(history.entries(), ["idle", "running", "paused"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

/// Unvalidated mirror of [`History`] for deserialization.
#[derive(Deserialize)]
struct RawHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl TryFrom<RawHistory> for History {
    type Error = String;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        if raw.cursor >= raw.entries.len() {
            return Err(format!(
                "cursor {} out of bounds for {} history entries",
                raw.cursor,
                raw.entries.len()
            ));
        }
        Ok(Self {
            entries: raw.entries,
            cursor: raw.cursor,
        })
    }
}

impl History {
    /// Create a history whose only entry is `initial`, with the cursor on it.
    pub fn new(initial: String) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// The active entry.
    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// All recorded entries in visit order, including any redo branch.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Index of the active entry.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the cursor can step backward.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether the cursor can step forward.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Record a visit to `state`.
    ///
    /// Truncates the redo branch (everything past the cursor), appends the
    /// new entry, and advances the cursor onto it.
    pub fn push(&mut self, state: String) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(state);
        self.cursor += 1;
    }

    /// Step the cursor back one entry. Returns `false` at the oldest entry.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step the cursor forward one entry. Returns `false` at the newest entry.
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 == self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Discard everything except the active entry. Irreversible.
    pub fn clear(&mut self) {
        let current = self.entries.swap_remove(self.cursor);
        self.entries.clear();
        self.entries.push(current);
        self.cursor = 0;
    }
}
