//! Read-only view of the host shell's command history.
//!
//! The history store belongs to the host; this crate only ever inspects the
//! most recent completed command.

use serde::{Deserialize, Serialize};

/// Timing and outcome of a single completed command, as recorded by the
/// host shell.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CommandRecord {
    /// Unix timestamp when the command started.
    pub start: f64,
    /// Unix timestamp when the command finished.
    pub end: f64,
    /// Exit code of the command.
    pub exit_code: i32,
    /// The command text as typed.
    pub input: String,
}

impl CommandRecord {
    pub fn elapsed_secs(&self) -> f64 {
        self.end - self.start
    }

    pub fn failed(&self) -> bool {
        self.exit_code != 0
    }
}

/// Access to the host-maintained history store.
pub trait HistoryStore {
    /// The most recent completed command, if any command has run yet.
    fn last_command(&self) -> Option<CommandRecord>;
}
