use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// Natural-language text describing a desired action, exactly as the caller
/// supplied it. Opaque: no validation beyond what the translator enforces.
pub type Instruction = String;

/// A shell-executable string derived from exactly one [`Instruction`].
/// Produced once by translation, immutable afterwards.
pub type Command = String;

/// A point-in-time record of a directory tree: every directory reachable from
/// the working directory, mapped to the names of the entries (files and
/// subdirectories alike) directly inside it. Entry order is irrelevant.
///
/// Snapshots are immutable once captured. If enumeration fails partway, the
/// whole snapshot collapses into an [`error`](Self::error) description and
/// `entries` is left empty. Enumeration failures are recorded, never raised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvSnapshot {
    #[serde(default)]
    pub entries: BTreeMap<String, BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EnvSnapshot {
    /// The empty snapshot, what an unset working directory produces.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A snapshot that records an enumeration failure instead of entries.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            entries: BTreeMap::new(),
            error: Some(reason.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.error.is_none()
    }
}

/// The two sides of one changed path: `None` marks a path absent from that
/// snapshot (a directory deleted, or one created between snapshots).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffEntry {
    pub initial: Option<BTreeSet<String>>,
    pub updated: Option<BTreeSet<String>>,
}

/// The set of paths whose direct contents changed between two snapshots.
/// Empty when the snapshots agree at every path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvDiff {
    pub changes: BTreeMap<String, DiffEntry>,
}

impl EnvDiff {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }
}

/// What a queueing call hands back: the translated commands in instruction
/// order (failed translations are simply absent), the environment as it stood
/// at queueing time, and where the replayable script was written.
///
/// Created fresh per call and returned to the caller, never retained. The
/// script on disk and `queued_commands` always agree in content and order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueResult {
    pub queued_commands: Vec<Command>,
    pub environment_info: EnvSnapshot,
    pub script_path: PathBuf,
}

/// The record of one executed command: captured output, exit status, and the
/// environment changes observed immediately after it ran.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOutcome {
    pub command: Command,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    /// Diff of the working directory against the snapshot taken before this
    /// command (or before the batch, for the first command).
    pub env_changes: EnvDiff,
}

/// Result of a confirmed-execution session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExecReport {
    /// The confirmation was denied; nothing ran.
    Cancelled,
    /// Every queued command was attempted, in order, failures included.
    Completed {
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        outcomes: Vec<CommandOutcome>,
    },
}

impl ExecReport {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// The per-command outcomes, empty for a cancelled session.
    pub fn outcomes(&self) -> &[CommandOutcome] {
        match self {
            Self::Cancelled => &[],
            Self::Completed { outcomes, .. } => outcomes,
        }
    }
}
