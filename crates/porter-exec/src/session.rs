use chrono::Utc;
use porter_core::{Command, CommandOutcome, EnvSnapshot, ExecReport};
use std::path::PathBuf;
use std::process::Stdio;
use tracing::{info, warn};
use uuid::Uuid;

use crate::confirmation::Confirmation;

/// Where a session is in its lifecycle. Cancelled and Done are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingConfirmation,
    Executing,
    Done,
    Cancelled,
}

/// One confirmed-execution session over a queued command sequence.
///
/// The session owns its own snapshot state explicitly: the running "previous"
/// snapshot advances after every command, so each diff covers exactly one
/// command's side effects. Once execution starts there is no mid-batch
/// cancellation, and a failing command never stops the ones after it.
pub struct ExecSession {
    id: Uuid,
    commands: Vec<Command>,
    working_dir: Option<PathBuf>,
    snapshot_max_depth: usize,
    command_timeout_secs: u64,
    state: SessionState,
}

impl ExecSession {
    pub fn new(commands: Vec<Command>) -> Self {
        Self {
            id: Uuid::new_v4(),
            commands,
            working_dir: None,
            snapshot_max_depth: porter_env::DEFAULT_MAX_DEPTH,
            command_timeout_secs: 120,
            state: SessionState::AwaitingConfirmation,
        }
    }

    /// Directory the commands run in and the snapshots cover. Unset means
    /// commands run in the process cwd and snapshots are empty.
    pub fn with_working_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.working_dir = dir;
        self
    }

    pub fn with_snapshot_max_depth(mut self, depth: usize) -> Self {
        self.snapshot_max_depth = depth;
        self
    }

    pub fn with_command_timeout(mut self, secs: u64) -> Self {
        self.command_timeout_secs = secs;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Drive the session to a terminal state.
    ///
    /// A denied confirmation cancels the whole batch before anything runs.
    /// Granted: capture an initial snapshot, then run each command in order,
    /// recording output, exit status, and the environment diff against the
    /// previous snapshot. Execution failures are contained per command, so
    /// this never returns an error.
    pub async fn run(mut self, confirmation: Confirmation) -> ExecReport {
        debug_assert_eq!(self.state, SessionState::AwaitingConfirmation);

        if !confirmation.is_granted() {
            info!(session = %self.id, "execution cancelled before start");
            self.state = SessionState::Cancelled;
            return ExecReport::Cancelled;
        }

        self.state = SessionState::Executing;
        let started_at = Utc::now();
        info!(session = %self.id, commands = self.commands.len(), "executing queued commands");

        let mut previous = self.snapshot();
        let mut outcomes = Vec::with_capacity(self.commands.len());

        for command in &self.commands {
            let outcome = self.run_one(command, &mut previous).await;
            if outcome.success {
                info!(session = %self.id, command = %command, "command executed successfully");
            } else {
                warn!(
                    session = %self.id,
                    command = %command,
                    exit_code = outcome.exit_code,
                    stderr = %outcome.stderr.trim(),
                    "command failed, continuing with the rest of the batch"
                );
            }
            outcomes.push(outcome);
        }

        self.state = SessionState::Done;
        ExecReport::Completed {
            started_at,
            finished_at: Utc::now(),
            outcomes,
        }
    }

    /// Execute one command, then advance the running snapshot past it.
    async fn run_one(&self, command: &Command, previous: &mut EnvSnapshot) -> CommandOutcome {
        let mut cmd = tokio::process::Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd.stdin(Stdio::null());
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        let result = tokio::time::timeout(
            std::time::Duration::from_secs(self.command_timeout_secs),
            cmd.output(),
        )
        .await;

        let (exit_code, stdout, stderr, success) = match result {
            Ok(Ok(output)) => (
                output.status.code().unwrap_or(-1),
                String::from_utf8_lossy(&output.stdout).to_string(),
                String::from_utf8_lossy(&output.stderr).to_string(),
                output.status.success(),
            ),
            Ok(Err(e)) => (-1, String::new(), format!("failed to launch: {e}"), false),
            Err(_) => (
                -1,
                String::new(),
                format!("command timed out after {}s", self.command_timeout_secs),
                false,
            ),
        };

        let current = self.snapshot();
        let env_changes = porter_env::diff(previous, &current);
        if !env_changes.is_empty() {
            info!(session = %self.id, command = %command, changed_paths = env_changes.len(),
                "environment changes detected");
        }
        *previous = current;

        CommandOutcome {
            command: command.clone(),
            exit_code,
            stdout,
            stderr,
            success,
            env_changes,
        }
    }

    fn snapshot(&self) -> EnvSnapshot {
        porter_env::capture(self.working_dir.as_deref(), self.snapshot_max_depth)
    }
}
