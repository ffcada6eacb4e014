use porter_core::{Command, Instruction, QueueResult, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use crate::script::{self, ScriptFormat};
use crate::translator::Translator;

/// Orchestrates translation over a batch of instructions and packages the
/// result: translate each instruction (skipping failures), persist the
/// surviving commands to a script, snapshot the environment, hand all three
/// back. Queueing never executes anything.
pub struct QueueBuilder {
    translator: Arc<dyn Translator>,
    working_dir: Option<PathBuf>,
    snapshot_max_depth: usize,
    script_dir: PathBuf,
    script_base: String,
    script_format: ScriptFormat,
}

impl QueueBuilder {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self {
            translator,
            working_dir: None,
            snapshot_max_depth: porter_env::DEFAULT_MAX_DEPTH,
            script_dir: PathBuf::from("."),
            script_base: script::DEFAULT_SCRIPT_BASE.to_string(),
            script_format: ScriptFormat::native(),
        }
    }

    /// Directory snapshotted at queueing time. Unset means empty snapshots.
    pub fn with_working_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.working_dir = dir;
        self
    }

    pub fn with_snapshot_max_depth(mut self, depth: usize) -> Self {
        self.snapshot_max_depth = depth;
        self
    }

    pub fn with_script_dir(mut self, dir: PathBuf) -> Self {
        self.script_dir = dir;
        self
    }

    pub fn with_script_base(mut self, base: impl Into<String>) -> Self {
        self.script_base = base.into();
        self
    }

    pub fn with_script_format(mut self, format: ScriptFormat) -> Self {
        self.script_format = format;
        self
    }

    /// Translate the batch, strictly in order, one attempt each. A failed
    /// translation drops that instruction from the queue (no placeholder)
    /// and the batch continues. Only a script-write failure is an error.
    pub async fn queue(&self, instructions: &[Instruction]) -> Result<QueueResult> {
        let mut queued: Vec<Command> = Vec::with_capacity(instructions.len());

        for instruction in instructions {
            match self.translator.translate(instruction).await {
                Ok(command) => {
                    info!(instruction = %instruction, command = %command, "instruction queued");
                    queued.push(command);
                }
                Err(e) => {
                    warn!(instruction = %instruction, error = %e, "skipping instruction");
                }
            }
        }

        let script_path = script::write_script(
            &queued,
            &self.script_dir,
            &self.script_base,
            self.script_format,
        )?;

        // Snapshot reflects the state after translation, before any execution
        let environment_info =
            porter_env::capture(self.working_dir.as_deref(), self.snapshot_max_depth);

        Ok(QueueResult {
            queued_commands: queued,
            environment_info,
            script_path,
        })
    }
}
