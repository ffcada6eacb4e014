use async_trait::async_trait;
use porter_core::{Command, PorterError, Result};
use std::path::PathBuf;
use std::process::Stdio;
use tracing::info;

/// Anything that can turn one natural-language instruction into one shell
/// command. One attempt per instruction, no retries.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, instruction: &str) -> Result<Command>;
}

/// Translator backed by the Gorilla CLI executable.
///
/// The instruction is passed as a single argv element, never interpolated
/// into a shell string, so shell metacharacters in untrusted text are inert.
pub struct GorillaCli {
    cli_path: Option<PathBuf>,
    timeout_secs: u64,
}

impl GorillaCli {
    pub fn new(cli_path: Option<PathBuf>, timeout_secs: u64) -> Self {
        Self {
            cli_path,
            timeout_secs,
        }
    }
}

#[async_trait]
impl Translator for GorillaCli {
    async fn translate(&self, instruction: &str) -> Result<Command> {
        let translation_failed = |reason: String| PorterError::Translation {
            instruction: instruction.to_string(),
            reason,
        };

        let cli_path = self
            .cli_path
            .as_ref()
            .ok_or_else(|| translation_failed("translator executable path is unset".into()))?;

        info!(instruction = instruction, cli = %cli_path.display(), "translating instruction");

        let mut cmd = tokio::process::Command::new(cli_path);
        cmd.arg(instruction);
        // Stdin nulled so an interactive translator fails fast instead of hanging
        cmd.stdin(Stdio::null());

        let output = tokio::time::timeout(
            std::time::Duration::from_secs(self.timeout_secs),
            cmd.output(),
        )
        .await
        .map_err(|_| {
            translation_failed(format!("translator timed out after {}s", self.timeout_secs))
        })?
        .map_err(|e| translation_failed(format!("failed to launch translator: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(translation_failed(format!(
                "translator exited with {}: {}",
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
