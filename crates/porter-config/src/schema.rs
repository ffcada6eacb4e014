use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration, maps to `porter.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PorterConfig {
    pub translator: TranslatorConfig,
    pub environment: EnvironmentConfig,
    pub queue: QueueConfig,
    pub exec: ExecConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

impl PorterConfig {
    /// Validate the configuration. Returns human-readable warnings for
    /// suspicious-but-workable settings; errors only for unusable ones.
    pub fn validate(&self) -> Result<Vec<String>, String> {
        let mut warnings = Vec::new();

        if self.translator.cli_path.is_none() {
            warnings.push(
                "translator.cli_path is not set (and GORILLA_CLI_PATH is unset); \
                 every translation attempt will fail at launch"
                    .to_string(),
            );
        }
        if self.environment.working_dir.is_none() {
            warnings.push(
                "environment.working_dir is not set; environment snapshots will be empty"
                    .to_string(),
            );
        }
        if self.environment.max_depth == 0 {
            return Err("environment.max_depth must be at least 1".to_string());
        }
        if self.queue.script_base.is_empty() {
            return Err("queue.script_base must not be empty".to_string());
        }
        if self.server.listen.is_empty() {
            return Err("server.listen must not be empty".to_string());
        }

        Ok(warnings)
    }
}

// ── Translator ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Path to the Gorilla CLI executable. Falls back to the
    /// `GORILLA_CLI_PATH` env var when unset here; if both are missing,
    /// translation fails at launch for every instruction.
    pub cli_path: Option<PathBuf>,
    /// Seconds to wait for one translation before treating it as failed.
    pub timeout_secs: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            cli_path: None,
            timeout_secs: 120,
        }
    }
}

// ── Environment ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Directory whose tree is snapshotted around queueing and execution.
    /// Unset means snapshots are empty (a deliberate no-op, not an error).
    pub working_dir: Option<PathBuf>,
    /// Maximum directory depth the snapshot walk descends to. Bounds
    /// pathological trees and symlink-free runaway nesting.
    pub max_depth: usize,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            working_dir: None,
            max_depth: 64,
        }
    }
}

// ── Queue ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// Directory the replayable script is written into.
    pub script_dir: PathBuf,
    /// Base filename of the script; the platform extension (.sh/.bat) is
    /// appended. An existing script of the same name is overwritten.
    pub script_base: String,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            script_dir: PathBuf::from("."),
            script_base: "gorilla_commands".into(),
        }
    }
}

// ── Exec ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecConfig {
    /// Seconds to wait for one queued command before counting it as failed.
    /// A timeout never aborts the batch; the next command still runs.
    pub command_timeout_secs: u64,
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            command_timeout_secs: 120,
        }
    }
}

// ── Server ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address, host:port.
    pub listen: String,
    /// Enable permissive CORS (the plugin host calls from a browser origin).
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "127.0.0.1:5100".into(),
            cors: true,
        }
    }
}

// ── Logging ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level filter when RUST_LOG is unset (error, warn, info, debug, trace).
    pub level: String,
    /// Output format: "pretty" or "json".
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}
