use thiserror::Error;

/// Unified error type for the entire Porter runtime.
#[derive(Error, Debug)]
pub enum PorterError {
    // ── Translation errors ─────────────────────────────────────
    #[error("failed to translate instruction '{instruction}': {reason}")]
    Translation { instruction: String, reason: String },

    // ── Execution errors ───────────────────────────────────────
    #[error("command execution failed: {command}: {reason}")]
    Execution { command: String, reason: String },

    // ── Script artifact errors ─────────────────────────────────
    #[error("failed to write command script {path}: {reason}")]
    Script { path: String, reason: String },

    // ── Skill errors ───────────────────────────────────────────
    #[error("could not find function {function} in skill {skill}")]
    SkillNotFound { skill: String, function: String },

    #[error("skill invocation failed: {skill}/{function}: {reason}")]
    SkillInvocation {
        skill: String,
        function: String,
        reason: String,
    },

    // ── HTTP boundary errors ───────────────────────────────────
    #[error("remote endpoint returned status {status}: {message}")]
    RemoteEndpoint { status: u16, message: String },

    #[error("server error: {0}")]
    Server(String),

    // ── Config errors ──────────────────────────────────────────
    #[error("config error: {0}")]
    Config(String),

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PorterError>;
