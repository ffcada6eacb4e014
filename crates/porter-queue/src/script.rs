use porter_core::{Command, PorterError, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Base filename used when the caller supplies none.
pub const DEFAULT_SCRIPT_BASE: &str = "gorilla_commands";

/// Platform framing for the replayable script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptFormat {
    /// `<base>.sh` with a `#!/bin/sh` shebang.
    Posix,
    /// `<base>.bat` ending in a `pause` so the console window stays open.
    Batch,
}

impl ScriptFormat {
    /// The format native to the platform this binary was built for.
    pub fn native() -> Self {
        if cfg!(windows) {
            Self::Batch
        } else {
            Self::Posix
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Posix => "sh",
            Self::Batch => "bat",
        }
    }

    /// Render the full script text, one command per line.
    pub fn render(&self, commands: &[Command]) -> String {
        let mut text = String::new();
        if let Self::Posix = self {
            text.push_str("#!/bin/sh\n\n");
        }
        for command in commands {
            text.push_str(command);
            text.push('\n');
        }
        if let Self::Batch = self {
            text.push_str("pause\n");
        }
        text
    }
}

/// Persist the queued commands to `<dir>/<base>.<ext>`, overwriting any
/// existing file of the same name. Returns the path written.
pub fn write_script(
    commands: &[Command],
    dir: &Path,
    base: &str,
    format: ScriptFormat,
) -> Result<PathBuf> {
    let path = dir.join(format!("{base}.{}", format.extension()));

    std::fs::write(&path, format.render(commands)).map_err(|e| PorterError::Script {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    info!(path = %path.display(), commands = commands.len(), "commands dumped to script");
    Ok(path)
}
