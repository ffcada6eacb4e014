use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use crate::schema::PorterConfig;

/// Loads the Porter configuration and holds it for the process lifetime.
pub struct ConfigLoader {
    config: Arc<RwLock<PorterConfig>>,
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Resolve the config path: explicit path > PORTER_CONFIG env > ~/.porter/porter.toml
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let Ok(p) = std::env::var("PORTER_CONFIG") {
            return PathBuf::from(p);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".porter")
            .join("porter.toml")
    }

    /// Load the config from disk, falling back to defaults.
    pub fn load(path: Option<&Path>) -> porter_core::Result<Self> {
        let config_path = Self::resolve_path(path);
        let config = if config_path.exists() {
            info!(?config_path, "loading configuration");
            let raw = std::fs::read_to_string(&config_path)?;
            toml::from_str::<PorterConfig>(&raw).map_err(|e| {
                porter_core::PorterError::Config(format!(
                    "failed to parse {}: {}",
                    config_path.display(),
                    e
                ))
            })?
        } else {
            warn!(?config_path, "config file not found, using defaults");
            PorterConfig::default()
        };

        // Apply environment variable overrides
        let config = Self::apply_env_overrides(config);

        // Validate config: log warnings, fail on errors
        match config.validate() {
            Ok(warnings) => {
                for w in &warnings {
                    warn!("{}", w);
                }
            }
            Err(e) => {
                return Err(porter_core::PorterError::Config(e));
            }
        }

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_path,
        })
    }

    /// Get a read snapshot of the current config.
    pub fn get(&self) -> PorterConfig {
        self.config.read().clone()
    }

    /// Path the config was resolved to.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Apply env var overrides (PORTER_SERVER_LISTEN, PORTER_LOG_LEVEL, etc.)
    fn apply_env_overrides(mut config: PorterConfig) -> PorterConfig {
        if let Ok(v) = std::env::var("PORTER_SERVER_LISTEN") {
            config.server.listen = v;
        }
        if let Ok(v) = std::env::var("PORTER_LOG_LEVEL") {
            config.logging.level = v;
        }
        if let Ok(v) = std::env::var("PORTER_WORKING_DIR") {
            config.environment.working_dir = Some(PathBuf::from(v));
        }
        // Translator path: env var fills in when the config file doesn't set
        // it. This means the config file takes priority, env is the fallback.
        if config.translator.cli_path.is_none() {
            if let Ok(v) = std::env::var("GORILLA_CLI_PATH") {
                config.translator.cli_path = Some(PathBuf::from(v));
            }
        }
        config
    }
}
