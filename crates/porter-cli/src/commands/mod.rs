use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use porter_config::ConfigLoader;
use porter_queue::{GorillaCli, QueueBuilder};

mod queue;
mod run;
mod serve;

/// 🦍 Porter: confirmed natural-language command queueing for the Gorilla CLI
#[derive(Parser)]
#[command(name = "porter", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to porter.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level override (e.g. debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate instructions into a persisted command queue (never executes)
    Queue {
        /// Natural-language instructions, one command each
        #[arg(required = true)]
        instructions: Vec<String>,

        /// Base filename for the script artifact (default: gorilla_commands)
        #[arg(long)]
        script_base: Option<String>,
    },
    /// Queue instructions, then execute them after confirmation
    Run {
        /// Natural-language instructions, one command each
        #[arg(required = true)]
        instructions: Vec<String>,

        /// Skip the interactive prompt and confirm execution up front
        #[arg(long)]
        yes: bool,
    },
    /// Start the HTTP API server
    Serve,
    /// Show the resolved configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show version and build info
    Version,
}

impl Cli {
    pub async fn run(self) -> porter_core::Result<()> {
        // Load config first so we can use it for log format
        let config_loader = ConfigLoader::load(self.config.as_deref())?;
        let config = config_loader.get();

        // Resolve log level: --verbose > --quiet > --log-level > config default
        let log_level = if self.verbose {
            "debug".to_string()
        } else if self.quiet {
            "error".to_string()
        } else {
            self.log_level
                .clone()
                .unwrap_or_else(|| config.logging.level.clone())
        };

        // Initialize tracing with the configured format
        if config.logging.format == "json" {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
                )
                .json()
                .with_target(true)
                .init();
        } else {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
                )
                .with_target(false)
                .init();
        }

        match self.command {
            Commands::Queue {
                instructions,
                script_base,
            } => queue::cmd_queue(config, instructions, script_base).await,
            Commands::Run { instructions, yes } => run::cmd_run(config, instructions, yes).await,
            Commands::Serve => serve::cmd_serve(config).await,
            Commands::Config { json } => Self::cmd_config(config, json),
            Commands::Version => Self::cmd_version(),
        }
    }

    fn cmd_config(config: porter_config::PorterConfig, json: bool) -> porter_core::Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(&config)?);
        } else {
            let rendered = toml::to_string_pretty(&config)
                .map_err(|e| porter_core::PorterError::Config(e.to_string()))?;
            println!("{rendered}");
        }
        Ok(())
    }

    fn cmd_version() -> porter_core::Result<()> {
        println!("porter v{}", env!("CARGO_PKG_VERSION"));
        Ok(())
    }
}

/// Wire a queue builder from the resolved config.
pub(crate) fn builder_from(
    config: &porter_config::PorterConfig,
    script_base: Option<String>,
) -> QueueBuilder {
    let translator = GorillaCli::new(
        config.translator.cli_path.clone(),
        config.translator.timeout_secs,
    );

    let mut builder = QueueBuilder::new(Arc::new(translator))
        .with_working_dir(config.environment.working_dir.clone())
        .with_snapshot_max_depth(config.environment.max_depth)
        .with_script_dir(config.queue.script_dir.clone());

    if let Some(base) = script_base {
        builder = builder.with_script_base(base);
    } else {
        builder = builder.with_script_base(config.queue.script_base.clone());
    }
    builder
}
