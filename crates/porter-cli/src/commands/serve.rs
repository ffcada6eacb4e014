use porter_config::PorterConfig;
use porter_core::NoSkills;
use std::sync::Arc;

/// Start the HTTP API server over the configured translator and working
/// directory. Skill invocation stays unconfigured here; wire a real
/// `SkillRuntime` when embedding the server in a host with a skill engine.
pub(super) async fn cmd_serve(config: PorterConfig) -> porter_core::Result<()> {
    println!("🦍 Porter v{}", env!("CARGO_PKG_VERSION"));
    println!("   Listening on: {}", config.server.listen);
    match &config.translator.cli_path {
        Some(path) => println!("   Translator: {}", path.display()),
        None => println!("   Translator: (unset, translations will fail)"),
    }
    match &config.environment.working_dir {
        Some(dir) => println!("   Working dir: {}", dir.display()),
        None => println!("   Working dir: (unset, snapshots will be empty)"),
    }
    println!();

    let queue = super::builder_from(&config, None);
    porter_server::start_server(config.server, Arc::new(queue), Arc::new(NoSkills)).await
}
