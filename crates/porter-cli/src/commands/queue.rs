use porter_config::PorterConfig;

/// Translate instructions and persist the resulting queue, printing what
/// would run. Nothing is executed.
pub(super) async fn cmd_queue(
    config: PorterConfig,
    instructions: Vec<String>,
    script_base: Option<String>,
) -> porter_core::Result<()> {
    let builder = super::builder_from(&config, script_base);
    let result = builder.queue(&instructions).await?;

    if result.queued_commands.is_empty() {
        println!("No commands queued ({} instruction(s) failed translation).", instructions.len());
    } else {
        println!("Queued {} command(s):", result.queued_commands.len());
        for (i, command) in result.queued_commands.iter().enumerate() {
            println!("  {}. {}", i + 1, command);
        }
    }
    println!("Script: {}", result.script_path.display());

    if let Some(reason) = &result.environment_info.error {
        eprintln!("⚠️  Environment snapshot failed: {reason}");
    }

    Ok(())
}
