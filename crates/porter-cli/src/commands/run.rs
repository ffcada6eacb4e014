use porter_config::PorterConfig;
use porter_core::ExecReport;
use porter_exec::{Confirmation, ExecSession};

/// Queue instructions, confirm with the user, then execute the queue,
/// reporting per-command output and environment changes as they land.
pub(super) async fn cmd_run(
    config: PorterConfig,
    instructions: Vec<String>,
    yes: bool,
) -> porter_core::Result<()> {
    let builder = super::builder_from(&config, None);
    let result = builder.queue(&instructions).await?;

    if result.queued_commands.is_empty() {
        println!("Nothing to execute: no instruction survived translation.");
        return Ok(());
    }

    println!("Queued {} command(s):", result.queued_commands.len());
    for (i, command) in result.queued_commands.iter().enumerate() {
        println!("  {}. {}", i + 1, command);
    }
    println!();

    let confirmation = if yes {
        Confirmation::Granted
    } else {
        prompt_for_confirmation()?
    };

    let session = ExecSession::new(result.queued_commands)
        .with_working_dir(config.environment.working_dir.clone())
        .with_snapshot_max_depth(config.environment.max_depth)
        .with_command_timeout(config.exec.command_timeout_secs);

    match session.run(confirmation).await {
        ExecReport::Cancelled => {
            println!("Execution cancelled by the user.");
        }
        ExecReport::Completed { outcomes, .. } => {
            for outcome in &outcomes {
                if outcome.success {
                    println!("✅ {}", outcome.command);
                } else {
                    println!("❌ {} (exit {})", outcome.command, outcome.exit_code);
                }
                if !outcome.stdout.trim().is_empty() {
                    println!("   {}", outcome.stdout.trim());
                }
                if !outcome.stderr.trim().is_empty() {
                    eprintln!("   {}", outcome.stderr.trim());
                }
                for (path, change) in &outcome.env_changes.changes {
                    println!("   env: {path}: {:?} -> {:?}", change.initial, change.updated);
                }
            }

            let failed = outcomes.iter().filter(|o| !o.success).count();
            if failed > 0 {
                println!("\nDone: {} of {} command(s) failed.", failed, outcomes.len());
            } else {
                println!("\nDone: all {} command(s) succeeded.", outcomes.len());
            }
        }
    }

    Ok(())
}

/// Ask on the terminal. Only the literal token "yes" proceeds.
fn prompt_for_confirmation() -> porter_core::Result<Confirmation> {
    use dialoguer::{Input, theme::ColorfulTheme};

    let response: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Do you want to execute the queued commands? (yes/no)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| porter_core::PorterError::Config(format!("confirmation prompt failed: {e}")))?;

    Ok(Confirmation::from_response(&response))
}
