use anyhow::Result;
use colored::*;
use config_registry::ChangeOutcome;
use log::info;

use super::Session;
use crate::ui::prompts::prompt_confirmation;

/// Reset a setting to its default value
///
/// # Returns
/// * `Ok(())` - Setting reset successfully
/// * `Err(anyhow::Error)` - Unknown setting or denied change
pub fn reset_command(session: &mut Session, name: &str) -> Result<()> {
    info!("Resetting setting: {}", name);

    match session.registry.reset(name)? {
        ChangeOutcome::Denied { reason, .. } => {
            anyhow::bail!("Reset of {} denied: {}", name, reason);
        }
        ChangeOutcome::Unchanged => {
            println!("{} {} already has its default value", "•".dimmed(), name);
        }
        ChangeOutcome::Applied { value } => {
            session.save()?;
            println!("{} Reset {} to {}", "✓".bright_green().bold(), name, value);
        }
    }

    Ok(())
}

/// Reset all settings to default values
///
/// # Arguments
/// * `force` - Skip confirmation prompt
///
/// # Returns
/// * `Ok(())` - Settings reset (denied entries are reported, not fatal)
/// * `Err(anyhow::Error)` - Configuration error
pub fn reset_all_command(session: &mut Session, force: bool) -> Result<()> {
    info!("Resetting all settings to defaults");

    if !force && !prompt_confirmation("Reset all settings to their default values?", false)? {
        println!("Operation cancelled.");
        return Ok(());
    }

    let outcomes = session.registry.reset_all()?;
    let mut applied = 0;
    for (name, outcome) in &outcomes {
        match outcome {
            ChangeOutcome::Applied { .. } => applied += 1,
            ChangeOutcome::Denied { reason, .. } => {
                println!("{} {} kept: {}", "⚠".bright_yellow().bold(), name, reason);
            }
            ChangeOutcome::Unchanged => {}
        }
    }

    session.save()?;
    println!(
        "{} Reset {} of {} settings",
        "✓".bright_green().bold(),
        applied,
        outcomes.len()
    );

    Ok(())
}
