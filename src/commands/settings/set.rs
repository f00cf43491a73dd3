use anyhow::Result;
use colored::*;
use config_registry::i18n::Labels;
use config_registry::registry::EntryType;
use config_registry::ChangeOutcome;
use log::info;

use super::Session;
use crate::ui::prompts;

/// Set the value of a specific setting
///
/// Choice settings accept an option or its translated label and prompt for
/// one when `value` is omitted.
///
/// # Returns
/// * `Ok(())` - Setting updated (or already had the value)
/// * `Err(anyhow::Error)` - Unknown setting, invalid value or denied change
pub fn set_command(session: &mut Session, name: &str, value: Option<String>) -> Result<()> {
    let descriptor = session.registry.descriptor(name)?.clone();
    let labels = Labels::new(session.translator.as_ref());

    let value = match descriptor.entry_type {
        EntryType::Choice => {
            let Some(options) = session.registry.constraints().options(name) else {
                anyhow::bail!("Setting '{}' has no options to choose from", name);
            };
            let raw = match value {
                Some(value) => labels.option_from_label(name, options, &value),
                None => {
                    let shown: Vec<String> =
                        options.iter().map(|o| labels.option(name, o)).collect();
                    let current = session.registry.get_string(name)?;
                    let default_index = options.iter().position(|o| *o == current).unwrap_or(0);
                    let picked = prompts::prompt_choice(
                        &labels.entry_name(&descriptor),
                        &shown,
                        default_index,
                    )?;
                    options[picked].clone()
                }
            };
            if !options.contains(&raw) {
                anyhow::bail!(
                    "'{}' is not a valid option for {}. Valid values: {}",
                    raw,
                    name,
                    options.join(", ")
                );
            }
            raw
        }
        _ => match value {
            Some(value) => value,
            None => anyhow::bail!("A value is required for '{}'", name),
        },
    };

    info!("Setting {} to {}", name, value);

    match session.registry.propose_change(name, &value)? {
        ChangeOutcome::Applied { value } => {
            session.save()?;
            println!(
                "{} Set {} to {}",
                "✓".bright_green().bold(),
                name.bright_green().bold(),
                value.to_string().bold()
            );
        }
        ChangeOutcome::Unchanged => {
            println!("{} {} is already {}", "•".dimmed(), name, value);
        }
        ChangeOutcome::Denied { reason, restored } => {
            anyhow::bail!("Change denied: {} ({} stays {})", reason, name, restored);
        }
    }

    Ok(())
}
