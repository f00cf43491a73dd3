use anyhow::Result;
use colored::*;
use config_registry::i18n::Labels;
use config_registry::registry::EntryType;

use super::Session;

/// List the options of a choice setting or the bounds of a count setting
pub fn options_command(session: &Session, name: &str) -> Result<()> {
    let view = session.registry.entry_view(name)?;
    let labels = Labels::new(session.translator.as_ref());
    let current = session.registry.get_string(name)?;

    println!(
        "{} ({})",
        labels.entry_name(view.descriptor).bold(),
        view.descriptor.entry_type
    );
    println!("  {}", labels.description(view.descriptor).dimmed());

    match view.descriptor.entry_type {
        EntryType::Choice => match view.options {
            Some(options) => {
                for option in options {
                    let marker = if *option == current { "●" } else { "○" };
                    println!("  {} {} ({})", marker, labels.option(name, option), option);
                }
            }
            None => println!("  {}", "no options registered".bright_yellow()),
        },
        EntryType::Count => {
            if let Some(bounds) = view.bounds {
                println!("  range {} ..= {}", bounds.min, bounds.max);
            }
        }
        EntryType::Flag => println!("  true | false"),
        EntryType::Text => println!("  free text"),
    }

    Ok(())
}
