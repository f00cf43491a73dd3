use anyhow::Result;
use colored::*;
use config_registry::i18n::Labels;
use serde_json::json;

use super::Session;

/// Show settings grouped by location
///
/// # Arguments
/// * `json` - Print a JSON array instead of the grouped listing
/// * `all` - Include entries hidden from the editor
pub fn show_command(session: &Session, json: bool, all: bool) -> Result<()> {
    let registry = &session.registry;

    if json {
        let entries: Vec<_> = registry
            .store()
            .iter()
            .filter(|(descriptor, _)| all || descriptor.visible)
            .map(|(descriptor, value)| {
                json!({
                    "name": descriptor.name,
                    "type": descriptor.entry_type,
                    "value": value.map(|v| v.to_string()),
                    "default": descriptor.default_value,
                    "location": descriptor.location,
                    "visible": descriptor.visible,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let labels = Labels::new(session.translator.as_ref());
    let tree = registry.location_tree(session.translator.as_ref());

    for (depth, node) in tree.walk() {
        let entries = registry.list_visible_entries_at(&node.path);
        if depth > 0 {
            println!("{}{}", "  ".repeat(depth - 1), node.label.bright_cyan().bold());
        }
        for view in entries {
            let value = view
                .value
                .map(|v| v.to_string())
                .unwrap_or_else(|| "<unset>".to_string());
            let marker = if value == view.descriptor.default_value {
                String::new()
            } else {
                format!(" (default {})", view.descriptor.default_value).dimmed().to_string()
            };
            println!(
                "{}  {} = {}{}",
                "  ".repeat(depth.saturating_sub(1)),
                labels.entry_name(view.descriptor).bold(),
                value.bright_green(),
                marker
            );
        }
    }

    if all {
        let hidden: Vec<_> = registry.descriptors().filter(|d| !d.visible).collect();
        if !hidden.is_empty() {
            println!("{}", "Hidden".dimmed().bold());
            for descriptor in hidden {
                let value = registry.get_string(&descriptor.name)?;
                let at = format!("[{}]", descriptor.location);
                println!("  {} = {} {}", descriptor.name, value, at.dimmed());
            }
        }
    }

    Ok(())
}
