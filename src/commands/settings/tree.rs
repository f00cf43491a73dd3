use anyhow::Result;
use colored::*;

use super::Session;

/// Print the location tree with the number of entries per node
pub fn tree_command(session: &Session) -> Result<()> {
    let tree = session.registry.location_tree(session.translator.as_ref());

    for (depth, node) in tree.walk() {
        let count = session.registry.list_visible_entries_at(&node.path).len();
        let suffix = if count > 0 {
            format!(" ({})", count).dimmed().to_string()
        } else {
            String::new()
        };
        println!("{}{}{}", "  ".repeat(depth), node.label.bright_cyan(), suffix);
    }

    Ok(())
}
