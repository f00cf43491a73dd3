use clap::Subcommand;

#[derive(Subcommand)]
pub enum SettingsSubcommands {
    /// Show current settings grouped by location
    Show {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Include entries hidden from the editor
        #[arg(short, long)]
        all: bool,
    },
    /// Get the value of a specific setting
    Get {
        /// Setting name
        name: String,
    },
    /// Set the value of a specific setting
    Set {
        /// Setting name
        name: String,
        /// Setting value; choice settings prompt when omitted
        value: Option<String>,
    },
    /// Reset a setting to its default value
    Reset {
        /// Setting name
        name: String,
    },
    /// Reset all settings to default values
    ResetAll {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Print the location tree
    Tree,
    /// List the allowed options or bounds of a setting
    Options {
        /// Setting name
        name: String,
    },
}
