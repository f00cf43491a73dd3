use super::commands::settings::SettingsSubcommands;
use clap::Parser;
use config_registry::storage::DEFAULT_FILE_NAME;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "config-registry")]
#[command(about = "Inspect and edit application settings")]
pub struct Cli {
    /// Directory holding the configuration file
    #[arg(long, global = true, env = "CONFIG_REGISTRY_DIR")]
    pub dir: Option<PathBuf>,

    /// Name of the configuration file inside the directory
    #[arg(long, global = true, default_value = DEFAULT_FILE_NAME)]
    pub file: String,

    /// TOML table of translations used for labels
    #[arg(long, global = true)]
    pub lang: Option<PathBuf>,

    /// Log to stderr instead of the log file
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: SettingsSubcommands,
}
