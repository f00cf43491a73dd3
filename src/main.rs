use anyhow::Result;
use clap::Parser;
use log::{debug, info};

mod cli;
mod commands;
mod ui;

use cli::Cli;
use cli::commands::SettingsSubcommands;
use commands::settings::{
    Session, get_command, options_command, reset_all_command, reset_command, set_command,
    show_command, storage_location, tree_command,
};

/// Name of the log file inside the storage directory
const LOG_FILE_NAME: &str = "config-registry.log";

fn init_logging(cli: &Cli) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();

    if cli.verbose {
        builder
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Stderr);
    } else {
        // Log to file in the storage directory (truncate on each run)
        let location = storage_location(cli)?;
        location.ensure_dir()?;
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(location.dir().join(LOG_FILE_NAME))?;
        builder.target(env_logger::Target::Pipe(Box::new(log_file)));
    }

    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;
    info!("Starting config-registry");

    let mut session = Session::open(&cli)?;
    debug!("Registry holds {} entries", session.registry.len());

    match &cli.command {
        SettingsSubcommands::Show { json, all } => show_command(&session, *json, *all)?,
        SettingsSubcommands::Get { name } => get_command(&session, name)?,
        SettingsSubcommands::Set { name, value } => {
            set_command(&mut session, name, value.clone())?
        }
        SettingsSubcommands::Reset { name } => reset_command(&mut session, name)?,
        SettingsSubcommands::ResetAll { force } => reset_all_command(&mut session, *force)?,
        SettingsSubcommands::Tree => tree_command(&session)?,
        SettingsSubcommands::Options { name } => options_command(&session, name)?,
    }

    info!("Done");
    Ok(())
}
