//! Settings commands over the built-in registrations

pub mod get;
pub mod options;
pub mod reset;
pub mod set;
pub mod show;
pub mod tree;

pub use get::get_command;
pub use options::options_command;
pub use reset::{reset_all_command, reset_command};
pub use set::set_command;
pub use show::show_command;
pub use tree::tree_command;

use anyhow::{Context, Result};
use config_registry::i18n::{MapTranslator, NoTranslation, Translator};
use config_registry::registrations;
use config_registry::storage::StorageLocation;
use config_registry::ConfigRegistry;

use crate::cli::Cli;

/// Name of the per-user application directory
pub const APP_NAME: &str = "config-registry";

/// Resolve the storage location from the command line
pub fn storage_location(cli: &Cli) -> Result<StorageLocation> {
    let location = match &cli.dir {
        Some(dir) => StorageLocation::in_dir(dir),
        None => StorageLocation::for_app(APP_NAME)
            .context("Failed to determine the per-user config directory")?,
    };
    Ok(location.with_file_name(&cli.file))
}

/// Registry with defaults and stored values loaded, plus the label source
pub struct Session {
    pub registry: ConfigRegistry,
    pub translator: Box<dyn Translator>,
}

impl Session {
    /// Register everything, apply defaults and overlay the config file
    pub fn open(cli: &Cli) -> Result<Self> {
        let mut registry = ConfigRegistry::initialize(storage_location(cli)?);
        registrations::register_all(&mut registry)?;
        registry.enforce_bounds();
        registry.load_defaults()?;

        if let Some(report) = registry.load_default()? {
            for name in &report.rejected {
                log::warn!("Ignored stored value for {} (does not parse)", name);
            }
            log::debug!("{} stored entries no longer registered", report.unknown.len());
        }

        let translator: Box<dyn Translator> = match &cli.lang {
            Some(path) => Box::new(
                MapTranslator::from_toml_file(path)
                    .with_context(|| format!("Failed to load translations from {:?}", path))?,
            ),
            None => Box::new(NoTranslation),
        };

        Ok(Self {
            registry,
            translator,
        })
    }

    /// Persist the registry to its storage file
    pub fn save(&self) -> Result<()> {
        self.registry
            .save_default()
            .context("Failed to save configuration")
    }
}
