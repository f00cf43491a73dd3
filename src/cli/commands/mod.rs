pub mod settings;

pub use settings::SettingsSubcommands;
