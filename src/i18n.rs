//! Translation lookup for display labels
//!
//! The registry only knows translation keys. A [`Translator`] turns them into
//! display text; without one, raw keys are shown verbatim.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{RegistryError, Result};
use crate::registry::EntryDescriptor;

/// Key prefix for entry names and descriptions
pub const ENTRY_PREFIX: &str = "config.";
/// Key prefix for location segments
pub const LOCATION_PREFIX: &str = "config.location.";
/// Key of the location tree root
pub const ROOT_KEY: &str = "config.location.config";
/// Root label used when no translation exists
pub const ROOT_FALLBACK: &str = "Settings";

/// Source of localized strings
pub trait Translator {
    fn translate(&self, key: &str) -> Option<String>;
}

/// Shows raw keys
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTranslation;

impl Translator for NoTranslation {
    fn translate(&self, _key: &str) -> Option<String> {
        None
    }
}

/// In-memory translation table
#[derive(Debug, Default, Clone)]
pub struct MapTranslator {
    entries: HashMap<String, String>,
}

impl MapTranslator {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Load a flat TOML table of `"key" = "text"` pairs
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| RegistryError::io(path, e))?;
        let entries: HashMap<String, String> =
            toml::from_str(&content).map_err(|e| RegistryError::Translations {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        log::info!("Loaded {} translations from {:?}", entries.len(), path);
        Ok(Self { entries })
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }
}

impl Translator for MapTranslator {
    fn translate(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

/// Resolves the display labels the presentation layer needs
pub struct Labels<'a> {
    translator: &'a dyn Translator,
}

impl<'a> Labels<'a> {
    pub fn new(translator: &'a dyn Translator) -> Self {
        Self { translator }
    }

    fn lookup(&self, key: &str, fallback: &str) -> String {
        self.translator
            .translate(key)
            .unwrap_or_else(|| fallback.to_string())
    }

    pub fn root(&self) -> String {
        self.lookup(ROOT_KEY, ROOT_FALLBACK)
    }

    pub fn location_segment(&self, segment: &str) -> String {
        self.lookup(&format!("{LOCATION_PREFIX}{segment}"), segment)
    }

    pub fn entry_name(&self, descriptor: &EntryDescriptor) -> String {
        self.lookup(
            &format!("{ENTRY_PREFIX}{}", descriptor.name_key),
            &descriptor.name_key,
        )
    }

    pub fn description(&self, descriptor: &EntryDescriptor) -> String {
        self.lookup(
            &format!("{ENTRY_PREFIX}{}", descriptor.description_key),
            &descriptor.description_key,
        )
    }

    /// Label of one option of a choice entry, keyed `<entry>.<option>`
    pub fn option(&self, entry_name: &str, option: &str) -> String {
        self.lookup(&format!("{entry_name}.{option}"), option)
    }

    /// Map an option label back to its raw option
    pub fn option_from_label(&self, entry_name: &str, options: &[String], label: &str) -> String {
        options
            .iter()
            .find(|option| self.option(entry_name, option) == label)
            .cloned()
            .unwrap_or_else(|| label.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::EntryDescriptorBuilder;

    fn german() -> MapTranslator {
        let mut t = MapTranslator::default();
        t.insert("config.location.config", "Einstellungen");
        t.insert("config.location.audio", "Ton");
        t.insert("config.volume", "Lautstärke");
        t.insert("theme.dark", "Dunkel");
        t
    }

    #[test]
    fn test_raw_keys_without_translation() {
        let labels = Labels::new(&NoTranslation);
        let volume = EntryDescriptorBuilder::new("volume")
            .location("audio")
            .count_type(50)
            .build()
            .unwrap();

        assert_eq!(labels.root(), "Settings");
        assert_eq!(labels.location_segment("audio"), "audio");
        assert_eq!(labels.entry_name(&volume), "volume");
        assert_eq!(labels.description(&volume), "volume.description");
        assert_eq!(labels.option("theme", "dark"), "dark");
    }

    #[test]
    fn test_translated_labels() {
        let translator = german();
        let labels = Labels::new(&translator);
        let volume = EntryDescriptorBuilder::new("volume")
            .location("audio")
            .count_type(50)
            .build()
            .unwrap();

        assert_eq!(labels.root(), "Einstellungen");
        assert_eq!(labels.location_segment("audio"), "Ton");
        assert_eq!(labels.entry_name(&volume), "Lautstärke");
        assert_eq!(labels.option("theme", "dark"), "Dunkel");
    }

    #[test]
    fn test_option_from_label() {
        let translator = german();
        let labels = Labels::new(&translator);
        let options = vec!["light".to_string(), "dark".to_string()];

        assert_eq!(labels.option_from_label("theme", &options, "Dunkel"), "dark");
        assert_eq!(labels.option_from_label("theme", &options, "light"), "light");
        assert_eq!(labels.option_from_label("theme", &options, "custom"), "custom");
    }

    #[test]
    fn test_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("de.toml");
        std::fs::write(
            &path,
            "\"config.location.audio\" = \"Ton\"\n\"config.volume\" = \"Lautstärke\"\n",
        )
        .unwrap();

        let translator = MapTranslator::from_toml_file(&path).unwrap();
        assert_eq!(translator.translate("config.location.audio").as_deref(), Some("Ton"));
        assert_eq!(translator.translate("missing"), None);
    }
}
