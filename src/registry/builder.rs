//! Fluent builder API for creating entry descriptors

use super::types::{EntryDescriptor, EntryType};
use crate::error::{RegistryError, Result};

/// Builder for creating entry descriptors with a fluent API
pub struct EntryDescriptorBuilder {
    name: String,
    location: Option<String>,
    entry_type: Option<EntryType>,
    default_value: Option<String>,
    visible: bool,
    name_key: Option<String>,
    description_key: Option<String>,
}

impl EntryDescriptorBuilder {
    /// Create a new builder for the entry `name`
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            location: None,
            entry_type: None,
            default_value: None,
            visible: true,
            name_key: None,
            description_key: None,
        }
    }

    /// Set the dot-separated location path
    pub fn location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    /// Hide the entry from interactive editing
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Set visibility explicitly
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Override the translation key for the display name
    pub fn name_key(mut self, key: &str) -> Self {
        self.name_key = Some(key.to_string());
        self
    }

    /// Override the translation key for the help text
    pub fn description_key(mut self, key: &str) -> Self {
        self.description_key = Some(key.to_string());
        self
    }

    /// Define as a boolean switch
    pub fn flag_type(mut self, default: bool) -> Self {
        self.entry_type = Some(EntryType::Flag);
        self.default_value = Some(default.to_string());
        self
    }

    /// Define as an integer
    pub fn count_type(mut self, default: i64) -> Self {
        self.entry_type = Some(EntryType::Count);
        self.default_value = Some(default.to_string());
        self
    }

    /// Define as free text
    pub fn text_type(mut self, default: &str) -> Self {
        self.entry_type = Some(EntryType::Text);
        self.default_value = Some(default.to_string());
        self
    }

    /// Define as a choice; options are registered separately
    pub fn choice_type(mut self, default: &str) -> Self {
        self.entry_type = Some(EntryType::Choice);
        self.default_value = Some(default.to_string());
        self
    }

    /// Define the type and the default in raw string form
    pub fn raw_type(mut self, entry_type: EntryType, default: &str) -> Self {
        self.entry_type = Some(entry_type);
        self.default_value = Some(default.to_string());
        self
    }

    /// Build the descriptor
    ///
    /// Returns an error if required fields are missing or the default does
    /// not parse for the declared type.
    pub fn build(self) -> Result<EntryDescriptor> {
        if self.name.is_empty() {
            return Err(RegistryError::InvalidDescriptor(
                "entry name must not be empty".to_string(),
            ));
        }
        let location = self.location.ok_or_else(|| {
            RegistryError::InvalidDescriptor(format!("location is required for '{}'", self.name))
        })?;
        let entry_type = self.entry_type.ok_or_else(|| {
            RegistryError::InvalidDescriptor(format!(
                "type is required for '{}' (use flag_type, count_type, text_type or choice_type)",
                self.name
            ))
        })?;
        let default_value = self.default_value.unwrap_or_default();

        entry_type
            .parse_value(&self.name, &default_value)
            .map_err(|e| RegistryError::InvalidDescriptor(e.to_string()))?;

        let name_key = self.name_key.unwrap_or_else(|| self.name.clone());
        let description_key = self
            .description_key
            .unwrap_or_else(|| format!("{}.description", self.name));

        Ok(EntryDescriptor {
            name: self.name,
            entry_type,
            default_value,
            location,
            visible: self.visible,
            name_key,
            description_key,
        })
    }
}
