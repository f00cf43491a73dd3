//! Registered descriptors and their live values

use std::collections::HashMap;

use super::types::{EntryDescriptor, EntryType, EntryValue};
use crate::error::{RegistryError, Result};

struct Slot {
    descriptor: EntryDescriptor,
    value: Option<EntryValue>,
}

/// Owns the descriptor and current value of every registered entry
///
/// Entries are kept in registration order. A value only exists for a name
/// that has a descriptor.
#[derive(Default)]
pub struct ValueStore {
    slots: Vec<Slot>,
    index: HashMap<String, usize>,
}

impl ValueStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new descriptor with no value yet
    ///
    /// Returns an error if an entry with the same name is already registered
    pub fn register(&mut self, descriptor: EntryDescriptor) -> Result<()> {
        if self.index.contains_key(&descriptor.name) {
            return Err(RegistryError::DuplicateEntry(descriptor.name));
        }
        log::debug!(
            "Registered entry: {} ({} at '{}')",
            descriptor.name,
            descriptor.entry_type,
            descriptor.location
        );
        self.index.insert(descriptor.name.clone(), self.slots.len());
        self.slots.push(Slot {
            descriptor,
            value: None,
        });
        Ok(())
    }

    /// Check if an entry is registered
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Get total number of registered entries
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Get the descriptor for a name
    pub fn descriptor(&self, name: &str) -> Result<&EntryDescriptor> {
        self.slot(name).map(|slot| &slot.descriptor)
    }

    /// All descriptors in registration order
    pub fn descriptors(&self) -> impl Iterator<Item = &EntryDescriptor> {
        self.slots.iter().map(|slot| &slot.descriptor)
    }

    /// Current value, `None` while the entry has not been defaulted or loaded
    pub fn get(&self, name: &str) -> Result<Option<&EntryValue>> {
        self.slot(name).map(|slot| slot.value.as_ref())
    }

    /// Current value in string form, falling back to the default string
    pub fn get_string(&self, name: &str) -> Result<String> {
        let slot = self.slot(name)?;
        Ok(match &slot.value {
            Some(value) => value.to_string(),
            None => slot.descriptor.default_value.clone(),
        })
    }

    /// Get flag value
    pub fn get_flag(&self, name: &str) -> Result<Option<bool>> {
        self.typed(name, EntryType::Flag, EntryValue::as_flag)
    }

    /// Get count value
    pub fn get_count(&self, name: &str) -> Result<Option<i64>> {
        self.typed(name, EntryType::Count, EntryValue::as_count)
    }

    /// Get text of a `Text` or `Choice` entry
    pub fn get_text(&self, name: &str) -> Result<Option<String>> {
        let descriptor = self.descriptor(name)?;
        if !matches!(descriptor.entry_type, EntryType::Text | EntryType::Choice) {
            return Err(RegistryError::TypeMismatch {
                name: name.to_string(),
                expected: EntryType::Text,
                actual: descriptor.entry_type,
            });
        }
        Ok(self.get(name)?.and_then(|v| v.as_str()).map(str::to_string))
    }

    /// Entries (descriptor, value) in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&EntryDescriptor, Option<&EntryValue>)> {
        self.slots
            .iter()
            .map(|slot| (&slot.descriptor, slot.value.as_ref()))
    }

    /// Overwrite the value for `name`
    ///
    /// Only the change pipeline calls this, after approval or for trusted
    /// default and stored values.
    pub(crate) fn set(&mut self, name: &str, value: EntryValue) -> Result<()> {
        let idx = *self
            .index
            .get(name)
            .ok_or_else(|| RegistryError::UnknownEntry(name.to_string()))?;
        self.slots[idx].value = Some(value);
        Ok(())
    }

    fn slot(&self, name: &str) -> Result<&Slot> {
        self.index
            .get(name)
            .map(|&idx| &self.slots[idx])
            .ok_or_else(|| RegistryError::UnknownEntry(name.to_string()))
    }

    fn typed<T>(
        &self,
        name: &str,
        expected: EntryType,
        extract: impl Fn(&EntryValue) -> Option<T>,
    ) -> Result<Option<T>> {
        let descriptor = self.descriptor(name)?;
        if descriptor.entry_type != expected {
            return Err(RegistryError::TypeMismatch {
                name: name.to_string(),
                expected,
                actual: descriptor.entry_type,
            });
        }
        Ok(self.get(name)?.and_then(extract))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::EntryDescriptorBuilder;

    fn volume() -> EntryDescriptor {
        EntryDescriptorBuilder::new("volume")
            .location("audio")
            .count_type(50)
            .build()
            .unwrap()
    }

    #[test]
    fn test_register_and_get() {
        let mut store = ValueStore::new();
        store.register(volume()).unwrap();

        assert!(store.contains("volume"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("volume").unwrap(), None);
        assert_eq!(store.get_string("volume").unwrap(), "50");

        store.set("volume", EntryValue::Count(80)).unwrap();
        assert_eq!(store.get_count("volume").unwrap(), Some(80));
    }

    #[test]
    fn test_duplicate_registration() {
        let mut store = ValueStore::new();
        store.register(volume()).unwrap();

        let result = store.register(volume());
        assert!(matches!(result, Err(RegistryError::DuplicateEntry(name)) if name == "volume"));
    }

    #[test]
    fn test_unknown_entry() {
        let store = ValueStore::new();
        assert!(matches!(
            store.get("missing"),
            Err(RegistryError::UnknownEntry(_))
        ));
    }

    #[test]
    fn test_set_unknown_entry_is_rejected() {
        let mut store = ValueStore::new();
        assert!(store.set("ghost", EntryValue::Flag(true)).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_typed_accessor_mismatch() {
        let mut store = ValueStore::new();
        store.register(volume()).unwrap();

        let err = store.get_flag("volume").unwrap_err();
        assert!(matches!(
            err,
            RegistryError::TypeMismatch {
                expected: EntryType::Flag,
                actual: EntryType::Count,
                ..
            }
        ));
    }

    #[test]
    fn test_registration_order_is_preserved() {
        let mut store = ValueStore::new();
        for name in ["zeta", "alpha", "mid"] {
            store
                .register(
                    EntryDescriptorBuilder::new(name)
                        .location("general")
                        .flag_type(false)
                        .build()
                        .unwrap(),
                )
                .unwrap();
        }

        let names: Vec<_> = store.descriptors().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }
}
