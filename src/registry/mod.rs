//! Configuration registry
//!
//! The registry provides:
//! - Typed entries registered from descriptors
//! - A vetoable change pipeline with listeners and bus events
//! - Advisory constraints for presentation layers
//! - XML persistence in a per-user directory
//!
//! The registry is single-threaded; callers serialize access. Veto handlers
//! and listeners run inline during a change.

pub mod builder;
pub mod constraints;
pub mod location;
pub mod pipeline;
pub mod store;
pub mod types;

use std::path::Path;

pub use builder::EntryDescriptorBuilder;
pub use constraints::{ConstraintRegistry, IntegerBounds};
pub use location::LocationNode;
pub use pipeline::{ChangeOutcome, ChangePipeline, ChangeRequest, Denial, NoPublisher};
pub use store::ValueStore;
pub use types::{EntryDescriptor, EntryType, EntryValue};

use crate::codec::{self, StoredRecord};
use crate::error::{RegistryError, Result};
use crate::events::{EventBus, EventPublisher};
use crate::i18n::{Labels, Translator};
use crate::storage::StorageLocation;

/// What a load applied and what it skipped
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Records pushed through apply + notify
    pub applied: usize,
    /// Names not registered here
    pub unknown: Vec<String>,
    /// Names whose value did not parse for the registered type
    pub rejected: Vec<String>,
}

/// Everything a settings editor needs to render one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView<'a> {
    pub descriptor: &'a EntryDescriptor,
    pub value: Option<&'a EntryValue>,
    /// Bounds of a `Count` entry, defaults filled in
    pub bounds: Option<IntegerBounds>,
    /// Options of a `Choice` entry, `None` until registered
    pub options: Option<&'a [String]>,
}

/// Process-wide configuration authority
///
/// Created with [`ConfigRegistry::initialize`] and passed by reference to
/// the components that need it.
pub struct ConfigRegistry<P = EventBus> {
    storage: StorageLocation,
    store: ValueStore,
    constraints: ConstraintRegistry,
    pipeline: ChangePipeline<P>,
}

impl ConfigRegistry<EventBus> {
    /// Create an empty registry publishing to an in-process [`EventBus`]
    pub fn initialize(storage: StorageLocation) -> Self {
        Self::with_publisher(storage, EventBus::new())
    }
}

impl<P: EventPublisher> ConfigRegistry<P> {
    /// Create an empty registry publishing change events to `publisher`
    pub fn with_publisher(storage: StorageLocation, publisher: P) -> Self {
        log::debug!("Initializing config registry at {:?}", storage.file_path());
        Self {
            storage,
            store: ValueStore::new(),
            constraints: ConstraintRegistry::new(),
            pipeline: ChangePipeline::new(publisher),
        }
    }

    /// Save to the storage file and drop all handlers
    pub fn shutdown(self) -> Result<()> {
        self.save_default()?;
        log::info!("Config registry shut down, saved {} entries", self.store.len());
        Ok(())
    }

    // Registration

    /// Register a new entry; it has no value until defaults or a file are loaded
    pub fn register(&mut self, descriptor: EntryDescriptor) -> Result<()> {
        self.store.register(descriptor)
    }

    /// Register a batch, stopping at the first failure
    pub fn register_all(
        &mut self,
        descriptors: impl IntoIterator<Item = EntryDescriptor>,
    ) -> Result<()> {
        descriptors
            .into_iter()
            .try_for_each(|descriptor| self.store.register(descriptor))
    }

    /// Give every unset entry its default value
    ///
    /// Defaults skip the ask phase but still notify. Also makes sure the
    /// storage directory exists. Returns the number of entries defaulted.
    pub fn load_defaults(&mut self) -> Result<usize> {
        let pending: Vec<(String, EntryValue)> = self
            .store
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(descriptor, _)| Ok((descriptor.name.clone(), descriptor.parsed_default()?)))
            .collect::<Result<_>>()?;

        let count = pending.len();
        for (name, value) in pending {
            self.pipeline.apply(&mut self.store, &name, value)?;
        }

        self.storage.ensure_dir()?;
        log::debug!("Loaded defaults for {} entries", count);
        Ok(count)
    }

    // Lookup

    pub fn contains(&self, name: &str) -> bool {
        self.store.contains(name)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn descriptor(&self, name: &str) -> Result<&EntryDescriptor> {
        self.store.descriptor(name)
    }

    /// All descriptors in registration order
    pub fn descriptors(&self) -> impl Iterator<Item = &EntryDescriptor> {
        self.store.descriptors()
    }

    /// Current value; `None` before defaults or a file were loaded
    pub fn get(&self, name: &str) -> Result<Option<&EntryValue>> {
        self.store.get(name)
    }

    /// Current value in string form
    pub fn get_string(&self, name: &str) -> Result<String> {
        self.store.get_string(name)
    }

    pub fn get_flag(&self, name: &str) -> Result<Option<bool>> {
        self.store.get_flag(name)
    }

    pub fn get_count(&self, name: &str) -> Result<Option<i64>> {
        self.store.get_count(name)
    }

    pub fn get_text(&self, name: &str) -> Result<Option<String>> {
        self.store.get_text(name)
    }

    /// Read-only view of all values
    pub fn store(&self) -> &ValueStore {
        &self.store
    }

    pub fn storage(&self) -> &StorageLocation {
        &self.storage
    }

    // Constraints

    pub fn constraints(&self) -> &ConstraintRegistry {
        &self.constraints
    }

    pub fn constraints_mut(&mut self) -> &mut ConstraintRegistry {
        &mut self.constraints
    }

    /// Install a veto handler enforcing the integer bounds registered so far
    pub fn enforce_bounds(&mut self) {
        let veto = self.constraints.bounds_veto();
        self.pipeline.add_veto(veto);
    }

    // Change pipeline

    /// Append a handler to the ask phase
    pub fn add_veto(
        &mut self,
        handler: impl Fn(&ChangeRequest) -> std::result::Result<(), Denial> + 'static,
    ) {
        self.pipeline.add_veto(handler);
    }

    /// Listen for applied changes of `name`
    pub fn subscribe(&mut self, name: &str, listener: impl FnMut(&ValueStore) + 'static) {
        self.pipeline.subscribe(name, listener);
    }

    pub fn events(&self) -> &P {
        self.pipeline.publisher()
    }

    pub fn events_mut(&mut self) -> &mut P {
        self.pipeline.publisher_mut()
    }

    /// Propose a new value in string form
    ///
    /// Parse failures and unknown names are errors; a veto is reported as
    /// [`ChangeOutcome::Denied`].
    pub fn propose_change(&mut self, name: &str, new_value: &str) -> Result<ChangeOutcome> {
        self.pipeline.propose(&mut self.store, name, new_value)
    }

    /// Propose the default value of `name`
    pub fn reset(&mut self, name: &str) -> Result<ChangeOutcome> {
        let default = self.store.descriptor(name)?.default_value.clone();
        self.propose_change(name, &default)
    }

    /// Propose the default value of every entry, in registration order
    pub fn reset_all(&mut self) -> Result<Vec<(String, ChangeOutcome)>> {
        let names: Vec<String> = self.store.descriptors().map(|d| d.name.clone()).collect();
        names
            .into_iter()
            .map(|name| {
                let outcome = self.reset(&name)?;
                Ok((name, outcome))
            })
            .collect()
    }

    /// Re-run the notify phase for every entry that has a value
    pub fn notify_all(&mut self) -> Result<()> {
        let names: Vec<String> = self
            .store
            .iter()
            .filter(|(_, value)| value.is_some())
            .map(|(descriptor, _)| descriptor.name.clone())
            .collect();
        for name in names {
            self.pipeline.notify(&self.store, &name)?;
        }
        Ok(())
    }

    // Persistence

    /// Write every registered entry to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        let xml = self.to_xml_string()?;
        std::fs::write(path, xml).map_err(|e| RegistryError::io(path, e))?;
        log::info!("Saved {} entries to {:?}", self.store.len(), path);
        Ok(())
    }

    /// Overlay the values stored in `path`
    ///
    /// A structurally broken file aborts the load. Unknown names and values
    /// that do not parse are skipped.
    pub fn load(&mut self, path: &Path) -> Result<LoadReport> {
        let xml = std::fs::read_to_string(path).map_err(|e| RegistryError::io(path, e))?;
        let report = self.load_xml_str(&xml)?;
        log::info!(
            "Loaded {} entries from {:?} ({} unknown, {} rejected)",
            report.applied,
            path,
            report.unknown.len(),
            report.rejected.len()
        );
        Ok(report)
    }

    /// Save to the storage file, creating its directory if needed
    pub fn save_default(&self) -> Result<()> {
        self.storage.ensure_dir()?;
        self.save(&self.storage.file_path())
    }

    /// Load the storage file if it exists
    pub fn load_default(&mut self) -> Result<Option<LoadReport>> {
        let path = self.storage.file_path();
        if !path.exists() {
            log::debug!("No config file at {:?}, keeping defaults", path);
            return Ok(None);
        }
        self.load(&path).map(Some)
    }

    pub fn to_xml_string(&self) -> Result<String> {
        codec::encode(&self.store)
    }

    pub fn load_xml_str(&mut self, xml: &str) -> Result<LoadReport> {
        let records = codec::decode(xml)?;
        self.apply_records(records)
    }

    fn apply_records(&mut self, records: Vec<StoredRecord>) -> Result<LoadReport> {
        let mut report = LoadReport::default();

        for record in records {
            let parsed = match self.store.descriptor(&record.name) {
                Ok(descriptor) => descriptor.parse(&record.value),
                Err(_) => {
                    log::debug!("Skipping unknown config entry '{}'", record.name);
                    report.unknown.push(record.name);
                    continue;
                }
            };

            match parsed {
                Ok(value) => {
                    self.pipeline.apply(&mut self.store, &record.name, value)?;
                    report.applied += 1;
                }
                Err(e) => {
                    log::warn!("Skipping stored value: {}", e);
                    report.rejected.push(record.name);
                }
            }
        }

        Ok(report)
    }

    // Presentation

    /// Location tree over the visible entries
    pub fn location_tree(&self, translator: &dyn Translator) -> LocationNode {
        location::build(self.store.descriptors(), &Labels::new(translator))
    }

    /// Visible entries located exactly at `path`, in registration order
    pub fn list_visible_entries_at(&self, path: &str) -> Vec<EntryView<'_>> {
        self.store
            .iter()
            .filter(|(descriptor, _)| descriptor.visible && location::is_at(descriptor, path))
            .map(|(descriptor, value)| self.view(descriptor, value))
            .collect()
    }

    /// View of a single entry
    pub fn entry_view(&self, name: &str) -> Result<EntryView<'_>> {
        let descriptor = self.store.descriptor(name)?;
        Ok(self.view(descriptor, self.store.get(name)?))
    }

    fn view<'a>(
        &'a self,
        descriptor: &'a EntryDescriptor,
        value: Option<&'a EntryValue>,
    ) -> EntryView<'a> {
        EntryView {
            descriptor,
            value,
            bounds: (descriptor.entry_type == EntryType::Count)
                .then(|| self.constraints.integer_bounds(&descriptor.name)),
            options: match descriptor.entry_type {
                EntryType::Choice => self.constraints.options(&descriptor.name),
                _ => None,
            },
        }
    }
}
