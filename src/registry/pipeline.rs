//! Ask/apply/notify protocol for every mutation
//!
//! A proposal moves `Proposed -> Validated -> Applied -> Notified`, or stops
//! at `Denied` when a veto handler rejects it. Veto handlers run in
//! registration order and the first denial ends the chain. Values coming
//! from defaults or from the config file skip the ask phase.

use std::fmt;

use serde_json::Value;

use super::store::ValueStore;
use super::types::EntryValue;
use crate::error::Result;
use crate::events::{ENTRY_CHANGED_TOPIC, EntryChanged, EventBus, EventPublisher};

/// A proposed change handed to veto handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRequest {
    pub entry_name: String,
    pub old_value: EntryValue,
    pub new_value: EntryValue,
}

/// Human-readable reason attached to a rejected change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denial {
    reason: String,
}

impl Denial {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

/// Result of a proposal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// The store now holds `value` and listeners were notified
    Applied { value: EntryValue },
    /// The proposed value equals the current one; nothing ran
    Unchanged,
    /// A veto handler rejected the change; `restored` is the value the
    /// caller should display again
    Denied { reason: String, restored: EntryValue },
}

impl ChangeOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ChangeOutcome::Applied { .. })
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, ChangeOutcome::Denied { .. })
    }
}

type VetoHandler = Box<dyn Fn(&ChangeRequest) -> std::result::Result<(), Denial>>;
type Listener = Box<dyn FnMut(&ValueStore)>;

/// Veto handlers, change listeners and the event publisher
pub struct ChangePipeline<P = EventBus> {
    vetoes: Vec<VetoHandler>,
    listeners: Vec<(String, Listener)>,
    publisher: P,
}

impl<P: EventPublisher> ChangePipeline<P> {
    pub fn new(publisher: P) -> Self {
        Self {
            vetoes: Vec::new(),
            listeners: Vec::new(),
            publisher,
        }
    }

    /// Append a veto handler to the ask phase
    pub fn add_veto(
        &mut self,
        handler: impl Fn(&ChangeRequest) -> std::result::Result<(), Denial> + 'static,
    ) {
        self.vetoes.push(Box::new(handler));
    }

    /// Register a listener fired after `name` changed
    ///
    /// The listener gets read access to the store, not the new value.
    pub fn subscribe(&mut self, name: &str, listener: impl FnMut(&ValueStore) + 'static) {
        self.listeners.push((name.to_string(), Box::new(listener)));
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    pub fn publisher_mut(&mut self) -> &mut P {
        &mut self.publisher
    }

    /// Run the full protocol for a raw string proposal
    pub fn propose(
        &mut self,
        store: &mut ValueStore,
        name: &str,
        raw_value: &str,
    ) -> Result<ChangeOutcome> {
        let descriptor = store.descriptor(name)?;
        let new_value = descriptor.parse(raw_value)?;
        let old_value = match store.get(name)? {
            Some(value) => value.clone(),
            None => descriptor.parsed_default()?,
        };

        if store.get(name)? == Some(&new_value) {
            log::debug!("Ignoring unchanged value for {}", name);
            return Ok(ChangeOutcome::Unchanged);
        }

        let request = ChangeRequest {
            entry_name: name.to_string(),
            old_value,
            new_value,
        };

        if let Err(denial) = self.ask(&request) {
            log::warn!(
                "Config change denied for {} ({} -> {}): {}",
                name,
                request.old_value,
                request.new_value,
                denial
            );
            return Ok(ChangeOutcome::Denied {
                reason: denial.reason,
                restored: request.old_value,
            });
        }

        self.apply(store, name, request.new_value.clone())?;
        Ok(ChangeOutcome::Applied {
            value: request.new_value,
        })
    }

    /// Ask phase: first denial wins
    pub fn ask(&self, request: &ChangeRequest) -> std::result::Result<(), Denial> {
        self.vetoes.iter().try_for_each(|veto| veto(request))
    }

    /// Apply and notify without asking
    pub(crate) fn apply(
        &mut self,
        store: &mut ValueStore,
        name: &str,
        value: EntryValue,
    ) -> Result<()> {
        log::debug!("Applying {} = {}", name, value);
        store.set(name, value)?;
        self.notify(store, name)
    }

    /// Notify phase: listeners for `name`, then one bus event
    pub fn notify(&mut self, store: &ValueStore, name: &str) -> Result<()> {
        let event = EntryChanged {
            name: name.to_string(),
            value: store.get_string(name)?,
        };

        for (_, listener) in self.listeners.iter_mut().filter(|(n, _)| n == name) {
            listener(store);
        }

        match serde_json::to_value(&event) {
            Ok(payload) => self.publisher.publish(ENTRY_CHANGED_TOPIC, payload),
            Err(e) => log::warn!("Failed to encode change event for {}: {}", name, e),
        }
        Ok(())
    }
}

impl Default for ChangePipeline<EventBus> {
    fn default() -> Self {
        Self::new(EventBus::new())
    }
}

/// Publisher that drops every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPublisher;

impl EventPublisher for NoPublisher {
    fn publish(&mut self, _topic: &str, _payload: Value) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::EntryDescriptorBuilder;
    use std::cell::Cell;
    use std::rc::Rc;

    fn bus_pipeline() -> ChangePipeline {
        ChangePipeline::default()
    }

    fn store_with_volume() -> ValueStore {
        let mut store = ValueStore::new();
        store
            .register(
                EntryDescriptorBuilder::new("volume")
                    .location("audio")
                    .count_type(50)
                    .build()
                    .unwrap(),
            )
            .unwrap();
        store.set("volume", EntryValue::Count(50)).unwrap();
        store
    }

    #[test]
    fn test_applied_change_notifies_listener_and_bus() {
        let mut store = store_with_volume();
        let mut pipeline = bus_pipeline();

        let fired = Rc::new(Cell::new(0));
        let seen = Rc::new(Cell::new(0));
        let (f, s) = (fired.clone(), seen.clone());
        pipeline.subscribe("volume", move |store| {
            f.set(f.get() + 1);
            s.set(store.get_count("volume").unwrap().unwrap());
        });

        let outcome = pipeline.propose(&mut store, "volume", "80").unwrap();

        assert_eq!(outcome, ChangeOutcome::Applied { value: EntryValue::Count(80) });
        assert_eq!(fired.get(), 1);
        assert_eq!(seen.get(), 80);

        let published = pipeline.publisher_mut().take_published();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].0, ENTRY_CHANGED_TOPIC);
        assert_eq!(published[0].1["value"], "80");
    }

    #[test]
    fn test_first_denial_short_circuits() {
        let mut store = store_with_volume();
        let mut pipeline = bus_pipeline();

        let later_ran = Rc::new(Cell::new(false));
        let listener_ran = Rc::new(Cell::new(false));

        pipeline.add_veto(|_| Err(Denial::new("needs restart")));
        let flag = later_ran.clone();
        pipeline.add_veto(move |_| {
            flag.set(true);
            Ok(())
        });
        let flag = listener_ran.clone();
        pipeline.subscribe("volume", move |_| flag.set(true));

        let outcome = pipeline.propose(&mut store, "volume", "80").unwrap();

        assert_eq!(
            outcome,
            ChangeOutcome::Denied {
                reason: "needs restart".to_string(),
                restored: EntryValue::Count(50),
            }
        );
        assert!(!later_ran.get());
        assert!(!listener_ran.get());
        assert_eq!(store.get_count("volume").unwrap(), Some(50));
        assert!(pipeline.publisher_mut().take_published().is_empty());
    }

    #[test]
    fn test_veto_sees_old_and_new_values() {
        let mut store = store_with_volume();
        let mut pipeline = ChangePipeline::new(NoPublisher);

        pipeline.add_veto(|request| {
            assert_eq!(request.entry_name, "volume");
            assert_eq!(request.old_value, EntryValue::Count(50));
            assert_eq!(request.new_value, EntryValue::Count(10));
            Ok(())
        });

        assert!(pipeline.propose(&mut store, "volume", "10").unwrap().is_applied());
    }

    #[test]
    fn test_unchanged_value_runs_nothing() {
        let mut store = store_with_volume();
        let mut pipeline = bus_pipeline();
        pipeline.add_veto(|_| Err(Denial::new("never")));

        let outcome = pipeline.propose(&mut store, "volume", "50").unwrap();
        assert_eq!(outcome, ChangeOutcome::Unchanged);
    }

    #[test]
    fn test_unparsable_proposal_is_an_error() {
        let mut store = store_with_volume();
        let mut pipeline = bus_pipeline();

        assert!(pipeline.propose(&mut store, "volume", "loud").is_err());
        assert_eq!(store.get_count("volume").unwrap(), Some(50));
    }

    #[test]
    fn test_listeners_only_fire_for_their_entry() {
        let mut store = store_with_volume();
        let mut pipeline = bus_pipeline();

        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        pipeline.subscribe("brightness", move |_| flag.set(true));

        pipeline.propose(&mut store, "volume", "75").unwrap();
        assert!(!fired.get());
    }
}
