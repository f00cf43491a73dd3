//! Typed runtime configuration registry
//!
//! Entries are registered from descriptors, receive their defaults, are
//! overlaid with the values stored in an XML file and afterwards change only
//! through a vetoable pipeline that notifies listeners and an event bus.
//!
//! ```no_run
//! use config_registry::registry::{ConfigRegistry, EntryDescriptorBuilder};
//! use config_registry::storage::StorageLocation;
//!
//! # fn main() -> config_registry::Result<()> {
//! let mut registry = ConfigRegistry::initialize(StorageLocation::in_dir("/tmp/my-app"));
//! registry.register(
//!     EntryDescriptorBuilder::new("volume")
//!         .location("audio")
//!         .count_type(50)
//!         .build()?,
//! )?;
//! registry.load_defaults()?;
//! registry.load_default()?;
//!
//! registry.propose_change("volume", "80")?;
//! assert_eq!(registry.get_count("volume")?, Some(80));
//!
//! registry.shutdown()?;
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod error;
pub mod events;
pub mod i18n;
pub mod registrations;
pub mod registry;
pub mod storage;

pub use error::{RegistryError, Result};
pub use registry::{ChangeOutcome, ConfigRegistry};
