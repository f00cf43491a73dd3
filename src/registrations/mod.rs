//! Registration of the built-in entries

pub mod audio;
pub mod display;
pub mod general;

use crate::error::Result;
use crate::events::EventPublisher;
use crate::registry::ConfigRegistry;

/// Register all entries and their constraints
pub fn register_all<P: EventPublisher>(registry: &mut ConfigRegistry<P>) -> Result<()> {
    general::register(registry)?;
    display::register(registry)?;
    audio::register(registry)?;
    Ok(())
}
