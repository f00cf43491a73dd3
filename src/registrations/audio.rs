//! Audio entries

use crate::error::Result;
use crate::events::EventPublisher;
use crate::registry::{ConfigRegistry, EntryDescriptorBuilder};

pub const VOLUME: &str = "volume";
pub const MUTED: &str = "muted";

/// Register all audio entries
pub fn register<P: EventPublisher>(registry: &mut ConfigRegistry<P>) -> Result<()> {
    registry.register(
        EntryDescriptorBuilder::new(VOLUME)
            .location("audio")
            .count_type(50)
            .build()?,
    )?;
    registry.constraints_mut().set_integer_bounds(VOLUME, 0, 100);

    registry.register(
        EntryDescriptorBuilder::new(MUTED)
            .location("audio")
            .flag_type(false)
            .build()?,
    )?;

    log::info!("Registered {} audio entries", 2);
    Ok(())
}
