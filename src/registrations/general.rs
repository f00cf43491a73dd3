//! General application entries

use crate::error::Result;
use crate::events::EventPublisher;
use crate::registry::{ConfigRegistry, EntryDescriptorBuilder};

pub const LANGUAGE: &str = "language";
pub const USER_NAME: &str = "user_name";
pub const AUTOSAVE: &str = "autosave";
pub const LAST_OPENED: &str = "last_opened";

/// Register all general entries
pub fn register<P: EventPublisher>(registry: &mut ConfigRegistry<P>) -> Result<()> {
    registry.register(
        EntryDescriptorBuilder::new(LANGUAGE)
            .location("general")
            .choice_type("en")
            .build()?,
    )?;
    registry
        .constraints_mut()
        .set_options(LANGUAGE, ["en", "de", "fr"]);

    registry.register(
        EntryDescriptorBuilder::new(USER_NAME)
            .location("general")
            .text_type("")
            .build()?,
    )?;

    registry.register(
        EntryDescriptorBuilder::new(AUTOSAVE)
            .location("general")
            .flag_type(true)
            .build()?,
    )?;

    // Bookkeeping only, not shown in the editor
    registry.register(
        EntryDescriptorBuilder::new(LAST_OPENED)
            .location("general")
            .text_type("")
            .hidden()
            .build()?,
    )?;

    log::info!("Registered {} general entries", 4);
    Ok(())
}
