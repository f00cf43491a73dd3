//! Display entries

use crate::error::Result;
use crate::events::EventPublisher;
use crate::registry::{ConfigRegistry, EntryDescriptorBuilder};

pub const THEME: &str = "theme";
pub const FOCUS_MODE: &str = "focus_mode";
pub const FONT_SIZE: &str = "font_size";
pub const SHOW_HIDDEN: &str = "show_hidden";
pub const ANIMATIONS: &str = "animations";

/// Register all display entries
pub fn register<P: EventPublisher>(registry: &mut ConfigRegistry<P>) -> Result<()> {
    registry.register(
        EntryDescriptorBuilder::new(THEME)
            .location("display")
            .choice_type("dark")
            .build()?,
    )?;
    registry
        .constraints_mut()
        .set_options(THEME, ["light", "dark", "high_contrast"]);

    registry.register(
        EntryDescriptorBuilder::new(FOCUS_MODE)
            .location("display")
            .choice_type("hover")
            .build()?,
    )?;
    registry
        .constraints_mut()
        .set_options(FOCUS_MODE, ["click", "hover", "hover_when_unfocused"]);

    registry.register(
        EntryDescriptorBuilder::new(FONT_SIZE)
            .location("display")
            .count_type(12)
            .build()?,
    )?;
    registry.constraints_mut().set_integer_bounds(FONT_SIZE, 6, 72);

    registry.register(
        EntryDescriptorBuilder::new(SHOW_HIDDEN)
            .location("display.advanced")
            .flag_type(false)
            .build()?,
    )?;

    registry.register(
        EntryDescriptorBuilder::new(ANIMATIONS)
            .location("display.advanced")
            .flag_type(true)
            .build()?,
    )?;

    log::info!("Registered {} display entries", 5);
    Ok(())
}
