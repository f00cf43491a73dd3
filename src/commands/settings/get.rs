use anyhow::Result;
use log::info;

use super::Session;

/// Print the current value of a setting
///
/// # Arguments
/// * `session` - Opened registry
/// * `name` - Setting name
///
/// # Returns
/// * `Ok(())` - Setting value displayed successfully
/// * `Err(anyhow::Error)` - Unknown setting
pub fn get_command(session: &Session, name: &str) -> Result<()> {
    info!("Getting setting: {}", name);

    let value = session.registry.get_string(name)?;
    println!("{}", value);

    Ok(())
}
