//! Interactive settings setup.
//!
//! Prompts for the planned durations and the database location, then writes
//! them to `settings.json` in the data directory.

use crate::{
    libs::{config::Settings, messages::Message},
    msg_success,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    Settings::init()?.save()?;
    msg_success!(Message::SettingsSaved, true);
    Ok(())
}
