use super::{stored_config, StorageArgs};
use crate::libs::error::PomoError;
use crate::libs::formatter::format_clock;
use crate::libs::messages::Message;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct PauseArgs {
    #[command(flatten)]
    storage: StorageArgs,
}

/// Pauses the interval a `pomo start` in another terminal is running. That
/// process notices on its next tick and exits.
pub fn cmd(args: PauseArgs) -> Result<()> {
    let config = stored_config(&args.storage)?;

    let interval = match config.repository().last() {
        Ok(interval) => interval,
        Err(PomoError::NoIntervals) => {
            msg_warning!(Message::NoIntervalsYet);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    match interval.pause(&config) {
        Ok(()) => {}
        Err(PomoError::IntervalNotRunning) => {
            msg_warning!(Message::IntervalNotRunning);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    let paused = config.repository().by_id(interval.id)?;
    msg_success!(Message::IntervalPaused {
        category: paused.category.to_string(),
        elapsed: format_clock(&paused.time_actual),
    });
    Ok(())
}
