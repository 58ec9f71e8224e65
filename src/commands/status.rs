use super::{stored_config, StorageArgs};
use crate::libs::error::PomoError;
use crate::libs::formatter::format_clock;
use crate::libs::messages::Message;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatusArgs {
    #[command(flatten)]
    storage: StorageArgs,
}

/// Shows the most recent interval without changing anything.
pub fn cmd(args: StatusArgs) -> Result<()> {
    let config = stored_config(&args.storage)?;

    match config.repository().last() {
        Ok(interval) => {
            msg_print!(Message::IntervalStatus {
                id: interval.id,
                category: interval.category.to_string(),
                state: interval.state.to_string(),
                elapsed: format_clock(&interval.time_actual),
                planned: format_clock(&interval.time_planning),
            });
            Ok(())
        }
        Err(PomoError::NoIntervals) => {
            msg_warning!(Message::NoIntervalsYet);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
