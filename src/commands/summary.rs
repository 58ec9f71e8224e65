//! Daily totals of Pomodoro and break time.

use super::{stored_config, StorageArgs};
use crate::libs::messages::Message;
use crate::libs::summary::DailySummary;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    storage: StorageArgs,

    /// Number of days to show, ending today
    #[arg(long, default_value_t = 7)]
    days: u32,
}

pub fn cmd(args: SummaryArgs) -> Result<()> {
    let config = stored_config(&args.storage)?;
    let today = Local::now().date_naive();

    let summaries = DailySummary::range(&config, today, args.days)?;
    msg_print!(Message::SummaryHeader(args.days), true);
    View::summary(&summaries);
    Ok(())
}
