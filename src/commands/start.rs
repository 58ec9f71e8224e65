//! Runs intervals in the terminal.
//!
//! `pomo start` fetches the current interval (resuming a paused one or
//! creating the next), shows a one-line countdown and returns when the
//! interval finishes, is paused from another terminal with `pomo pause`, or
//! Ctrl-C (or SIGTERM/SIGHUP) cancels it. With `--continuous` (implied by
//! `--in-memory`) the next interval starts as soon as one finishes.

use super::{in_memory, DurationArgs, StorageArgs};
use crate::libs::config::{IntervalConfig, Settings};
use crate::libs::formatter::format_clock;
use crate::libs::interval::{Interval, State};
use crate::libs::messages::Message;
use crate::libs::ticker::Progress;
use crate::{msg_error, msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Args)]
pub struct StartArgs {
    #[command(flatten)]
    durations: DurationArgs,

    #[command(flatten)]
    storage: StorageArgs,

    #[arg(long, conflicts_with = "db", help = "Keep intervals in memory only (implies --continuous)")]
    in_memory: bool,

    #[arg(long, short, help = "Start the next interval when one finishes")]
    continuous: bool,
}

pub async fn cmd(args: StartArgs) -> Result<()> {
    let settings = Settings::read()?;
    let repo = if args.in_memory { in_memory() } else { args.storage.open(&settings)? };
    let config = args.durations.config(repo, &settings);
    let continuous = args.continuous || args.in_memory;

    let cancel = CancellationToken::new();
    spawn_signal_listener(cancel.clone());

    loop {
        let interval = Interval::current(&config)?;
        if interval.state == State::Running {
            msg_warning!(Message::IntervalAlreadyRunning(interval.id));
            return Ok(());
        }

        interval.start(&config, &cancel, &mut TerminalProgress).await?;

        if !report_outcome(&config, interval.id)? || !continuous {
            return Ok(());
        }
        let next = Interval::current(&config)?;
        msg_info!(Message::NextIntervalStarting(next.category.to_string()));
    }
}

/// Prints how the run ended. Returns `true` when the interval finished
/// naturally.
fn report_outcome(config: &IntervalConfig, id: i64) -> Result<bool> {
    let interval = config.repository().by_id(id)?;
    match interval.state {
        State::Done => Ok(true),
        State::Paused => {
            println!();
            msg_info!(Message::IntervalPaused {
                category: interval.category.to_string(),
                elapsed: format_clock(&interval.time_actual),
            });
            Ok(false)
        }
        State::Canceled => {
            println!();
            msg_warning!(Message::IntervalCanceled(interval.category.to_string()));
            Ok(false)
        }
        State::NotStarted | State::Running => Ok(false),
    }
}

/// Cancels the run on Ctrl-C, and on SIGTERM or SIGHUP where available, so a
/// killed process does not leave its interval marked Running.
fn spawn_signal_listener(cancel: CancellationToken) {
    tokio::spawn(async move {
        match shutdown_signal().await {
            Ok(()) => cancel.cancel(),
            Err(e) => msg_error!(Message::SignalListenFailed(e.to_string())),
        }
    });
}

#[cfg(unix)]
async fn shutdown_signal() -> io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sighup = signal(SignalKind::hangup())?;

    tokio::select! {
        result = tokio::signal::ctrl_c() => result,
        _ = sigterm.recv() => Ok(()),
        _ = sighup.recv() => Ok(()),
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() -> io::Result<()> {
    tokio::signal::ctrl_c().await
}

/// Renders the countdown on a single, continuously rewritten line.
struct TerminalProgress;

impl Progress for TerminalProgress {
    fn started(&mut self, interval: &Interval) {
        let category = interval.category.to_string();
        if interval.time_actual.is_zero() {
            msg_info!(Message::IntervalStarted {
                category,
                planned: format_clock(&interval.time_planning),
            });
        } else {
            msg_info!(Message::IntervalResumed {
                category,
                remaining: format_clock(&interval.remaining()),
            });
        }

        if interval.category.is_break() {
            msg_info!(Message::TakeABreak);
        } else {
            msg_info!(Message::FocusOnTask);
        }
    }

    fn ticked(&mut self, interval: &Interval) {
        let line = Message::IntervalProgress {
            category: interval.category.to_string(),
            elapsed: format_clock(&interval.time_actual),
            planned: format_clock(&interval.time_planning),
        };
        let mut stdout = io::stdout();
        let _ = write!(stdout, "\r{}", line);
        let _ = stdout.flush();
    }

    fn finished(&mut self, interval: &Interval) {
        println!();
        msg_success!(Message::IntervalFinished(interval.category.to_string()));
    }
}
