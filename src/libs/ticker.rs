//! The tick loop that drives a running interval.
//!
//! One loop runs per [`Interval::start`](crate::libs::interval::Interval::start)
//! call. It waits on three sources, checked in priority order on every
//! wakeup:
//!
//! 1. the caller's [`CancellationToken`] (the interval becomes Canceled),
//! 2. the expiry timer armed at the remaining planned time (Done),
//! 3. a one-second periodic timer (one second of progress).
//!
//! The stored record is re-read at each wakeup. A pause issued concurrently
//! through [`Interval::pause`](crate::libs::interval::Interval::pause) is seen
//! at the next wakeup and ends the loop quietly. Progress writes are guarded
//! on the Running state, so a pause landing between the re-read and the write
//! is never overwritten.

use crate::libs::config::IntervalConfig;
use crate::libs::error::Result;
use crate::libs::interval::{Interval, State};
use chrono::TimeDelta;
use std::time::Duration;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

const TICK: Duration = Duration::from_secs(1);

/// Receives interval snapshots while the tick loop runs.
///
/// Calls arrive in the order `started`, `ticked` any number of times, then
/// at most one `finished`. `finished` is reserved for natural completion; a
/// canceled or paused run never reports it. Callbacks run inline on the
/// loop, so a slow callback delays the following ticks.
pub trait Progress {
    fn started(&mut self, _interval: &Interval) {}
    fn ticked(&mut self, _interval: &Interval) {}
    fn finished(&mut self, _interval: &Interval) {}
}

/// A [`Progress`] that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {}

/// Adapts three closures into a [`Progress`].
pub struct Callbacks<S, P, E> {
    pub start: S,
    pub periodic: P,
    pub end: E,
}

impl<S, P, E> Callbacks<S, P, E>
where
    S: FnMut(&Interval),
    P: FnMut(&Interval),
    E: FnMut(&Interval),
{
    pub fn new(start: S, periodic: P, end: E) -> Self {
        Self { start, periodic, end }
    }
}

impl<S, P, E> Progress for Callbacks<S, P, E>
where
    S: FnMut(&Interval),
    P: FnMut(&Interval),
    E: FnMut(&Interval),
{
    fn started(&mut self, interval: &Interval) {
        (self.start)(interval)
    }

    fn ticked(&mut self, interval: &Interval) {
        (self.periodic)(interval)
    }

    fn finished(&mut self, interval: &Interval) {
        (self.end)(interval)
    }
}

/// Runs the loop for the interval stored under `id`, which the caller has
/// just switched to Running.
///
/// Returns `Ok(())` when the interval completes, is canceled, or stops
/// running underneath the loop (paused or finished by someone else). Any
/// repository error aborts the loop at once; the last successful write stays
/// the record of truth.
pub(crate) async fn run(id: i64, config: &IntervalConfig, cancel: &CancellationToken, progress: &mut impl Progress) -> Result<()> {
    let repo = config.repository();
    let interval = repo.by_id(id)?;

    let expiry = time::sleep(to_std(interval.remaining()));
    tokio::pin!(expiry);

    let mut ticker = time::interval_at(Instant::now() + TICK, TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    progress.started(&interval);

    loop {
        tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                let mut interval = repo.by_id(id)?;
                interval.state = State::Canceled;
                repo.update(&interval)?;
                debug!(id, actual = interval.time_actual.num_seconds(), "interval canceled");
                return Ok(());
            }
            _ = &mut expiry => {
                let interval = repo.by_id(id)?;
                if interval.state != State::Running {
                    debug!(id, state = %interval.state, "interval left running before expiry");
                    return Ok(());
                }
                return complete(interval, config, progress);
            }
            _ = ticker.tick() => {
                let mut interval = repo.by_id(id)?;
                if interval.state != State::Running {
                    debug!(id, state = %interval.state, "tick loop stopping");
                    return Ok(());
                }

                interval.time_actual = interval.time_actual + TimeDelta::seconds(1);
                if interval.time_actual >= interval.time_planning {
                    return complete(interval, config, progress);
                }

                if !repo.compare_and_update(&interval, State::Running)? {
                    warn!(id, "interval changed while ticking, stopping");
                    return Ok(());
                }
                progress.ticked(&interval);
            }
        }
    }
}

/// Marks the interval Done with its full planned time, persists it and only
/// then reports it, so `finished` always sees what storage holds.
fn complete(mut interval: Interval, config: &IntervalConfig, progress: &mut impl Progress) -> Result<()> {
    interval.state = State::Done;
    interval.time_actual = interval.time_planning;

    // Persisted before `finished` fires, so the callback never reports a
    // completion that a racing pause kept out of storage.
    if !config.repository().compare_and_update(&interval, State::Running)? {
        warn!(id = interval.id, "interval changed before completion, not finishing");
        return Ok(());
    }
    debug!(id = interval.id, category = %interval.category, "interval done");
    progress.finished(&interval);

    Ok(())
}

fn to_std(delta: TimeDelta) -> Duration {
    delta.to_std().unwrap_or(Duration::ZERO)
}
