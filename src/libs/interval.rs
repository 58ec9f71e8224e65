//! The interval entity and its lifecycle.
//!
//! An [`Interval`] is a single work or break run. Values are cheap copies of
//! what the repository holds; every lifecycle method re-reads the stored
//! record before acting on it, so a stale copy held by a caller never
//! overrides a transition made elsewhere (for example a `pomo pause` issued
//! from a second terminal).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pomo::db::memory::InMemoryRepository;
//! use pomo::libs::config::IntervalConfig;
//! use pomo::libs::interval::Interval;
//! use pomo::libs::ticker::NoProgress;
//! use chrono::TimeDelta;
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() -> pomo::libs::error::Result<()> {
//! let config = IntervalConfig::new(
//!     Arc::new(InMemoryRepository::new()),
//!     TimeDelta::zero(),
//!     TimeDelta::zero(),
//!     TimeDelta::zero(),
//! );
//! let interval = Interval::current(&config)?;
//! interval.start(&config, &CancellationToken::new(), &mut NoProgress).await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::category::{next_category, Category};
use crate::libs::config::IntervalConfig;
use crate::libs::error::{PomoError, Result};
use crate::libs::ticker::{self, Progress};
use chrono::{Local, NaiveDateTime, TimeDelta};
use std::fmt;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Lifecycle state of an interval.
///
/// The discriminants are the values persisted by the SQLite engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    NotStarted = 0,
    Running = 1,
    Paused = 2,
    Canceled = 3,
    Done = 4,
}

impl State {
    /// Canceled and Done intervals can never run again.
    pub fn is_terminal(self) -> bool {
        matches!(self, State::Canceled | State::Done)
    }
}

impl TryFrom<i64> for State {
    type Error = PomoError;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(State::NotStarted),
            1 => Ok(State::Running),
            2 => Ok(State::Paused),
            3 => Ok(State::Canceled),
            4 => Ok(State::Done),
            other => Err(PomoError::InvalidState(other)),
        }
    }
}

impl From<State> for i64 {
    fn from(state: State) -> Self {
        state as i64
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::NotStarted => "Not started",
            State::Running => "Running",
            State::Paused => "Paused",
            State::Canceled => "Canceled",
            State::Done => "Done",
        };
        f.write_str(name)
    }
}

/// One timer run.
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    /// Repository-assigned identifier, `0` until created.
    pub id: i64,
    pub category: Category,
    pub state: State,
    /// Local time of the first transition to Running.
    pub time_start: Option<NaiveDateTime>,
    /// Target duration.
    pub time_planning: TimeDelta,
    /// Running time accumulated so far, never above `time_planning`.
    pub time_actual: TimeDelta,
}

impl Interval {
    /// Builds an unsaved interval of the given category.
    pub fn new(category: Category, time_planning: TimeDelta) -> Self {
        Self {
            id: 0,
            category,
            state: State::NotStarted,
            time_start: None,
            time_planning,
            time_actual: TimeDelta::zero(),
        }
    }

    /// Planned time not yet consumed.
    pub fn remaining(&self) -> TimeDelta {
        (self.time_planning - self.time_actual).max(TimeDelta::zero())
    }

    /// Creates and persists the interval that should run next.
    ///
    /// The category comes from [`next_category`] and the planned duration from
    /// the matching field of `config`.
    pub fn create(config: &IntervalConfig) -> Result<Self> {
        let repo = config.repository();
        let category = next_category(repo)?;

        let mut interval = Interval::new(category, config.duration_for(category));
        interval.id = repo.create(&interval)?;
        debug!(id = interval.id, %category, "interval created");

        Ok(interval)
    }

    /// Returns the interval a front end should show or run now.
    ///
    /// That is the last stored interval while it can still run (not started,
    /// running or paused); otherwise a freshly created one. Calling this
    /// repeatedly while an interval is active keeps returning that interval.
    pub fn current(config: &IntervalConfig) -> Result<Self> {
        match config.repository().last() {
            Ok(last) if !last.state.is_terminal() => Ok(last),
            Ok(_) | Err(PomoError::NoIntervals) => Self::create(config),
            Err(e) => Err(e),
        }
    }

    /// Starts or resumes the interval and drives it until it finishes, is
    /// paused or `cancel` fires.
    ///
    /// The stored record decides the transition:
    /// - Running: another runner owns it, returns `Ok(())` without callbacks
    /// - NotStarted: stamps `time_start`, switches to Running and ticks
    /// - Paused: switches back to Running and ticks, keeping `time_start`
    /// - Canceled or Done: [`PomoError::IntervalCompleted`]
    ///
    /// Records whose state cannot be decoded fail earlier with
    /// [`PomoError::InvalidState`] when the repository reads them.
    pub async fn start(&self, config: &IntervalConfig, cancel: &CancellationToken, progress: &mut impl Progress) -> Result<()> {
        let repo = config.repository();
        let mut interval = repo.by_id(self.id)?;

        match interval.state {
            State::Running => return Ok(()),
            State::NotStarted => interval.time_start = Some(Local::now().naive_local()),
            State::Paused => {}
            State::Canceled | State::Done => return Err(PomoError::IntervalCompleted),
        }

        let previous = interval.state;
        interval.state = State::Running;
        if !repo.compare_and_update(&interval, previous)? {
            // Someone else moved the record between our read and write.
            return Ok(());
        }
        debug!(id = interval.id, from = %previous, "interval running");

        ticker::run(interval.id, config, cancel, progress).await
    }

    /// Pauses a running interval.
    ///
    /// Only a Running record can be paused; anything else, including an
    /// interval that is already paused, yields
    /// [`PomoError::IntervalNotRunning`]. The write is guarded on the Running
    /// state so it never overwrites a completion racing with it.
    pub fn pause(&self, config: &IntervalConfig) -> Result<()> {
        let repo = config.repository();
        let mut interval = repo.by_id(self.id)?;

        if interval.state != State::Running {
            return Err(PomoError::IntervalNotRunning);
        }

        interval.state = State::Paused;
        if !repo.compare_and_update(&interval, State::Running)? {
            return Err(PomoError::IntervalNotRunning);
        }
        debug!(id = interval.id, actual = interval.time_actual.num_seconds(), "interval paused");

        Ok(())
    }
}
