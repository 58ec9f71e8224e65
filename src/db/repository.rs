//! Storage contract for interval records.
//!
//! The interval core only ever talks to a `dyn Repository`; which engine sits
//! behind it ([`InMemoryRepository`](crate::db::memory::InMemoryRepository) or
//! [`SqliteRepository`](crate::db::intervals::SqliteRepository)) is decided
//! once at startup.
//!
//! Implementations must serialize access to a single record: a write and a
//! concurrent read of the same id never interleave, and
//! [`Repository::compare_and_update`] checks and writes atomically.

use crate::libs::error::Result;
use crate::libs::interval::{Interval, State};
use chrono::{NaiveDate, TimeDelta};

/// Which categories a daily summary adds up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryFilter {
    /// Work intervals only.
    Pomodoro,
    /// Short and long breaks together.
    Breaks,
}

impl SummaryFilter {
    pub fn matches(&self, interval: &Interval) -> bool {
        match self {
            SummaryFilter::Pomodoro => !interval.category.is_break(),
            SummaryFilter::Breaks => interval.category.is_break(),
        }
    }
}

pub trait Repository: Send + Sync {
    /// Persists a new record and returns its freshly assigned id.
    ///
    /// Ids start at 1 and grow with every call; the `id` field of the
    /// argument is ignored.
    fn create(&self, interval: &Interval) -> Result<i64>;

    /// Overwrites the record with `interval.id`.
    ///
    /// Fails with `InvalidId` for ids below 1 and `NotFound` for ids never
    /// issued.
    fn update(&self, interval: &Interval) -> Result<()>;

    /// Overwrites the record only if its stored state is still `expected`.
    ///
    /// Returns `false`, leaving storage untouched, when the state differs.
    fn compare_and_update(&self, interval: &Interval, expected: State) -> Result<bool>;

    /// Most recently created record, or `NoIntervals` when storage is empty.
    fn last(&self) -> Result<Interval>;

    /// Record with the given id; `InvalidId` for ids below 1 and `NotFound`
    /// for unknown ids.
    fn by_id(&self, id: i64) -> Result<Interval>;

    /// Up to `count` most recent break records, newest first.
    fn breaks(&self, count: usize) -> Result<Vec<Interval>>;

    /// Total running time of the intervals started on `day` that match
    /// `filter`.
    fn category_summary(&self, day: NaiveDate, filter: SummaryFilter) -> Result<TimeDelta>;
}
