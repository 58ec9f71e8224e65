//! Volatile interval storage.
//!
//! Keeps every record in a `Vec` whose index is `id - 1`. Used by
//! `pomo start --in-memory` and throughout the test suite; nothing survives
//! the process.

use crate::db::repository::{Repository, SummaryFilter};
use crate::libs::error::{PomoError, Result};
use crate::libs::interval::{Interval, State};
use chrono::{NaiveDate, TimeDelta};
use parking_lot::RwLock;

/// In-memory [`Repository`] guarded by a single reader-writer lock.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    intervals: RwLock<Vec<Interval>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn slot(id: i64, len: usize) -> Result<usize> {
    if id <= 0 {
        return Err(PomoError::InvalidId(id));
    }
    match usize::try_from(id - 1) {
        Ok(index) if index < len => Ok(index),
        _ => Err(PomoError::NotFound(id)),
    }
}

impl Repository for InMemoryRepository {
    fn create(&self, interval: &Interval) -> Result<i64> {
        let mut intervals = self.intervals.write();
        let mut record = interval.clone();
        record.id = intervals.len() as i64 + 1;
        let id = record.id;
        intervals.push(record);
        Ok(id)
    }

    fn update(&self, interval: &Interval) -> Result<()> {
        let mut intervals = self.intervals.write();
        let index = slot(interval.id, intervals.len())?;
        intervals[index] = interval.clone();
        Ok(())
    }

    fn compare_and_update(&self, interval: &Interval, expected: State) -> Result<bool> {
        let mut intervals = self.intervals.write();
        let index = slot(interval.id, intervals.len())?;
        if intervals[index].state != expected {
            return Ok(false);
        }
        intervals[index] = interval.clone();
        Ok(true)
    }

    fn last(&self) -> Result<Interval> {
        self.intervals.read().last().cloned().ok_or(PomoError::NoIntervals)
    }

    fn by_id(&self, id: i64) -> Result<Interval> {
        let intervals = self.intervals.read();
        let index = slot(id, intervals.len())?;
        Ok(intervals[index].clone())
    }

    fn breaks(&self, count: usize) -> Result<Vec<Interval>> {
        let intervals = self.intervals.read();
        Ok(intervals.iter().rev().filter(|i| i.category.is_break()).take(count).cloned().collect())
    }

    fn category_summary(&self, day: NaiveDate, filter: SummaryFilter) -> Result<TimeDelta> {
        let intervals = self.intervals.read();
        let total = intervals
            .iter()
            .filter(|i| i.time_start.is_some_and(|start| start.date() == day))
            .filter(|i| filter.matches(i))
            .fold(TimeDelta::zero(), |acc, i| acc + i.time_actual);
        Ok(total)
    }
}
