//! SQLite-backed interval storage.
//!
//! Persists interval records in the `intervals` table so timers survive
//! restarts and can be paused from a second `pomo` process. All statements
//! for one repository go through a single connection behind a mutex; across
//! processes, SQLite's own locking plus the state guard in
//! [`Repository::compare_and_update`] keep concurrent writers from
//! overwriting each other's transitions.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pomo::db::intervals::SqliteRepository;
//! use pomo::db::repository::Repository;
//!
//! let repo = SqliteRepository::open("pomo.db")?;
//! let last = repo.last()?;
//! println!("{} {}", last.category, last.state);
//! # Ok::<(), pomo::libs::error::PomoError>(())
//! ```

use crate::db::db::Db;
use crate::db::repository::{Repository, SummaryFilter};
use crate::libs::category::Category;
use crate::libs::error::{PomoError, Result};
use crate::libs::interval::{Interval, State};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::Arc;

/// Timestamp layout used for `start_time`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const INSERT_INTERVAL: &str =
    "INSERT INTO intervals (start_time, planned_duration, actual_duration, category, state) VALUES (?1, ?2, ?3, ?4, ?5)";

/// Category and planned duration are fixed at creation and never rewritten.
const UPDATE_INTERVAL: &str = "UPDATE intervals SET start_time = ?1, actual_duration = ?2, state = ?3 WHERE id = ?4";

const UPDATE_INTERVAL_IF_STATE: &str =
    "UPDATE intervals SET start_time = ?1, actual_duration = ?2, state = ?3 WHERE id = ?4 AND state = ?5";

const SELECT_BY_ID: &str =
    "SELECT id, start_time, planned_duration, actual_duration, category, state FROM intervals WHERE id = ?1";

const SELECT_LAST: &str =
    "SELECT id, start_time, planned_duration, actual_duration, category, state FROM intervals ORDER BY id DESC LIMIT 1";

const SELECT_BREAKS: &str = "SELECT id, start_time, planned_duration, actual_duration, category, state FROM intervals
    WHERE category != 'Pomodoro' ORDER BY id DESC LIMIT ?1";

const SUM_POMODORO_FOR_DAY: &str =
    "SELECT COALESCE(SUM(actual_duration), 0) FROM intervals WHERE date(start_time) = ?1 AND category = 'Pomodoro'";

const SUM_BREAKS_FOR_DAY: &str =
    "SELECT COALESCE(SUM(actual_duration), 0) FROM intervals WHERE date(start_time) = ?1 AND category != 'Pomodoro'";

/// Raw column values, converted into an [`Interval`] outside the row closure
/// so decoding failures surface as [`PomoError`]s.
struct IntervalRow {
    id: i64,
    start_time: Option<String>,
    planned_ms: i64,
    actual_ms: i64,
    category: String,
    state: i64,
}

impl IntervalRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(IntervalRow {
            id: row.get(0)?,
            start_time: row.get(1)?,
            planned_ms: row.get(2)?,
            actual_ms: row.get(3)?,
            category: row.get(4)?,
            state: row.get(5)?,
        })
    }
}

impl TryFrom<IntervalRow> for Interval {
    type Error = PomoError;

    fn try_from(row: IntervalRow) -> Result<Self> {
        let time_start = row
            .start_time
            .map(|s| NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT))
            .transpose()?;

        Ok(Interval {
            id: row.id,
            category: row.category.parse::<Category>()?,
            state: State::try_from(row.state)?,
            time_start,
            time_planning: TimeDelta::milliseconds(row.planned_ms),
            time_actual: TimeDelta::milliseconds(row.actual_ms),
        })
    }
}

fn format_start(interval: &Interval) -> Option<String> {
    interval.time_start.map(|t| t.format(TIMESTAMP_FORMAT).to_string())
}

/// SQLite [`Repository`] sharing one connection between clones.
#[derive(Clone)]
pub struct SqliteRepository {
    pub conn: Arc<Mutex<Connection>>,
}

impl SqliteRepository {
    /// Opens the database file at `path`, creating and migrating it as
    /// needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Db::open(path)?;
        Ok(Self::from_connection(db.conn))
    }

    /// Opens the database in the application data directory.
    pub fn new() -> anyhow::Result<Self> {
        let db = Db::new()?;
        Ok(Self::from_connection(db.conn))
    }

    fn from_connection(conn: Connection) -> Self {
        SqliteRepository {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    fn select_by_id(conn: &Connection, id: i64) -> Result<Interval> {
        if id <= 0 {
            return Err(PomoError::InvalidId(id));
        }
        let row = conn
            .query_row(SELECT_BY_ID, params![id], IntervalRow::from_row)
            .optional()?
            .ok_or(PomoError::NotFound(id))?;
        Interval::try_from(row)
    }
}

impl Repository for SqliteRepository {
    fn create(&self, interval: &Interval) -> Result<i64> {
        let conn = self.conn.lock();
        conn.execute(
            INSERT_INTERVAL,
            params![
                format_start(interval),
                interval.time_planning.num_milliseconds(),
                interval.time_actual.num_milliseconds(),
                interval.category.as_str(),
                i64::from(interval.state),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update(&self, interval: &Interval) -> Result<()> {
        if interval.id <= 0 {
            return Err(PomoError::InvalidId(interval.id));
        }
        let conn = self.conn.lock();
        let affected = conn.execute(
            UPDATE_INTERVAL,
            params![
                format_start(interval),
                interval.time_actual.num_milliseconds(),
                i64::from(interval.state),
                interval.id,
            ],
        )?;
        if affected == 0 {
            return Err(PomoError::NotFound(interval.id));
        }
        Ok(())
    }

    fn compare_and_update(&self, interval: &Interval, expected: State) -> Result<bool> {
        if interval.id <= 0 {
            return Err(PomoError::InvalidId(interval.id));
        }
        let conn = self.conn.lock();
        let affected = conn.execute(
            UPDATE_INTERVAL_IF_STATE,
            params![
                format_start(interval),
                interval.time_actual.num_milliseconds(),
                i64::from(interval.state),
                interval.id,
                i64::from(expected),
            ],
        )?;
        if affected == 0 {
            // Distinguish "state moved on" from "no such record".
            Self::select_by_id(&conn, interval.id)?;
            return Ok(false);
        }
        Ok(true)
    }

    fn last(&self) -> Result<Interval> {
        let conn = self.conn.lock();
        let row = conn
            .query_row(SELECT_LAST, [], IntervalRow::from_row)
            .optional()?
            .ok_or(PomoError::NoIntervals)?;
        Interval::try_from(row)
    }

    fn by_id(&self, id: i64) -> Result<Interval> {
        let conn = self.conn.lock();
        Self::select_by_id(&conn, id)
    }

    fn breaks(&self, count: usize) -> Result<Vec<Interval>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(SELECT_BREAKS)?;
        let rows = stmt.query_map(params![count as i64], IntervalRow::from_row)?;

        let mut breaks = Vec::new();
        for row in rows {
            breaks.push(Interval::try_from(row?)?);
        }
        Ok(breaks)
    }

    fn category_summary(&self, day: NaiveDate, filter: SummaryFilter) -> Result<TimeDelta> {
        let query = match filter {
            SummaryFilter::Pomodoro => SUM_POMODORO_FOR_DAY,
            SummaryFilter::Breaks => SUM_BREAKS_FOR_DAY,
        };
        let day_str = day.format("%Y-%m-%d").to_string();

        let conn = self.conn.lock();
        let total_ms: i64 = conn.query_row(query, params![day_str], |row| row.get(0))?;
        Ok(TimeDelta::milliseconds(total_ms))
    }
}
