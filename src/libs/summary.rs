//! Per-day totals of work and break time.

use crate::db::repository::SummaryFilter;
use crate::libs::config::IntervalConfig;
use crate::libs::error::Result;
use chrono::{NaiveDate, TimeDelta};

/// Time spent on one calendar day, split into work and breaks.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub pomodoro: TimeDelta,
    pub breaks: TimeDelta,
}

impl DailySummary {
    pub fn for_day(config: &IntervalConfig, date: NaiveDate) -> Result<Self> {
        let repo = config.repository();
        Ok(DailySummary {
            date,
            pomodoro: repo.category_summary(date, SummaryFilter::Pomodoro)?,
            breaks: repo.category_summary(date, SummaryFilter::Breaks)?,
        })
    }

    /// Summaries for the `days` days ending with `last_day`, oldest first.
    pub fn range(config: &IntervalConfig, last_day: NaiveDate, days: u32) -> Result<Vec<Self>> {
        (0..days)
            .rev()
            .filter_map(|offset| last_day.checked_sub_days(chrono::Days::new(u64::from(offset))))
            .map(|date| Self::for_day(config, date))
            .collect()
    }

    pub fn total(&self) -> TimeDelta {
        self.pomodoro + self.breaks
    }
}
