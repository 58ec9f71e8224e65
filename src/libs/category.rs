//! Interval categories and the rule that picks the next one.

use crate::db::repository::Repository;
use crate::libs::error::{PomoError, Result};
use std::fmt;
use std::str::FromStr;

/// How many recent breaks are inspected when choosing between a short and a
/// long break.
const BREAKS_WINDOW: usize = 3;

/// Kind of interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Pomodoro,
    LongBreak,
    ShortBreak,
}

impl Category {
    /// Name used for storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Pomodoro => "Pomodoro",
            Category::LongBreak => "LongBreak",
            Category::ShortBreak => "ShortBreak",
        }
    }

    pub fn is_break(&self) -> bool {
        !matches!(self, Category::Pomodoro)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PomoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Pomodoro" => Ok(Category::Pomodoro),
            "LongBreak" => Ok(Category::LongBreak),
            "ShortBreak" => Ok(Category::ShortBreak),
            other => Err(PomoError::InvalidCategory(other.to_string())),
        }
    }
}

/// Decides which category the next interval gets.
///
/// Work always follows a break. After a Pomodoro the next break is short
/// until three breaks exist; from then on it is long only when none of the
/// three most recent breaks was long. Starting from an empty history this
/// makes every fourth break a long one.
///
/// An empty repository is not an error here: the first interval is a
/// Pomodoro.
pub fn next_category(repo: &dyn Repository) -> Result<Category> {
    let last = match repo.last() {
        Ok(last) => last,
        Err(PomoError::NoIntervals) => return Ok(Category::Pomodoro),
        Err(e) => return Err(e),
    };

    if last.category.is_break() {
        return Ok(Category::Pomodoro);
    }

    let breaks = repo.breaks(BREAKS_WINDOW)?;
    if breaks.len() < BREAKS_WINDOW {
        return Ok(Category::ShortBreak);
    }

    if breaks.iter().any(|b| b.category == Category::LongBreak) {
        return Ok(Category::ShortBreak);
    }

    Ok(Category::LongBreak)
}
