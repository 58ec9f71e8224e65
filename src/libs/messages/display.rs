//! Display implementation for pomo application messages.
//!
//! All user-facing wording is defined here, in one match, so the rest of the
//! code only ever names a [`Message`] variant.
//!
//! ```rust
//! use pomo::libs::messages::Message;
//!
//! let message = Message::IntervalFinished("Pomodoro".to_string());
//! assert_eq!(message.to_string(), "Pomodoro finished");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === INTERVAL MESSAGES ===
            Message::IntervalStarted { category, planned } => format!("{} started ({})", category, planned),
            Message::IntervalResumed { category, remaining } => format!("{} resumed, {} left", category, remaining),
            Message::FocusOnTask => "Focus on your task".to_string(),
            Message::TakeABreak => "Take a break".to_string(),
            Message::IntervalProgress {
                category,
                elapsed,
                planned,
            } => format!("{}: {} / {}", category, elapsed, planned),
            Message::IntervalFinished(category) => format!("{} finished", category),
            Message::IntervalCanceled(category) => format!("{} canceled", category),
            Message::IntervalPaused { category, elapsed } => format!("{} paused at {}", category, elapsed),
            Message::IntervalAlreadyRunning(id) => format!("Interval #{} is already running. Run `pomo pause` if no other `pomo start` is active", id),
            Message::IntervalNotRunning => "Nothing is running, nothing to pause".to_string(),
            Message::NoIntervalsYet => "No intervals yet. Run `pomo start` to begin".to_string(),
            Message::IntervalStatus {
                id,
                category,
                state,
                elapsed,
                planned,
            } => format!("#{} {} - {} ({} / {})", id, category, state, elapsed, planned),
            Message::NextIntervalStarting(category) => format!("Next up: {}", category),

            // === SUMMARY MESSAGES ===
            Message::SummaryHeader(days) => format!("Time spent over the last {} day(s)", days),
            Message::SummaryColumnDate => "DATE".to_string(),
            Message::SummaryColumnPomodoro => "POMODORO".to_string(),
            Message::SummaryColumnBreaks => "BREAKS".to_string(),
            Message::SummaryColumnTotal => "TOTAL".to_string(),

            // === SETTINGS MESSAGES ===
            Message::SettingsHeader => "Interval settings".to_string(),
            Message::SettingsSaved => "Settings saved successfully".to_string(),
            Message::PromptPomodoroMinutes => "Pomodoro duration (minutes)".to_string(),
            Message::PromptLongBreakMinutes => "Long break duration (minutes)".to_string(),
            Message::PromptShortBreakMinutes => "Short break duration (minutes)".to_string(),
            Message::PromptDatabasePath => "Database file (empty for default)".to_string(),

            // === SIGNAL MESSAGES ===
            Message::SignalListenFailed(error) => format!("Failed to listen for shutdown signals: {}", error),

            // === MIGRATION MESSAGES ===
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
        };

        write!(f, "{}", text)
    }
}
