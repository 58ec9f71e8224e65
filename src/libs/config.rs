//! Configuration for the pomo application.
//!
//! Two layers live here:
//!
//! - [`IntervalConfig`]: the process-wide, read-only set of planned durations
//!   together with the repository the interval core works against. It is
//!   built once at startup and passed by reference into every lifecycle call.
//! - [`Settings`]: the user's persisted preferences, stored as JSON in the
//!   platform data directory and edited through an interactive wizard.
//!
//! Command-line flags override settings, and the merged values feed
//! [`IntervalConfig::new`].
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\pomo\pomo\settings.json`
//! - **macOS**: `~/Library/Application Support/pomo/pomo/settings.json`
//! - **Linux**: `~/.local/share/pomo/pomo/settings.json`
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use pomo::db::memory::InMemoryRepository;
//! use pomo::libs::config::{IntervalConfig, Settings};
//! use std::sync::Arc;
//!
//! let settings = Settings::read()?;
//! let config = IntervalConfig::new(
//!     Arc::new(InMemoryRepository::new()),
//!     settings.pomodoro_duration(),
//!     settings.long_break_duration(),
//!     settings.short_break_duration(),
//! );
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::repository::Repository;
use crate::libs::category::Category;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use chrono::TimeDelta;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Arc;

/// Settings file name inside the application data directory.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Default Pomodoro length in minutes.
pub const DEFAULT_POMODORO_MINUTES: i64 = 25;
/// Default long break length in minutes.
pub const DEFAULT_LONG_BREAK_MINUTES: i64 = 15;
/// Default short break length in minutes.
pub const DEFAULT_SHORT_BREAK_MINUTES: i64 = 5;

/// Planned durations per category plus the repository they apply to.
///
/// Non-positive durations passed to [`IntervalConfig::new`] fall back to the
/// defaults (25m Pomodoro, 15m long break, 5m short break), each field
/// independently.
#[derive(Clone)]
pub struct IntervalConfig {
    repo: Arc<dyn Repository>,
    pub pomodoro: TimeDelta,
    pub long_break: TimeDelta,
    pub short_break: TimeDelta,
}

impl IntervalConfig {
    pub fn new(repo: Arc<dyn Repository>, pomodoro: TimeDelta, long_break: TimeDelta, short_break: TimeDelta) -> Self {
        Self {
            repo,
            pomodoro: positive_or(pomodoro, TimeDelta::minutes(DEFAULT_POMODORO_MINUTES)),
            long_break: positive_or(long_break, TimeDelta::minutes(DEFAULT_LONG_BREAK_MINUTES)),
            short_break: positive_or(short_break, TimeDelta::minutes(DEFAULT_SHORT_BREAK_MINUTES)),
        }
    }

    pub fn repository(&self) -> &dyn Repository {
        self.repo.as_ref()
    }

    /// Planned duration for intervals of `category`.
    pub fn duration_for(&self, category: Category) -> TimeDelta {
        match category {
            Category::Pomodoro => self.pomodoro,
            Category::LongBreak => self.long_break,
            Category::ShortBreak => self.short_break,
        }
    }
}

impl fmt::Debug for IntervalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalConfig")
            .field("pomodoro", &self.pomodoro)
            .field("long_break", &self.long_break)
            .field("short_break", &self.short_break)
            .finish_non_exhaustive()
    }
}

fn positive_or(value: TimeDelta, default: TimeDelta) -> TimeDelta {
    if value > TimeDelta::zero() {
        value
    } else {
        default
    }
}

/// Persisted user preferences.
///
/// Durations are whole minutes. The database path is optional; when absent
/// the SQLite file lives next to the settings file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Settings {
    pub pomodoro: i64,
    pub long_break: i64,
    pub short_break: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            pomodoro: DEFAULT_POMODORO_MINUTES,
            long_break: DEFAULT_LONG_BREAK_MINUTES,
            short_break: DEFAULT_SHORT_BREAK_MINUTES,
            database: None,
        }
    }
}

impl Settings {
    /// Reads the settings file, returning defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Settings> {
        let settings_path = DataStorage::new().get_path(SETTINGS_FILE_NAME)?;

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let settings_str = fs::read_to_string(settings_path)?;
        let settings: Settings = serde_json::from_str(&settings_str)?;
        Ok(settings)
    }

    /// Writes the settings as pretty-printed JSON, replacing any previous file.
    pub fn save(&self) -> Result<()> {
        let settings_path = DataStorage::new().get_path(SETTINGS_FILE_NAME)?;

        let settings_file = File::create(settings_path)?;
        serde_json::to_writer_pretty(&settings_file, &self)?;
        Ok(())
    }

    /// Interactive wizard prompting for every field, pre-filled with the
    /// current values.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();

        msg_print!(Message::SettingsHeader);
        let pomodoro = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPomodoroMinutes.to_string())
            .default(current.pomodoro)
            .interact_text()?;
        let long_break = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptLongBreakMinutes.to_string())
            .default(current.long_break)
            .interact_text()?;
        let short_break = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptShortBreakMinutes.to_string())
            .default(current.short_break)
            .interact_text()?;
        let database: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabasePath.to_string())
            .allow_empty(true)
            .default(current.database.map(|p| p.display().to_string()).unwrap_or_default())
            .interact_text()?;

        Ok(Settings {
            pomodoro,
            long_break,
            short_break,
            database: (!database.trim().is_empty()).then(|| PathBuf::from(database.trim())),
        })
    }

    pub fn pomodoro_duration(&self) -> TimeDelta {
        TimeDelta::minutes(self.pomodoro)
    }

    pub fn long_break_duration(&self) -> TimeDelta {
        TimeDelta::minutes(self.long_break)
    }

    pub fn short_break_duration(&self) -> TimeDelta {
        TimeDelta::minutes(self.short_break)
    }
}
