//! Command-line front end.
//!
//! Every command builds one [`IntervalConfig`] from the persisted
//! [`Settings`], the command-line overrides and the selected storage engine,
//! then hands it to the interval core.

pub mod init;
pub mod pause;
pub mod start;
pub mod status;
pub mod summary;

use crate::db::intervals::SqliteRepository;
use crate::db::memory::InMemoryRepository;
use crate::db::repository::Repository;
use crate::libs::config::{IntervalConfig, Settings};
use anyhow::Result;
use chrono::TimeDelta;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Interactive settings setup")]
    Init,
    #[command(about = "Start or resume the current interval")]
    Start(start::StartArgs),
    #[command(about = "Pause the running interval")]
    Pause(pause::PauseArgs),
    #[command(about = "Show the current interval")]
    Status(status::StatusArgs),
    #[command(about = "Show time spent per day")]
    Summary(summary::SummaryArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Start(args) => start::cmd(args).await,
            Commands::Pause(args) => pause::cmd(args),
            Commands::Status(args) => status::cmd(args),
            Commands::Summary(args) => summary::cmd(args),
        }
    }
}

/// Where interval records are kept.
#[derive(Debug, Args, Default)]
pub struct StorageArgs {
    #[arg(long, short, help = "SQLite database file (defaults to the settings value or the data directory)")]
    pub db: Option<PathBuf>,
}

impl StorageArgs {
    /// Opens the SQLite repository: `--db`, then the settings value, then the
    /// default file in the data directory.
    pub fn open(&self, settings: &Settings) -> Result<Arc<dyn Repository>> {
        let repo = match self.db.as_ref().or(settings.database.as_ref()) {
            Some(path) => SqliteRepository::open(path)?,
            None => SqliteRepository::new()?,
        };
        Ok(Arc::new(repo))
    }
}

/// Per-run duration overrides, in minutes.
#[derive(Debug, Args, Default)]
pub struct DurationArgs {
    #[arg(long, short, help = "Pomodoro duration in minutes")]
    pub pomodoro: Option<i64>,
    #[arg(long, short, help = "Long break duration in minutes")]
    pub long_break: Option<i64>,
    #[arg(long, short, help = "Short break duration in minutes")]
    pub short_break: Option<i64>,
}

impl DurationArgs {
    pub fn config(&self, repo: Arc<dyn Repository>, settings: &Settings) -> IntervalConfig {
        IntervalConfig::new(
            repo,
            self.pomodoro.map_or_else(|| settings.pomodoro_duration(), TimeDelta::minutes),
            self.long_break.map_or_else(|| settings.long_break_duration(), TimeDelta::minutes),
            self.short_break.map_or_else(|| settings.short_break_duration(), TimeDelta::minutes),
        )
    }
}

/// Repository for a throwaway session that keeps nothing on disk.
pub fn in_memory() -> Arc<dyn Repository> {
    Arc::new(InMemoryRepository::new())
}

/// Config for commands that only read or pause existing intervals.
pub fn stored_config(storage: &StorageArgs) -> Result<IntervalConfig> {
    let settings = Settings::read()?;
    let repo = storage.open(&settings)?;
    Ok(DurationArgs::default().config(repo, &settings))
}
