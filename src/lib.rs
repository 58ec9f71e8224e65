//! # Pomo - Pomodoro interval tracker
//!
//! A command-line timer that alternates focused work with breaks and records
//! every interval, so time spent can be summarized per day.
//!
//! ## Features
//!
//! - **Interval Cycle**: three Pomodoros with short breaks, then a long break
//! - **Pause and Resume**: pause from another terminal, resume where you left off
//! - **Storage**: SQLite file or an in-memory session
//! - **Summaries**: daily totals of work and break time
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pomo::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
