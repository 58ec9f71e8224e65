//! Core library modules for the pomo application.
//!
//! ## Features
//!
//! - **Interval Core**: category selection, the interval lifecycle and the tick loop
//! - **Configuration**: planned durations and persisted user settings
//! - **Reporting**: daily summaries, duration formatting, table rendering
//! - **Messaging**: user-facing texts and output macros
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pomo::db::intervals::SqliteRepository;
//! use pomo::libs::config::IntervalConfig;
//! use pomo::libs::interval::Interval;
//! use chrono::TimeDelta;
//! use std::sync::Arc;
//!
//! let repo = Arc::new(SqliteRepository::open("pomo.db")?);
//! let config = IntervalConfig::new(repo, TimeDelta::minutes(50), TimeDelta::zero(), TimeDelta::zero());
//! let next = Interval::current(&config)?;
//! println!("next up: {}", next.category);
//! # Ok::<(), pomo::libs::error::PomoError>(())
//! ```

pub mod category;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod interval;
pub mod messages;
pub mod summary;
pub mod ticker;
pub mod view;
