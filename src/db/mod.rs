//! Storage layer for the pomo application.
//!
//! Defines the [`Repository`](repository::Repository) contract the interval
//! core depends on and its two engines: a volatile in-memory store and a
//! SQLite store with versioned migrations.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pomo::db::{intervals::SqliteRepository, memory::InMemoryRepository, repository::Repository};
//! use std::sync::Arc;
//!
//! let durable: Arc<dyn Repository> = Arc::new(SqliteRepository::open("pomo.db")?);
//! let scratch: Arc<dyn Repository> = Arc::new(InMemoryRepository::new());
//! # Ok::<(), pomo::libs::error::PomoError>(())
//! ```

/// Connection opening and schema initialization.
pub mod db;

/// SQLite implementation of the interval repository.
pub mod intervals;

/// In-memory implementation of the interval repository.
pub mod memory;

/// Versioned schema changes for the SQLite store.
pub mod migrations;

/// The storage contract shared by every engine.
pub mod repository;
