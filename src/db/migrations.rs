//! Versioned schema migrations for the SQLite interval store.
//!
//! Each migration runs inside one transaction together with every other
//! pending migration, and is recorded in the `migrations` table so it is
//! applied exactly once per database file.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pomo::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("pomo.db")?;
//! init_with_migrations(&mut conn)?;
//! let version = get_db_version(&conn)?;
//! # Ok::<(), pomo::libs::error::PomoError>(())
//! ```

use crate::libs::error::Result;
use crate::libs::messages::Message;
use crate::msg_debug;
use rusqlite::{params, Connection, Transaction};

/// Tracking table holding one row per applied migration.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations, in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: interval records.
        // Durations are milliseconds; start_time stays NULL until the first run.
        self.add_migration(1, "create_intervals", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS intervals (
        id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
        start_time TIMESTAMP,
        planned_duration INTEGER NOT NULL DEFAULT 0,
        actual_duration INTEGER NOT NULL DEFAULT 0,
        category TEXT NOT NULL,
        state INTEGER NOT NULL DEFAULT 0
    )",
                [],
            )?;
            Ok(())
        });

        // Version 2: lookups used by category selection and daily summaries.
        self.add_migration(2, "add_interval_indices", |tx| {
            tx.execute("CREATE INDEX IF NOT EXISTS idx_intervals_category ON intervals(category)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_intervals_start_time ON intervals(start_time)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every migration newer than the database's current version.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        let tx = conn.transaction()?;
        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));
            (migration.up)(&tx)?;
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
        }
        tx.commit()?;

        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let tracked: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'migrations')",
            [],
            |row| row.get(0),
        )?;
        if !tracked {
            return Ok(0);
        }

        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;
        Ok(version.unwrap_or(0))
    }

    fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }
}

pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    Ok(manager.get_current_version(conn)? < manager.latest_version())
}
