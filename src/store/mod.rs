/// Key-value persistence backed by SQLite.
mod kv;
mod migrations;

use std::path::Path;

use anyhow::Result;
use rusqlite::Connection;

pub use kv::{get, set};

/// Key holding the JSON list of saved palettes.
pub const PALETTES_KEY: &str = "colorPalettes";
/// Key holding the JSON list of pinned palette ids.
pub const PINS_KEY: &str = "pinnedPalettes";

/// Opens (or creates) the SQLite database and runs migrations.
pub fn init(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    migrations::run_migrations(&conn)?;
    log::debug!("Opened store at {}", db_path.display());
    Ok(conn)
}

/// In-memory store, used by tests.
#[cfg(test)]
pub fn init_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}
