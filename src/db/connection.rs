use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::error::PmError;

use super::migrations;

pub const DATA_DIR_NAME: &str = ".pmtrack";
pub const DATA_DIR_ENV: &str = "PMTRACK_DIR";

/// Locate an existing data directory: `$PMTRACK_DIR`, else the nearest
/// `.pmtrack/` walking up from the current directory.
pub fn find_data_dir() -> Result<PathBuf, PmError> {
    if let Some(dir) = env_data_dir() {
        return if dir.join("pmtrack.db").exists() {
            Ok(dir)
        } else {
            Err(PmError::not_initialized())
        };
    }
    let mut dir = env::current_dir()?;
    loop {
        let candidate = dir.join(DATA_DIR_NAME);
        if candidate.join("pmtrack.db").exists() {
            return Ok(candidate);
        }
        if !dir.pop() {
            return Err(PmError::not_initialized());
        }
    }
}

/// Where `init` creates the data directory.
pub fn init_data_dir() -> Result<PathBuf, PmError> {
    match env_data_dir() {
        Some(dir) => Ok(dir),
        None => Ok(env::current_dir()?.join(DATA_DIR_NAME)),
    }
}

fn env_data_dir() -> Option<PathBuf> {
    env::var_os(DATA_DIR_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

pub fn db_path(data_dir: &Path) -> PathBuf {
    data_dir.join("pmtrack.db")
}

pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.json")
}

/// Open a connection to an existing database file.
pub fn open_db(path: &Path) -> Result<Connection, PmError> {
    if !path.exists() {
        return Err(PmError::not_initialized());
    }
    let conn = Connection::open(path)?;
    configure_connection(&conn)?;
    Ok(conn)
}

/// Create the data directory and database, and run migrations.
pub fn init_db(data_dir: &Path) -> Result<PathBuf, PmError> {
    fs::create_dir_all(data_dir)?;
    let path = db_path(data_dir);
    let conn = Connection::open(&path)?;
    configure_connection(&conn)?;
    migrations::run_migrations(&conn)?;
    Ok(path)
}

fn configure_connection(conn: &Connection) -> Result<(), PmError> {
    conn.execute_batch(
        "PRAGMA journal_mode=WAL;
         PRAGMA busy_timeout=5000;",
    )?;
    Ok(())
}
