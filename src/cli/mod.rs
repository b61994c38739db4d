pub mod catalog;
pub mod commands;
pub mod init;
pub mod reset;
pub mod summary;
pub mod task;
pub mod watch;

pub use commands::*;

use crate::config::Config;
use crate::db::{connection, TaskStore};
use crate::error::PmError;
use crate::output;

/// Open the task store of the nearest data directory, keyed per its config.
pub fn open_store() -> Result<(TaskStore, Config), PmError> {
    let dir = connection::find_data_dir()?;
    let config = Config::load(&connection::config_path(&dir))?;
    let store = TaskStore::open(&connection::db_path(&dir), &config.storage_key)?;
    Ok((store, config))
}

/// Map a command result to an exit code, reporting errors in the chosen format.
pub fn finish(result: Result<i32, PmError>, json_output: bool) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            if json_output {
                output::json::print(&output::json::error(&e));
            } else {
                eprintln!("Error: {}", e.message);
            }
            1
        }
    }
}
