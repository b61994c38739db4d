use serde_json::json;
use tracing::info;

use crate::cli::finish;
use crate::config::Config;
use crate::db::connection;
use crate::error::PmError;
use crate::output;

pub fn run(json_output: bool) -> i32 {
    finish(run_inner(json_output), json_output)
}

fn run_inner(json_output: bool) -> Result<i32, PmError> {
    let dir = connection::init_data_dir()?;
    let path = connection::init_db(&dir)?;
    let config_path = connection::config_path(&dir);
    Config::write_default_if_missing(&config_path)?;
    // A malformed existing config fails init.
    Config::load(&config_path)?;
    info!(path = %path.display(), "initialized");

    if json_output {
        output::json::print(&output::json::success(json!({
            "path": path.to_string_lossy(),
            "config": config_path.to_string_lossy()
        })));
    } else {
        println!("Initialized pmtrack at {}", path.display());
    }
    Ok(0)
}
