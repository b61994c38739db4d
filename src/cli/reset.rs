use serde_json::json;

use crate::cli::{finish, open_store};
use crate::error::PmError;
use crate::output;

pub fn run(json_output: bool) -> i32 {
    finish(run_inner(json_output), json_output)
}

fn run_inner(json_output: bool) -> Result<i32, PmError> {
    let (store, _) = open_store()?;
    let removed = store.clear()?;

    if json_output {
        output::json::print(&output::json::success(json!({
            "key": store.key(),
            "removed": removed
        })));
    } else if removed {
        println!("Cleared stored task list ({}).", store.key());
    } else {
        println!("Nothing stored under {}.", store.key());
    }
    Ok(0)
}
