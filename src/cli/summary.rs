use serde_json::json;

use crate::cli::{finish, open_store};
use crate::error::PmError;
use crate::output;
use crate::planning::summary;

pub fn run(json_output: bool) -> i32 {
    finish(run_inner(json_output), json_output)
}

fn run_inner(json_output: bool) -> Result<i32, PmError> {
    let (store, _) = open_store()?;
    let tasks = store.load();
    let s = summary::summarize(&tasks);

    if json_output {
        output::json::print(&output::json::success(json!({
            "summary": output::json::summary_json(&s)
        })));
    } else {
        output::text::print_summary(&s);
    }
    Ok(0)
}
