use std::sync::mpsc;
use std::time::Duration;

use serde_json::json;
use tracing::info;

use crate::cli::{finish, open_store};
use crate::error::PmError;
use crate::output;
use crate::planning::summary;

pub fn run(limit: Option<usize>, json_output: bool) -> i32 {
    finish(run_inner(limit, json_output), json_output)
}

fn run_inner(limit: Option<usize>, json_output: bool) -> Result<i32, PmError> {
    let (store, config) = open_store()?;
    let (tx, rx) = mpsc::channel();
    let subscription = store.subscribe(Duration::from_millis(config.poll_interval_ms), move |tasks| {
        let _ = tx.send(tasks);
    })?;
    info!(key = %store.key(), "watching for external changes");

    if !json_output {
        println!("Watching {} (Ctrl-C to stop)", store.key());
    }

    let mut seen = 0usize;
    while limit.map_or(true, |n| seen < n) {
        let Ok(tasks) = rx.recv() else { break };
        seen += 1;

        if json_output {
            // Line-delimited: one document per change.
            output::json::print_line(&output::json::success(json!({
                "tasks": tasks.iter().map(output::json::task_summary).collect::<Vec<_>>(),
                "summary": output::json::summary_json(&summary::summarize(&tasks))
            })));
        } else {
            println!("\nTask list changed ({} tasks):", tasks.len());
            output::text::print_task_list(&tasks);
        }
    }

    subscription.unsubscribe();
    Ok(0)
}
