use chrono::{Local, NaiveDate};
use serde_json::json;
use tracing::{info, warn};

use crate::cli::commands::TaskCommands;
use crate::cli::{finish, open_store};
use crate::error::PmError;
use crate::models::PmStatus;
use crate::output;
use crate::planning::filter::{self, TaskFilter};
use crate::planning::schedule::{self, ScheduleRequest};
use crate::planning::status_update;
use crate::planning::summary;

pub fn run(cmd: TaskCommands, json_output: bool) -> i32 {
    let result = match cmd {
        TaskCommands::List { status, due } => run_list(status.as_deref(), due.as_deref(), json_output),
        TaskCommands::Show { ticket_id } => run_show(&ticket_id, json_output),
        TaskCommands::Schedule { mould, checksheet, location, assignee, activity } => {
            let req = ScheduleRequest {
                mould_id: mould,
                checksheet_id: checksheet,
                location,
                assignee,
                activity,
            };
            run_schedule(&req, json_output)
        }
        TaskCommands::Status { ticket_id, status } => run_status(&ticket_id, &status, json_output),
    };
    finish(result, json_output)
}

fn parse_status(raw: &str) -> Result<PmStatus, PmError> {
    PmStatus::from_str(raw).ok_or_else(|| PmError::invalid_status(raw))
}

fn parse_date(raw: &str) -> Result<NaiveDate, PmError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| PmError::validation(format!("Invalid date '{raw}', expected YYYY-MM-DD")))
}

fn run_list(status: Option<&str>, due: Option<&str>, json_output: bool) -> Result<i32, PmError> {
    let status = status.map(parse_status).transpose()?;
    let due = due.map(parse_date).transpose()?;
    let task_filter = TaskFilter::All.with_status(status).with_due_date(due);

    let (store, _) = open_store()?;
    let tasks = store.load();
    let visible = filter::apply(&tasks, task_filter);

    if json_output {
        let filter_json = match task_filter {
            TaskFilter::All => json!(null),
            TaskFilter::Status(s) => json!({ "status": s.as_str() }),
            TaskFilter::DueDate(d) => json!({ "dueDate": d.format("%Y-%m-%d").to_string() }),
        };
        let tasks_json: Vec<_> = visible.iter().map(output::json::task_summary).collect();
        output::json::print(&output::json::success(json!({
            "filter": filter_json,
            "tasks": tasks_json,
            "summary": output::json::summary_json(&summary::summarize(&tasks))
        })));
    } else {
        output::text::print_task_list(&visible);
        if task_filter.is_active() {
            println!("\n{} of {} tasks shown.", visible.len(), tasks.len());
        }
    }
    Ok(0)
}

fn run_show(ticket_id: &str, json_output: bool) -> Result<i32, PmError> {
    let (store, _) = open_store()?;
    let tasks = store.load();
    let task = status_update::find_task(&tasks, ticket_id)
        .ok_or_else(|| PmError::task_not_found(ticket_id))?;

    if json_output {
        output::json::print(&output::json::success(json!({
            "task": output::json::task_detail(task)
        })));
    } else {
        output::text::print_task(task);
    }
    Ok(0)
}

fn run_schedule(req: &ScheduleRequest, json_output: bool) -> Result<i32, PmError> {
    // Reject bad input before touching the store.
    let task = schedule::build_task(req, &Local::now())?;

    let (store, _) = open_store()?;
    let tasks = schedule::prepend(store.load(), task.clone());
    store.save(&tasks);
    info!(ticket_id = %task.ticket_id, mould_id = %task.mould_id, "task scheduled");

    let message = format!("Successfully scheduled task for mould {}.", task.mould_id);
    if json_output {
        output::json::print(&output::json::success(json!({
            "task": output::json::task_detail(&task),
            "message": message
        })));
    } else {
        println!("{message}");
        println!("Ticket {} due {}", task.ticket_id, task.due_date);
    }
    Ok(0)
}

fn run_status(ticket_id: &str, raw_status: &str, json_output: bool) -> Result<i32, PmError> {
    let status = parse_status(raw_status)?;
    let (store, _) = open_store()?;
    let tasks = store.load();

    let matched = status_update::find_task(&tasks, ticket_id).is_some();
    if matched {
        let updated = status_update::update_status(&tasks, ticket_id, status);
        store.save(&updated);
        info!(ticket_id, status = %status, "status updated");
    } else {
        warn!(ticket_id, "status update matched no task; nothing changed");
    }

    let message = if matched {
        format!("Task {ticket_id} has been marked as {status}.")
    } else {
        format!("No task {ticket_id}; nothing changed.")
    };
    if json_output {
        output::json::print(&output::json::success(json!({
            "ticketId": ticket_id,
            "status": status.as_str(),
            "updated": matched,
            "message": message
        })));
    } else {
        println!("{message}");
    }
    Ok(0)
}
