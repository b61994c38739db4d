use serde_json::{json, Value};

use crate::error::PmError;
use crate::models::{Checksheet, Mould, PmTask};
use crate::planning::summary::StatusSummary;

pub fn print(v: &Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string())
    );
}

/// One compact document per line, for streamed output.
pub fn print_line(v: &Value) {
    println!("{v}");
}

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &PmError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

pub fn task_summary(t: &PmTask) -> Value {
    json!({
        "ticketId": t.ticket_id,
        "mouldId": t.mould_id,
        "status": t.status.as_str(),
        "assignee": t.assignee,
        "dueDate": t.due_date
    })
}

pub fn task_detail(t: &PmTask) -> Value {
    json!({
        "ticketId": t.ticket_id,
        "mouldId": t.mould_id,
        "mouldName": t.mould_name,
        "location": t.location,
        "activity": t.activity,
        "checksheets": t.checksheets,
        "status": t.status.as_str(),
        "assignee": t.assignee,
        "dueDate": t.due_date,
        "checklist": t.checklist
    })
}

pub fn summary_json(s: &StatusSummary) -> Value {
    json!({
        "total": s.total,
        "scheduled": s.scheduled,
        "inProgress": s.in_progress,
        "overdue": s.overdue,
        "completed": s.completed,
        "percentage": (s.percentage * 10.0).round() / 10.0
    })
}

pub fn mould_json(m: &Mould) -> Value {
    json!({
        "mouldIdNo": m.mould_id_no,
        "model": m.model,
        "mouldNo": m.mould_no,
        "partName": m.part_name,
        "displayName": m.display_name()
    })
}

pub fn checksheet_json(cs: &Checksheet) -> Value {
    json!({
        "id": cs.id,
        "name": cs.name,
        "category": cs.category.as_str(),
        "tasks": cs.tasks
    })
}
