use crate::models::{Checksheet, Mould, PmStatus, PmTask};
use crate::planning::summary::StatusSummary;

pub fn print_task(t: &PmTask) {
    println!("Task: {}", t.ticket_id);
    println!("  Mould: {} ({})", t.mould_name, t.mould_id);
    println!("  Location: {}", t.location);
    println!("  Activity: {}", t.activity);
    println!("  Checksheet: {}", t.checksheets);
    println!("  Status: {}", t.status);
    println!("  Assignee: {}", t.assignee);
    println!("  Due: {}", t.due_date);
    if !t.checklist.is_empty() {
        println!("  Checklist:");
        for (i, item) in t.checklist.iter().enumerate() {
            println!("    {}. {item}", i + 1);
        }
    }
}

pub fn print_task_list(tasks: &[PmTask]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }
    for t in tasks {
        println!(
            "  [{}] {} {} due {} @{} - {}",
            t.status, t.ticket_id, t.mould_id, t.due_date, t.assignee, t.activity
        );
    }
}

pub fn print_summary(s: &StatusSummary) {
    println!("Completed: {:.1}% ({}/{})", s.percentage, s.completed, s.total);
    for status in PmStatus::ALL {
        println!("  {:<12} {}", status.as_str(), s.count(status));
    }
}

pub fn print_moulds(moulds: &[Mould]) {
    for m in moulds {
        println!(
            "  {} - {} ({}) {}",
            m.mould_id_no,
            m.display_name(),
            m.model,
            m.mould_no.unwrap_or("-")
        );
    }
}

pub fn print_checksheets(sheets: &[Checksheet]) {
    for cs in sheets {
        println!("  {} {} [{}]", cs.id, cs.name, cs.category.as_str());
        for step in cs.tasks {
            println!("    - {step}");
        }
    }
}
