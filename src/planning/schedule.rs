use chrono::{DateTime, Duration, TimeZone};

use crate::catalog;
use crate::error::PmError;
use crate::models::{PmStatus, PmTask};

/// Days between scheduling and the due date.
pub const DUE_OFFSET_DAYS: i64 = 7;

/// Operator input for a new PM task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleRequest {
    pub mould_id: String,
    pub checksheet_id: String,
    pub location: String,
    pub assignee: String,
    pub activity: String,
}

impl ScheduleRequest {
    /// All five fields are required; blank counts as missing.
    pub fn validate(&self) -> Result<(), PmError> {
        let missing: Vec<&str> = [
            ("mould", &self.mould_id),
            ("checksheet", &self.checksheet_id),
            ("location", &self.location),
            ("assignee", &self.assignee),
            ("activity", &self.activity),
        ]
        .iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(PmError::missing_fields(&missing))
        }
    }
}

/// Build a `Scheduled` task for `now`. The checklist is copied out of the
/// checksheet template, so later template edits do not reach this task.
pub fn build_task<Tz: TimeZone>(req: &ScheduleRequest, now: &DateTime<Tz>) -> Result<PmTask, PmError> {
    req.validate()?;

    let mould = catalog::find_mould(req.mould_id.trim());
    let checksheet = catalog::find_checksheet(req.checksheet_id.trim());
    let (Some(mould), Some(checksheet)) = (mould, checksheet) else {
        return Err(PmError::invalid_reference());
    };

    let due = now.date_naive() + Duration::days(DUE_OFFSET_DAYS);

    Ok(PmTask {
        ticket_id: format!("PM-{}", now.timestamp_millis()),
        mould_id: mould.mould_id_no.to_string(),
        mould_name: mould.display_name().to_string(),
        location: req.location.trim().to_string(),
        activity: req.activity.trim().to_string(),
        checksheets: checksheet.name.to_string(),
        status: PmStatus::Scheduled,
        assignee: req.assignee.trim().to_string(),
        due_date: due.format("%Y-%m-%d").to_string(),
        checklist: checksheet.tasks.iter().map(|s| s.to_string()).collect(),
    })
}

/// New tasks go to the front of the list.
pub fn prepend(tasks: Vec<PmTask>, task: PmTask) -> Vec<PmTask> {
    let mut out = Vec::with_capacity(tasks.len() + 1);
    out.push(task);
    out.extend(tasks);
    out
}
