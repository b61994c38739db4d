use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::{PmStatus, PmTask};

/// The one active filter over the task list. Status and due date never
/// apply together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Status(PmStatus),
    DueDate(NaiveDate),
}

impl TaskFilter {
    /// Selecting a status (or clearing it) always drops any date filter.
    pub fn with_status(self, status: Option<PmStatus>) -> Self {
        match status {
            Some(s) => TaskFilter::Status(s),
            None => TaskFilter::All,
        }
    }

    /// Selecting a date replaces a status filter; clearing the date leaves a
    /// status filter in place.
    pub fn with_due_date(self, date: Option<NaiveDate>) -> Self {
        match (date, self) {
            (Some(d), _) => TaskFilter::DueDate(d),
            (None, TaskFilter::DueDate(_)) => TaskFilter::All,
            (None, other) => other,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, TaskFilter::All)
    }

    pub fn matches(&self, task: &PmTask) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Status(s) => task.status == *s,
            TaskFilter::DueDate(d) => parse_due_date(&task.due_date) == Some(*d),
        }
    }
}

/// Visible subsequence of `tasks`, order preserved.
pub fn apply(tasks: &[PmTask], filter: TaskFilter) -> Vec<PmTask> {
    tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
}

/// Calendar day of a stored due date. Accepts `yyyy-MM-dd` and full
/// timestamps; the time of day is dropped.
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, status: PmStatus, due: &str) -> PmTask {
        PmTask {
            ticket_id: id.into(),
            mould_id: "MS-1".into(),
            mould_name: "Case".into(),
            location: "Shop Floor A".into(),
            activity: "Inspect".into(),
            checksheets: "Monthly".into(),
            status,
            assignee: "Ravi".into(),
            due_date: due.into(),
            checklist: vec![],
        }
    }

    fn sample() -> Vec<PmTask> {
        vec![
            task("PM-1", PmStatus::Completed, "2024-07-15"),
            task("PM-2", PmStatus::Scheduled, "2024-07-16"),
            task("PM-3", PmStatus::Completed, "2024-07-16T23:30:00"),
            task("PM-4", PmStatus::Overdue, "not a date"),
            task("PM-5", PmStatus::Completed, "2024-07-16"),
        ]
    }

    fn ids(tasks: &[PmTask]) -> Vec<&str> {
        tasks.iter().map(|t| t.ticket_id.as_str()).collect()
    }

    #[test]
    fn test_no_filter_returns_everything() {
        let tasks = sample();
        assert_eq!(apply(&tasks, TaskFilter::All), tasks);
    }

    #[test]
    fn test_status_filter_keeps_order() {
        let out = apply(&sample(), TaskFilter::Status(PmStatus::Completed));
        assert_eq!(ids(&out), vec!["PM-1", "PM-3", "PM-5"]);
        assert!(out.iter().all(|t| t.status == PmStatus::Completed));
    }

    #[test]
    fn test_date_filter_ignores_time_of_day() {
        let day = NaiveDate::from_ymd_opt(2024, 7, 16).unwrap();
        let out = apply(&sample(), TaskFilter::DueDate(day));
        assert_eq!(ids(&out), vec!["PM-2", "PM-3", "PM-5"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let day = NaiveDate::from_ymd_opt(1999, 1, 1).unwrap();
        assert!(apply(&sample(), TaskFilter::DueDate(day)).is_empty());
        assert!(apply(&sample(), TaskFilter::Status(PmStatus::InProgress)).is_empty());
    }

    #[test]
    fn test_filters_are_mutually_exclusive() {
        let day = NaiveDate::from_ymd_opt(2024, 7, 16).unwrap();
        let f = TaskFilter::All.with_status(Some(PmStatus::Overdue));
        let f = f.with_due_date(Some(day));
        assert_eq!(f, TaskFilter::DueDate(day));
        let f = f.with_status(Some(PmStatus::Completed));
        assert_eq!(f, TaskFilter::Status(PmStatus::Completed));

        // Clearing the date does not disturb a status filter.
        assert_eq!(f.with_due_date(None), f);
        assert_eq!(TaskFilter::DueDate(day).with_due_date(None), TaskFilter::All);
        assert_eq!(TaskFilter::DueDate(day).with_status(None), TaskFilter::All);
        assert!(!TaskFilter::All.is_active());
    }

    #[test]
    fn test_parse_due_date_forms() {
        let day = NaiveDate::from_ymd_opt(2024, 7, 15);
        assert_eq!(parse_due_date("2024-07-15"), day);
        assert_eq!(parse_due_date("2024-07-15T08:00:00Z"), day);
        assert_eq!(parse_due_date("2024-07-15 08:00:00"), day);
        assert_eq!(parse_due_date("15/07/2024"), None);
    }
}
