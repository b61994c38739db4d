use serde::Serialize;

use crate::models::{PmStatus, PmTask};

/// Task counts per status, as shown on the maintenance status chart.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    pub total: usize,
    pub scheduled: usize,
    pub in_progress: usize,
    pub overdue: usize,
    pub completed: usize,
    pub percentage: f64,
}

impl StatusSummary {
    pub fn count(&self, status: PmStatus) -> usize {
        match status {
            PmStatus::Scheduled => self.scheduled,
            PmStatus::InProgress => self.in_progress,
            PmStatus::Overdue => self.overdue,
            PmStatus::Completed => self.completed,
        }
    }
}

pub fn summarize(tasks: &[PmTask]) -> StatusSummary {
    let mut summary = StatusSummary::default();
    for t in tasks {
        match t.status {
            PmStatus::Scheduled => summary.scheduled += 1,
            PmStatus::InProgress => summary.in_progress += 1,
            PmStatus::Overdue => summary.overdue += 1,
            PmStatus::Completed => summary.completed += 1,
        }
    }
    summary.total = tasks.len();
    summary.percentage = if summary.total > 0 {
        (summary.completed as f64 / summary.total as f64) * 100.0
    } else {
        0.0
    };
    summary
}
