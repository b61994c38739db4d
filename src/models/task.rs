use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PmStatus {
    Scheduled,
    #[serde(rename = "In Progress")]
    InProgress,
    Overdue,
    Completed,
}

impl PmStatus {
    pub const ALL: [PmStatus; 4] = [
        PmStatus::Scheduled,
        PmStatus::InProgress,
        PmStatus::Overdue,
        PmStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::InProgress => "In Progress",
            Self::Overdue => "Overdue",
            Self::Completed => "Completed",
        }
    }

    /// Lenient parse: case-insensitive, and `-`/`_` stand in for the space
    /// in "In Progress".
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c.to_ascii_lowercase() })
            .collect();
        match normalized.as_str() {
            "scheduled" => Some(Self::Scheduled),
            "in progress" => Some(Self::InProgress),
            "overdue" => Some(Self::Overdue),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for PmStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A preventive-maintenance ticket. Field names serialize in camelCase so a
/// stored blob reads the same as the dashboard's `pmScheduleTasks` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PmTask {
    pub ticket_id: String,
    pub mould_id: String,
    pub mould_name: String,
    pub location: String,
    pub activity: String,
    pub checksheets: String,
    pub status: PmStatus,
    pub assignee: String,
    pub due_date: String,
    #[serde(default)]
    pub checklist: Vec<String>,
}
