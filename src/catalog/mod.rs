pub mod moulds;

use crate::models::{Checksheet, ChecksheetCategory, Mould, PmStatus, PmTask};

pub use moulds::MOULDS;

pub static CHECKSHEETS: &[Checksheet] = &[
    Checksheet {
        id: "CS-001",
        name: "ECM Daily Inspection",
        category: ChecksheetCategory::Ecm,
        tasks: &[
            "Check for error codes",
            "Inspect wiring harness",
            "Listen for unusual noises",
        ],
    },
    Checksheet {
        id: "CS-002",
        name: "HVAC Monthly Service",
        category: ChecksheetCategory::Hvac,
        tasks: &[
            "Clean filters",
            "Check refrigerant levels",
            "Inspect blower motor",
        ],
    },
    Checksheet {
        id: "CS-003",
        name: "Fixture Pre-Production Setup",
        category: ChecksheetCategory::Fixture,
        tasks: &[
            "Verify clamp pressure",
            "Check alignment pins",
            "Confirm sensor functionality",
        ],
    },
    Checksheet {
        id: "CS-004",
        name: "Mould General PM",
        category: ChecksheetCategory::Mould,
        tasks: &[
            "Clean mould face",
            "Inspect for flashing",
            "Lubricate ejector pins",
            "Check cooling channels",
        ],
    },
];

pub fn find_mould(mould_id_no: &str) -> Option<&'static Mould> {
    MOULDS.iter().find(|m| m.mould_id_no == mould_id_no)
}

pub fn find_checksheet(id: &str) -> Option<&'static Checksheet> {
    CHECKSHEETS.iter().find(|cs| cs.id == id)
}

/// Tasks served when nothing has been persisted yet.
pub fn seed_tasks() -> Vec<PmTask> {
    vec![PmTask {
        ticket_id: "PM-001".into(),
        mould_id: "MS-03390-YRA-01-003-L-F".into(),
        mould_name: "YRA".into(),
        location: "Shop Floor A".into(),
        activity: "Monthly Lubrication".into(),
        checksheets: "Monthly".into(),
        status: PmStatus::InProgress,
        assignee: "John Doe".into(),
        due_date: "2024-07-15".into(),
        checklist: vec![
            "Check lubrication levels".into(),
            "Grease all fittings".into(),
            "Inspect for leaks".into(),
        ],
    }]
}
