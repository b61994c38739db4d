use crate::models::{PmStatus, PmTask};

/// Copy of `tasks` with the status of `ticket_id` replaced. Any status may
/// follow any other. An unknown ticket leaves the list unchanged.
pub fn update_status(tasks: &[PmTask], ticket_id: &str, status: PmStatus) -> Vec<PmTask> {
    tasks
        .iter()
        .map(|t| {
            if t.ticket_id == ticket_id {
                PmTask {
                    status,
                    ..t.clone()
                }
            } else {
                t.clone()
            }
        })
        .collect()
}

pub fn find_task<'a>(tasks: &'a [PmTask], ticket_id: &str) -> Option<&'a PmTask> {
    tasks.iter().find(|t| t.ticket_id == ticket_id)
}
