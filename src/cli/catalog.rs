use serde_json::json;

use crate::catalog::{CHECKSHEETS, MOULDS};
use crate::cli::commands::CatalogCommands;
use crate::output;

pub fn run(cmd: CatalogCommands, json_output: bool) -> i32 {
    match cmd {
        CatalogCommands::Moulds => {
            if json_output {
                let moulds: Vec<_> = MOULDS.iter().map(output::json::mould_json).collect();
                output::json::print(&output::json::success(json!({ "moulds": moulds })));
            } else {
                output::text::print_moulds(MOULDS);
            }
        }
        CatalogCommands::Checksheets => {
            if json_output {
                let sheets: Vec<_> = CHECKSHEETS.iter().map(output::json::checksheet_json).collect();
                output::json::print(&output::json::success(json!({ "checksheets": sheets })));
            } else {
                output::text::print_checksheets(CHECKSHEETS);
            }
        }
    }
    0
}
