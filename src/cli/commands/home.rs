use crate::cli::commands::logbook::logbook_filter;
use crate::cli::commands::{presenter, view_action};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::demo::DemoBook;
use crate::core::details::logbook_details;
use crate::core::gateway::Outcome;
use crate::core::table::{ActionKind, CellOptions};
use crate::errors::{AppResult, GatewayError};
use crate::models::LogbookEntry;
use crate::models::logbook_entry::Status;
use crate::ui::messages::{header, info, print_json, warning};

/// The landing view. Works on the built-in sample entries only and never
/// opens the database.
pub fn handle(cmd: &Commands, cfg: &Config, json: bool) -> AppResult<()> {
    let Commands::Home {
        filter,
        rows,
        delete,
    } = cmd
    else {
        return Ok(());
    };

    let opts = CellOptions {
        date_format: cfg.short_date_format.clone(),
        text_width: cfg.notes_width,
        color: !json,
    };
    let table = presenter::<LogbookEntry>(&rows.sort, opts.clone())?;
    let criteria = logbook_filter(filter)?.to_criteria();

    let mut book = DemoBook::default();

    if let Some(n) = delete {
        let visible = book.filtered(&criteria);
        match table.row_action(&visible, *n, ActionKind::Delete) {
            Some(action) => {
                book.apply(&action);
                if !json {
                    info(format!("Removed sample entry #{} (not saved).", action.id()));
                }
            }
            None => warning(format!("No row {n} in the current table.")),
        }
    }

    let visible = book.filtered(&criteria);

    if json {
        let sorted: Vec<LogbookEntry> = table.sorted(&visible).into_iter().cloned().collect();
        return print_json(&Outcome::from(Ok::<_, GatewayError>(sorted)));
    }

    header("IT Department Logbook");
    println!("{}\n", status_summary(book.entries()));
    print!("{}", table.render(&visible));

    if let Some(action) = view_action(&table, &visible, rows)
        && let Some(e) = book.find(action.id())
    {
        println!();
        print!("{}", logbook_details(e, &opts));
    }

    Ok(())
}

fn status_summary(entries: &[LogbookEntry]) -> String {
    let count = |s: Status| entries.iter().filter(|e| e.status == s).count();
    format!(
        "Total: {}  {}: {}  {}: {}  {}: {}",
        entries.len(),
        Status::Pending.label(),
        count(Status::Pending),
        Status::InProgress.label(),
        count(Status::InProgress),
        Status::Completed.label(),
        count(Status::Completed)
    )
}
