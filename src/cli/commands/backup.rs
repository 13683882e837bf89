use crate::cli::commands::{date_range, export_records, finish, presenter, view_action};
use crate::cli::parser::{BackupAction, BackupFilterArgs};
use crate::config::Config;
use crate::core::context::AppContext;
use crate::core::date_norm::{to_wire_date, today};
use crate::core::details::backup_details;
use crate::core::filter::BackupLogFilter;
use crate::core::form::{BackupLogForm, submit, validate_backup_log};
use crate::errors::AppResult;
use crate::models::BackupLog;
use crate::ui::messages::{header, success};
use chrono::Local;

fn backup_filter(args: &BackupFilterArgs) -> AppResult<BackupLogFilter> {
    Ok(BackupLogFilter {
        shift: args.shift.clone(),
        pic: args.pic.clone(),
        date_range: date_range(&args.from, &args.to)?,
    })
}

pub fn handle(action: &BackupAction, cfg: &Config, json: bool) -> AppResult<()> {
    let ctx = AppContext::mount(cfg, json)?;

    match action {
        BackupAction::Add {
            tanggal,
            shift,
            pic,
            time,
        } => {
            let form = BackupLogForm {
                tanggal: tanggal.clone().or_else(|| Some(to_wire_date(today()))),
                shift: shift.clone(),
                pic: pic.clone(),
                timestamp: time
                    .clone()
                    .unwrap_or_else(|| Local::now().format("%H:%M:%S").to_string()),
            };

            submit(&form, validate_backup_log, |draft| {
                let result = ctx.gateway::<BackupLog>().create(&draft);
                finish(json, result, |b| {
                    success(format!(
                        "Backup log saved: {} {} by {} #{}",
                        to_wire_date(b.tanggal),
                        b.shift.label(),
                        b.pic,
                        b.id
                    ));
                    Ok(())
                })
            })
        }

        BackupAction::List { filter, rows } => {
            let criteria = backup_filter(filter)?.to_criteria();
            let table = presenter::<BackupLog>(&rows.sort, ctx.cell_options())?;

            let result = ctx
                .gateway::<BackupLog>()
                .list(&criteria)
                .map(|logs| table.sorted(&logs).into_iter().cloned().collect::<Vec<_>>());

            finish(json, result, |logs| {
                header("Backup Logs");
                print!("{}", table.render(logs));

                if let Some(action) = view_action(&table, logs, rows)
                    && let Some(b) = logs.iter().find(|b| b.id == action.id())
                {
                    println!();
                    print!("{}", backup_details(b, &ctx.cell_options()));
                }
                Ok(())
            })
        }

        BackupAction::Show { id } => {
            let result = ctx.gateway::<BackupLog>().get(id);
            finish(json, result, |b| {
                print!("{}", backup_details(b, &ctx.cell_options()));
                Ok(())
            })
        }

        BackupAction::Export { filter, output } => {
            let criteria = backup_filter(filter)?.to_criteria();
            let logs = ctx.gateway::<BackupLog>().list(&criteria)?;
            export_records(&ctx, &logs, output)
        }
    }
}
