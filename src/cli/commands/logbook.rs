use crate::cli::commands::{date_range, export_records, finish, presenter, view_action};
use crate::cli::parser::{LogbookAction, LogbookFilterArgs, RowArgs};
use crate::config::Config;
use crate::core::context::AppContext;
use crate::core::date_norm::{to_wire_date, today};
use crate::core::details::logbook_details;
use crate::core::filter::LogbookFilter;
use crate::core::form::{
    LogbookEditForm, LogbookForm, submit, validate_logbook, validate_logbook_edit,
};
use crate::errors::AppResult;
use crate::models::LogbookEntry;
use crate::ui::messages::{header, success, warning};

pub(crate) fn logbook_filter(args: &LogbookFilterArgs) -> AppResult<LogbookFilter> {
    Ok(LogbookFilter {
        search: args.search.clone(),
        status: args.status.clone(),
        department: args.department.clone(),
        date_range: date_range(&args.from, &args.to)?,
    })
}

pub fn handle(action: &LogbookAction, cfg: &Config, json: bool) -> AppResult<()> {
    let ctx = AppContext::mount(cfg, json)?;

    match action {
        LogbookAction::Add {
            jenis_pekerjaan,
            department,
            tanggal_mulai,
            tanggal_selesai,
            pic,
            status,
            keterangan,
            nomor_pr,
        } => {
            let form = LogbookForm {
                jenis_pekerjaan: jenis_pekerjaan.clone(),
                department: department.clone(),
                tanggal_mulai: tanggal_mulai
                    .clone()
                    .or_else(|| Some(to_wire_date(today()))),
                tanggal_selesai: tanggal_selesai.clone(),
                pic: pic.clone(),
                status: status.clone(),
                keterangan: keterangan.clone(),
                nomor_pr: nomor_pr.clone(),
            };
            add(&ctx, &form)
        }

        LogbookAction::List { filter, rows } => list(&ctx, filter, rows),

        LogbookAction::Show { id } => show(&ctx, id),

        LogbookAction::Edit {
            id,
            jenis_pekerjaan,
            department,
            tanggal_mulai,
            tanggal_selesai,
            pic,
            status,
            keterangan,
            nomor_pr,
        } => {
            let form = LogbookEditForm {
                jenis_pekerjaan: jenis_pekerjaan.clone(),
                department: department.clone(),
                tanggal_mulai: tanggal_mulai.clone(),
                tanggal_selesai: tanggal_selesai.clone(),
                pic: pic.clone(),
                status: status.clone(),
                keterangan: keterangan.clone(),
                nomor_pr: nomor_pr.clone(),
            };
            edit(&ctx, id, &form)
        }

        LogbookAction::Delete { id } => {
            let result = ctx.gateway::<LogbookEntry>().delete(id);
            finish(json, result, |_| {
                success(format!("Logbook entry #{id} deleted."));
                Ok(())
            })
        }

        LogbookAction::Export { filter, output } => {
            let criteria = logbook_filter(filter)?.to_criteria();
            let entries = ctx.gateway::<LogbookEntry>().list(&criteria)?;
            export_records(&ctx, &entries, output)
        }
    }
}

fn add(ctx: &AppContext, form: &LogbookForm) -> AppResult<()> {
    submit(form, validate_logbook, |draft| {
        let result = ctx.gateway::<LogbookEntry>().create(&draft);
        finish(ctx.json, result, |e| {
            success(format!(
                "Logbook entry added: {} ({}) #{}",
                e.jenis_pekerjaan,
                e.status.label(),
                e.id
            ));
            Ok(())
        })
    })
}

fn list(ctx: &AppContext, filter: &LogbookFilterArgs, rows: &RowArgs) -> AppResult<()> {
    let criteria = logbook_filter(filter)?.to_criteria();
    let table = presenter::<LogbookEntry>(&rows.sort, ctx.cell_options())?;

    let result = ctx
        .gateway::<LogbookEntry>()
        .list(&criteria)
        .map(|entries| table.sorted(&entries).into_iter().cloned().collect::<Vec<_>>());

    finish(ctx.json, result, |entries| {
        header("IT Logbook");
        print!("{}", table.render(entries));

        if let Some(action) = view_action(&table, entries, rows)
            && let Some(e) = entries.iter().find(|e| e.id == action.id())
        {
            println!();
            print!("{}", logbook_details(e, &ctx.cell_options()));
        }
        Ok(())
    })
}

fn show(ctx: &AppContext, id: &str) -> AppResult<()> {
    let result = ctx.gateway::<LogbookEntry>().get(id);
    finish(ctx.json, result, |e| {
        print!("{}", logbook_details(e, &ctx.cell_options()));
        Ok(())
    })
}

fn edit(ctx: &AppContext, id: &str, form: &LogbookEditForm) -> AppResult<()> {
    submit(form, validate_logbook_edit, |patch| {
        if patch.is_empty() {
            warning("Nothing to change: pass at least one field to edit.");
            return Ok(());
        }

        let result = ctx.gateway::<LogbookEntry>().update(id, &patch);
        finish(ctx.json, result, |e| {
            success(format!("Logbook entry #{} updated.", e.id));
            Ok(())
        })
    })
}
