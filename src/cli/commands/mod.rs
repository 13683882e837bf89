//! One handler per top-level subcommand, plus what the view handlers share.

pub mod backup;
pub mod config;
pub mod db;
pub mod home;
pub mod init;
pub mod log;
pub mod logbook;

use crate::cli::parser::{ExportArgs, RowArgs};
use crate::core::context::AppContext;
use crate::core::date_norm::parse_wire_date;
use crate::core::filter::DateRange;
use crate::core::gateway::Outcome;
use crate::core::table::{ActionKind, CellOptions, RowAction, TablePresenter, Tabular};
use crate::db::log::audit;
use crate::errors::{AppError, AppResult, GatewayResult};
use crate::export::{ExportLogic, Exportable};
use crate::models::record::Record;
use crate::ui::messages::{print_json, warning};
use serde::Serialize;

/// Parse optional `--from`/`--to` bounds.
pub(crate) fn date_range(from: &Option<String>, to: &Option<String>) -> AppResult<DateRange> {
    let parse = |v: &Option<String>| -> AppResult<_> {
        match v.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => Ok(Some(parse_wire_date(s)?)),
            None => Ok(None),
        }
    };
    Ok(DateRange::new(parse(from)?, parse(to)?))
}

/// Presenter with every `--sort` click applied in order.
pub(crate) fn presenter<R: Tabular>(
    clicks: &[String],
    opts: CellOptions,
) -> AppResult<TablePresenter<R>> {
    let mut p = TablePresenter::new(opts);
    for column in clicks {
        p.click(column)?;
    }
    Ok(p)
}

/// Resolve `--view N` against the sorted table.
pub(crate) fn view_action<R: Tabular>(
    presenter: &TablePresenter<R>,
    records: &[R],
    rows: &RowArgs,
) -> Option<RowAction> {
    let n = rows.view?;
    let action = presenter.row_action(records, n, ActionKind::View);
    if action.is_none() {
        warning(format!("No row {n} in the current table."));
    }
    action
}

/// In `--json` mode print the tagged outcome; otherwise run `human` on the
/// data. Failures are returned either way so the exit status reflects them.
pub(crate) fn finish<T: Serialize>(
    json: bool,
    result: GatewayResult<T>,
    human: impl FnOnce(&T) -> AppResult<()>,
) -> AppResult<()> {
    if json {
        let failure = result.as_ref().err().cloned();
        print_json(&Outcome::from(result))?;
        return match failure {
            Some(e) => Err(AppError::Gateway(e)),
            None => Ok(()),
        };
    }

    let data = result?;
    human(&data)
}

/// Export exactly `records`, in the order the `--sort` clicks give.
pub(crate) fn export_records<R>(ctx: &AppContext, records: &[R], output: &ExportArgs) -> AppResult<()>
where
    R: Tabular + Exportable + Clone,
{
    let table = presenter::<R>(&output.sort, ctx.cell_options())?;
    let ordered: Vec<R> = table.sorted(records).into_iter().cloned().collect();

    let path = ExportLogic::target_path::<R>(
        output.file.as_deref(),
        &ctx.cfg.export_dir(),
        output.format,
    );
    ExportLogic::export(
        &ordered,
        output.format,
        &path,
        &ctx.cfg.short_date_format,
        output.force,
    )?;

    let message = format!(
        "Exported {} {} row(s) as {}",
        ordered.len(),
        <R as Record>::KIND,
        output.format.as_str()
    );
    if let Err(e) = audit(&ctx.pool.conn, "export", &path.to_string_lossy(), &message) {
        tracing::warn!(error = %e, "failed to write audit log");
    }
    Ok(())
}
