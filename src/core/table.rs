//! Sortable table view over a record collection.
//!
//! The presenter owns only the sort state. It never stores the records and
//! never persists anything; row actions are handed back to the caller.

use crate::core::date_norm::{to_short_date, to_short_date_or_dash};
use crate::errors::{AppError, AppResult};
use crate::models::backup_log::BackupLog;
use crate::models::logbook_entry::LogbookEntry;
use crate::models::record::Record;
use crate::utils::colors::{color_for_shift, color_for_status, colorize_optional, paint};
use crate::utils::formatting::dash_if_empty;
use crate::utils::table::{Column, Table, truncate};
use std::marker::PhantomData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    /// Same column flips the direction; a new column starts ascending.
    pub fn click(&mut self, column: &str) {
        if self.column.as_deref() == Some(column) {
            self.direction = self.direction.toggled();
        } else {
            self.column = Some(column.to_string());
            self.direction = SortDirection::Asc;
        }
    }
}

/// Options that only affect how cells look.
#[derive(Debug, Clone)]
pub struct CellOptions {
    pub date_format: String,
    /// Max width of free-text cells; 0 disables truncation.
    pub text_width: usize,
    pub color: bool,
}

impl Default for CellOptions {
    fn default() -> Self {
        Self {
            date_format: crate::config::default_short_date_format(),
            text_width: crate::config::default_notes_width(),
            color: true,
        }
    }
}

/// Record kinds that know how to lay themselves out in a table.
pub trait Tabular: Record {
    fn headers() -> Vec<&'static str>;
    fn cells(&self, opts: &CellOptions) -> Vec<String>;
}

impl Tabular for BackupLog {
    fn headers() -> Vec<&'static str> {
        vec!["No", "Tanggal", "Waktu", "Shift", "PIC", "ID"]
    }

    fn cells(&self, opts: &CellOptions) -> Vec<String> {
        let shift = if opts.color {
            paint(self.shift.label(), color_for_shift(self.shift))
        } else {
            self.shift.label().to_string()
        };
        vec![
            to_short_date(self.tanggal, &opts.date_format),
            dash_if_empty(Some(&self.timestamp)),
            shift,
            truncate(&self.pic, opts.text_width),
            self.id.clone(),
        ]
    }
}

impl Tabular for LogbookEntry {
    fn headers() -> Vec<&'static str> {
        vec![
            "No",
            "Tanggal Mulai",
            "Jenis Pekerjaan",
            "Department",
            "Tanggal Selesai",
            "PIC",
            "Status",
            "Keterangan",
            "No. PR",
            "ID",
        ]
    }

    fn cells(&self, opts: &CellOptions) -> Vec<String> {
        let optional = |s: String| {
            if opts.color {
                colorize_optional(&s)
            } else {
                s
            }
        };
        let status = if opts.color {
            paint(self.status.label(), color_for_status(self.status))
        } else {
            self.status.label().to_string()
        };

        vec![
            to_short_date(self.tanggal_mulai, &opts.date_format),
            truncate(&self.jenis_pekerjaan, opts.text_width),
            self.department.clone(),
            optional(to_short_date_or_dash(
                self.tanggal_selesai,
                &opts.date_format,
            )),
            truncate(&self.pic, opts.text_width),
            status,
            optional(truncate(
                &dash_if_empty(self.keterangan.as_deref()),
                opts.text_width,
            )),
            optional(dash_if_empty(self.nomor_pr.as_deref())),
            self.id.clone(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    View,
    Edit,
    Delete,
}

/// A row action resolved to the record it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    View(String),
    Edit(String),
    Delete(String),
}

impl RowAction {
    pub fn id(&self) -> &str {
        match self {
            RowAction::View(id) | RowAction::Edit(id) | RowAction::Delete(id) => id,
        }
    }
}

pub struct TablePresenter<R: Tabular> {
    sort: SortState,
    opts: CellOptions,
    _kind: PhantomData<R>,
}

impl<R: Tabular> TablePresenter<R> {
    pub fn new(opts: CellOptions) -> Self {
        Self {
            sort: SortState::default(),
            opts,
            _kind: PhantomData,
        }
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Click on a column header.
    pub fn click(&mut self, column: &str) -> AppResult<()> {
        if !R::is_column(column) {
            return Err(AppError::InvalidColumn(column.to_string()));
        }
        self.sort.click(column);
        Ok(())
    }

    /// Stable sort on the natural type of the sort column. Without a sort
    /// column the input order is kept.
    pub fn sorted<'r>(&self, rows: &'r [R]) -> Vec<&'r R> {
        let mut view: Vec<&R> = rows.iter().collect();
        if let Some(col) = &self.sort.column {
            view.sort_by(|a, b| {
                let ord = a.field(col).cmp(&b.field(col));
                match self.sort.direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }
        view
    }

    pub fn render(&self, rows: &[R]) -> String {
        let mut table = Table::new(R::headers().into_iter().map(Column::new).collect());

        let view = self.sorted(rows);
        if view.is_empty() {
            let mut empty = vec![String::new(); R::headers().len()];
            empty[0] = "No entries found".to_string();
            table.add_row(empty);
        }

        for (i, r) in view.iter().enumerate() {
            let mut row = vec![(i + 1).to_string()];
            row.extend(r.cells(&self.opts));
            table.add_row(row);
        }

        let mut out = table.render();
        out.push_str(&format!("\nTotal Entries: {}\n", view.len()));
        out
    }

    /// Resolve an action on the 1-based row `number` of the sorted view.
    pub fn row_action(&self, rows: &[R], number: usize, kind: ActionKind) -> Option<RowAction> {
        let view = self.sorted(rows);
        let record = view.get(number.checked_sub(1)?)?;
        let id = record.id().to_string();

        Some(match kind {
            ActionKind::View => RowAction::View(id),
            ActionKind::Edit => RowAction::Edit(id),
            ActionKind::Delete => RowAction::Delete(id),
        })
    }
}
