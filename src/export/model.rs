//! Flat, all-text rendering of a record collection for file export.

use crate::core::date_norm::{to_short_date, to_short_date_or_dash};
use crate::models::backup_log::BackupLog;
use crate::models::logbook_entry::LogbookEntry;
use crate::utils::formatting::dash_if_empty;

/// Record kinds with a fixed export layout.
pub trait Exportable {
    const SHEET_NAME: &'static str;
    /// Default file name, `.xlsx` extension included.
    const FILE_NAME: &'static str;

    fn export_headers() -> Vec<&'static str>;
    fn export_cells(&self, date_format: &str) -> Vec<String>;
}

impl Exportable for BackupLog {
    const SHEET_NAME: &'static str = "Backup Logs";
    const FILE_NAME: &'static str = "backup_logs.xlsx";

    fn export_headers() -> Vec<&'static str> {
        vec!["Tanggal", "Waktu", "Shift", "PIC"]
    }

    fn export_cells(&self, date_format: &str) -> Vec<String> {
        vec![
            to_short_date(self.tanggal, date_format),
            self.timestamp.clone(),
            self.shift.to_db_str().to_string(),
            self.pic.clone(),
        ]
    }
}

impl Exportable for LogbookEntry {
    const SHEET_NAME: &'static str = "IT Logbook";
    const FILE_NAME: &'static str = "it_logbook.xlsx";

    fn export_headers() -> Vec<&'static str> {
        vec![
            "No. PR",
            "Tanggal Mulai",
            "Jenis Pekerjaan",
            "Department",
            "Tanggal Selesai",
            "PIC",
            "Status",
            "Keterangan",
        ]
    }

    fn export_cells(&self, date_format: &str) -> Vec<String> {
        vec![
            dash_if_empty(self.nomor_pr.as_deref()),
            to_short_date(self.tanggal_mulai, date_format),
            self.jenis_pekerjaan.clone(),
            self.department.clone(),
            to_short_date_or_dash(self.tanggal_selesai, date_format),
            self.pic.clone(),
            self.status.to_db_str().to_string(),
            dash_if_empty(self.keterangan.as_deref()),
        ]
    }
}

/// What every emitter writes: a sheet name, a header row and text rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTable {
    pub sheet: &'static str,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    /// Rows keep the caller's order; nothing is filtered here.
    pub fn build<R: Exportable>(records: &[R], date_format: &str) -> Self {
        Self {
            sheet: R::SHEET_NAME,
            headers: R::export_headers(),
            rows: records.iter().map(|r| r.export_cells(date_format)).collect(),
        }
    }

    /// One JSON object per row, keyed by column label.
    pub fn to_json_value(&self) -> serde_json::Value {
        let objects = self
            .rows
            .iter()
            .map(|row| {
                let map: serde_json::Map<String, serde_json::Value> = self
                    .headers
                    .iter()
                    .zip(row)
                    .map(|(h, v)| (h.to_string(), serde_json::Value::String(v.clone())))
                    .collect();
                serde_json::Value::Object(map)
            })
            .collect();
        serde_json::Value::Array(objects)
    }
}
