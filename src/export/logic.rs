use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_parent, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{ExportTable, Exportable};
use crate::export::xlsx::export_xlsx;
use crate::export::ExportFormat;
use crate::ui::messages::warning;
use crate::utils::path::resolve_output;
use std::path::{Path, PathBuf};

pub struct ExportLogic;

impl ExportLogic {
    /// Output path for an export: explicit `file`, or the kind's default file
    /// name inside `dir` with the extension of `format`.
    pub fn target_path<R: Exportable>(file: Option<&str>, dir: &Path, format: ExportFormat) -> PathBuf {
        let default_name = Path::new(R::FILE_NAME).with_extension(format.as_str());
        resolve_output(file, dir, &default_name.to_string_lossy())
    }

    /// Write `records` exactly as given to `path`.
    pub fn export<R: Exportable>(
        records: &[R],
        format: ExportFormat,
        path: &Path,
        date_format: &str,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;
        ensure_parent(path)?;

        if records.is_empty() {
            warning("No entries to export; writing headers only.");
        }

        let table = ExportTable::build(records, date_format);

        match format {
            ExportFormat::Xlsx => export_xlsx(&table, path)?,
            ExportFormat::Csv => export_csv(&table, path)?,
            ExportFormat::Json => export_json(&table, path)?,
        }

        tracing::debug!(path = %path.display(), rows = table.rows.len(), "export written");
        Ok(())
    }
}
