mod common;

use common::temp_out;
use itlogbook::core::demo::sample_entries;
use itlogbook::export::{ExportFormat, ExportLogic, ExportTable, Exportable};
use itlogbook::models::{BackupLog, LogbookEntry};
use std::fs;
use std::path::Path;

#[test]
fn logbook_table_uses_fixed_columns_and_dashes() {
    let table = ExportTable::build(&sample_entries(), "%d/%m/%Y");

    assert_eq!(table.sheet, "IT Logbook");
    assert_eq!(
        table.headers,
        vec![
            "No. PR",
            "Tanggal Mulai",
            "Jenis Pekerjaan",
            "Department",
            "Tanggal Selesai",
            "PIC",
            "Status",
            "Keterangan"
        ]
    );
    assert_eq!(table.rows[0][0], "PR-2023-001");
    assert_eq!(table.rows[0][1], "10/05/2023");
    assert_eq!(table.rows[1][4], "-");
    assert_eq!(table.rows[1][6], "in-progress");
}

#[test]
fn default_file_names_follow_format() {
    let dir = Path::new("/tmp/exports");
    let p = ExportLogic::target_path::<BackupLog>(None, dir, ExportFormat::Xlsx);
    assert_eq!(p, dir.join("backup_logs.xlsx"));

    let p = ExportLogic::target_path::<LogbookEntry>(None, dir, ExportFormat::Csv);
    assert_eq!(p, dir.join("it_logbook.csv"));

    let p = ExportLogic::target_path::<LogbookEntry>(Some("/x/y.json"), dir, ExportFormat::Json);
    assert_eq!(p, Path::new("/x/y.json"));
    assert_eq!(<BackupLog as Exportable>::SHEET_NAME, "Backup Logs");
}

#[test]
fn csv_export_reads_back() {
    let out = temp_out("lib_export_csv", "csv");
    ExportLogic::export(&sample_entries(), ExportFormat::Csv, Path::new(&out), "%d/%m/%Y", true)
        .unwrap();

    let mut rdr = csv::Reader::from_path(&out).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(&headers[0], "No. PR");

    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[2][2], "Hardware Replacement");
}

#[test]
fn json_export_is_array_keyed_by_label() {
    let out = temp_out("lib_export_json", "json");
    ExportLogic::export(&sample_entries(), ExportFormat::Json, Path::new(&out), "%Y-%m-%d", true)
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let arr = value.as_array().unwrap();
    assert_eq!(arr.len(), 3);
    assert_eq!(arr[0]["Tanggal Mulai"], "2023-05-10");
    assert_eq!(arr[1]["Keterangan"], "Installing accounting software on 5 workstations");
}

#[test]
fn xlsx_export_writes_file_even_when_empty() {
    let out = temp_out("lib_export_xlsx", "xlsx");
    ExportLogic::export(&sample_entries(), ExportFormat::Xlsx, Path::new(&out), "%d/%m/%Y", true)
        .unwrap();
    assert!(fs::metadata(&out).unwrap().len() > 0);

    let empty = temp_out("lib_export_xlsx_empty", "xlsx");
    let none: Vec<BackupLog> = Vec::new();
    ExportLogic::export(&none, ExportFormat::Xlsx, Path::new(&empty), "%d/%m/%Y", true).unwrap();
    assert!(fs::metadata(&empty).unwrap().len() > 0);
}
