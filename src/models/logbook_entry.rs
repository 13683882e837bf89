use crate::core::date_norm::to_wire_date;
use crate::db::store::Columns;
use crate::models::record::{FieldValue, Record, date_column, enum_column, optional_date_column};
use chrono::NaiveDate;
use rusqlite::Row;
use rusqlite::types::Value;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Pending,
    InProgress,
    Completed,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Pending, Status::InProgress, Status::Completed];

    pub fn to_db_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "in-progress",
            Status::Completed => "completed",
        }
    }

    /// Older rows may carry "in progress" with a space.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Status::Pending),
            "in-progress" | "in progress" => Some(Status::InProgress),
            "completed" => Some(Status::Completed),
            _ => None,
        }
    }

    pub fn from_input(s: &str) -> Option<Self> {
        let norm = s.trim().to_lowercase().replace('_', "-");
        Self::from_db_str(&norm)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogbookEntry {
    pub id: String,
    pub tanggal_mulai: NaiveDate,
    pub jenis_pekerjaan: String,
    pub department: String,
    pub tanggal_selesai: Option<NaiveDate>,
    pub pic: String,
    pub status: Status,
    pub keterangan: Option<String>,
    pub nomor_pr: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewLogbookEntry {
    pub tanggal_mulai: NaiveDate,
    pub jenis_pekerjaan: String,
    pub department: String,
    pub tanggal_selesai: Option<NaiveDate>,
    pub pic: String,
    pub status: Status,
    pub keterangan: Option<String>,
    pub nomor_pr: Option<String>,
}

/// Partial update. For the nullable columns the outer `Option` says whether
/// the field is written at all, the inner one whether it is cleared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogbookPatch {
    pub tanggal_mulai: Option<NaiveDate>,
    pub jenis_pekerjaan: Option<String>,
    pub department: Option<String>,
    pub tanggal_selesai: Option<Option<NaiveDate>>,
    pub pic: Option<String>,
    pub status: Option<Status>,
    pub keterangan: Option<Option<String>>,
    pub nomor_pr: Option<Option<String>>,
}

impl LogbookPatch {
    pub fn is_empty(&self) -> bool {
        *self == LogbookPatch::default()
    }
}

fn nullable_text(v: &Option<String>) -> Value {
    match v {
        Some(s) => Value::Text(s.clone()),
        None => Value::Null,
    }
}

fn nullable_date(v: Option<NaiveDate>) -> Value {
    match v {
        Some(d) => Value::Text(to_wire_date(d)),
        None => Value::Null,
    }
}

impl Record for LogbookEntry {
    const TABLE: &'static str = "logbook_entries";
    const KIND: &'static str = "logbook entry";
    const COLUMNS: &'static [&'static str] = &[
        "tanggal_mulai",
        "jenis_pekerjaan",
        "department",
        "tanggal_selesai",
        "pic",
        "status",
        "keterangan",
        "nomor_pr",
    ];

    type Draft = NewLogbookEntry;
    type Patch = LogbookPatch;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(LogbookEntry {
            id: row.get("id")?,
            tanggal_mulai: date_column(row, "tanggal_mulai")?,
            jenis_pekerjaan: row.get("jenis_pekerjaan")?,
            department: row.get("department")?,
            tanggal_selesai: optional_date_column(row, "tanggal_selesai")?,
            pic: row.get("pic")?,
            status: enum_column(row, "status", Status::from_db_str)?,
            keterangan: row.get("keterangan")?,
            nomor_pr: row.get("nomor_pr")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    fn draft_columns(d: &NewLogbookEntry) -> Columns {
        vec![
            ("tanggal_mulai", Value::Text(to_wire_date(d.tanggal_mulai))),
            ("jenis_pekerjaan", Value::Text(d.jenis_pekerjaan.clone())),
            ("department", Value::Text(d.department.clone())),
            ("tanggal_selesai", nullable_date(d.tanggal_selesai)),
            ("pic", Value::Text(d.pic.clone())),
            ("status", Value::Text(d.status.to_db_str().into())),
            ("keterangan", nullable_text(&d.keterangan)),
            ("nomor_pr", nullable_text(&d.nomor_pr)),
        ]
    }

    fn patch_columns(p: &LogbookPatch) -> Columns {
        let mut cols = Columns::new();
        if let Some(d) = p.tanggal_mulai {
            cols.push(("tanggal_mulai", Value::Text(to_wire_date(d))));
        }
        if let Some(v) = &p.jenis_pekerjaan {
            cols.push(("jenis_pekerjaan", Value::Text(v.clone())));
        }
        if let Some(v) = &p.department {
            cols.push(("department", Value::Text(v.clone())));
        }
        if let Some(d) = p.tanggal_selesai {
            cols.push(("tanggal_selesai", nullable_date(d)));
        }
        if let Some(v) = &p.pic {
            cols.push(("pic", Value::Text(v.clone())));
        }
        if let Some(s) = p.status {
            cols.push(("status", Value::Text(s.to_db_str().into())));
        }
        if let Some(v) = &p.keterangan {
            cols.push(("keterangan", nullable_text(v)));
        }
        if let Some(v) = &p.nomor_pr {
            cols.push(("nomor_pr", nullable_text(v)));
        }
        cols
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, column: &str) -> FieldValue<'_> {
        match column {
            "id" => FieldValue::text(&self.id),
            "tanggal_mulai" => FieldValue::Date(self.tanggal_mulai),
            "jenis_pekerjaan" => FieldValue::text(&self.jenis_pekerjaan),
            "department" => FieldValue::text(&self.department),
            "tanggal_selesai" => FieldValue::optional_date(self.tanggal_selesai),
            "pic" => FieldValue::text(&self.pic),
            "status" => FieldValue::text(self.status.to_db_str()),
            "keterangan" => FieldValue::optional_text(self.keterangan.as_deref()),
            "nomor_pr" => FieldValue::optional_text(self.nomor_pr.as_deref()),
            "created_at" => FieldValue::text(&self.created_at),
            "updated_at" => FieldValue::text(&self.updated_at),
            _ => FieldValue::Missing,
        }
    }
}
