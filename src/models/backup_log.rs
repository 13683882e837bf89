use crate::core::date_norm::to_wire_date;
use crate::db::store::Columns;
use crate::models::record::{FieldValue, Record, date_column, enum_column};
use chrono::NaiveDate;
use rusqlite::Row;
use rusqlite::types::Value;
use serde::Serialize;

/// Daily work period a backup was taken in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    Pagi,  // morning
    Siang, // afternoon
    Sore,  // evening
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::Pagi, Shift::Siang, Shift::Sore];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Shift::Pagi => "pagi",
            Shift::Siang => "siang",
            Shift::Sore => "sore",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "pagi" => Some(Shift::Pagi),
            "siang" => Some(Shift::Siang),
            "sore" => Some(Shift::Sore),
            _ => None,
        }
    }

    /// Parse user input; accepts the English names as well.
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pagi" | "morning" => Some(Shift::Pagi),
            "siang" | "afternoon" => Some(Shift::Siang),
            "sore" | "evening" => Some(Shift::Sore),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Shift::Pagi => "Pagi",
            Shift::Siang => "Siang",
            Shift::Sore => "Sore",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackupLog {
    pub id: String,
    pub tanggal: NaiveDate,
    pub shift: Shift,
    pub pic: String,
    /// Free-text time of day the backup was recorded at.
    pub timestamp: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBackupLog {
    pub tanggal: NaiveDate,
    pub shift: Shift,
    pub pic: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackupLogPatch {
    pub tanggal: Option<NaiveDate>,
    pub shift: Option<Shift>,
    pub pic: Option<String>,
    pub timestamp: Option<String>,
}

impl Record for BackupLog {
    const TABLE: &'static str = "backup_logs";
    const KIND: &'static str = "backup log";
    const COLUMNS: &'static [&'static str] = &["tanggal", "shift", "pic", "timestamp"];

    type Draft = NewBackupLog;
    type Patch = BackupLogPatch;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(BackupLog {
            id: row.get("id")?,
            tanggal: date_column(row, "tanggal")?,
            shift: enum_column(row, "shift", Shift::from_db_str)?,
            pic: row.get("pic")?,
            timestamp: row.get("timestamp")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    fn draft_columns(d: &NewBackupLog) -> Columns {
        vec![
            ("tanggal", Value::Text(to_wire_date(d.tanggal))),
            ("shift", Value::Text(d.shift.to_db_str().into())),
            ("pic", Value::Text(d.pic.clone())),
            ("timestamp", Value::Text(d.timestamp.clone())),
        ]
    }

    fn patch_columns(p: &BackupLogPatch) -> Columns {
        let mut cols = Columns::new();
        if let Some(d) = p.tanggal {
            cols.push(("tanggal", Value::Text(to_wire_date(d))));
        }
        if let Some(s) = p.shift {
            cols.push(("shift", Value::Text(s.to_db_str().into())));
        }
        if let Some(pic) = &p.pic {
            cols.push(("pic", Value::Text(pic.clone())));
        }
        if let Some(t) = &p.timestamp {
            cols.push(("timestamp", Value::Text(t.clone())));
        }
        cols
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, column: &str) -> FieldValue<'_> {
        match column {
            "id" => FieldValue::text(&self.id),
            "tanggal" => FieldValue::Date(self.tanggal),
            "shift" => FieldValue::text(self.shift.to_db_str()),
            "pic" => FieldValue::text(&self.pic),
            "timestamp" => FieldValue::text(&self.timestamp),
            "created_at" => FieldValue::text(&self.created_at),
            "updated_at" => FieldValue::text(&self.updated_at),
            _ => FieldValue::Missing,
        }
    }
}
